mod common;
pub use self::common::{FormatVersion, Query, QueryCommon};

mod parse;
pub use self::parse::ParseQuery;

mod search;
pub use self::search::SearchQuery;
