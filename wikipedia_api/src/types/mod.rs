mod error;
pub use self::error::{ApiErrorBody, MISSING_TITLE};

mod parse;
pub use self::parse::{ParseResponse, ParsedPage, ParsedText};
