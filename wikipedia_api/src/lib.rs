mod client;
mod errors;
mod query;
pub mod types;
pub mod user_agent;
pub use self::client::{Client, ClientConfig, DEFAULT_API_URL};
pub use self::errors::Error;
pub use self::query::{FormatVersion, ParseQuery, Query, QueryCommon, SearchQuery};
