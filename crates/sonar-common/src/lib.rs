pub mod errors;
pub mod fallback;
pub mod id;

pub use errors::{ConfigError, SonarError};
pub use fallback::{fill_fallback, DEFAULT_FALLBACK_TEMPLATE, QUERY_PLACEHOLDER};
pub use id::{new_request_id, SessionId};

pub type Result<T> = std::result::Result<T, SonarError>;
