//! Error types for structured text processing.

use thiserror::Error;

/// Result type alias for structured text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for structured text operations.
///
/// Every variant is raised at acquisition or configuration time. Text
/// processing itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No policy is registered under the requested name.
    #[error("unknown structured text type: {0}")]
    UnknownPolicy(String),
    /// A custom policy could not be accepted (e.g. empty name).
    #[error("invalid segmentation policy: {0}")]
    InvalidPolicy(String),
    /// An environment component name could not be parsed.
    #[error("invalid environment value: {0}")]
    InvalidEnvironment(String),
}
