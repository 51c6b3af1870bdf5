//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be parsed, or a value has the wrong type.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is not usable, e.g. an unparseable listen address.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
