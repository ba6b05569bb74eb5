use thiserror::Error;

/// Top-level error type for the FinSee system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define their
/// own error types and implement `From<SubsystemError> for FinseeError` so
/// that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FinseeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Interpreter error: {0}")]
    Interpret(String),

    #[error("Dialogue error: {0}")]
    Dialogue(String),

    #[error("Advisor error: {0}")]
    Advisor(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FinseeError {
    fn from(err: toml::de::Error) -> Self {
        FinseeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FinseeError {
    fn from(err: toml::ser::Error) -> Self {
        FinseeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FinseeError {
    fn from(err: serde_json::Error) -> Self {
        FinseeError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for FinSee operations.
pub type Result<T> = std::result::Result<T, FinseeError>;
