use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssocError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for AssocError {
    fn from(err: std::io::Error) -> Self {
        AssocError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AssocError {
    fn from(err: serde_json::Error) -> Self {
        AssocError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssocError>;
