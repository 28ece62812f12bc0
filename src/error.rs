use thiserror::Error;

/// Errors reported by menu operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("index {index} out of range for list of {count} entries")]
    InvalidArgument { index: usize, count: usize },

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
