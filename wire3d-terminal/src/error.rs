/// Errors raised by the terminal viewer
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
