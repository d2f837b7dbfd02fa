use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input is not valid UTF-8: {0}")]
    InvalidInput(#[from] std::string::FromUtf8Error),

    #[error("config lookup for `{key}` failed: {message}")]
    Config { key: String, message: String },

    #[error("variable `{key}` could not be accessed: {message}")]
    Store { key: String, message: String },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
