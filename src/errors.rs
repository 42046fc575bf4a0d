// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources) or the dataset layer.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    DataError(String),
    InternalError,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not Found"),
            AppError::DataError(msg) => write!(f, "Dataset Error: {msg}"),
            AppError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for AppError {}
