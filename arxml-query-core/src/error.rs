//! Errors raised by the document query handler

use std::path::PathBuf;

use thiserror::Error;

use crate::xpath::XPathError;

/// Errors raised while constructing a handler or extracting data
///
/// Malformed XML is not an error: `extract_data` logs it and returns `None`.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// An argument had the wrong type
    #[error("{0}")]
    Type(String),
    #[error("The file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    XPath(#[from] XPathError),
}

impl HandlerError {
    pub(crate) fn type_error(message: impl Into<String>) -> Self {
        HandlerError::Type(message.into())
    }
}
