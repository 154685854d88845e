//! XPath 3.1 evaluation using xee-xpath
//!
//! This module loads an XML document into an in-memory tree and evaluates
//! XPath expressions against it, converting the resulting sequences into
//! [`QueryValue`]s.

mod engine;
mod value;

pub use engine::{LoadedDocument, XPathEngine};
pub use value::QueryValue;

use thiserror::Error;

/// Errors that can occur during XPath evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XPathError {
    #[error("Failed to compile XPath `{expression}`: {message}")]
    Compile { expression: String, message: String },
    #[error("Failed to execute XPath `{expression}`: {message}")]
    Execute { expression: String, message: String },
    #[error("Failed to parse XML: {0}")]
    XmlParse(String),
}
