//! arxml-query-core: XPath extraction from ARXML documents
//!
//! This library provides:
//! - A [`DocumentQueryHandler`] that validates its inputs once and evaluates
//!   a list of XPath 3.1 expressions against a file on every extraction
//! - Typed result values and an explicit policy for dropping empty results
//! - Opt-in log setup built on `tracing`

pub mod error;
pub mod filter;
pub mod handler;
pub mod logging;
pub mod xpath;

pub use error::HandlerError;
pub use filter::ResultFilter;
pub use handler::{DocumentQueryHandler, ExtractedData, HandlerOptions};
pub use logging::Verbosity;
pub use xpath::{LoadedDocument, QueryValue, XPathEngine, XPathError};
