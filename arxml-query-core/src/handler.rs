//! Run a fixed list of XPath expressions against one ARXML file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::HandlerError;
use crate::filter::ResultFilter;
use crate::xpath::{QueryValue, XPathEngine};

/// One entry per expression that produced a kept result, in input order
pub type ExtractedData = Vec<Vec<QueryValue>>;

/// Options controlling extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerOptions {
    /// Which results count as empty and are dropped
    pub result_filter: ResultFilter,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result_filter(mut self, result_filter: ResultFilter) -> Self {
        self.result_filter = result_filter;
        self
    }
}

/// Extracts data from an ARXML file using XPath expressions
///
/// Inputs are validated once at construction. Each call to
/// [`extract_data`](Self::extract_data) re-reads and re-parses the file, so a
/// handler can be reused.
#[derive(Debug, Clone)]
pub struct DocumentQueryHandler {
    file_path: PathBuf,
    query_expressions: Vec<String>,
    options: HandlerOptions,
}

impl DocumentQueryHandler {
    /// Create a handler for an existing file
    pub fn new(
        file_path: impl AsRef<Path>,
        query_expressions: Vec<String>,
    ) -> Result<Self, HandlerError> {
        let file_path = file_path.as_ref();
        ensure_exists(file_path)?;

        Ok(DocumentQueryHandler {
            file_path: file_path.to_path_buf(),
            query_expressions,
            options: HandlerOptions::default(),
        })
    }

    /// Create a handler from untyped JSON inputs
    ///
    /// `file_path` must be a string and `query_expressions` an array of
    /// strings; anything else is a [`HandlerError::Type`]. The file path is
    /// type-checked and resolved before the expressions are looked at.
    pub fn from_values(file_path: &Value, query_expressions: &Value) -> Result<Self, HandlerError> {
        let path = match file_path {
            Value::String(path) => Path::new(path),
            other => {
                return Err(HandlerError::type_error(format!(
                    "File input should be a string, got {}",
                    json_type_name(other)
                )))
            }
        };
        ensure_exists(path)?;

        let items = match query_expressions {
            Value::Array(items) => items,
            other => {
                return Err(HandlerError::type_error(format!(
                    "Expressions should be given in a list, got {}",
                    json_type_name(other)
                )))
            }
        };

        let query_expressions = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(expression) => Ok(expression.clone()),
                other => Err(HandlerError::type_error(format!(
                    "Expression {} should be a string, got {}",
                    index,
                    json_type_name(other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DocumentQueryHandler {
            file_path: path.to_path_buf(),
            query_expressions,
            options: HandlerOptions::default(),
        })
    }

    /// Create a handler from a job description
    ///
    /// ```json
    /// {"file": "EcuExtract.arxml", "expressions": ["//*[local-name() = 'SHORT-NAME']/text()"],
    ///  "options": {"result_filter": "falsy"}}
    /// ```
    ///
    /// `options` is optional; missing fields take their defaults.
    pub fn from_job(job: &Value) -> Result<Self, HandlerError> {
        let fields = job.as_object().ok_or_else(|| {
            HandlerError::type_error(format!("Job should be an object, got {}", json_type_name(job)))
        })?;

        let file_path = fields.get("file").unwrap_or(&Value::Null);
        let query_expressions = fields.get("expressions").unwrap_or(&Value::Null);
        let handler = Self::from_values(file_path, query_expressions)?;

        match fields.get("options") {
            None | Some(Value::Null) => Ok(handler),
            Some(options) => {
                let options = HandlerOptions::deserialize(options)
                    .map_err(|e| HandlerError::type_error(format!("Invalid options: {}", e)))?;
                Ok(handler.with_options(options))
            }
        }
    }

    /// Replace the extraction options
    pub fn with_options(mut self, options: HandlerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn query_expressions(&self) -> &[String] {
        &self.query_expressions
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    /// Parse the file and evaluate every expression against it
    ///
    /// Returns `Ok(None)` when the file is not well-formed XML (an error is
    /// logged) or when every result was dropped by the result filter.
    /// Unreadable files and broken expressions are returned as errors.
    pub fn extract_data(&self) -> Result<Option<ExtractedData>, HandlerError> {
        let xml = fs::read_to_string(&self.file_path)?;
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(&xml);

        let engine = XPathEngine::new();
        let mut document = match engine.load_document(xml) {
            Ok(document) => document,
            Err(e) => {
                error!(file = %self.file_path.display(), "Unable to parse file: {}", e);
                return Ok(None);
            }
        };

        let mut extracted = Vec::new();
        for expression in &self.query_expressions {
            let values = engine.evaluate(&mut document, expression)?;

            if self.options.result_filter.is_dropped(&values) {
                debug!(expression = %expression, "no result, dropped");
                continue;
            }
            extracted.push(values);
        }

        if extracted.is_empty() {
            Ok(None)
        } else {
            Ok(Some(extracted))
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), HandlerError> {
    if path.exists() {
        Ok(())
    } else {
        Err(HandlerError::FileNotFound { path: path.to_path_buf() })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
