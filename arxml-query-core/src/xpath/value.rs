//! Value types produced by XPath evaluation

use serde::{Deserialize, Serialize};

/// A single item of an XPath result sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QueryValue {
    /// An element node
    Element {
        /// Local name of the element (namespace prefix stripped)
        name: String,
        /// String value (concatenated descendant text)
        value: String,
        /// The element serialized as XML
        xml: String,
    },
    /// An attribute node
    Attribute { name: String, value: String },
    /// A text node or a string-like atomic value
    Text { value: String },
    /// A numeric atomic value (`xs:integer`, `xs:decimal`, `xs:float`, `xs:double`)
    Number { value: f64 },
    /// An `xs:boolean` atomic value
    Boolean { value: bool },
    /// Any other node (document, comment, processing instruction, namespace)
    Node { value: String },
}

impl QueryValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        QueryValue::Text { value: value.into() }
    }

    /// Create a numeric value
    pub fn number(value: f64) -> Self {
        QueryValue::Number { value }
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        QueryValue::Boolean { value }
    }

    /// The string form of this value, as XPath `string()` would produce it
    pub fn as_text(&self) -> String {
        match self {
            QueryValue::Element { value, .. }
            | QueryValue::Attribute { value, .. }
            | QueryValue::Text { value }
            | QueryValue::Node { value } => value.clone(),
            QueryValue::Number { value } => format_number(*value),
            QueryValue::Boolean { value } => value.to_string(),
        }
    }

    /// Whether this value came from a node rather than an atomic
    pub fn is_node(&self) -> bool {
        matches!(
            self,
            QueryValue::Element { .. } | QueryValue::Attribute { .. } | QueryValue::Node { .. }
        )
    }

    /// Numeric payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            QueryValue::Number { value } => Some(*value),
            _ => None,
        }
    }
}

/// Integral numbers print without a fractional part, like XPath does for counts
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}INF", sign)
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
