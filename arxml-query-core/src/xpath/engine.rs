//! XPath 3.1 query engine implementation

use super::{QueryValue, XPathError};
use tracing::{debug, trace};
use xee_xpath::{Atomic, DocumentHandle, Documents, Item, Queries, Query};
use xot::{Node, Value, Xot};

/// Base URI under which every loaded document is registered
const DOCUMENT_URI: &str = "file:///document.arxml";

/// A parsed XML document ready for querying
///
/// Owns its own `Documents` store, so dropping it releases the whole tree.
pub struct LoadedDocument {
    documents: Documents,
    handle: DocumentHandle,
}

impl LoadedDocument {
    /// Local name of the document element, if there is one
    pub fn root_name(&self) -> Option<String> {
        let xot = self.documents.xot();
        let doc_node = self.documents.document_node(self.handle)?;
        let root = xot.document_element(doc_node).ok()?;
        let element = xot.element(root)?;
        Some(xot.local_name_str(element.name()).to_string())
    }
}

/// XPath query engine using xee-xpath
///
/// Every expression is compiled fresh; nothing is cached between calls.
pub struct XPathEngine;

impl XPathEngine {
    /// Create a new XPath engine
    pub fn new() -> Self {
        XPathEngine
    }

    /// Parse an XML string into a queryable document
    pub fn load_document(&self, xml: &str) -> Result<LoadedDocument, XPathError> {
        let mut documents = Documents::new();
        let handle = documents
            .add_string(
                DOCUMENT_URI
                    .try_into()
                    .map_err(|e| XPathError::XmlParse(format!("invalid document URI: {}", e)))?,
                xml,
            )
            .map_err(|e| XPathError::XmlParse(e.to_string()))?;

        let document = LoadedDocument { documents, handle };
        trace!(root = ?document.root_name(), "loaded XML document");
        Ok(document)
    }

    /// Evaluate one expression against a loaded document
    ///
    /// The full result sequence is returned in document/evaluation order.
    /// Function items have no value representation and are skipped.
    pub fn evaluate(
        &self,
        document: &mut LoadedDocument,
        expression: &str,
    ) -> Result<Vec<QueryValue>, XPathError> {
        let queries = Queries::default();
        let query = queries
            .sequence(expression)
            .map_err(|e| XPathError::Compile {
                expression: expression.to_string(),
                message: e.to_string(),
            })?;

        let results = query
            .execute(&mut document.documents, document.handle)
            .map_err(|e: xee_xpath::error::Error| XPathError::Execute {
                expression: expression.to_string(),
                message: e.to_string(),
            })?;

        let xot = document.documents.xot();
        let mut values = Vec::new();

        for item in results.iter() {
            match item {
                Item::Node(node) => values.push(node_value(xot, node)),
                Item::Atomic(atomic) => values.push(atomic_value(atomic)),
                Item::Function(_) => {}
            }
        }

        debug!(expression, items = values.len(), "evaluated XPath");

        Ok(values)
    }
}

impl Default for XPathEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a result node, keeping its kind
fn node_value(xot: &Xot, node: Node) -> QueryValue {
    let value = xot.string_value(node);
    match xot.value(node) {
        Value::Element(element) => QueryValue::Element {
            name: xot.local_name_str(element.name()).to_string(),
            value,
            xml: xot.to_string(node).unwrap_or_default(),
        },
        Value::Attribute(attribute) => QueryValue::Attribute {
            name: xot.local_name_str(attribute.name()).to_string(),
            value,
        },
        Value::Text(_) => QueryValue::Text { value },
        _ => QueryValue::Node { value },
    }
}

/// Convert an atomic value; numeric and boolean types keep their type
fn atomic_value(atomic: Atomic) -> QueryValue {
    if let Atomic::Boolean(value) = atomic {
        return QueryValue::boolean(value);
    }

    let numeric = matches!(
        atomic,
        Atomic::Integer(..) | Atomic::Decimal(..) | Atomic::Float(..) | Atomic::Double(..)
    );
    let text = atomic.to_string().unwrap_or_default();
    match parse_number(&text) {
        Some(value) if numeric => QueryValue::number(value),
        _ => QueryValue::text(text),
    }
}

/// Parse the canonical lexical form of an XPath number
fn parse_number(text: &str) -> Option<f64> {
    match text {
        "INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => text.parse().ok(),
    }
}
