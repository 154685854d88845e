//! Policies deciding which per-expression results are kept

use serde::{Deserialize, Serialize};

use crate::xpath::QueryValue;

/// Which evaluation results count as "nothing found" and are dropped
///
/// Results with more than one item, or a single element, attribute or other
/// non-text node, are always kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    /// Drop empty sequences and a lone empty string.
    /// `0`, `NaN` and `false` are real answers and are kept.
    #[default]
    Empty,
    /// Truthiness: additionally drop a lone `0` or `false`.
    /// `NaN` is truthy and kept.
    Falsy,
}

impl ResultFilter {
    /// Parse a filter name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(ResultFilter::Empty),
            "falsy" => Some(ResultFilter::Falsy),
            _ => None,
        }
    }

    /// Whether an evaluation result should be left out of the output
    pub fn is_dropped(&self, values: &[QueryValue]) -> bool {
        let single = match values {
            [] => return true,
            [single] => single,
            _ => return false,
        };

        if single.is_node() {
            return false;
        }

        match (self, single) {
            (_, QueryValue::Text { value }) => value.is_empty(),
            (ResultFilter::Falsy, QueryValue::Boolean { value }) => !*value,
            (ResultFilter::Falsy, _) => single.as_number() == Some(0.0),
            _ => false,
        }
    }
}
