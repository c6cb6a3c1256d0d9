//! Request context supplied with each selection call.

use crate::QueryType;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Per-request inputs to selection.
///
/// `complexity` is caller-supplied and validated by the orchestrator, not
/// here, so that an out-of-range value surfaces as a typed selection error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct RequestContext {
    /// Query category, used for provider preference boosts.
    #[serde(default)]
    query_type: QueryType,
    /// Raw query text, used for token estimation.
    #[serde(default)]
    query_text: String,
    /// Complexity score in `[0, 1]`.
    complexity: f64,
}

impl RequestContext {
    /// Create a new request context for general queries.
    pub fn new(query_text: impl Into<String>, complexity: f64) -> Self {
        Self {
            query_type: QueryType::General,
            query_text: query_text.into(),
            complexity,
        }
    }

    /// Set the query category.
    #[must_use]
    pub fn with_query_type(mut self, query_type: QueryType) -> Self {
        self.query_type = query_type;
        self
    }
}
