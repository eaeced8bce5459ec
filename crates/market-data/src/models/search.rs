//! Search result models for fund lookup.

use serde::{Deserialize, Serialize};

/// A fund candidate returned by the search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSearchHit {
    /// Fund code (e.g. "159736")
    pub code: String,

    /// Fund display name
    pub name: String,

    /// Provider category label (e.g. "基金")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FundSearchHit {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
