use serde::{Deserialize, Serialize};

/// Live quote for one security, as returned by a batch quote request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Bare symbol without the market prefix (e.g. "AAPL", "00700", "600519")
    pub code: String,

    /// Display name reported by the quote feed
    pub name: String,

    /// Last traded price, absent while a security is suspended
    pub price: Option<f64>,

    /// Change since previous close in basis points (220 means +2.20%)
    pub change_basis_points: Option<f64>,

    /// Price/earnings ratio when the feed provides one
    pub pe_ratio: Option<f64>,
}

impl QuoteSnapshot {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price: None,
            change_basis_points: None,
            pe_ratio: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_change_basis_points(mut self, change: f64) -> Self {
        self.change_basis_points = Some(change);
        self
    }

    /// Percentage change since previous close.
    pub fn change_pct(&self) -> Option<f64> {
        self.change_basis_points.map(|bp| bp / 100.0)
    }
}
