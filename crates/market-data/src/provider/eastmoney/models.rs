//! EastMoney API response models.
//!
//! The quote feed reports suspended or unknown values as `"-"` instead of a
//! number, so every numeric field goes through [`lenient_f64`].

use serde::{Deserialize, Deserializer};

/// Envelope of the `ulist.np` batch quote endpoint.
#[derive(Debug, Deserialize)]
pub struct QuoteListResponse {
    #[serde(default)]
    pub rc: i64,
    /// `null` when none of the requested codes are known to the feed.
    pub data: Option<QuoteListData>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteListData {
    #[serde(default)]
    pub diff: Vec<QuoteRow>,
}

/// One row of the batch quote response, keyed by EastMoney field ids.
#[derive(Debug, Deserialize)]
pub struct QuoteRow {
    /// Last price
    #[serde(default, deserialize_with = "lenient_f64")]
    pub f2: Option<f64>,
    /// Change in basis points
    #[serde(default, deserialize_with = "lenient_f64")]
    pub f3: Option<f64>,
    /// P/E ratio
    #[serde(default, deserialize_with = "lenient_f64")]
    pub f9: Option<f64>,
    /// Bare symbol
    #[serde(default)]
    pub f12: String,
    /// Security name
    #[serde(default)]
    pub f14: String,
}

/// Envelope of the fund search endpoint.
#[derive(Debug, Deserialize)]
pub struct FundSearchResponse {
    #[serde(rename = "ErrCode", default)]
    pub err_code: i64,
    #[serde(rename = "Datas", default)]
    pub datas: Option<Vec<FundSearchRow>>,
}

#[derive(Debug, Deserialize)]
pub struct FundSearchRow {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "CODE", default)]
    pub code: String,
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "CATEGORY", default)]
    pub category: Option<i64>,
    #[serde(rename = "CATEGORYDESC", default)]
    pub category_desc: Option<String>,
}

impl FundSearchRow {
    /// `CODE`, or `_id` when the row leaves `CODE` blank.
    pub fn fund_code(&self) -> &str {
        if self.code.trim().is_empty() {
            self.id.trim()
        } else {
            self.code.trim()
        }
    }
}

/// Accepts a JSON number, a numeric string, or a placeholder like `"-"`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}
