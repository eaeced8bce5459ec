//! Market classification of composite security codes.
//!
//! Security codes on the disclosure page look like `"<marketPrefix>.<symbol>"`,
//! where the prefix is the quote vendor's market id. Only the prefixes the
//! estimator cares about are mapped; anything else is `Other`.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A-share market ids start with 0 (Shenzhen), 1 (Shanghai) or 3.
    static ref CN_PREFIX_REGEX: Regex = Regex::new(r"^[013]").expect("Invalid regex pattern");
}

const US_PREFIXES: [&str; 2] = ["105", "106"];
const HK_PREFIX: &str = "116";

/// Market a holding trades on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    Us,
    Hk,
    Cn,
    Other,
    Invalid,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Us => "US",
            Market::Hk => "HK",
            Market::Cn => "CN",
            Market::Other => "OTHER",
            Market::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits `"<prefix>.<symbol>"` into its two parts.
///
/// The symbol is the segment after the first `.` up to the next one, so
/// `"1.600519"` gives `("1", "600519")`. A code without a separator has an
/// empty symbol.
pub fn split_code(code: &str) -> (&str, &str) {
    let mut parts = code.split('.');
    let prefix = parts.next().unwrap_or_default();
    let symbol = parts.next().unwrap_or_default();
    (prefix, symbol)
}

/// Classify a composite security code into its market.
pub fn classify(code: &str) -> Market {
    let (prefix, symbol) = split_code(code);
    if prefix.is_empty() || symbol.is_empty() {
        return Market::Invalid;
    }

    if US_PREFIXES.contains(&prefix) {
        Market::Us
    } else if prefix == HK_PREFIX {
        Market::Hk
    } else if CN_PREFIX_REGEX.is_match(prefix) {
        Market::Cn
    } else {
        Market::Other
    }
}
