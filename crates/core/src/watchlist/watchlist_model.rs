use serde::{Deserialize, Serialize};

/// A fund the user follows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub code: String,
    pub name: String,
    /// Amount the user holds, kept as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proportion: Option<f64>,
}

impl WatchlistEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            amount: None,
            proportion: None,
        }
    }
}

/// Direction of a fund's estimated change, at display precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One row of a refreshed watchlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistSummaryItem {
    pub code: String,
    pub name: String,
    /// Estimated change in percent; 0 when the estimation failed
    pub change_percent: f64,
}

impl WatchlistSummaryItem {
    pub fn trend(&self) -> Trend {
        let hundredths = (self.change_percent * 100.0).round();
        if hundredths > 0.0 {
            Trend::Up
        } else if hundredths < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Tree label such as `"+1.23%   Fund name"`.
    pub fn label(&self) -> String {
        let magnitude = format!("{:.2}", self.change_percent.abs());
        let sign = match self.trend() {
            Trend::Up => "+",
            Trend::Down => "-",
            Trend::Flat => "",
        };
        format!("{}{}%   {}", sign, magnitude, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(change_percent: f64) -> WatchlistSummaryItem {
        WatchlistSummaryItem {
            code: "161725".to_string(),
            name: "招商中证白酒".to_string(),
            change_percent,
        }
    }

    #[test]
    fn test_label_signs() {
        assert_eq!(item(1.234).label(), "+1.23%   招商中证白酒");
        assert_eq!(item(-0.5).label(), "-0.50%   招商中证白酒");
        assert_eq!(item(0.0).label(), "0.00%   招商中证白酒");
        assert_eq!(item(-0.001).label(), "0.00%   招商中证白酒");
    }

    #[test]
    fn test_trend_follows_display_precision() {
        assert_eq!(item(0.8).trend(), Trend::Up);
        assert_eq!(item(-2.0).trend(), Trend::Down);
        assert_eq!(item(0.004).trend(), Trend::Flat);
    }

    #[test]
    fn test_entry_user_fields_round_trip() {
        let json = r#"{"code":"161725","name":"白酒","amount":1000.5}"#;
        let entry: WatchlistEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.amount, Some(1000.5));
        assert_eq!(entry.proportion, None);
        assert_eq!(serde_json::to_string(&entry).unwrap(), json);
    }
}
