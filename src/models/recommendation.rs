use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// Provider Records
// ==============================================================================

/// One period of analyst ratings. Missing or `null` counts read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRecord {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub buy: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hold: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub sell: u32,
    #[serde(default, rename = "strongBuy", deserialize_with = "null_as_zero")]
    pub strong_buy: u32,
    #[serde(default, rename = "strongSell", deserialize_with = "null_as_zero")]
    pub strong_sell: u32,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl TrendRecord {
    pub fn new(buy: u32, hold: u32, sell: u32) -> Self {
        Self {
            buy,
            hold,
            sell,
            ..Self::default()
        }
    }
}

// ==============================================================================
// Derived Values
// ==============================================================================

/// Buy, hold and sell counts summed over every period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationSummary {
    pub buy: u64,
    pub hold: u64,
    pub sell: u64,
}

impl RecommendationSummary {
    pub fn new(buy: u64, hold: u64, sell: u64) -> Self {
        Self { buy, hold, sell }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLabel {
    StrongBuy,
    Hold,
    Sell,
    NoConsensus,
}

/// How the front end should color the insight banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    Success,
    Info,
    Error,
    Warning,
}

impl InsightLabel {
    pub fn text(&self) -> &'static str {
        match self {
            InsightLabel::StrongBuy => "Strong Buy",
            InsightLabel::Hold => "Hold",
            InsightLabel::Sell => "Sell",
            InsightLabel::NoConsensus => "No clear recommendation",
        }
    }

    pub fn tone(&self) -> InsightTone {
        match self {
            InsightLabel::StrongBuy => InsightTone::Success,
            InsightLabel::Hold => InsightTone::Info,
            InsightLabel::Sell => InsightTone::Error,
            InsightLabel::NoConsensus => InsightTone::Warning,
        }
    }
}

impl std::fmt::Display for InsightLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
