use serde::{Deserialize, Serialize};

/// Company profile as returned by the provider. Every field is optional;
/// an unknown ticker comes back as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default, rename = "finnhubIndustry")]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default, rename = "marketCapitalization")]
    pub market_capitalization: Option<f64>,
    #[serde(default, rename = "shareOutstanding")]
    pub share_outstanding: Option<f64>,
    #[serde(default, rename = "logo")]
    pub logo_url: Option<String>,
    #[serde(default, rename = "weburl")]
    pub website_url: Option<String>,
}
