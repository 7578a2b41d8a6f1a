use serde::Serialize;

use crate::errors::AppError;

pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a valid company ticker.";

/// Exchange symbol for one request cycle, trimmed and uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(AppError::Validation(EMPTY_TICKER_MESSAGE.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
