use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CompanyProfile, FinancialMetrics, Ticker, TrendRecord};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,
}

/// Read-only company data source. One network call per method; nothing is
/// cached or retried.
#[async_trait]
pub trait FinancialDataProvider: Send + Sync {
    async fn fetch_profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError>;

    /// The full metric map. A response without metric data yields an empty map.
    async fn fetch_fundamentals(&self, ticker: &Ticker) -> Result<FinancialMetrics, ProviderError>;

    async fn fetch_recommendation_trend(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<TrendRecord>, ProviderError>;
}
