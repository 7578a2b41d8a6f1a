//! Adapters between the provider and the dashboard sections. Every provider
//! error or empty payload becomes a `FetchFailure` carrying the message the
//! section shows; anything else passes through untouched.

use tracing::warn;

use crate::errors::{FetchFailure, FetchResult};
use crate::external::FinancialDataProvider;
use crate::models::{CompanyProfile, FinancialMetrics, Ticker, TrendRecord};

pub const NO_METRICS_MESSAGE: &str = "No metrics available for this ticker";
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations available";

pub async fn fetch_company_profile(
    provider: &dyn FinancialDataProvider,
    ticker: &Ticker,
) -> FetchResult<CompanyProfile> {
    provider.fetch_profile(ticker).await.map_err(|e| {
        warn!("Profile fetch failed for {}: {}", ticker, e);
        FetchFailure::new(format!("Error fetching company profile: {}", e))
    })
}

pub async fn fetch_detailed_metrics(
    provider: &dyn FinancialDataProvider,
    ticker: &Ticker,
) -> FetchResult<FinancialMetrics> {
    let metrics = provider.fetch_fundamentals(ticker).await.map_err(|e| {
        warn!("Metrics fetch failed for {}: {}", ticker, e);
        FetchFailure::new(e.to_string())
    })?;

    if metrics.is_empty() {
        warn!("No metrics returned for {}", ticker);
        return Err(FetchFailure::new(NO_METRICS_MESSAGE));
    }
    Ok(metrics)
}

pub async fn fetch_recommendations(
    provider: &dyn FinancialDataProvider,
    ticker: &Ticker,
) -> FetchResult<Vec<TrendRecord>> {
    let records = provider.fetch_recommendation_trend(ticker).await.map_err(|e| {
        warn!("Recommendation fetch failed for {}: {}", ticker, e);
        FetchFailure::new(e.to_string())
    })?;

    if records.is_empty() {
        warn!("No recommendations returned for {}", ticker);
        return Err(FetchFailure::new(NO_RECOMMENDATIONS_MESSAGE));
    }
    Ok(records)
}
