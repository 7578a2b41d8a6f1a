use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};

use crate::external::data_provider::{FinancialDataProvider, ProviderError};
use crate::models::{BasicFinancials, CompanyProfile, FinancialMetrics, Ticker, TrendRecord};

pub struct FinnhubProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FinnhubProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Finnhub request {} {:?}", path, params);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Finnhub request to {} failed: {}", path, e);
                ProviderError::Network(e.to_string())
            })?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::BadResponse(describe_failure(status, &body)));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

// Finnhub reports failures as { "error": "Invalid API key" }
#[derive(Debug, Deserialize)]
struct FinnhubErrorBody {
    error: Option<String>,
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<FinnhubErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
    {
        Some(msg) => format!("{}: {}", status, msg),
        None => status.to_string(),
    }
}

#[async_trait]
impl FinancialDataProvider for FinnhubProvider {
    async fn fetch_profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError> {
        self.get_json("/stock/profile2", &[("symbol", ticker.as_str())])
            .await
    }

    async fn fetch_fundamentals(&self, ticker: &Ticker) -> Result<FinancialMetrics, ProviderError> {
        let body: BasicFinancials = self
            .get_json(
                "/stock/metric",
                &[("symbol", ticker.as_str()), ("metric", "all")],
            )
            .await?;

        body.into_metrics()
            .ok_or_else(|| ProviderError::Parse("metric is not an object".into()))
    }

    async fn fetch_recommendation_trend(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<TrendRecord>, ProviderError> {
        self.get_json("/stock/recommendation", &[("symbol", ticker.as_str())])
            .await
    }
}
