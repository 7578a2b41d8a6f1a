use tracing::{error, info};

use crate::errors::FetchResult;
use crate::external::FinancialDataProvider;
use crate::models::{
    CompanyProfile, DashboardRequest, DashboardView, FinancialMetrics, RecommendationSummary,
    Section, Ticker, TrendRecord,
};
use crate::services::{export_service, fetch_service, insight_service, presentation_service};

/// Raw adapter results for one action. Each field succeeds or fails on its own.
#[derive(Debug, Clone)]
pub struct DashboardPayloads {
    pub profile: FetchResult<CompanyProfile>,
    pub metrics: FetchResult<FinancialMetrics>,
    pub recommendations: FetchResult<Vec<TrendRecord>>,
}

/// Runs the three adapters concurrently. None of them waits on, or can
/// cancel, another.
pub async fn fetch_payloads(provider: &dyn FinancialDataProvider, ticker: &Ticker) -> DashboardPayloads {
    let (profile, metrics, recommendations) = tokio::join!(
        fetch_service::fetch_company_profile(provider, ticker),
        fetch_service::fetch_detailed_metrics(provider, ticker),
        fetch_service::fetch_recommendations(provider, ticker),
    );

    DashboardPayloads {
        profile,
        metrics,
        recommendations,
    }
}

/// Builds the render model from fetched payloads. No I/O.
pub fn render_dashboard(request: &DashboardRequest, payloads: &DashboardPayloads) -> DashboardView {
    let profile = payloads
        .profile
        .as_ref()
        .map(presentation_service::profile_view)
        .map_err(Clone::clone);

    let metrics = payloads
        .metrics
        .as_ref()
        .map(|m| presentation_service::metrics_view(m, request.chart))
        .map_err(Clone::clone);

    let recommendations = payloads
        .recommendations
        .as_ref()
        .map(|r| presentation_service::recommendation_view(r))
        .map_err(Clone::clone);

    // A failed trend fetch still yields an insight, from an all-zero summary.
    let summary = recommendations
        .as_ref()
        .map(|view| view.summary)
        .unwrap_or_else(|_| RecommendationSummary::default());

    let export = match (&payloads.metrics, request.download) {
        (Ok(metrics), true) => match export_service::build_export(&request.ticker, metrics) {
            Ok(export) => Some(export),
            Err(e) => {
                error!("Failed to build metrics export for {}: {}", request.ticker, e);
                None
            }
        },
        _ => None,
    };

    DashboardView {
        ticker: request.ticker.clone(),
        profile: Section::from(profile),
        metrics: Section::from(metrics),
        recommendations: Section::from(recommendations),
        insight: insight_service::insight_view(summary),
        export,
    }
}

pub async fn generate_dashboard(
    provider: &dyn FinancialDataProvider,
    request: &DashboardRequest,
) -> DashboardView {
    info!(
        "Generating dashboard for {} (chart={:?}, download={})",
        request.ticker, request.chart, request.download
    );
    let payloads = fetch_payloads(provider, &request.ticker).await;
    render_dashboard(request, &payloads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchFailure;
    use crate::external::ProviderError;
    use crate::models::{ChartKind, InsightLabel};
    use async_trait::async_trait;
    use serde_json::json;

    struct StubProvider {
        fail_profile: bool,
        fail_metrics: bool,
        fail_trend: bool,
    }

    #[async_trait]
    impl FinancialDataProvider for StubProvider {
        async fn fetch_profile(&self, ticker: &Ticker) -> Result<CompanyProfile, ProviderError> {
            if self.fail_profile {
                return Err(ProviderError::Network("timed out".into()));
            }
            Ok(CompanyProfile {
                name: Some("Stub Corp".into()),
                ticker: Some(ticker.to_string()),
                ..CompanyProfile::default()
            })
        }

        async fn fetch_fundamentals(&self, _: &Ticker) -> Result<FinancialMetrics, ProviderError> {
            if self.fail_metrics {
                return Err(ProviderError::BadResponse("403 Forbidden".into()));
            }
            Ok(serde_json::from_value(json!({
                "revenuePerShareAnnual": 24.5,
                "netIncomeAnnual": "n/a",
                "beta": 1.2
            }))
            .unwrap())
        }

        async fn fetch_recommendation_trend(
            &self,
            _: &Ticker,
        ) -> Result<Vec<TrendRecord>, ProviderError> {
            if self.fail_trend {
                return Err(ProviderError::RateLimited);
            }
            Ok(vec![TrendRecord::new(10, 3, 2), TrendRecord::new(4, 1, 0)])
        }
    }

    fn request(download: bool) -> DashboardRequest {
        DashboardRequest {
            ticker: Ticker::parse("stub").unwrap(),
            chart: ChartKind::Line,
            download,
        }
    }

    #[tokio::test]
    async fn test_all_sections_ready() {
        let provider = StubProvider { fail_profile: false, fail_metrics: false, fail_trend: false };
        let view = generate_dashboard(&provider, &request(true)).await;

        assert_eq!(view.ticker.as_str(), "STUB");
        assert_eq!(view.profile.data().unwrap().rows[0].value, "Stub Corp");
        assert_eq!(view.metrics.data().unwrap().chart.kind, ChartKind::Line);
        assert_eq!(
            view.recommendations.data().unwrap().summary,
            RecommendationSummary::new(14, 4, 2)
        );
        assert_eq!(view.insight.label, InsightLabel::StrongBuy);

        let export = view.export.expect("export requested");
        assert_eq!(export.file_name, "STUB_metrics.csv");
        assert_eq!(export.content.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_export_requires_opt_in() {
        let provider = StubProvider { fail_profile: false, fail_metrics: false, fail_trend: false };
        let view = generate_dashboard(&provider, &request(false)).await;
        assert!(view.export.is_none());
    }

    #[tokio::test]
    async fn test_export_requires_metrics() {
        let provider = StubProvider { fail_profile: false, fail_metrics: true, fail_trend: false };
        let view = generate_dashboard(&provider, &request(true)).await;
        assert!(view.export.is_none());
        assert_eq!(
            view.metrics,
            Section::Failed { message: "bad response: 403 Forbidden".into() }
        );
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_others() {
        let provider = StubProvider { fail_profile: true, fail_metrics: false, fail_trend: false };
        let view = generate_dashboard(&provider, &request(false)).await;

        assert!(matches!(view.profile, Section::Failed { .. }));
        assert!(view.metrics.data().is_some());
        assert!(view.recommendations.data().is_some());
        assert_eq!(view.insight.label, InsightLabel::StrongBuy);
    }

    #[tokio::test]
    async fn test_failed_trend_defaults_insight_to_zero() {
        let provider = StubProvider { fail_profile: false, fail_metrics: false, fail_trend: true };
        let view = generate_dashboard(&provider, &request(false)).await;

        assert_eq!(
            view.recommendations,
            Section::Failed { message: "rate limited".into() }
        );
        assert_eq!(view.insight.summary, RecommendationSummary::default());
        assert_eq!(view.insight.label, InsightLabel::NoConsensus);
        assert!(view.profile.data().is_some());
        assert!(view.metrics.data().is_some());
    }

    #[test]
    fn test_render_is_deterministic() {
        let payloads = DashboardPayloads {
            profile: Err(FetchFailure::new("down")),
            metrics: Err(FetchFailure::new("down")),
            recommendations: Ok(vec![TrendRecord::new(1, 5, 1)]),
        };
        let first = render_dashboard(&request(true), &payloads);
        let second = render_dashboard(&request(true), &payloads);
        assert_eq!(first, second);
        assert_eq!(first.insight.label, InsightLabel::Hold);
        assert!(first.export.is_none());
    }
}
