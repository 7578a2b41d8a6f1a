mod dashboard;
mod metrics;
mod profile;
mod recommendation;
mod ticker;

pub use dashboard::{
    ChartKind, ChartPoint, ChartView, DashboardParams, DashboardRequest, DashboardView,
    InsightView, MetricGroup, MetricRow, MetricsExport, MetricsView, ProfileRow, ProfileView,
    RecommendationView, Section,
};
pub use metrics::{BasicFinancials, FinancialMetrics};
pub use profile::CompanyProfile;
pub use recommendation::{InsightLabel, InsightTone, RecommendationSummary, TrendRecord};
pub use ticker::{Ticker, EMPTY_TICKER_MESSAGE};
