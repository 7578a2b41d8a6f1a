use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, FetchResult};
use crate::models::{InsightLabel, InsightTone, RecommendationSummary, Ticker};

// ==============================================================================
// Request
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            other => Err(AppError::Validation(format!(
                "Unsupported chart type '{}'. Must be 'bar', 'line', or 'pie'",
                other
            ))),
        }
    }
}

/// Raw query string of `GET /api/dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub ticker: Option<String>,
    pub chart: Option<String>,
    pub download: Option<bool>,
}

/// Validated inputs for one "Generate" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRequest {
    pub ticker: Ticker,
    pub chart: ChartKind,
    pub download: bool,
}

impl DashboardParams {
    pub fn validated(self) -> Result<DashboardRequest, AppError> {
        let ticker = Ticker::parse(self.ticker.as_deref().unwrap_or_default())?;
        let chart = match self.chart.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => ChartKind::default(),
        };
        Ok(DashboardRequest {
            ticker,
            chart,
            download: self.download.unwrap_or(false),
        })
    }
}

// ==============================================================================
// Render Model
// ==============================================================================

/// One dashboard tab: either its content or the message explaining why it
/// has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    #[serde(rename = "ok")]
    Ready { data: T },
    #[serde(rename = "error")]
    Failed { message: String },
}

impl<T> From<FetchResult<T>> for Section<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(data) => Section::Ready { data },
            Err(failure) => Section::Failed {
                message: failure.message,
            },
        }
    }
}

impl<T> Section<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Section::Ready { data } => Some(data),
            Section::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub rows: Vec<ProfileRow>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
}

/// A table cell. `value` is the provider's value untouched; `display` is what
/// the table shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub value: Option<Value>,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricGroup {
    pub title: String,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub groups: Vec<MetricGroup>,
    pub chart: ChartView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub summary: RecommendationSummary,
    pub chart: ChartView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub label: InsightLabel,
    pub text: String,
    pub tone: InsightTone,
    pub summary: RecommendationSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsExport {
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

/// Everything the front end needs to draw one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub ticker: Ticker,
    pub profile: Section<ProfileView>,
    pub metrics: Section<MetricsView>,
    pub recommendations: Section<RecommendationView>,
    pub insight: InsightView,
    pub export: Option<MetricsExport>,
}
