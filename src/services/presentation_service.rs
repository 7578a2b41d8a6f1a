use serde_json::Value;

use crate::models::{
    ChartKind, ChartPoint, ChartView, CompanyProfile, FinancialMetrics, MetricGroup, MetricRow,
    MetricsView, ProfileRow, ProfileView, RecommendationSummary, RecommendationView, TrendRecord,
};

pub const PLACEHOLDER: &str = "N/A";

// (table label, provider metric key)
pub const INCOME_METRICS: &[(&str, &str)] = &[
    ("Revenue Per Share", "revenuePerShareAnnual"),
    ("Net Income", "netIncomeAnnual"),
];

pub const BALANCE_METRICS: &[(&str, &str)] = &[
    ("Total Assets", "totalAssets"),
    ("Total Liabilities", "totalLiabilities"),
];

pub const VALUATION_METRICS: &[(&str, &str)] = &[
    ("P/E Ratio", "peNormalizedAnnual"),
    ("EV/EBITDA", "enterpriseValueOverEBITDA"),
];

// ==============================================================================
// Profile
// ==============================================================================

pub fn profile_view(profile: &CompanyProfile) -> ProfileView {
    ProfileView {
        rows: profile_rows(profile),
        logo_url: non_blank(profile.logo_url.as_deref()),
        website_url: non_blank(profile.website_url.as_deref()),
    }
}

/// Summary table rows. Text fields fall back to the placeholder; numeric
/// fields fall back to zero.
pub fn profile_rows(profile: &CompanyProfile) -> Vec<ProfileRow> {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    let number = |v: Option<f64>| format_thousands(v.unwrap_or(0.0));

    vec![
        row("Name", text(&profile.name)),
        row("Ticker", text(&profile.ticker)),
        row("Industry", text(&profile.industry)),
        row("Country", text(&profile.country)),
        row("Exchange", text(&profile.exchange)),
        row("Market Cap (in Billion)", number(profile.market_capitalization)),
        row("Share Outstanding", number(profile.share_outstanding)),
    ]
}

fn row(field: &str, value: String) -> ProfileRow {
    ProfileRow {
        field: field.to_string(),
        value,
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

/// Two decimals with comma thousands separators, e.g. `2,950,000.50`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

// ==============================================================================
// Fundamentals
// ==============================================================================

pub fn metrics_view(metrics: &FinancialMetrics, chart: ChartKind) -> MetricsView {
    MetricsView {
        groups: metric_groups(metrics),
        chart: income_chart(metrics, chart),
    }
}

pub fn metric_groups(metrics: &FinancialMetrics) -> Vec<MetricGroup> {
    vec![
        metric_group("Income Statement", INCOME_METRICS, metrics),
        metric_group("Balance Sheet", BALANCE_METRICS, metrics),
        metric_group("Valuation Metrics", VALUATION_METRICS, metrics),
    ]
}

fn metric_group(title: &str, fields: &[(&str, &str)], metrics: &FinancialMetrics) -> MetricGroup {
    let rows = fields
        .iter()
        .map(|(label, key)| {
            let value = metrics.get(key).cloned();
            let display = value
                .as_ref()
                .map(display_value)
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            MetricRow {
                label: label.to_string(),
                value,
                display,
            }
        })
        .collect();

    MetricGroup {
        title: title.to_string(),
        rows,
    }
}

/// Natural text of a provider value: strings as-is, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Income metrics for charting. Absent or non-numeric values plot as zero;
/// the table rows are built separately and keep the original values.
pub fn income_chart(metrics: &FinancialMetrics, kind: ChartKind) -> ChartView {
    let points = INCOME_METRICS
        .iter()
        .map(|(label, key)| ChartPoint {
            label: label.to_string(),
            value: metrics
                .get(key)
                .filter(|v| v.is_number())
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
        })
        .collect();

    ChartView {
        kind,
        title: "Income Metrics".to_string(),
        x_label: "Metric".to_string(),
        y_label: "Value".to_string(),
        points,
    }
}

// ==============================================================================
// Recommendations
// ==============================================================================

/// Field-wise sum over every period. An empty trend sums to zero.
pub fn summarize_trend(records: &[TrendRecord]) -> RecommendationSummary {
    records
        .iter()
        .fold(RecommendationSummary::default(), |acc, r| RecommendationSummary {
            buy: acc.buy + u64::from(r.buy),
            hold: acc.hold + u64::from(r.hold),
            sell: acc.sell + u64::from(r.sell),
        })
}

pub fn recommendation_chart(summary: &RecommendationSummary) -> ChartView {
    let points = [("Buy", summary.buy), ("Hold", summary.hold), ("Sell", summary.sell)]
        .into_iter()
        .map(|(label, count)| ChartPoint {
            label: label.to_string(),
            value: count as f64,
        })
        .collect();

    ChartView {
        kind: ChartKind::Bar,
        title: "Analyst Recommendations".to_string(),
        x_label: "Recommendation".to_string(),
        y_label: "Count".to_string(),
        points,
    }
}

pub fn recommendation_view(records: &[TrendRecord]) -> RecommendationView {
    let summary = summarize_trend(records);
    RecommendationView {
        chart: recommendation_chart(&summary),
        summary,
    }
}
