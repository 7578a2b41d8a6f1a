use csv::Writer;
use serde_json::Value;

use crate::models::{FinancialMetrics, MetricsExport, Ticker};

pub const CSV_CONTENT_TYPE: &str = "text/csv";

pub fn export_file_name(ticker: &Ticker) -> String {
    format!("{}_metrics.csv", ticker)
}

/// Every metric the provider sent, one `Metric,Value` row each, in provider
/// order.
pub fn metrics_to_csv(metrics: &FinancialMetrics) -> Result<String, csv::Error> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Metric", "Value"])?;

    for (name, value) in metrics.iter() {
        let text = cell_text(value);
        writer.write_record([name.as_str(), text.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn build_export(ticker: &Ticker, metrics: &FinancialMetrics) -> Result<MetricsExport, csv::Error> {
    Ok(MetricsExport {
        file_name: export_file_name(ticker),
        content_type: CSV_CONTENT_TYPE.to_string(),
        content: metrics_to_csv(metrics)?,
    })
}
