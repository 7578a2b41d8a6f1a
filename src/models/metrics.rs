use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metric name to value, in the order the provider sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialMetrics(Map<String, Value>);

impl FinancialMetrics {
    /// A JSON `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Envelope of the basic-financials endpoint. Only `metric` is consumed.
#[derive(Debug, Deserialize)]
pub struct BasicFinancials {
    #[serde(default)]
    pub metric: Option<Value>,
}

impl BasicFinancials {
    /// An absent, `null`, or empty `metric` (`{}` or `[]`) is an empty map.
    /// Returns `None` when `metric` holds anything other than an object.
    pub fn into_metrics(self) -> Option<FinancialMetrics> {
        match self.metric {
            None | Some(Value::Null) => Some(FinancialMetrics::default()),
            Some(Value::Object(map)) => Some(FinancialMetrics(map)),
            Some(Value::Array(items)) if items.is_empty() => Some(FinancialMetrics::default()),
            Some(_) => None,
        }
    }
}
