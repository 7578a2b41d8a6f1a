use std::sync::Arc;

use crate::external::FinancialDataProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FinancialDataProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn FinancialDataProvider>) -> Self {
        Self { provider }
    }
}
