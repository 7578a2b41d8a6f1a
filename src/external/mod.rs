pub mod data_provider;
pub mod finnhub;

pub use data_provider::{FinancialDataProvider, ProviderError};
pub use finnhub::FinnhubProvider;
