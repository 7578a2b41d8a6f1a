pub mod dashboard_service;
pub mod export_service;
pub mod fetch_service;
pub mod insight_service;
pub mod presentation_service;
