use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{DashboardParams, DashboardView, Ticker};
use crate::services::{dashboard_service, export_service, fetch_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/:ticker/metrics.csv", get(download_metrics))
}

/// GET /api/dashboard?ticker=AAPL&chart=bar&download=true
///
/// One "Generate" action: fetch everything for the ticker and return the
/// render model. Section failures are inside the body, not the status.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardView>, AppError> {
    info!("GET /dashboard - ticker={:?}", params.ticker);
    let request = params.validated().map_err(|e| {
        warn!("Rejected dashboard request: {}", e);
        e
    })?;

    let view = dashboard_service::generate_dashboard(state.provider.as_ref(), &request).await;
    Ok(Json(view))
}

/// GET /api/dashboard/{ticker}/metrics.csv
///
/// Full metric map as a CSV attachment named `<TICKER>_metrics.csv`.
pub async fn download_metrics(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("GET /dashboard/{}/metrics.csv - Exporting metrics", ticker);
    let ticker = Ticker::parse(&ticker)?;

    let metrics = fetch_service::fetch_detailed_metrics(state.provider.as_ref(), &ticker)
        .await
        .map_err(|failure| AppError::External(failure.message))?;

    let export = export_service::build_export(&ticker, &metrics).map_err(|e| {
        error!("Failed to write metrics CSV for {}: {}", ticker, e);
        AppError::Internal(e.to_string())
    })?;

    let headers = [
        (header::CONTENT_TYPE, export.content_type),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ),
    ];
    Ok((headers, export.content))
}
