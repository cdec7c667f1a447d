//! Dataset view handlers: preview, column information, statistics and columns.

use axum::{extract::State, Json};
use csvscope::{AxisOptions, Classification, ColumnSummary, NumericDescription, Preview};
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the columns endpoint.
#[derive(Serialize)]
pub struct ColumnsResponse {
    /// Categorical / numeric / cardinal split.
    pub classification: Classification,
    /// Offered axis columns per chart type.
    pub charts: Vec<AxisOptions>,
}

/// Get the first rows of the current dataset.
pub async fn get_preview(State(state): State<AppState>) -> Result<Json<Preview>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.current().ok_or(ApiError::NoDataset)?;

    Ok(Json(state.explorer.preview(&loaded.dataset)))
}

/// Get the column information table.
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColumnSummary>>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.current().ok_or(ApiError::NoDataset)?;

    Ok(Json(state.explorer.summary(&loaded.dataset)))
}

/// Get descriptive statistics of the numeric columns.
pub async fn get_describe(
    State(state): State<AppState>,
) -> Result<Json<Vec<NumericDescription>>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.current().ok_or(ApiError::NoDataset)?;

    Ok(Json(state.explorer.describe(&loaded.dataset)))
}

/// Get the column classification and per-chart axis options.
pub async fn get_columns(
    State(state): State<AppState>,
) -> Result<Json<ColumnsResponse>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.current().ok_or(ApiError::NoDataset)?;

    let classification = state.explorer.classify(&loaded.dataset);
    let charts = AxisOptions::all(&loaded.dataset, &classification);

    Ok(Json(ColumnsResponse {
        classification,
        charts,
    }))
}
