//! Chart handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use csvscope::{ChartRequest, Figure};
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the plot endpoint. `figure` is null when the request was
/// incomplete.
#[derive(Serialize)]
pub struct PlotResponse {
    pub figure: Option<Figure>,
}

/// Build the figure for a chart request.
pub async fn plot_chart(
    State(state): State<AppState>,
    request: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<PlotResponse>, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = state.session.read().await;
    let loaded = session.current().ok_or(ApiError::NoDataset)?;

    let figure = state.explorer.plot(&loaded.dataset, &request)?;
    Ok(Json(PlotResponse { figure }))
}
