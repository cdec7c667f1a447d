//! Health check handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether a dataset is loaded.
    pub loaded: bool,
    /// Name of the loaded file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let session = state.session.read().await;
    Json(HealthResponse {
        status: "ok",
        loaded: session.is_loaded(),
        file: session.current().map(|loaded| loaded.source.file.clone()),
    })
}
