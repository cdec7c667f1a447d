//! Upload handler.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use csvscope::SourceMetadata;
use serde::Deserialize;
use tracing::{info, warn};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query parameters of the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// File name as picked by the user.
    pub name: Option<String>,
}

/// Replace the session dataset with the uploaded CSV bytes.
///
/// Parsing runs on the blocking pool; the write lock is held only for the
/// swap. A rejected upload leaves the previous dataset in place.
pub async fn upload_dataset(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<SourceMetadata>, ApiError> {
    let name = params.name.unwrap_or_else(|| "upload.csv".to_string());

    let explorer = state.explorer.clone();
    let file = name.clone();
    let parsed = tokio::task::spawn_blocking(move || explorer.load_bytes(&file, &body))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let loaded = match parsed {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(file = %name, error = %e, "upload rejected, keeping current dataset");
            return Err(e.into());
        }
    };

    let mut session = state.session.write().await;
    let source = session.replace(loaded).clone();

    info!(file = %source.file, bytes = source.size_bytes, "upload accepted");
    Ok(Json(source))
}
