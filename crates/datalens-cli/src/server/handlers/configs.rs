//! Config discovery handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiFailure;
use crate::server::state::AppState;

/// Request for the config discovery endpoint.
#[derive(Debug, Deserialize)]
pub struct GetConfigsRequest {
    /// Dataset identifier.
    pub dataset_name: String,
}

/// Successful response carrying the configuration names.
#[derive(Debug, Serialize)]
pub struct GetConfigsResponse {
    pub success: bool,
    pub configs: Vec<String>,
}

/// POST /api/get_configs - list configuration names for a dataset.
pub async fn get_configs(
    State(state): State<AppState>,
    Json(request): Json<GetConfigsRequest>,
) -> Result<Json<GetConfigsResponse>, ApiFailure> {
    let configs = state.facade.list_configs(&request.dataset_name)?;

    Ok(Json(GetConfigsResponse {
        success: true,
        configs,
    }))
}
