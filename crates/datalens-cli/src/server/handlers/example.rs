//! Single example handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use datalens::{DatalensError, LoadOutcome, NormalizedRecord};

use crate::server::error::ApiFailure;
use crate::server::state::AppState;

/// Request for the single-example endpoint.
#[derive(Debug, Deserialize)]
pub struct GetExampleRequest {
    /// Dataset identifier.
    pub dataset_name: String,
    /// Configuration name, for datasets that require one.
    #[serde(default)]
    pub config_name: Option<String>,
    /// Record index. Signed, so out-of-range negatives report the range
    /// instead of failing to parse.
    #[serde(default)]
    pub index: i64,
}

/// Successful response carrying one normalized example.
#[derive(Debug, Serialize)]
pub struct GetExampleResponse {
    pub success: bool,
    pub example: NormalizedRecord,
    pub index: i64,
    pub total: usize,
}

/// POST /api/get_example - fetch one record by index, bounds-checked.
pub async fn get_example(
    State(state): State<AppState>,
    Json(request): Json<GetExampleRequest>,
) -> Result<Json<GetExampleResponse>, ApiFailure> {
    let facade = &state.facade;

    let handle = match facade.load_split(&request.dataset_name, request.config_name.as_deref())? {
        LoadOutcome::Loaded(handle) => handle,
        LoadOutcome::ConfigRequired { .. } => {
            return Err(DatalensError::ConfigRequired {
                dataset: request.dataset_name,
            }
            .into());
        }
    };

    let example = facade.record_at(handle.as_ref(), request.index)?;

    Ok(Json(GetExampleResponse {
        success: true,
        example,
        index: request.index,
        total: handle.len(),
    }))
}
