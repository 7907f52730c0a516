//! Dataset load handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use datalens::{DatalensError, LoadOutcome, NormalizedRecord};

use crate::server::error::ApiFailure;
use crate::server::state::AppState;

/// Request for the dataset load endpoint.
#[derive(Debug, Deserialize)]
pub struct LoadDatasetRequest {
    /// Dataset identifier.
    pub dataset_name: String,
    /// Configuration name, for datasets that require one.
    #[serde(default)]
    pub config_name: Option<String>,
}

/// Summary block of a successful load.
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub num_examples: usize,
    pub features: Vec<String>,
    pub dataset_name: String,
    pub config_name: Option<String>,
}

/// Successful load: summary plus the first examples.
#[derive(Debug, Serialize)]
pub struct DatasetLoaded {
    pub success: bool,
    pub info: DatasetInfo,
    pub examples: Vec<NormalizedRecord>,
}

/// The dataset requires a configuration; the caller retries with one.
#[derive(Debug, Serialize)]
pub struct ConfigPrompt {
    pub success: bool,
    pub need_config: bool,
    pub configs: Vec<String>,
    pub message: String,
    pub error: String,
}

/// Response shapes for the load endpoint.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoadDatasetResponse {
    Loaded(DatasetLoaded),
    NeedConfig(ConfigPrompt),
}

/// POST /api/load_dataset - load the train split and return a preview.
pub async fn load_dataset(
    State(state): State<AppState>,
    Json(request): Json<LoadDatasetRequest>,
) -> Result<Json<LoadDatasetResponse>, ApiFailure> {
    let facade = &state.facade;

    match facade.load_split(&request.dataset_name, request.config_name.as_deref())? {
        LoadOutcome::Loaded(handle) => {
            let summary = handle.summary();
            let examples = facade.preview(handle.as_ref(), state.preview_limit)?;

            Ok(Json(LoadDatasetResponse::Loaded(DatasetLoaded {
                success: true,
                info: DatasetInfo {
                    num_examples: summary.num_examples,
                    features: summary.features,
                    dataset_name: request.dataset_name,
                    config_name: request.config_name,
                },
                examples,
            })))
        }
        LoadOutcome::ConfigRequired { configs } => {
            let error = DatalensError::ConfigRequired {
                dataset: request.dataset_name,
            };

            Ok(Json(LoadDatasetResponse::NeedConfig(ConfigPrompt {
                success: false,
                need_config: true,
                configs,
                message: "This dataset requires a configuration!".to_string(),
                error: error.to_string(),
            })))
        }
    }
}
