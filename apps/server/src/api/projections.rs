use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use salti_core::errors::Error as CoreError;
use salti_core::projection::{project_future_value, ProjectionInput, ProjectionResult};

async fn project(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ProjectionInput>,
) -> ApiResult<Json<ProjectionResult>> {
    if !state.flags.projections {
        return Err(CoreError::FeatureDisabled("projections".to_string()).into());
    }
    Ok(Json(project_future_value(&input)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/projections", post(project))
}
