use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use salti_core::budget::{BudgetResult, FallbackInput, SavedBudget};
use salti_core::utils::time_utils::today_utc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBudgetRequest {
    /// Any day of the target week; defaults to today (UTC).
    week_of: Option<NaiveDate>,
    #[serde(default)]
    input: FallbackInput,
}

async fn preview_budget(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FallbackInput>,
) -> Json<BudgetResult> {
    Json(state.budget_service.preview_budget(&input))
}

async fn generate_budget(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<SavedBudget>)> {
    let week_of = request.week_of.unwrap_or_else(today_utc);
    let budget = state
        .budget_service
        .generate_weekly_budget(&user_id, week_of, request.input)
        .await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn list_budgets(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SavedBudget>>> {
    Ok(Json(state.budget_service.list_weekly_budgets(&user_id)?))
}

async fn get_budget(
    Path((user_id, week_start)): Path<(String, NaiveDate)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SavedBudget>> {
    state
        .budget_service
        .get_weekly_budget(&user_id, week_start)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No budget for the week of {}", week_start)))
}

async fn delete_budget(
    Path((user_id, week_start)): Path<(String, NaiveDate)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    match state
        .budget_service
        .delete_weekly_budget(&user_id, week_start)
        .await?
    {
        0 => Err(ApiError::NotFound(format!(
            "No budget for the week of {}",
            week_start
        ))),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets/preview", post(preview_budget))
        .route(
            "/users/{user_id}/budgets",
            get(list_budgets).post(generate_budget),
        )
        .route(
            "/users/{user_id}/budgets/{week_start}",
            get(get_budget).delete(delete_budget),
        )
}
