use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use salti_core::savings::{NewSaveEvent, ProfileStats, SaveEvent};
use salti_core::sync::SyncReport;
use salti_core::utils::time_utils::today_utc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordSaveRequest {
    amount: Decimal,
    #[serde(default)]
    note: Option<String>,
    /// Defaults to today (UTC).
    saved_on: Option<NaiveDate>,
}

async fn record_save(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecordSaveRequest>,
) -> ApiResult<(StatusCode, Json<SaveEvent>)> {
    let event = state
        .savings_service
        .record_save(NewSaveEvent {
            user_id,
            amount: request.amount,
            note: request.note,
            saved_on: request.saved_on.unwrap_or_else(today_utc),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn list_saves(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SaveEvent>>> {
    Ok(Json(state.savings_service.list_saves(&user_id)?))
}

async fn get_profile(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProfileStats>> {
    state
        .savings_service
        .get_profile_stats(&user_id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No profile stats for {}", user_id)))
}

async fn sync_profile(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SyncReport>> {
    let report = state
        .profile_sync_service
        .force_profile_sync(&user_id, today_utc())
        .await?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/saves",
            get(list_saves).post(record_save),
        )
        .route("/users/{user_id}/profile", get(get_profile))
        .route("/users/{user_id}/profile/sync", post(sync_profile))
}
