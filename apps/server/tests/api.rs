use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Days, Utc};
use salti_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

async fn build_test_router(extra: &[(&str, &str)]) -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("test.db").to_string_lossy().to_string();
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|key| {
        if key == "SALTI_DB_PATH" {
            return Some(db_path.clone());
        }
        extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .unwrap();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn category(result: &Value, name: &str) -> Option<f64> {
    result["weeklyBudget"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|line| line["name"] == name)
        .and_then(|line| line["amount"].as_f64())
}

#[tokio::test]
async fn preview_returns_student_split() {
    let (app, _tmp) = build_test_router(&[]).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/budgets/preview",
        Some(json!({
            "profile": "student",
            "income": 800,
            "fixedExpenses": [{ "name": "Rent", "amount": 400 }],
            "savingsTarget": 100
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weeklyBudget"]["savingsTarget"], 100.0);
    assert_eq!(category(&body, "Groceries"), Some(105.0));
    assert_eq!(category(&body, "Transport"), Some(60.0));
    assert_eq!(category(&body, "Discretionary"), Some(105.0));
    assert_eq!(category(&body, "Buffer"), Some(30.0));
}

#[tokio::test]
async fn budget_lifecycle_by_week() {
    let (app, _tmp) = build_test_router(&[]).await;
    let body = json!({
        "weekOf": "2026-10-15",
        "input": { "profile": "family", "income": 1000, "fixedExpenses": [{ "name": "Rent", "amount": 300 }] }
    });

    let (status, saved) = send(&app, Method::POST, "/api/v1/users/user-1/budgets", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["weekStart"], "2026-10-12");
    assert_eq!(saved["profile"], "family");

    let (status, loaded) = send(&app, Method::GET, "/api/v1/users/user-1/budgets/2026-10-12", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["id"], saved["id"]);

    let (status, list) = send(&app, Method::GET, "/api/v1/users/user-1/budgets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/users/user-1/budgets/2026-10-14", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(&app, Method::GET, "/api/v1/users/user-1/budgets/2026-10-12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], 404);
}

#[tokio::test]
async fn projections_respect_flag() {
    let (app, _tmp) = build_test_router(&[]).await;
    let request = json!({ "weeklyAmount": 10, "annualRatePct": 0, "years": 1 });

    let (status, body) = send(&app, Method::POST, "/api/v1/projections", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["futureValue"].as_f64(), Some(520.0));
    assert_eq!(body["yearly"].as_array().unwrap().len(), 1);

    let (disabled, _tmp2) = build_test_router(&[("SALTI_FLAG_PROJECTIONS", "false")]).await;
    let (status, _) = send(&disabled, Method::POST, "/api/v1/projections", Some(request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn saves_feed_profile_sync() {
    let (app, _tmp) = build_test_router(&[]).await;
    let today = Utc::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    for (day, amount) in [(yesterday, 3.0), (today, 4.5)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/users/user-1/saves",
            Some(json!({ "amount": amount, "savedOn": day.to_string() })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(&app, Method::GET, "/api/v1/users/user-1/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, report) = send(&app, Method::POST, "/api/v1/users/user-1/profile/sync", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["attempts"], 1);
    assert_eq!(report["stats"]["saveCount"], 2);
    assert_eq!(report["stats"]["currentStreak"], 2);

    let (status, profile) = send(&app, Method::GET, "/api/v1/users/user-1/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["totalSaved"].as_f64(), Some(7.5));
}

#[tokio::test]
async fn invalid_save_is_rejected() {
    let (app, _tmp) = build_test_router(&[]).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users/user-1/saves",
        Some(json!({ "amount": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}
