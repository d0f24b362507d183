//! HTTP tests for the class directory and health routes.

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::{
    DBService,
    models::user::{CreateUser, User, UserRole},
};
use server::{AppState, error::ErrorBody};
use tower::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .context("build request")?;
    let response = app.oneshot(request).await.map_err(|err| match err {})?;

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .context("read response body")?;
    let json = serde_json::from_slice(&body).context("parse JSON body")?;
    Ok((status, json))
}

async fn seeded_db(users: &[CreateUser]) -> Result<DBService> {
    let db = DBService::new_in_memory().await?;
    for user in users {
        User::create(&db.pool, user).await?;
    }
    Ok(db)
}

#[tokio::test]
async fn test_list_classes_sorted_and_distinct() -> Result<()> {
    let db = seeded_db(&[
        CreateUser::student("Ani", "ani@sekolah.id", Some("10A")),
        CreateUser::student("Budi", "budi@sekolah.id", Some("10A")),
        CreateUser::student("Citra", "citra@sekolah.id", Some("10B")),
        CreateUser::student("Dewi", "dewi@sekolah.id", None),
        CreateUser::student("Eko", "eko@sekolah.id", Some("9C")),
        CreateUser {
            name: "Bu Sari".to_string(),
            email: "sari@sekolah.id".to_string(),
            role: UserRole::Teacher,
            class_name: Some("99Z".to_string()),
        },
    ])
    .await?;

    let (status, body) = get(server::app(AppState::new(db)), "/api/kelas").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "classes": ["10A", "10B", "9C"] }));
    Ok(())
}

#[tokio::test]
async fn test_list_classes_empty() -> Result<()> {
    let db = seeded_db(&[CreateUser::student("Dewi", "dewi@sekolah.id", None)]).await?;

    let (status, body) = get(server::app(AppState::new(db)), "/api/kelas").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "classes": [] }));
    Ok(())
}

#[tokio::test]
async fn test_list_classes_store_failure_returns_500() -> Result<()> {
    let db = DBService::new_in_memory().await?;
    db.pool.close().await;

    let (status, body) = get(server::app(AppState::new(db)), "/api/kelas").await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Gagal mengambil data kelas" }));
    let parsed: ErrorBody = serde_json::from_value(body)?;
    assert_eq!(parsed.error, server::error::CLASS_LIST_FAILED);
    Ok(())
}

#[tokio::test]
async fn test_health_ok() -> Result<()> {
    let db = DBService::new_in_memory().await?;

    let (status, body) = get(server::app(AppState::new(db)), "/api/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn test_health_reports_unavailable_database() -> Result<()> {
    let db = DBService::new_in_memory().await?;
    db.pool.close().await;

    let (status, body) = get(server::app(AppState::new(db)), "/api/health").await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, serde_json::json!({ "error": "Database tidak tersedia" }));
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_404() -> Result<()> {
    let db = DBService::new_in_memory().await?;
    let request = Request::builder()
        .uri("/api/tidak-ada")
        .body(Body::empty())
        .context("build request")?;

    let response = server::app(AppState::new(db))
        .oneshot(request)
        .await
        .map_err(|err| match err {})?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
