//! REST API for the advisor
//!
//! Exposes session start and end, chat turns, the profile overview, the
//! transcript and the product catalog over HTTP for a frontend.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::agent::Advisor;
use crate::error::AdvisorError;
use crate::knowledge;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

type ApiResult = (StatusCode, Json<ApiResponse>);

fn status_for(error: &AdvisorError) -> StatusCode {
    match error {
        AdvisorError::EmptyMessage => StatusCode::BAD_REQUEST,
        AdvisorError::PersistenceError(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn ok<T: Serialize>(data: T) -> ApiResult {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

fn failed(error: AdvisorError) -> ApiResult {
    let status = status_for(&error);
    warn!(status = %status, error = %error, "Request failed");
    (status, Json(ApiResponse::error(error.to_string())))
}

fn missing_user() -> ApiResult {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("user_id is required".into())),
    )
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub advisor: Arc<Advisor>,
}

/// =============================
/// Endpoints
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn start_session(State(state): State<ApiState>, Json(req): Json<SessionRequest>) -> ApiResult {
    if req.user_id.trim().is_empty() {
        return missing_user();
    }

    match state.advisor.start_session(&req.user_id, Utc::now()).await {
        Ok(reply) => ok(reply),
        Err(e) => failed(e),
    }
}

async fn chat(State(state): State<ApiState>, Json(req): Json<ChatRequest>) -> ApiResult {
    if req.user_id.trim().is_empty() {
        return missing_user();
    }

    info!(user_id = %req.user_id, length = req.message.len(), "Chat message received");

    match state.advisor.process_turn(&req.user_id, &req.message, Utc::now()).await {
        Ok(reply) => ok(reply),
        Err(e) => failed(e),
    }
}

async fn overview(State(state): State<ApiState>, Path(user_id): Path<String>) -> ApiResult {
    match state.advisor.profile_overview(&user_id, Utc::now()).await {
        Ok(overview) => ok(overview),
        Err(e) => failed(e),
    }
}

async fn transcript(State(state): State<ApiState>, Path(user_id): Path<String>) -> ApiResult {
    ok(state.advisor.transcript(&user_id).await)
}

async fn end_session(State(state): State<ApiState>, Path(user_id): Path<String>) -> ApiResult {
    let ended = state.advisor.end_session(&user_id).await;
    ok(serde_json::json!({ "ended": ended }))
}

async fn catalog() -> ApiResult {
    ok(knowledge::catalog())
}

/// =============================
/// Router
/// =============================

pub fn create_router(advisor: Arc<Advisor>) -> Router {
    let state = ApiState { advisor };

    Router::new()
        .route("/health", get(health))
        .route("/api/session", post(start_session))
        .route("/api/chat", post(chat))
        .route("/api/users/:user_id/overview", get(overview))
        .route("/api/users/:user_id/transcript", get(transcript))
        .route("/api/users/:user_id/session", delete(end_session))
        .route("/api/knowledge", get(catalog))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(advisor: Arc<Advisor>, port: u16) -> crate::Result<()> {
    let router = create_router(advisor);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::SimulatedMarketData;
    use crate::models::{FinancialProfile, UserStreak};
    use crate::state::{AdvisorStore, InMemoryStore};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let advisor = Advisor::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(SimulatedMarketData::new()),
        );
        create_router(Arc::new(advisor))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read(response: axum::response::Response) -> (StatusCode, ApiResponse) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_turn() {
        let response = app()
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"user_id": "asha@example.com", "message": "What is SIP?"}),
            ))
            .await
            .unwrap();

        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);

        let data = body.data.unwrap();
        assert_eq!(data["intent"], "explain_concept");
        assert_eq!(data["suggested_replies"][0], "What is SIP?");
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"user_id": "asha@example.com", "message": "  "}),
            ))
            .await
            .unwrap();

        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Message is empty"));
    }

    #[tokio::test]
    async fn test_session_then_transcript() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/api/session", serde_json::json!({"user_id": "ravi"})))
            .await
            .unwrap();
        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.data.unwrap()["response_text"]
            .as_str()
            .unwrap()
            .contains("Your Streak: 1 days!"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/users/ravi/transcript")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap().as_array().map(|a| a.len()), Some(1));
    }

    #[tokio::test]
    async fn test_end_session_clears_transcript() {
        let app = app();
        app.clone()
            .oneshot(post_json("/api/session", serde_json::json!({"user_id": "ravi"})))
            .await
            .unwrap();

        let end = || {
            Request::builder()
                .method("DELETE")
                .uri("/api/users/ravi/session")
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = read(app.clone().oneshot(end()).await.unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap()["ended"], true);

        let (_, body) = read(app.clone().oneshot(end()).await.unwrap()).await;
        assert_eq!(body.data.unwrap()["ended"], false);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/users/ravi/transcript")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let (_, body) = read(response).await;
        assert_eq!(body.data.unwrap().as_array().map(|a| a.len()), Some(0));
    }

    #[tokio::test]
    async fn test_knowledge_catalog() {
        let response = app()
            .oneshot(Request::builder().uri("/api/knowledge").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::OK);
        let data = body.data.unwrap();
        assert_eq!(data["lic_plans"][0]["name"], "Sukanya Samriddhi Yojana");
        assert_eq!(data["sip_types"][0]["expectedReturn"], "12-15% annually");
    }

    #[tokio::test]
    async fn test_port_in_use_is_io_error() {
        let taken = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let advisor = Advisor::new(Arc::new(InMemoryStore::new()), Arc::new(SimulatedMarketData::new()));
        let err = start_server(Arc::new(advisor), port).await.unwrap_err();
        assert!(matches!(err, AdvisorError::IoError(_)));
    }

    #[tokio::test]
    async fn test_missing_user_id() {
        let response = app()
            .oneshot(post_json("/api/session", serde_json::json!({"user_id": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Store that cannot be reached.
    struct DownStore;

    #[async_trait::async_trait]
    impl AdvisorStore for DownStore {
        async fn load_profile(&self, _: &str) -> crate::Result<Option<FinancialProfile>> {
            Err(AdvisorError::PersistenceError("connection refused".into()))
        }
        async fn save_profile(&self, _: &str, _: &FinancialProfile) -> crate::Result<()> {
            Err(AdvisorError::PersistenceError("connection refused".into()))
        }
        async fn load_streak(&self, _: &str) -> crate::Result<Option<UserStreak>> {
            Err(AdvisorError::PersistenceError("connection refused".into()))
        }
        async fn save_streak(&self, _: &str, _: &UserStreak) -> crate::Result<()> {
            Err(AdvisorError::PersistenceError("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_store_outage_is_service_unavailable() {
        let advisor = Advisor::new(Arc::new(DownStore), Arc::new(SimulatedMarketData::new()));
        let response = create_router(Arc::new(advisor))
            .oneshot(Request::builder().uri("/api/users/ravi/overview").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let (status, body) = read(response).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.unwrap().contains("connection refused"));
    }
}
