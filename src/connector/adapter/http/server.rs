use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::connector::api::Container;
use crate::domain::{
    CompanyDetails, CompanySummary, ConnectionOutcome, DomainError, ManualTestOutcome,
    ModelDetails, ModelListing,
};

/// `POST /api/test/connection` body. Missing fields read as empty strings so
/// the use case reports them as a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestRequest {
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub api_key: String,
}

/// `POST /api/test/manual` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTestRequest {
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub prompt: String,
}

/// Renders a [`DomainError`] as `{success: false, message}`.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::invalid_input(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        match status {
            s if s >= 500 => error!("Request failed ({status}): {}", self.0),
            401 | 403 => info!("Credential rejected ({status}): {}", self.0),
            _ => debug!("Client error ({status}): {}", self.0),
        }

        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({
            "success": false,
            "message": self.0.client_message(),
        });
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Build the HTTP surface over a shared container.
pub fn app(container: Arc<Container>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/companies", get(list_companies))
        .route("/api/companies/{company_id}", get(company_details))
        .route("/api/models", get(list_models))
        .route("/api/models/{model_id}", get(model_details))
        .route("/api/test/connection", post(test_connection))
        .route("/api/test/manual", post(manual_test))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(container)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_companies(State(container): State<Arc<Container>>) -> ApiResult<Vec<CompanySummary>> {
    Ok(Json(container.browse_use_case().companies().await?))
}

async fn company_details(
    State(container): State<Arc<Container>>,
    Path(company_id): Path<String>,
) -> ApiResult<CompanyDetails> {
    Ok(Json(container.browse_use_case().company(&company_id).await?))
}

async fn list_models(State(container): State<Arc<Container>>) -> ApiResult<Vec<ModelListing>> {
    Ok(Json(container.browse_use_case().models().await?))
}

async fn model_details(
    State(container): State<Arc<Container>>,
    Path(model_id): Path<String>,
) -> ApiResult<ModelDetails> {
    Ok(Json(container.browse_use_case().model(&model_id).await?))
}

async fn test_connection(
    State(container): State<Arc<Container>>,
    body: Result<Json<ConnectionTestRequest>, JsonRejection>,
) -> ApiResult<ConnectionOutcome> {
    let Json(request) = body?;
    let outcome = container
        .test_connection_use_case()
        .execute(&request.model_id, &request.api_key)
        .await?;
    Ok(Json(outcome))
}

async fn manual_test(
    State(container): State<Arc<Container>>,
    body: Result<Json<ManualTestRequest>, JsonRejection>,
) -> ApiResult<ManualTestOutcome> {
    let Json(request) = body?;
    let outcome = container
        .manual_test_use_case()
        .execute(&request.model_id, &request.api_key, &request.prompt)
        .await?;
    Ok(Json(outcome))
}
