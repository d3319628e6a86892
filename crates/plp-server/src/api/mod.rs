mod page;
mod products;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use plp_catalog::{CatalogClient, CatalogError};
use plp_core::SortOption;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOption>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

/// `?sort=` as sent by the selector. Unknown values are not rejected.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SortQuery {
    pub sort: Option<String>,
}

impl SortQuery {
    pub(super) fn option(&self) -> SortOption {
        SortOption::parse_lenient(self.sort.as_deref())
    }
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            sort: None,
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "transport" | "upstream_status" | "malformed_body" | "invalid_endpoint" => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn log_catalog_error(request_id: &str, error: &CatalogError) {
    tracing::error!(
        request_id,
        kind = error.kind(),
        error = %error,
        "catalog fetch failed"
    );
}

pub(super) fn map_catalog_error(request_id: String, error: &CatalogError) -> ApiError {
    log_catalog_error(&request_id, error);
    ApiError::new(request_id, error.kind(), "product catalog unavailable")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .layer(build_cors())
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::product_listing))
        .merge(api_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}

async fn not_found(Extension(req_id): Extension<RequestId>) -> ApiError {
    ApiError::new(req_id.0, "not_found", "no such route")
}
