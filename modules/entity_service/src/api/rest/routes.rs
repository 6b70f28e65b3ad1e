//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::contract::Record;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/collections/{collection}",
            axum::routing::put(save_record_handler),
        )
        .route("/collections/{collection}/query", post(query_records_handler))
        .route("/collections/{collection}/count", get(count_records_handler))
        .route(
            "/collections/{collection}/{id}",
            get(get_record_handler).delete(delete_record_handler),
        )
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<(String, String)>,
    query: Query<JoinsParam>,
) -> Result<Json<Record>, Problem> {
    handlers::get_record(service, path, query).await
}

async fn query_records_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<QueryRequest>,
) -> Result<Json<RecordsResponse>, Problem> {
    handlers::query_records(service, path, json).await
}

async fn count_records_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<CountResponse>, Problem> {
    handlers::count_records(service, path).await
}

async fn save_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Record>), Problem> {
    handlers::save_record(service, path, json).await
}

async fn delete_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<(String, String)>,
) -> Result<StatusCode, Problem> {
    handlers::delete_record(service, path).await
}
