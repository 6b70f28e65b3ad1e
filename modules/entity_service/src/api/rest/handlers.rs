//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::Record;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// Fetch one record with optional joins
pub async fn get_record(
    service: Arc<Service>,
    Path((collection, id)): Path<(String, String)>,
    Query(params): Query<JoinsParam>,
) -> Result<Json<Record>, Problem> {
    let record = service
        .by_id(&collection, &id, &params.paths())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(record))
}

/// Filtered, sorted and paged listing with optional joins
pub async fn query_records(
    service: Arc<Service>,
    Path(collection): Path<String>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<RecordsResponse>, Problem> {
    let items = service
        .by_filter(&collection, req.query, &req.joins)
        .await
        .map_err(map_domain_error)?;
    let total = items.len();
    Ok(Json(RecordsResponse { items, total }))
}

pub async fn count_records(
    service: Arc<Service>,
    Path(collection): Path<String>,
) -> Result<Json<CountResponse>, Problem> {
    let count = service.count(&collection).await.map_err(map_domain_error)?;
    Ok(Json(CountResponse { count }))
}

/// Validate and store a document
pub async fn save_record(
    service: Arc<Service>,
    Path(collection): Path<String>,
    Json(document): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Record>), Problem> {
    let record = service
        .save(&collection, document)
        .await
        .map_err(map_domain_error)?;
    Ok((StatusCode::OK, Json(record)))
}

pub async fn delete_record(
    service: Arc<Service>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<StatusCode, Problem> {
    service
        .delete(&collection, &id)
        .await
        .map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
