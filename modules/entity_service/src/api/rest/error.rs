//! HTTP error mapping to RFC-9457 Problem Details

use std::collections::BTreeMap;

use crate::contract::EntityError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    pub title: String,

    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-specific validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

fn internal() -> Problem {
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .with_detail("An unexpected error occurred")
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: EntityError) -> Problem {
    match error {
        EntityError::NotFound { collection, id } => {
            Problem::new(StatusCode::NOT_FOUND, "Record Not Found")
                .with_detail(format!("{collection} with id '{id}' was not found"))
        }

        EntityError::UnknownCollection(name) => {
            Problem::new(StatusCode::NOT_FOUND, "Collection Not Found")
                .with_detail(format!("Collection '{name}' does not exist"))
        }

        EntityError::TransactionNotFound(id) => {
            Problem::new(StatusCode::NOT_FOUND, "Transaction Not Found")
                .with_detail(format!("Transaction '{id}' is not open"))
        }

        EntityError::UnknownEntity(detail) => {
            Problem::new(StatusCode::BAD_REQUEST, "Unknown Entity").with_detail(detail)
        }

        EntityError::Validation { fields } => Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
            .with_detail("ValidationError")
            .with_errors(fields),

        EntityError::Decode { collection, message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Document")
                .with_detail(format!("{collection}: {message}"))
        }

        EntityError::Join(error) => {
            tracing::error!(error = %error, "join resolution failed");
            internal()
        }

        EntityError::Storage(message) => {
            tracing::error!(error = %message, "storage failure");
            internal()
        }
    }
}
