//! Error handling - Errore applicativo unico restituito dagli handler
//!
//! Ogni errore diventa una risposta JSON `{code, message, details?, timestamp}`.
//! I dettagli degli errori infrastrutturali finiscono solo nei log, mai nella risposta.

use crate::repositories::StoreError;
use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, warn};

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    InternalServerError,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

impl AppError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    // Common error constructors
    pub fn validation(details: Value) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError,
            "Validation failed",
        )
        .with_details(details)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
    }

    pub fn internal_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
            GENERIC_ERROR_MESSAGE,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// `min_price` -> `minPrice`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut details = Map::new();
        for (field, errors) in err.field_errors() {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .map(Value::String)
                .collect();
            details.insert(camel_case(&field.to_string()), Value::Array(messages));
        }

        let details = Value::Object(details);
        warn!("Validation error: {}", details);
        Self::validation(details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        warn!("Rejected query string: {}", err.body_text());
        Self::validation(serde_json::json!({ "query": [err.body_text()] }))
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        warn!("Rejected path parameter: {}", err.body_text());
        Self::validation(serde_json::json!({ "id": [err.body_text()] }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                warn!("Property with id {} not found", id);
                Self::not_found(format!("Property with id {} not found", id))
            }
            other => {
                error!("Store failure: {}", other);
                Self::internal_server_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            code: self.code,
            message: self.message,
            details: self.details,
            timestamp: Utc::now(),
        });
        (self.status, body).into_response()
    }
}
