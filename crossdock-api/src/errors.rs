//! The error envelope every failed request is rendered into.

use crate::middleware::RequestId;
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// An error which knows how to present itself to the client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into(), details: vec![] }
    }

    pub fn invalid_arguments(details: Vec<ErrorDetail>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "invalid request parameters".to_string(), details }
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, message: message.into(), details: vec![] }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into(), details: vec![] }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: &'a Vec<ErrorDetail>,
    log_timestamp: String,
    request_id: String,
}

/// Renders the error envelope and logs the failure once at the boundary.
pub fn render_error(req: &HttpRequest, error: &ApiError) -> HttpResponse {
    let request_id = req.extensions().get::<RequestId>().map(|id| id.0.clone()).unwrap_or_default();

    if error.status.is_server_error() {
        tracing::error!(request_id = %request_id, status = error.status.as_u16(), error = %error.message, "internal error");
    } else {
        tracing::warn!(request_id = %request_id, status = error.status.as_u16(), error = %error.message, "client error");
    }

    HttpResponse::build(error.status).json(ErrorBody {
        status: error.status.as_u16(),
        message: &error.message,
        details: &error.details,
        log_timestamp: Utc::now().to_rfc3339(),
        request_id,
    })
}
