use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::{Deserialize, Serialize};

/// `{"message": ...}` body returned by the liveness and delete endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(Self::new(message))
    }
}

/// `{"detail": ...}` body carried by every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if !detail.trim().is_empty() {
            detail
        } else {
            String::from("Internal error")
        };

        Self { detail }
    }

    pub fn build(status: StatusCode, detail: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(Self::new(detail))
    }

    pub fn not_found(detail: impl Into<String>) -> HttpResponse {
        Self::build(StatusCode::NOT_FOUND, detail)
    }
}
