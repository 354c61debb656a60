use crate::connectors::ConnectorError;
use crate::helpers::ErrorResponse;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Everything a handler can fail with. Rendered as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request fields, rejected before any external call
    #[error("{0}")]
    Validation(String),
    #[error("Error generating content: {0}")]
    Generation(#[from] ConnectorError),
    #[error("{0}")]
    NotFound(String),
    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// Details are logged, never returned to the caller
    #[error("Internal server error")]
    Unexpected(#[source] anyhow::Error),
}

impl ApiError {
    /// `map_err` adapter for database calls
    pub fn persistence(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Persistence { context, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Generation(_) | Self::Persistence { .. } | Self::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Unexpected(err) => tracing::error!("Unexpected error: {:?}", err),
            Self::Generation(err) => tracing::error!("Generation failed: {}", err),
            Self::Persistence { context, source } => {
                tracing::error!("{}: {:?}", context, source)
            }
            Self::Validation(_) | Self::NotFound(_) => {}
        }

        ErrorResponse::build(self.status_code(), self.to_string())
    }
}
