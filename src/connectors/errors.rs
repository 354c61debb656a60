use reqwest::StatusCode;

/// Errors that can occur while talking to the generation provider
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Non-success status the other variants do not cover
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Provider unreachable, timed out or failing on its side (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Body could not be decoded or held no usable completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Missing, wrong or revoked API key (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Rate limited or exceeded quota (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),
    /// Internal error in connector
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConnectorError {
    /// Classify a non-success provider response
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = if body.trim().is_empty() {
            status.to_string()
        } else {
            format!("{} {}", status, body.trim())
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(detail),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(detail),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                Self::ServiceUnavailable(detail)
            }
            s if s.is_server_error() => Self::ServiceUnavailable(detail),
            _ => Self::HttpError(detail),
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_are_unauthorized() {
        let err = ConnectorError::from_status(StatusCode::UNAUTHORIZED, "invalid api key");
        assert!(matches!(err, ConnectorError::Unauthorized(_)));
        assert!(err.to_string().contains("invalid api key"));

        let err = ConnectorError::from_status(StatusCode::FORBIDDEN, "");
        assert!(matches!(err, ConnectorError::Unauthorized(_)));
    }

    #[test]
    fn quota_errors_are_rate_limited() {
        let err = ConnectorError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, ConnectorError::RateLimited(_)));
    }

    #[test]
    fn provider_outages_are_service_unavailable() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::GATEWAY_TIMEOUT,
        ] {
            let err = ConnectorError::from_status(status, "");
            assert!(
                matches!(err, ConnectorError::ServiceUnavailable(_)),
                "{status} should be unavailable"
            );
        }
    }

    #[test]
    fn other_client_errors_stay_http_errors() {
        let err = ConnectorError::from_status(StatusCode::BAD_REQUEST, "{\"error\":\"bad model\"}");
        assert!(matches!(err, ConnectorError::HttpError(_)));
        assert_eq!(
            err.to_string(),
            "HTTP error: 400 Bad Request {\"error\":\"bad model\"}"
        );
    }
}
