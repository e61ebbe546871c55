use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    UpstreamAuthorization(String),
    MissingState,
    StateMismatch,
    TokenExchange { status: u16, body: String },
    CredentialsNotFound,
    JsonError(serde_json::Error),
    HttpError(reqwest::Error),
    ValidationError(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::UpstreamAuthorization(msg) => write!(f, "Authorization denied by HubSpot: {}", msg),
            AppError::MissingState => write!(f, "State missing"),
            AppError::StateMismatch => write!(f, "State does not match."),
            AppError::TokenExchange { status, body } => {
                write!(f, "Failed to get token ({}): {}", status, body)
            }
            AppError::CredentialsNotFound => write!(f, "No credentials found."),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
            AppError::HttpError(err) => write!(f, "HTTP error: {}", err),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::UpstreamAuthorization(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MissingState => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::StateMismatch => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::TokenExchange { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::CredentialsNotFound => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::JsonError(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::HttpError(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = json!({
            "error": error_message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_errors_are_client_errors() {
        for err in [AppError::MissingState, AppError::StateMismatch, AppError::CredentialsNotFound] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_token_exchange_error_carries_upstream_details() {
        let err = AppError::TokenExchange {
            status: 400,
            body: "{\"message\":\"bad code\"}".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("400"));
        assert!(rendered.contains("bad code"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = AppError::ConfigError("HUBSPOT_CLIENT_ID não configurado".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
