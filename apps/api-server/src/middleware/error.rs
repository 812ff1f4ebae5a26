//! Error handling - every failure becomes a flat `{success: false, message}` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use inkpress_core::ports::AuthError;
use inkpress_core::{DomainError, ErrorKind};
use inkpress_shared::ApiResponse;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The request could not be read (bad form data, oversized upload).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(err) => err.kind(),
            AppError::BadRequest(_) => ErrorKind::Validation,
        }
    }

    /// Message shown to the client.
    fn client_message(&self) -> String {
        match self {
            AppError::Domain(err) => match err.kind() {
                ErrorKind::Internal => "Internal server error".to_string(),
                _ => err.to_string(),
            },
            AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl ResponseError for AppError {
    /// Failures are reported in the body; the status stays 200.
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        match self.kind() {
            ErrorKind::Upstream | ErrorKind::Internal => {
                tracing::error!(kind = ?self.kind(), error = %self, "Request failed");
            }
            kind => {
                tracing::debug!(kind = ?kind, error = %self, "Request rejected");
            }
        }

        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.client_message()))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Domain(err.into())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> serde_json::Value {
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_message_is_passed_through() {
        let body = body_of(DomainError::validation("Missing required fields").into()).await;
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Missing required fields"})
        );
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let body = body_of(DomainError::Internal("pool poisoned".to_string()).into()).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_upstream_text_is_reported() {
        let body = body_of(DomainError::Upstream("quota exceeded".to_string()).into()).await;
        assert_eq!(body["message"], "quota exceeded");
    }
}
