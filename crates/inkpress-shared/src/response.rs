//! The flat `{success, message, ...}` response envelope.

use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
///
/// The payload is flattened next to `success`, so `ApiResponse<BlogPayload>`
/// serializes as `{"success": true, "blog": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload for responses that only carry a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<Empty> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Token {
        token: String,
    }

    #[test]
    fn test_payload_is_flattened() {
        let body = serde_json::to_value(ApiResponse::ok(Token {
            token: "abc".to_string(),
        }))
        .unwrap();
        assert_eq!(body, json!({"success": true, "token": "abc"}));
    }

    #[test]
    fn test_failure_shape() {
        let body = serde_json::to_value(ApiResponse::failure("Blog not found")).unwrap();
        assert_eq!(body, json!({"success": false, "message": "Blog not found"}));
    }
}
