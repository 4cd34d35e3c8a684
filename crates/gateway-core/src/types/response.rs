//! The wire response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Standard response envelope serialized as the body of every endpoint,
/// success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code, mirrored into the body.
    pub status_code: u16,
    /// Overall success flag.
    pub status: bool,
    /// Request correlation identifier.
    pub request_id: String,
    /// Human-readable message.
    pub message: String,
    /// Session token, present on issuance responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Permission set granted with the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Structured error, present on failure responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Endpoint-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Structured error carried inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable code, component-and-step prefixed (e.g. `AH-SIN-7`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Start a new envelope for the given request.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            status: false,
            request_id: request_id.into(),
            message: String::new(),
            token: None,
            permissions: None,
            error: None,
            payload: None,
        }
    }

    /// Set the HTTP status code.
    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    /// Set the success flag.
    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Set the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a session token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach the granted permission set.
    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Attach a structured error.
    pub fn error(mut self, error: ApiError) -> Self {
        self.error = Some(error);
        self
    }

    /// Attach an endpoint-specific payload.
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_skipped() {
        let envelope = ApiResponse::new("req-1")
            .status_code(403)
            .error(ApiError {
                code: "AH-SN-3".to_string(),
                message: "Session role is inactive".to_string(),
                detail: None,
            });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status_code"], 403);
        assert_eq!(json["status"], false);
        assert_eq!(json["error"]["code"], "AH-SN-3");
        assert!(json.get("token").is_none());
        assert!(json.get("permissions").is_none());
        assert!(json.get("payload").is_none());
        assert!(json["error"].get("detail").is_none());
    }

    #[test]
    fn test_success_envelope() {
        let envelope = ApiResponse::new("req-2")
            .status(true)
            .message("success")
            .token("abc")
            .permissions(vec!["role_read".to_string()]);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["token"], "abc");
        assert_eq!(json["permissions"][0], "role_read");
        assert!(json.get("error").is_none());
    }
}
