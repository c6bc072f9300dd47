use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const MISSING_BODY_MESSAGE: &str = "Missing request body";
pub const INVALID_DATA_MESSAGE: &str = "Invalid request data";
pub const SERVER_ERROR_MESSAGE: &str = "some error happened";
pub const HELLO_MESSAGE: &str = "hello world";

/// The part of an API Gateway proxy event the handlers read. Every other
/// gateway field is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    message: &'a str,
}

impl ApiResponse {
    pub fn json<T: Serialize + ?Sized>(status_code: u16, value: &T) -> Result<Self> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(value)?,
        })
    }

    pub fn message(status_code: u16, message: &str) -> Self {
        // Serializing a single string field cannot fail.
        let body = serde_json::to_string(&Message { message })
            .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", message));
        Self { status_code, body }
    }

    pub fn server_error() -> Self {
        Self::message(500, SERVER_ERROR_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_is_json() {
        let response = ApiResponse::message(400, MISSING_BODY_MESSAGE);
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"message":"Missing request body"}"#);
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_uses_gateway_field_names() {
        let response = ApiResponse::message(200, HELLO_MESSAGE);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], r#"{"message":"hello world"}"#);
    }

    #[test]
    fn test_request_ignores_other_gateway_fields() {
        let event = serde_json::json!({
            "resource": "/employees",
            "path": "/employees",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "isBase64Encoded": false,
            "body": "{\"name\":\"Alice\"}"
        });
        let request: ApiRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.body.as_deref(), Some("{\"name\":\"Alice\"}"));

        let no_body: ApiRequest =
            serde_json::from_value(serde_json::json!({"httpMethod": "GET", "body": null})).unwrap();
        assert!(no_body.body.is_none());
    }
}
