//! Handler return values.

use serde_json::Value;

use crate::error::ServiceError;
use crate::event::ProxyResponse;

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// What a route handler returns on success.
///
/// A JSON body is serialized compactly with `Content-Type: application/json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    status: u16,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl Reply {
    /// 200 with a JSON body.
    pub fn json(body: Value) -> Self {
        Self::with_status(200, body)
    }

    /// 201 with a JSON body.
    pub fn created(body: Value) -> Self {
        Self::with_status(201, body)
    }

    /// Any status with a JSON body.
    pub fn with_status(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// 204 with no body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
            headers: Vec::new(),
        }
    }

    /// Add a response header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub(crate) fn into_response(self) -> ProxyResponse {
        let mut response = ProxyResponse {
            status_code: self.status,
            ..ProxyResponse::default()
        };
        if let Some(body) = self.body {
            response.append_header(CONTENT_TYPE, APPLICATION_JSON);
            response.body = Some(body.to_string());
        }
        for (name, value) in self.headers {
            response.append_header(name, value);
        }
        response
    }
}

impl From<Value> for Reply {
    fn from(body: Value) -> Self {
        Self::json(body)
    }
}

impl From<ServiceError> for ProxyResponse {
    fn from(err: ServiceError) -> Self {
        Reply::with_status(err.status_code(), err.to_json()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_reply_is_compact() {
        let response = Reply::json(json!({"a": 1, "b": [true, null]})).into_response();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.as_deref(), Some(r#"{"a":1,"b":[true,null]}"#));
        assert_eq!(response.header("Content-Type"), Some(APPLICATION_JSON));
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn test_no_content_has_no_body_or_content_type() {
        let response = Reply::no_content().into_response();
        assert_eq!(response.status_code, 204);
        assert_eq!(response.body, None);
        assert_eq!(response.header("Content-Type"), None);
    }

    #[test]
    fn test_extra_headers_are_kept() {
        let response = Reply::created(json!({}))
            .header("Location", "/products/prod_1")
            .into_response();
        assert_eq!(response.status_code, 201);
        assert_eq!(response.header("location"), Some("/products/prod_1"));
    }

    #[test]
    fn test_service_error_renders_status_and_message() {
        let response: ProxyResponse = ServiceError::BadRequest("nope".to_string()).into();
        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.json_body(),
            Some(json!({"statusCode": 400, "message": "nope"}))
        );
    }
}
