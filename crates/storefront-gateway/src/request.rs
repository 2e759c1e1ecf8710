//! The request view handed to route handlers.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::event::ProxyEvent;

/// Message carried by the `BadRequest` for a missing or blank body.
pub const EMPTY_BODY_MESSAGE: &str = "request body is empty";

/// A routed request: the source event plus what routing extracted.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    event: Arc<ProxyEvent>,
    method: String,
    path: String,
    path_params: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl GatewayRequest {
    pub(crate) fn new(
        event: Arc<ProxyEvent>,
        method: String,
        path: String,
        path_params: HashMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Self {
        Self {
            event,
            method,
            path,
            path_params,
            body,
        }
    }

    /// The raw proxy event.
    pub fn event(&self) -> &ProxyEvent {
        &self.event
    }

    /// Upper-cased HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path after prefix stripping.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.event.header(name)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.event.query_param(name)
    }

    /// A `<name>` segment captured by the matched route.
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Body bytes, already base64-decoded when the event said so.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Parse the body as JSON.
    ///
    /// A missing or blank body, or anything that is not valid JSON, is a
    /// `BadRequest`.
    pub fn json_body(&self) -> Result<Value, ServiceError> {
        match self.body() {
            Some(bytes) if !bytes.trim_ascii().is_empty() => serde_json::from_slice(bytes)
                .map_err(|e| ServiceError::BadRequest(format!("Invalid JSON body: {e}"))),
            _ => Err(ServiceError::BadRequest(EMPTY_BODY_MESSAGE.to_string())),
        }
    }
}
