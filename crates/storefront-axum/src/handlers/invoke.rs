//! Local Lambda invoke endpoint.
//!
//! Accepts an API Gateway proxy event and returns the proxy response the
//! Lambda deployment would produce.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::Value;
use storefront_gateway::InvocationContext;
use uuid::Uuid;

use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying the request id when invoked through a Lambda emulator.
const REQUEST_ID_HEADER: &str = "lambda-runtime-aws-request-id";

/// Run one proxy event through the resolver.
///
/// The body is read raw: emulator clients often send no content type.
pub async fn invoke(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, HttpError> {
    let event: Value = serde_json::from_slice(&body)
        .map_err(|e| HttpError::BadRequest(format!("Invalid invocation payload: {e}")))?;

    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    let context = InvocationContext::local(request_id);
    Ok(Json(state.lambda.handle(event, &context).await?))
}
