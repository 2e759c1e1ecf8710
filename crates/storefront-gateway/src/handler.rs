//! The Lambda entry point: raw event JSON in, proxy response JSON out.

use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Instrument, info, info_span};

use crate::error::GatewayError;
use crate::event::{InvocationContext, ProxyEvent, ProxyResponse};
use crate::resolver::Resolver;

/// Service name used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "multi-endpoint-api";

/// Handler-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Name attached to every log line of an invocation.
    pub service_name: String,
    /// Log the full incoming event at info level. On by default.
    pub log_event: bool,
}

impl HandlerConfig {
    pub fn with_defaults() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_event: true,
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Wraps a [`Resolver`] with per-invocation logging context.
///
/// Each invocation runs inside an `invocation` span carrying the service
/// name, request id, function name and whether this was a cold start (the
/// first invocation this handler has served).
pub struct LambdaHandler {
    resolver: Resolver,
    config: HandlerConfig,
    cold_start: AtomicBool,
}

impl LambdaHandler {
    pub const fn new(resolver: Resolver, config: HandlerConfig) -> Self {
        Self {
            resolver,
            config,
            cold_start: AtomicBool::new(true),
        }
    }

    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub const fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Handle a raw invocation payload.
    pub async fn handle(
        &self,
        event: Value,
        context: &InvocationContext,
    ) -> Result<Value, GatewayError> {
        let span = self.span(context);
        async move {
            if self.config.log_event {
                info!(event = %event, "Incoming event");
            }
            let event: ProxyEvent =
                serde_json::from_value(event).map_err(GatewayError::MalformedEvent)?;
            let response = self.dispatch(event).await;
            serde_json::to_value(response).map_err(GatewayError::Serialization)
        }
        .instrument(span)
        .await
    }

    /// Handle an already-typed proxy event.
    pub async fn handle_event(
        &self,
        event: ProxyEvent,
        context: &InvocationContext,
    ) -> ProxyResponse {
        let span = self.span(context);
        async move {
            if self.config.log_event {
                info!(?event, "Incoming event");
            }
            self.dispatch(event).await
        }
        .instrument(span)
        .await
    }

    fn span(&self, context: &InvocationContext) -> tracing::Span {
        let cold_start = self.cold_start.swap(false, Ordering::SeqCst);
        info_span!(
            "invocation",
            service = %self.config.service_name,
            function_request_id = %context.request_id,
            function_name = %context.function_name,
            function_memory_size = context.memory_limit_mb,
            cold_start,
        )
    }

    async fn dispatch(&self, event: ProxyEvent) -> ProxyResponse {
        let method = event.http_method.clone();
        let path = event.path.clone();
        let response = self.resolver.resolve(event).await;
        info!(
            %method,
            %path,
            status = response.status_code,
            "Request resolved"
        );
        response
    }

    /// True until the first invocation has been served.
    pub fn is_cold(&self) -> bool {
        self.cold_start.load(Ordering::SeqCst)
    }
}
