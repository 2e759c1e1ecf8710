//! Proxy event routing.
//!
//! A [`Resolver`] holds a table of `(method, pattern, handler)` routes and
//! turns one [`ProxyEvent`] into one [`ProxyResponse`]. Handler failures
//! never escape: they are rendered as `{"statusCode", "message"}` bodies.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::cors::CorsConfig;
use crate::error::{RouteError, ServiceError};
use crate::event::{ProxyEvent, ProxyResponse};
use crate::reply::Reply;
use crate::request::GatewayRequest;
use crate::route::{RoutePattern, strip_prefix};

type Handler =
    Arc<dyn Fn(GatewayRequest) -> BoxFuture<'static, Result<Reply, ServiceError>> + Send + Sync>;

/// Resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Path prefixes removed before matching (e.g. a stage name like `/prod`).
    pub strip_prefixes: Vec<String>,
    /// CORS headers to attach to every response; `None` disables CORS.
    pub cors: Option<CorsConfig>,
}

impl ResolverConfig {
    #[must_use]
    pub fn with_strip_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.strip_prefixes = prefixes;
        self
    }

    #[must_use]
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = Some(cors);
        self
    }
}

struct Route {
    method: String,
    pattern: RoutePattern,
    handler: Handler,
}

/// Routes proxy events to registered handlers.
pub struct Resolver {
    config: ResolverConfig,
    routes: Vec<Route>,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
        }
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Register a handler for `method` and `pattern`.
    pub fn route<F, Fut>(
        &mut self,
        method: &str,
        pattern: &str,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(GatewayRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ServiceError>> + Send + 'static,
    {
        let method = method.to_ascii_uppercase();
        let pattern = RoutePattern::parse(pattern)?;
        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.pattern == pattern)
        {
            return Err(RouteError::Duplicate {
                method,
                pattern: pattern.as_str().to_string(),
            });
        }

        self.routes.push(Route {
            method,
            pattern,
            handler: Arc::new(move |req| handler(req).boxed()),
        });
        Ok(self)
    }

    pub fn get<F, Fut>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(GatewayRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ServiceError>> + Send + 'static,
    {
        self.route("GET", pattern, handler)
    }

    pub fn post<F, Fut>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(GatewayRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ServiceError>> + Send + 'static,
    {
        self.route("POST", pattern, handler)
    }

    pub fn put<F, Fut>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(GatewayRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ServiceError>> + Send + 'static,
    {
        self.route("PUT", pattern, handler)
    }

    pub fn delete<F, Fut>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(GatewayRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ServiceError>> + Send + 'static,
    {
        self.route("DELETE", pattern, handler)
    }

    /// Registered routes as `(method, pattern)` in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|r| (r.method.as_str(), r.pattern.as_str()))
    }

    /// Resolve one event into a response.
    pub async fn resolve(&self, event: ProxyEvent) -> ProxyResponse {
        let method = event.http_method.to_ascii_uppercase();
        let path = strip_prefix(&event.path, &self.config.strip_prefixes).to_string();
        let origin = event.header("Origin").map(ToString::to_string);

        let mut response = self.dispatch(event, method, path).await;

        if let Some(cors) = &self.config.cors {
            for (name, value) in cors.headers(origin.as_deref()) {
                response.append_header(name, value);
            }
        }
        response
    }

    async fn dispatch(&self, event: ProxyEvent, method: String, path: String) -> ProxyResponse {
        // Static routes shadow dynamic ones; registration order breaks ties.
        let ordered = self
            .routes
            .iter()
            .filter(|r| r.pattern.is_static())
            .chain(self.routes.iter().filter(|r| !r.pattern.is_static()));

        let mut allowed_methods: Vec<&str> = Vec::new();
        let mut matched = None;
        for route in ordered {
            let Some(params) = route.pattern.matches(&path) else {
                continue;
            };
            if route.method == method {
                matched = Some((route, params));
                break;
            }
            if !allowed_methods.contains(&route.method.as_str()) {
                allowed_methods.push(route.method.as_str());
            }
        }

        let Some((route, params)) = matched else {
            if method == "OPTIONS" && self.config.cors.is_some() && !allowed_methods.is_empty() {
                allowed_methods.push("OPTIONS");
                allowed_methods.sort_unstable();
                debug!(%path, "Answering CORS preflight");
                return Reply::no_content()
                    .header("Access-Control-Allow-Methods", allowed_methods.join(","))
                    .into_response();
            }
            debug!(%method, %path, "No route matched");
            return ServiceError::NotFound("Not found".to_string()).into();
        };

        let body = match decode_body(&event) {
            Ok(body) => body,
            Err(err) => return err.into(),
        };
        let request = GatewayRequest::new(Arc::new(event), method, path, params, body);

        match (route.handler)(request).await {
            Ok(reply) => reply.into_response(),
            Err(err) => {
                if err.status_code() >= 500 {
                    error!(status = err.status_code(), error = %err, "Route handler failed");
                } else {
                    warn!(status = err.status_code(), error = %err, "Route handler rejected request");
                }
                err.into()
            }
        }
    }
}

fn decode_body(event: &ProxyEvent) -> Result<Option<Vec<u8>>, ServiceError> {
    match &event.body {
        None => Ok(None),
        Some(body) if event.is_base64_encoded => STANDARD
            .decode(body)
            .map(Some)
            .map_err(|e| ServiceError::BadRequest(format!("Invalid base64 body: {e}"))),
        Some(body) => Ok(Some(body.as_bytes().to_vec())),
    }
}
