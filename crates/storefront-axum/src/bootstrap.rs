//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter.

use std::sync::Arc;

use anyhow::Result;
use storefront_core::AppCore;
use storefront_db::CoreFactory;
use storefront_gateway::{HandlerConfig, LambdaHandler, ResolverConfig, product_handler};
use tracing::info;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// The equivalent resolver-level CORS settings for proxy events.
    pub fn to_gateway(&self) -> storefront_gateway::CorsConfig {
        match self {
            Self::AllowAll => storefront_gateway::CorsConfig::default(),
            Self::AllowOrigins(origins) => {
                storefront_gateway::CorsConfig::for_origins(origins.clone())
            }
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Service name attached to invocation logs.
    pub service_name: String,
    /// Log every event received on the invoke endpoint.
    pub log_event: bool,
    /// Path prefixes stripped from proxy events before routing.
    pub strip_prefixes: Vec<String>,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        let handler = HandlerConfig::with_defaults();
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors: CorsConfig::default(),
            service_name: handler.service_name,
            log_event: handler.log_event,
            strip_prefixes: Vec::new(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default()
            .with_strip_prefixes(self.strip_prefixes.clone())
            .with_cors(self.cors.to_gateway())
    }

    fn handler_config(&self) -> HandlerConfig {
        HandlerConfig {
            service_name: self.service_name.clone(),
            log_event: self.log_event,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Proxy event handler sharing the same core.
    pub lambda: Arc<LambdaHandler>,
}

/// Bootstrap the Axum server with all services over the seeded catalog.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    bootstrap_with_core(config, Arc::new(CoreFactory::build_app_core()))
}

/// Bootstrap around an existing core.
pub fn bootstrap_with_core(config: &ServerConfig, core: Arc<AppCore>) -> Result<AxumContext> {
    let lambda = product_handler(
        Arc::clone(&core),
        config.resolver_config(),
        config.handler_config(),
    )?;
    info!(
        service = %config.service_name,
        routes = lambda.resolver().routes().count(),
        "Storefront context ready"
    );

    Ok(AxumContext {
        core,
        lambda: Arc::new(lambda),
    })
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("storefront web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("storefront web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
    }
}
