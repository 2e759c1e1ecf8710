//! CLI bootstrap - the composition root for one-shot commands.

use std::sync::Arc;

use anyhow::Result;
use storefront_axum::ServerConfig;
use storefront_db::CoreFactory;
use storefront_gateway::{HandlerConfig, LambdaHandler, ResolverConfig, product_handler};

use crate::parser::Cli;

/// Settings shared by every subcommand, taken from global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub service_name: String,
    pub log_event: bool,
    pub strip_prefixes: Vec<String>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            service_name: cli.service_name.clone(),
            log_event: cli.log_event,
            strip_prefixes: cli.strip_prefixes.clone(),
        }
    }

    /// Server settings for `serve`.
    pub fn server_config(&self, host: String, port: u16, allow_origins: Vec<String>) -> ServerConfig {
        let mut config = ServerConfig {
            host,
            port,
            service_name: self.service_name.clone(),
            log_event: self.log_event,
            strip_prefixes: self.strip_prefixes.clone(),
            ..ServerConfig::with_defaults()
        };
        if !allow_origins.is_empty() {
            config = config.with_allowed_origins(allow_origins);
        }
        config
    }
}

/// Build the product Lambda handler over a freshly seeded catalog.
pub fn build_handler(config: &CliConfig) -> Result<LambdaHandler> {
    let core = Arc::new(CoreFactory::build_app_core());
    let handler = product_handler(
        core,
        ResolverConfig::default().with_strip_prefixes(config.strip_prefixes.clone()),
        HandlerConfig {
            service_name: config.service_name.clone(),
            log_event: config.log_event,
        },
    )?;
    Ok(handler)
}
