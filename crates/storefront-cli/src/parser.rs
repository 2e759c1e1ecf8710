//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use storefront_gateway::DEFAULT_SERVICE_NAME;

use crate::commands::Commands;

/// Command-line interface for the storefront products API.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Serve and exercise the storefront products API")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,

    /// Service name attached to invocation logs
    #[arg(
        long = "service-name",
        env = "POWERTOOLS_SERVICE_NAME",
        default_value = DEFAULT_SERVICE_NAME,
        global = true
    )]
    pub service_name: String,

    /// Log every incoming proxy event (`--log-event false` to disable)
    #[arg(
        long = "log-event",
        env = "POWERTOOLS_LOGGER_LOG_EVENT",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_event: bool,

    /// Path prefix to strip from proxy events before routing (repeatable)
    #[arg(long = "strip-prefix", global = true)]
    pub strip_prefixes: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "storefront",
            "--verbose",
            "--service-name",
            "catalog",
            "--strip-prefix",
            "/prod",
            "routes",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.service_name, "catalog");
        assert_eq!(cli.strip_prefixes, vec!["/prod".to_string()]);
        assert!(matches!(cli.command, Some(Commands::Routes)));
    }

    #[test]
    fn test_log_event_defaults_on() {
        let cli = Cli::parse_from(["storefront", "routes"]);
        assert!(cli.log_event);

        let cli = Cli::parse_from(["storefront", "--log-event", "false", "routes"]);
        assert!(!cli.log_event);

        let cli = Cli::parse_from(["storefront", "routes", "--log-event", "no"]);
        assert!(!cli.log_event);
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from([
            "storefront",
            "serve",
            "--port",
            "8081",
            "--allow-origin",
            "https://shop.example",
        ]);
        match cli.command {
            Some(Commands::Serve {
                port,
                allow_origins,
                ..
            }) => {
                assert_eq!(port, 8081);
                assert_eq!(allow_origins, vec!["https://shop.example".to_string()]);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_invoke_defaults_to_stdin() {
        let cli = Cli::parse_from(["storefront", "invoke"]);
        match cli.command {
            Some(Commands::Invoke { event, request_id }) => {
                assert_eq!(event, "-");
                assert_eq!(request_id, None);
            }
            _ => panic!("expected invoke command"),
        }
    }
}
