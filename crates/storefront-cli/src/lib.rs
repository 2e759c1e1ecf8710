//! CLI library for the `storefront` binary.

#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use bootstrap::{CliConfig, build_handler};
pub use commands::Commands;
pub use parser::Cli;

// Used by main.rs binary
use dotenvy as _;

#[cfg(test)]
use tempfile as _;
