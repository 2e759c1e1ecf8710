//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};

use storefront_cli::{Cli, CliConfig, Commands, build_handler, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => {
            handlers::serve::execute(config.server_config(host, port, allow_origins)).await?;
        }
        Commands::Invoke { event, request_id } => {
            let handler = build_handler(&config)?;
            handlers::invoke::execute(&handler, &event, request_id).await?;
        }
        Commands::Routes => {
            let handler = build_handler(&config)?;
            handlers::routes::execute(handler.resolver());
        }
    }

    Ok(())
}
