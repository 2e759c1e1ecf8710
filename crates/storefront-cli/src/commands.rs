//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long, env = "STOREFRONT_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "STOREFRONT_PORT", default_value_t = 3000)]
        port: u16,

        /// Allowed CORS origin (repeatable; default allows all)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Resolve one API Gateway proxy event and print the response
    Invoke {
        /// Event file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        event: String,

        /// Request id for the invocation context
        #[arg(long = "request-id")]
        request_id: Option<String>,
    },

    /// Print the registered routes
    Routes,
}
