//! HTTP server command
//!
//! Opens the database, creates missing tables, and serves the selected
//! catalog services until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use catalog_server::db::pool::DEFAULT_DATABASE_URL;
use catalog_server::{create_pool_with_options, run_server, ServerConfig, ServiceSelection};

/// Services that can be mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    /// Verb-prefixed product endpoints (/add_products/, /get_products/, ...)
    Products,
    /// Resource endpoints under /items
    Items,
    /// Both services
    All,
}

impl From<ServiceArg> for ServiceSelection {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Products => ServiceSelection::Products,
            ServiceArg::Items => ServiceSelection::Items,
            ServiceArg::All => ServiceSelection::All,
        }
    }
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database connection string
    #[arg(long, env = "CATALOG_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Which services to mount
    #[arg(long, value_enum, default_value_t = ServiceArg::All)]
    pub service: ServiceArg,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database_url = %args.database_url, "Starting catalog server on {}", args.bind);

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", args.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        services: args.service.into(),
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
