mod config;
mod db;
mod graphql;
mod models;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::graphql::route::graphql_filter;
use crate::graphql::schema::build_schema;

pub(crate) const LOG_TARGET: &str = "project_manager";

/// Project management GraphQL API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database url, overrides the environment
    #[arg(short, long)]
    database_url: Option<String>,
    /// Port to listen on, overrides the environment
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::Subscriber::builder().with_env_filter(filter_layer).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set the global tracing subscriber");

    // Load configuration
    let mut config = config::init()?;
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize database connection
    let db = db::init(&config).await?;
    info!(target: LOG_TARGET, "Database connection established");

    let schema = build_schema(db);
    let routes = graphql_filter(schema, config.graphiql_enabled());

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        tokio::signal::ctrl_c().await.ok();
    });
    info!(target: LOG_TARGET, %addr, "Server is running");

    server.await;

    info!(target: LOG_TARGET, "Shutting down");

    Ok(())
}
