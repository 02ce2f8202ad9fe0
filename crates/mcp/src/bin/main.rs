//! Binary entry point for the meraki-mcp MCP server.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use meraki_api::{ClientConfig, DEFAULT_BASE_URL, MerakiClient};
use meraki_mcp::{MerakiServer, ServerConfig};
use rmcp::ServiceExt;

/// Meraki MCP Server: exposes the Meraki Dashboard API over stdio.
#[derive(Parser)]
#[command(name = "meraki-mcp", version, about)]
struct Cli {
    /// Dashboard API key.
    #[arg(long, env = "MERAKI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Dashboard API base URL.
    #[arg(long, env = "MERAKI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Maximum devices or clients listed by a single tool call.
    #[arg(long, default_value_t = ServerConfig::DEFAULT_MAX_LISTED_ITEMS)]
    max_items: usize,

    /// Default client lookback window in seconds.
    #[arg(long, default_value_t = ServerConfig::DEFAULT_TIMESPAN_SECS)]
    timespan: u32,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let client_config = ClientConfig::new(cli.api_key.into())
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = MerakiClient::new(&client_config).expect("failed to build Meraki client");

    let config = ServerConfig {
        max_listed_items: cli.max_items,
        default_timespan_secs: cli.timespan,
    };
    let server = MerakiServer::new(Arc::new(client), config);
    let transport = rmcp::transport::stdio();
    server
        .serve(transport)
        .await
        .expect("failed to start server")
        .waiting()
        .await
        .expect("server error");
}
