//! Standalone HTTP server for the rescue simulation.

use anyhow::Result;
use sar_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    sar_server::init_tracing()?;
    let config = ServerConfig::from_env()?;
    sar_server::serve(config).await
}
