use sar_server::ServerConfig;

pub fn run(host: Option<String>, port: Option<u16>, seed: Option<u64>) -> Result<(), String> {
    sar_server::init_tracing().map_err(|e| format!("failed to set up logging: {e}"))?;

    let mut config = ServerConfig::from_env().map_err(|e| format!("{e:#}"))?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime
        .block_on(sar_server::serve(config))
        .map_err(|e| format!("server error: {e:#}"))
}
