use log::info;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use waiver_core::foundation::WaiverError;
use waiver_service::archive::config::SharePointConfig;
use waiver_service::{run_server, AppState, SharePointArchive};

fn init_logging(level: &str) -> Result<(), WaiverError> {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .map_err(|err| WaiverError::Message(err.to_string()))?;
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_thread_ids(true).try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), WaiverError> {
    let level = env::var("WAIVER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level)?;

    let addr: SocketAddr = env::var("WAIVER_BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .map_err(|err| WaiverError::Config(format!("invalid WAIVER_BIND_ADDR: {}", err)))?;

    let config = SharePointConfig::from_env();
    info!(
        "starting waiver service addr={} archival_configured={} excel_path={}",
        addr,
        config.is_configured(),
        config.excel_file_path
    );

    let state = AppState { archive: Arc::new(SharePointArchive::new(config)) };
    run_server(addr, state).await
}
