//! API server entry point.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard_api::config::ApiConfig;
use taskboard_api::rest::{self, AppContext};
use taskboard_core::{default_log_level, init_logging, AuthService, TokenSigner, UserDirectory};

/// Authentication API for the taskboard project tracker.
#[derive(Debug, Parser)]
#[command(name = "taskboard-api", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, env = "TASKBOARD_CONFIG")]
    config: Option<PathBuf>,
    /// Listen address override, e.g. 127.0.0.1:3000.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ApiConfig::load(args.config.as_deref())?;

    let level = config
        .logging
        .level
        .as_deref()
        .unwrap_or_else(|| default_log_level());
    init_logging(level, config.logging.dir.as_deref()).map_err(anyhow::Error::msg)?;

    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = bind.parse()?;

    let ctx = Arc::new(AppContext {
        auth: AuthService::new(
            UserDirectory::with_mock_roster(),
            TokenSigner::new(config.auth.clone()),
        ),
    });

    info!(
        "event=api_start module=main status=ok version={}",
        taskboard_core::core_version()
    );
    rest::serve(addr, ctx).await
}
