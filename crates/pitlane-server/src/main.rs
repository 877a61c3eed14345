//! Pitlane server binary

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pitlane_application::RobotService;
use pitlane_domain::Robot;
use pitlane_infrastructure::config::ConfigLoader;
use pitlane_infrastructure::logging::init_logging;
use pitlane_infrastructure::store::InMemoryCollection;
use tracing::info;

/// Robot lap-time CRUD service
#[derive(Parser)]
#[command(name = "pitlane", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging).context("failed to initialize logging")?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        auth_enabled = config.auth.enabled,
        "starting pitlane"
    );

    let repository = Arc::new(InMemoryCollection::<Robot>::new());
    let service = Arc::new(RobotService::new(repository));

    pitlane_server::build_rocket(&config, service)
        .launch()
        .await
        .context("rocket launch failed")?;

    Ok(())
}
