mod bootstrap;
mod cli;
mod session;

use anyhow::Context;
use clap::Parser;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    bootstrap::tracing::init_tracing_subscriber(args.verbose, args.log_dir.as_deref())?;

    let config_path = args.config_path()?;
    let mut config = sl_infra::load_config(&config_path)
        .with_context(|| format!("Failed to load list config from {}", config_path.display()))?;
    args.apply_overrides(&mut config);
    info!(config = %config_path.display(), list = %config.list_name, "config loaded");

    let session = bootstrap::wiring::wire_session(config)?;
    session::run(session).await
}
