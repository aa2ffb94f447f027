//! Tracing configuration for shoplist
//!
//! The interactive session owns stdout, so log output goes to stderr and,
//! when a log directory is given, to `shoplist.log` inside it.
//!
//! `RUST_LOG` replaces the built-in directives entirely when set.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const WORKSPACE_TARGETS: [&str; 5] = ["shoplist", "sl_core", "sl_app", "sl_infra", "sl_platform"];

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **0**: warnings only, so the prompt stays readable
/// - **1**: info for workspace crates
/// - **2**: debug for workspace crates, info for dependencies
/// - **3+**: trace for workspace crates, debug for dependencies
pub fn build_filter_directives(verbosity: u8) -> Vec<String> {
    let (own, deps) = match verbosity {
        0 => ("warn", "warn"),
        1 => ("info", "warn"),
        2 => ("debug", "info"),
        _ => ("trace", "debug"),
    };

    let mut directives = vec![deps.to_string()];
    directives.extend(WORKSPACE_TARGETS.iter().map(|t| format!("{t}={own}")));
    // Connection pool chatter is never useful here.
    directives.push("hyper_util=warn".to_string());
    directives
}

/// Initialize the global tracing subscriber and the `log` bridge.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber or logger is already registered, or the log
/// directory cannot be created.
pub fn init_tracing_subscriber(verbosity: u8, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(verbosity).join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_writer(std::io::stderr);

    let file_layer = log_dir
        .map(build_file_writer)
        .transpose()?
        .map(|writer| {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });

    let subscriber = registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;
    tracing_log::LogTracer::init().context("Failed to bridge log records into tracing")?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "shoplist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
