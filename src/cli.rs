use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use sl_core::ListConfig;

/// Command-line client for a shared shopping list.
#[derive(Debug, Parser)]
#[command(name = "shoplist", version, about)]
pub struct Args {
    /// List configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the list server origin, e.g. http://127.0.0.1:5000
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Override the list name
    #[arg(long, value_name = "NAME")]
    pub list: Option<String>,

    /// Where downloaded attachments are saved
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Also write logs to `shoplist.log` in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut ListConfig) {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(list) = &self.list {
            config.list_name = list.clone();
        }
        if let Some(dir) = &self.download_dir {
            config.download_dir = Some(dir.clone());
        }
    }
}

fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("No configuration directory on this platform")?;
    Ok(base.join("shoplist").join("list.toml"))
}
