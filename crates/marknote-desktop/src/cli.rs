//! Command-line overrides

use std::path::PathBuf;

use clap::Parser;
use marknote_core::config::AppConfig;

/// Markdown notes with account registration
#[derive(Debug, Parser)]
#[command(name = "marknote-desktop", version, about)]
pub struct Args {
    /// Directory holding notes.json (overrides MARKNOTE_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Registration endpoint (overrides MARKNOTE_REGISTER_URL)
    #[arg(long, value_name = "URL")]
    pub register_url: Option<String>,
}

impl Args {
    /// Layer the flags over `base`, usually the environment configuration
    pub fn resolve_config(&self, mut config: AppConfig) -> marknote_core::Result<AppConfig> {
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(url) = &self.register_url {
            config = config.with_register_endpoint(url)?;
        }
        Ok(config)
    }
}
