pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-storefront")]
#[command(about = "Runs a scripted shopping session against a storefront catalog")]
pub struct CliConfig {
    /// Path to the TOML storefront configuration
    #[arg(short, long, default_value = "storefront.toml")]
    pub config: String,

    /// Cart snapshot file; restored before the session and saved after it
    #[arg(long)]
    pub snapshot: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Validate the configuration and print the catalog without running the script
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        if let Some(snapshot) = &self.snapshot {
            validate_path("snapshot", snapshot)?;
        }
        Ok(())
    }
}
