pub mod settings;
pub mod toml_config;

pub use settings::Settings;

#[cfg(feature = "cli")]
use crate::core::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::{self, Validate}};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hypotenuse")]
#[command(about = "Compute the hypotenuse of a right triangle from its two legs")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Length of the first leg
    pub a: i32,

    /// Length of the second leg
    pub b: i32,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in text output (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Refuse negative leg lengths instead of absorbing the sign
    #[arg(long)]
    pub reject_negative: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
