pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{calculator::Calculator, hypotenuse::hypotenuse};
pub use domain::model::{LegPolicy, Measurement, OutputFormat, RightTriangle};
pub use utils::error::{HypotError, Result};
