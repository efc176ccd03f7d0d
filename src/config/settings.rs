use crate::config::toml_config::{TomlConfig, DEFAULT_PRECISION, MAX_PRECISION};
use crate::core::{ConfigProvider, LegPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use tracing::level_filters::LevelFilter;

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// Effective configuration: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub leg_policy: LegPolicy,
    pub output_format: OutputFormat,
    pub precision: usize,
    pub log_level: Option<LevelFilter>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leg_policy: LegPolicy::Absorb,
            output_format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let defaults = Self::default();
        Ok(Self {
            leg_policy: config.leg_policy_setting()?.unwrap_or(defaults.leg_policy),
            output_format: config
                .output_format_setting()?
                .unwrap_or(defaults.output_format),
            precision: config.precision_setting().unwrap_or(defaults.precision),
            log_level: config.log_level_setting()?,
        })
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        let mut settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Self::default(),
        };

        // 命令列參數覆蓋設定檔
        if cli.reject_negative {
            settings.leg_policy = LegPolicy::Reject;
        }
        if let Some(format) = cli.format {
            settings.output_format = format;
        }
        if let Some(precision) = cli.precision {
            settings.precision = precision;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("output.precision", self.precision, 0, MAX_PRECISION)
    }
}

impl ConfigProvider for Settings {
    fn leg_policy(&self) -> LegPolicy {
        self.leg_policy
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn precision(&self) -> usize {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.leg_policy, LegPolicy::Absorb);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert_eq!(settings.precision, 6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        let settings = Settings::from_toml(&config).unwrap();

        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.leg_policy, LegPolicy::Absorb);
        assert_eq!(settings.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(Settings::from_toml(&config).is_err());

        let config = TomlConfig::from_toml_str("[calculation]\nleg_policy = \"rejct\"\n").unwrap();
        assert!(Settings::from_toml(&config).is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(Settings::from_toml(&config).is_err());
    }

    #[test]
    fn test_from_toml_reads_log_level() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"trace\"\n").unwrap();
        let settings = Settings::from_toml(&config).unwrap();

        assert_eq!(settings.log_level, Some(LevelFilter::TRACE));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        let toml_content = r#"
[calculation]
leg_policy = "absorb"

[output]
format = "json"
precision = 3
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "hypotenuse",
            "3",
            "4",
            "--config",
            path.as_str(),
            "--precision",
            "1",
            "--reject-negative",
        ])
        .unwrap();
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.leg_policy, LegPolicy::Reject);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.precision, 1);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_precision_out_of_range() {
        use clap::Parser;

        let cli = CliConfig::try_parse_from(["hypotenuse", "3", "4", "--precision", "99"]).unwrap();
        assert!(Settings::from_cli(&cli).is_err());
    }
}
