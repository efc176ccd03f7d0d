use crate::core::{LegPolicy, OutputFormat};
use crate::utils::error::{HypotError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_PRECISION: usize = 6;
/// f64 最多只有 17 位有效十進位數字
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculation: Option<CalculationConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub leg_policy: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HypotError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${LEG_POLICY})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn leg_policy_setting(&self) -> Result<Option<LegPolicy>> {
        self.calculation
            .as_ref()
            .and_then(|c| c.leg_policy.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn output_format_setting(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn precision_setting(&self) -> Option<usize> {
        self.output.as_ref().and_then(|o| o.precision)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_level_setting(&self) -> Result<Option<LevelFilter>> {
        self.log_level()
            .map(|level| validation::parse_log_level("logging.level", level))
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.leg_policy_setting()?;
        self.output_format_setting()?;

        if let Some(precision) = self.precision_setting() {
            validation::validate_range("output.precision", precision, 0, MAX_PRECISION)?;
        }

        self.log_level_setting()?;

        Ok(())
    }
}
