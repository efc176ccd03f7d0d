use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Leg '{leg}' is negative ({value}) and the leg policy rejects negative lengths")]
    NegativeLegError { leg: &'static str, value: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl HypotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HypotError::NegativeLegError { .. } => ErrorCategory::Input,
            HypotError::TomlParseError { .. } | HypotError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            HypotError::IoError(_) | HypotError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程式結束碼：輸入/配置錯誤為 1，系統錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HypotError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            HypotError::SerializationError(_) => "Retry with --format text".to_string(),
            HypotError::TomlParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            HypotError::InvalidConfigValueError { field, .. } => format!(
                "Fix the value of '{}' in the config file or on the command line",
                field
            ),
            HypotError::NegativeLegError { .. } => concat!(
                "Pass non-negative leg lengths, ",
                "or drop --reject-negative / set leg_policy = \"absorb\""
            )
            .to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HypotError::IoError(e) => format!("Could not read the configuration: {}", e),
            HypotError::SerializationError(e) => format!("Could not format the result: {}", e),
            HypotError::TomlParseError { message } => {
                format!("The configuration file is malformed: {}", message)
            }
            HypotError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid setting {} = '{}': {}", field, value, reason)
            }
            HypotError::NegativeLegError { leg, value } => {
                format!("Leg {} must not be negative (got {})", leg, value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HypotError>;
