use crate::utils::error::{HypotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A right triangle described by its two legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightTriangle {
    pub a: i32,
    pub b: i32,
}

impl RightTriangle {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub fn hypotenuse(&self) -> f64 {
        crate::core::hypotenuse::hypotenuse(self.a, self.b)
    }

    pub fn has_negative_leg(&self) -> bool {
        self.a < 0 || self.b < 0
    }
}

/// 一次計算的結果，可序列化為 JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub a: i32,
    pub b: i32,
    pub hypotenuse: f64,
}

impl Measurement {
    pub fn new(triangle: RightTriangle, hypotenuse: f64) -> Self {
        Self {
            a: triangle.a,
            b: triangle.b,
            hypotenuse,
        }
    }
}

/// How negative leg values are treated.
///
/// `Absorb` keeps the plain arithmetic behaviour: squaring drops the sign.
/// `Reject` refuses negative lengths before computing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegPolicy {
    #[default]
    Absorb,
    Reject,
}

impl FromStr for LegPolicy {
    type Err = HypotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absorb" => Ok(LegPolicy::Absorb),
            "reject" => Ok(LegPolicy::Reject),
            _ => Err(HypotError::InvalidConfigValueError {
                field: "calculation.leg_policy".to_string(),
                value: s.to_string(),
                reason: "Valid policies: absorb, reject".to_string(),
            }),
        }
    }
}

impl fmt::Display for LegPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegPolicy::Absorb => write!(f, "absorb"),
            LegPolicy::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HypotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(HypotError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
