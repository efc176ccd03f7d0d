use crate::core::{ConfigProvider, LegPolicy, Measurement, OutputFormat, RightTriangle};
use crate::utils::error::{HypotError, Result};

pub struct Calculator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Calculator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// 依照 leg policy 檢查輸入後計算斜邊
    pub fn measure(&self, a: i32, b: i32) -> Result<Measurement> {
        let triangle = RightTriangle::new(a, b);

        if self.config.leg_policy() == LegPolicy::Reject {
            for (leg, value) in [("a", a), ("b", b)] {
                if value < 0 {
                    tracing::warn!("Rejecting negative leg {} = {}", leg, value);
                    return Err(HypotError::NegativeLegError { leg, value });
                }
            }
        } else if triangle.has_negative_leg() {
            tracing::debug!("Negative leg absorbed by squaring: a = {}, b = {}", a, b);
        }

        let hypotenuse = triangle.hypotenuse();
        tracing::debug!(a, b, hypotenuse, "Computed hypotenuse");

        Ok(Measurement::new(triangle, hypotenuse))
    }

    pub fn render(&self, measurement: &Measurement) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(format!(
                "{:.*}",
                self.config.precision(),
                measurement.hypotenuse
            )),
            OutputFormat::Json => Ok(serde_json::to_string(measurement)?),
        }
    }

    pub fn run(&self, a: i32, b: i32) -> Result<String> {
        let measurement = self.measure(a, b)?;
        self.render(&measurement)
    }
}
