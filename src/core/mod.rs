pub mod calculator;
pub mod hypotenuse;

pub use crate::domain::model::{LegPolicy, Measurement, OutputFormat, RightTriangle};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
