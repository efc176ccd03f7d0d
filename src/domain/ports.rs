use crate::domain::model::{LegPolicy, OutputFormat};

pub trait ConfigProvider: Send + Sync {
    fn leg_policy(&self) -> LegPolicy;
    fn output_format(&self) -> OutputFormat;
    fn precision(&self) -> usize;
}
