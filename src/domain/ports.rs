use crate::domain::model::{ErrorPolicy, OutputFormat};

pub trait ConfigProvider: Send + Sync {
    fn strict_division(&self) -> bool;
    fn on_error(&self) -> ErrorPolicy;
    fn output_format(&self) -> OutputFormat;
}
