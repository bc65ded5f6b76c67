//! 工具模块

pub mod response;
pub mod validation;

pub use validation::{normalize_optional, parse_alert_status, parse_severity};
