//! 输入验证辅助函数
//!
//! 实体字段的规则（非空、min ≤ max 等）由领域模型负责，
//! 这里只处理 HTTP 层的文本到枚举的解析与可选字段清理。

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::{AlertStatus, Severity};

/// 可选字段：去除首尾空格，空串视为未提供
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 解析告警级别（忽略大小写），未提供时返回 None
pub fn parse_severity(value: Option<String>) -> Result<Option<Severity>, Response> {
    match normalize_optional(value) {
        Some(value) => value
            .parse::<Severity>()
            .map(Some)
            .map_err(|err| bad_request_error(err.to_string())),
        None => Ok(None),
    }
}

/// 解析告警状态过滤条件
pub fn parse_alert_status(value: Option<String>) -> Result<Option<AlertStatus>, Response> {
    match normalize_optional(value) {
        Some(value) => AlertStatus::parse(&value)
            .map(Some)
            .map_err(|err| bad_request_error(err.to_string())),
        None => Ok(None),
    }
}
