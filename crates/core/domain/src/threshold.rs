//! 阈值规则与告警级别。

use crate::error::DomainError;
use crate::identity::Entity;
use crate::validation::{finite, required_text};
use std::fmt;
use std::str::FromStr;

/// 告警级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            other => Err(DomainError::validation(format!("unknown severity: {other}"))),
        }
    }
}

/// 阈值：作用于 (设备, 传感器类型)，上下限可选。
///
/// 创建后不可修改，需要调整时新建一条。
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    id: String,
    device_id: String,
    sensor_type: String,
    min_value: Option<f64>,
    max_value: Option<f64>,
    severity: Severity,
}

impl Threshold {
    pub fn new(
        id: impl Into<String>,
        device_id: &str,
        sensor_type: &str,
        min_value: Option<f64>,
        max_value: Option<f64>,
        severity: Option<Severity>,
    ) -> Result<Self, DomainError> {
        let device_id = required_text(device_id, "deviceId")?;
        let sensor_type = required_text(sensor_type, "sensorType")?;
        let min_value = min_value.map(|v| finite(v, "minValue")).transpose()?;
        let max_value = max_value.map(|v| finite(v, "maxValue")).transpose()?;
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if min > max {
                return Err(DomainError::validation(format!(
                    "minValue {min} greater than maxValue {max}"
                )));
            }
        }
        Ok(Self {
            id: id.into(),
            device_id,
            sensor_type,
            min_value,
            max_value,
            severity: severity.unwrap_or_default(),
        })
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// 是否作用于指定设备与传感器类型（类型忽略大小写）。
    pub fn applies_to(&self, device_id: &str, sensor_type: &str) -> bool {
        self.device_id == device_id && self.sensor_type.eq_ignore_ascii_case(sensor_type.trim())
    }

    /// 严格越界才算突破，等于边界不算。
    pub fn is_breached(&self, value: f64) -> bool {
        if let Some(min) = self.min_value {
            if value < min {
                return true;
            }
        }
        if let Some(max) = self.max_value {
            if value > max {
                return true;
            }
        }
        false
    }
}

impl Entity for Threshold {
    fn id(&self) -> &str {
        &self.id
    }
}
