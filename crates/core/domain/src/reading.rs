//! 传感器读数。

use crate::error::DomainError;
use crate::identity::Entity;
use crate::validation::{finite, required_text};

/// 单个传感器的一次带时间戳数值测量，创建后不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    id: String,
    device_id: String,
    sensor_id: String,
    ts_ms: i64,
    value: f64,
}

impl Reading {
    pub fn new(
        id: impl Into<String>,
        device_id: &str,
        sensor_id: &str,
        ts_ms: i64,
        value: f64,
    ) -> Result<Self, DomainError> {
        let device_id = required_text(device_id, "deviceId")?;
        let sensor_id = required_text(sensor_id, "sensorId")?;
        let value = finite(value, "value")?;
        Ok(Self {
            id: id.into(),
            device_id,
            sensor_id,
            ts_ms,
            value,
        })
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn ts_ms(&self) -> i64 {
        self.ts_ms
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Entity for Reading {
    fn id(&self) -> &str {
        &self.id
    }
}
