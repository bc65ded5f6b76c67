//! 设备与传感器。
//!
//! 设备按插入顺序持有传感器，传感器以 id 唯一；
//! 传感器只保留最近一次读数，每次采集整体替换。

use crate::error::DomainError;
use crate::identity::Entity;
use crate::reading::Reading;
use crate::validation::{optional_text, required_text};
use std::sync::Arc;

/// 传感器。
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    id: String,
    sensor_type: String,
    unit: String,
    last_seen_ms: Option<i64>,
    last_reading: Option<Arc<Reading>>,
}

impl Sensor {
    pub fn new(id: impl Into<String>, sensor_type: &str, unit: &str) -> Result<Self, DomainError> {
        let sensor_type = required_text(sensor_type, "sensorType")?;
        Ok(Self {
            id: id.into(),
            sensor_type,
            unit: optional_text(unit),
            last_seen_ms: None,
            last_reading: None,
        })
    }

    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn last_seen_ms(&self) -> Option<i64> {
        self.last_seen_ms
    }

    pub fn last_reading(&self) -> Option<&Arc<Reading>> {
        self.last_reading.as_ref()
    }

    /// 类型比较忽略大小写。
    pub fn matches_type(&self, sensor_type: &str) -> bool {
        self.sensor_type.eq_ignore_ascii_case(sensor_type.trim())
    }

    /// 替换最近读数，并把 last_seen 推到读数时间。
    pub fn record_reading(&mut self, reading: Arc<Reading>) {
        self.last_seen_ms = Some(reading.ts_ms());
        self.last_reading = Some(reading);
    }
}

impl Entity for Sensor {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 设备。
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    id: String,
    name: String,
    location: String,
    sensors: Vec<Sensor>,
}

impl Device {
    pub fn new(id: impl Into<String>, name: &str, location: &str) -> Result<Self, DomainError> {
        let name = required_text(name, "name")?;
        Ok(Self {
            id: id.into(),
            name,
            location: optional_text(location),
            sensors: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn sensor(&self, sensor_id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|sensor| sensor.id == sensor_id)
    }

    pub fn sensor_mut(&mut self, sensor_id: &str) -> Option<&mut Sensor> {
        self.sensors.iter_mut().find(|sensor| sensor.id == sensor_id)
    }

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = required_text(name, "name")?;
        Ok(())
    }

    pub fn relocate(&mut self, location: &str) {
        self.location = optional_text(location);
    }

    /// 添加传感器；同 id 已存在时原位替换，保持顺序。
    pub fn add_sensor(&mut self, sensor: Sensor) {
        match self.sensor_mut(&sensor.id) {
            Some(existing) => *existing = sensor,
            None => self.sensors.push(sensor),
        }
    }
}

impl Entity for Device {
    fn id(&self) -> &str {
        &self.id
    }
}
