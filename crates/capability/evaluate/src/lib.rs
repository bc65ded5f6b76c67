//! 阈值评估引擎。
//!
//! 读数 + 匹配阈值 → 零或多条新告警。两种调用方式共用同一条规则：
//! - 采集后立即检查单条读数（`AlertEvaluator::evaluate_reading`）
//! - 批量重扫所有传感器的最近读数（`AlertEvaluator::scan`）
//!
//! 引擎只构造告警，不保存，也不去重；同一读数重复评估会得到重复告警。

use domain::{Alert, Clock, Device, DomainError, Entity, IdSource, Reading, Threshold};
use iot_storage::ThresholdStore;
use std::sync::Arc;

/// 评估错误。
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("threshold source error: {0}")]
    ThresholdSource(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// 阈值来源抽象。
pub trait ThresholdSource: Send + Sync {
    /// 作用于该设备、且传感器类型（忽略大小写）一致的阈值。
    fn thresholds_for(
        &self,
        device_id: &str,
        sensor_type: &str,
    ) -> Result<Vec<Threshold>, EvaluateError>;
}

/// 基于 storage 的阈值来源。
#[derive(Clone)]
pub struct StorageThresholdSource {
    store: Arc<dyn ThresholdStore>,
}

impl StorageThresholdSource {
    pub fn new(store: Arc<dyn ThresholdStore>) -> Self {
        Self { store }
    }
}

impl ThresholdSource for StorageThresholdSource {
    fn thresholds_for(
        &self,
        device_id: &str,
        sensor_type: &str,
    ) -> Result<Vec<Threshold>, EvaluateError> {
        self.store
            .list_thresholds_for(device_id, sensor_type)
            .map_err(|err| EvaluateError::ThresholdSource(err.to_string()))
    }
}

/// 固定阈值集合（用于接线与测试）。
#[derive(Debug, Clone, Default)]
pub struct StaticThresholdSource {
    thresholds: Vec<Threshold>,
}

impl StaticThresholdSource {
    pub fn new(thresholds: Vec<Threshold>) -> Self {
        Self { thresholds }
    }
}

impl ThresholdSource for StaticThresholdSource {
    fn thresholds_for(
        &self,
        device_id: &str,
        sensor_type: &str,
    ) -> Result<Vec<Threshold>, EvaluateError> {
        Ok(self
            .thresholds
            .iter()
            .filter(|item| threshold_matches(item, device_id, sensor_type))
            .cloned()
            .collect())
    }
}

/// 阈值是否作用于 (设备, 传感器类型)。
pub fn threshold_matches(threshold: &Threshold, device_id: &str, sensor_type: &str) -> bool {
    threshold.applies_to(device_id, sensor_type)
}

/// 评估规则本体：对每条匹配且被突破的阈值各生成一条告警。
///
/// 不匹配读数设备或传感器类型的阈值会被跳过，因此传入未过滤的集合也得到相同结果。
pub fn evaluate(
    reading: &Arc<Reading>,
    sensor_type: &str,
    thresholds: &[Threshold],
    ids: &dyn IdSource,
    now_ms: i64,
) -> Result<Vec<Alert>, EvaluateError> {
    let value = reading.value();
    let mut alerts = Vec::new();
    for threshold in thresholds {
        if !threshold_matches(threshold, reading.device_id(), sensor_type) {
            continue;
        }
        if !threshold.is_breached(value) {
            continue;
        }
        let alert = Alert::new(
            ids.next_id(),
            reading.clone(),
            sensor_type,
            Some(threshold.severity()),
            now_ms,
        )?
        .with_threshold(threshold.id());
        alerts.push(alert);
    }
    Ok(alerts)
}

/// 评估引擎：组合阈值来源、标识来源与时钟。
#[derive(Clone)]
pub struct AlertEvaluator {
    source: Arc<dyn ThresholdSource>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl AlertEvaluator {
    pub fn new(
        source: Arc<dyn ThresholdSource>,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { source, ids, clock }
    }

    /// 采集后立即检查单条读数。
    pub fn evaluate_reading(
        &self,
        reading: &Arc<Reading>,
        sensor_type: &str,
    ) -> Result<Vec<Alert>, EvaluateError> {
        let thresholds = self.source.thresholds_for(reading.device_id(), sensor_type)?;
        evaluate(
            reading,
            sensor_type,
            &thresholds,
            self.ids.as_ref(),
            self.clock.now_ms(),
        )
    }

    /// 批量重扫：按设备、传感器的插入顺序检查每个已存的最近读数。
    pub fn scan(&self, devices: &[Device]) -> Result<Vec<Alert>, EvaluateError> {
        let mut alerts = Vec::new();
        for device in devices {
            for sensor in device.sensors() {
                let Some(reading) = sensor.last_reading() else {
                    continue;
                };
                alerts.extend(self.evaluate_reading(reading, sensor.sensor_type())?);
            }
        }
        Ok(alerts)
    }
}

/// 取告警对应的 (读数, 阈值) 键，供去重策略使用。
pub fn alert_origin(alert: &Alert) -> Option<(&str, &str)> {
    alert
        .threshold_id()
        .map(|threshold_id| (alert.reading().id(), threshold_id))
}
