//! 阈值内存存储实现

use super::registry::Registry;
use crate::error::StorageError;
use crate::traits::ThresholdStore;
use domain::Threshold;

/// 阈值内存存储
pub struct InMemoryThresholdStore {
    thresholds: Registry<Threshold>,
}

impl InMemoryThresholdStore {
    pub fn new() -> Self {
        Self {
            thresholds: Registry::new("threshold"),
        }
    }
}

impl Default for InMemoryThresholdStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdStore for InMemoryThresholdStore {
    fn create_threshold(&self, threshold: Threshold) -> Result<Threshold, StorageError> {
        let created = threshold.clone();
        self.thresholds.insert(threshold)?;
        Ok(created)
    }

    fn list_thresholds(&self) -> Result<Vec<Threshold>, StorageError> {
        self.thresholds.snapshot()
    }

    fn list_thresholds_for(
        &self,
        device_id: &str,
        sensor_type: &str,
    ) -> Result<Vec<Threshold>, StorageError> {
        self.thresholds
            .snapshot_where(|item| item.applies_to(device_id, sensor_type))
    }
}
