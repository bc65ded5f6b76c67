//! 告警内存存储实现

use super::registry::Registry;
use crate::error::StorageError;
use crate::traits::{AlertStore, Handle};
use domain::{Alert, AlertStatus, Entity};

/// 告警内存存储
pub struct InMemoryAlertStore {
    alerts: Registry<Alert>,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self {
            alerts: Registry::new("alert"),
        }
    }
}

impl Default for InMemoryAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore for InMemoryAlertStore {
    fn create_alert(&self, alert: Alert) -> Result<Handle<Alert>, StorageError> {
        self.alerts.insert(alert)
    }

    fn find_alert(&self, alert_id: &str) -> Result<Option<Handle<Alert>>, StorageError> {
        self.alerts.get(alert_id)
    }

    fn list_alerts(&self) -> Result<Vec<Alert>, StorageError> {
        self.alerts.snapshot()
    }

    fn list_alerts_by_status(&self, status: AlertStatus) -> Result<Vec<Alert>, StorageError> {
        self.alerts.snapshot_where(|item| item.status() == status)
    }

    fn has_alert_for(&self, reading_id: &str, threshold_id: &str) -> Result<bool, StorageError> {
        let matches = self.alerts.snapshot_where(|item| {
            item.reading().id() == reading_id && item.threshold_id() == Some(threshold_id)
        })?;
        Ok(!matches.is_empty())
    }
}
