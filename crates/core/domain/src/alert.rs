//! 告警及其状态机。
//!
//! 状态单向推进：NEW → ACKNOWLEDGED → RESOLVED。
//! - `acknowledge` 只允许从 NEW 发起，且只能成功一次
//! - `link_ticket` 不改变状态，关联一经设置不可更换
//! - `resolve` 幂等，不要求先确认

use crate::error::DomainError;
use crate::identity::Entity;
use crate::reading::Reading;
use crate::threshold::Severity;
use crate::validation::required_text;
use std::fmt;
use std::sync::Arc;

/// 告警状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertStatus {
    New,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::New => "NEW",
            AlertStatus::Acknowledged => "ACKNOWLEDGED",
            AlertStatus::Resolved => "RESOLVED",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "NEW" => Ok(AlertStatus::New),
            "ACKNOWLEDGED" => Ok(AlertStatus::Acknowledged),
            "RESOLVED" => Ok(AlertStatus::Resolved),
            other => Err(DomainError::validation(format!("unknown alert status: {other}"))),
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 告警：记录一次阈值突破。
///
/// 只应由评估引擎构造；触发读数以共享引用保存，只读。
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    id: String,
    device_id: String,
    sensor_id: String,
    sensor_type: String,
    threshold_id: Option<String>,
    reading: Arc<Reading>,
    created_at_ms: i64,
    severity: Severity,
    status: AlertStatus,
    acknowledged_by: Option<String>,
    acknowledged_at_ms: Option<i64>,
    linked_ticket_id: Option<String>,
    resolved_at_ms: Option<i64>,
}

impl Alert {
    /// 以读数构造 NEW 状态告警；未指定级别时为 MEDIUM。
    pub fn new(
        id: impl Into<String>,
        reading: Arc<Reading>,
        sensor_type: &str,
        severity: Option<Severity>,
        created_at_ms: i64,
    ) -> Result<Self, DomainError> {
        let sensor_type = required_text(sensor_type, "sensorType")?;
        Ok(Self {
            id: id.into(),
            device_id: reading.device_id().to_string(),
            sensor_id: reading.sensor_id().to_string(),
            sensor_type,
            threshold_id: None,
            reading,
            created_at_ms,
            severity: severity.unwrap_or_default(),
            status: AlertStatus::New,
            acknowledged_by: None,
            acknowledged_at_ms: None,
            linked_ticket_id: None,
            resolved_at_ms: None,
        })
    }

    /// 记录触发该告警的阈值。
    pub fn with_threshold(mut self, threshold_id: impl Into<String>) -> Self {
        self.threshold_id = Some(threshold_id.into());
        self
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    pub fn threshold_id(&self) -> Option<&str> {
        self.threshold_id.as_deref()
    }

    pub fn reading(&self) -> &Arc<Reading> {
        &self.reading
    }

    pub fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn status(&self) -> AlertStatus {
        self.status
    }

    pub fn acknowledged_by(&self) -> Option<&str> {
        self.acknowledged_by.as_deref()
    }

    pub fn acknowledged_at_ms(&self) -> Option<i64> {
        self.acknowledged_at_ms
    }

    pub fn linked_ticket_id(&self) -> Option<&str> {
        self.linked_ticket_id.as_deref()
    }

    pub fn resolved_at_ms(&self) -> Option<i64> {
        self.resolved_at_ms
    }

    /// NEW → ACKNOWLEDGED。
    pub fn acknowledge(&mut self, by: &str, at_ms: i64) -> Result<(), DomainError> {
        if self.status != AlertStatus::New {
            return Err(DomainError::invalid_transition(format!(
                "only NEW alerts can be acknowledged (alert {} is {})",
                self.id, self.status
            )));
        }
        let by = required_text(by, "acknowledgedBy")?;
        self.status = AlertStatus::Acknowledged;
        self.acknowledged_by = Some(by);
        self.acknowledged_at_ms = Some(at_ms);
        Ok(())
    }

    /// 关联工单；同一 id 重复关联为空操作，更换为其他 id 则失败。
    pub fn link_ticket(&mut self, ticket_id: &str) -> Result<(), DomainError> {
        let ticket_id = required_text(ticket_id, "ticketId")?;
        match self.linked_ticket_id.as_deref() {
            Some(existing) if existing == ticket_id => Ok(()),
            Some(existing) => Err(DomainError::invalid_transition(format!(
                "alert {} already linked to ticket {existing}",
                self.id
            ))),
            None => {
                self.linked_ticket_id = Some(ticket_id);
                Ok(())
            }
        }
    }

    /// 任意非终态 → RESOLVED；已解决时不做任何事。
    pub fn resolve(&mut self, at_ms: i64) {
        if self.status == AlertStatus::Resolved {
            return;
        }
        self.status = AlertStatus::Resolved;
        self.resolved_at_ms = Some(at_ms);
    }
}

impl Entity for Alert {
    fn id(&self) -> &str {
        &self.id
    }
}
