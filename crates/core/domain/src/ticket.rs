//! 维修工单及其状态机。
//!
//! OPEN → CLOSED，单向。关闭前至少需要一条动作日志。

use crate::alert::Alert;
use crate::error::DomainError;
use crate::identity::Entity;
use crate::technician::Technician;
use crate::validation::{optional_text, required_text};
use std::fmt;

/// 无技术员时动作日志的操作者标签。
pub const SYSTEM_ACTOR: &str = "system";

/// 工单状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 动作日志条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogEntry {
    pub ts_ms: i64,
    pub actor: String,
    pub technician_id: Option<String>,
    pub text: String,
}

/// 维修工单。
///
/// 设备、传感器与告警 id 在创建时从告警复制，之后告警的变化不会同步过来。
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceTicket {
    id: String,
    alert_id: String,
    device_id: String,
    sensor_id: String,
    description: String,
    created_at_ms: i64,
    status: TicketStatus,
    actions: Vec<ActionLogEntry>,
    assigned_technician_id: Option<String>,
    closed_at_ms: Option<i64>,
}

impl MaintenanceTicket {
    pub fn open(id: impl Into<String>, alert: &Alert, description: &str, created_at_ms: i64) -> Self {
        Self {
            id: id.into(),
            alert_id: alert.id().to_string(),
            device_id: alert.device_id().to_string(),
            sensor_id: alert.sensor_id().to_string(),
            description: optional_text(description),
            created_at_ms,
            status: TicketStatus::Open,
            actions: Vec::new(),
            assigned_technician_id: None,
            closed_at_ms: None,
        }
    }

    pub fn alert_id(&self) -> &str {
        &self.alert_id
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn actions(&self) -> &[ActionLogEntry] {
        &self.actions
    }

    pub fn assigned_technician_id(&self) -> Option<&str> {
        self.assigned_technician_id.as_deref()
    }

    pub fn closed_at_ms(&self) -> Option<i64> {
        self.closed_at_ms
    }

    /// 追加动作日志。关闭后仍可追加。
    pub fn add_action(
        &mut self,
        text: &str,
        technician: Option<&Technician>,
        at_ms: i64,
    ) -> Result<(), DomainError> {
        let text = required_text(text, "action")?;
        let (actor, technician_id) = match technician {
            Some(tech) => (tech.actor_label(), Some(tech.id().to_string())),
            None => (SYSTEM_ACTOR.to_string(), None),
        };
        self.actions.push(ActionLogEntry {
            ts_ms: at_ms,
            actor,
            technician_id,
            text,
        });
        Ok(())
    }

    /// 设置或清除指派技术员。
    pub fn assign_technician(&mut self, technician: Option<&Technician>) {
        self.assigned_technician_id = technician.map(|tech| tech.id().to_string());
    }

    /// OPEN → CLOSED；重复关闭保留首次关闭时间。
    pub fn close(&mut self, at_ms: i64) -> Result<(), DomainError> {
        if self.actions.is_empty() {
            return Err(DomainError::precondition(
                "at least one technician action required to close ticket",
            ));
        }
        self.status = TicketStatus::Closed;
        if self.closed_at_ms.is_none() {
            self.closed_at_ms = Some(at_ms);
        }
        Ok(())
    }
}

impl Entity for MaintenanceTicket {
    fn id(&self) -> &str {
        &self.id
    }
}
