//! 告警处置流程编排。
//!
//! 把评估引擎、告警/工单状态机与仓储串成完整链路：
//! 采集读数 → 评估 → 保存告警 → 确认 → 开工单 → 记录动作 → 关单并解决告警。
//!
//! 仓储、标识来源与时钟都由调用方显式注入。

mod service;

pub use service::{IngestOutcome, MonitoringService, ScanOutcome, TicketClosure};

use domain::DomainError;
use iot_evaluate::EvaluateError;
use iot_storage::StorageError;

/// 流程错误。
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

impl WorkflowError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// 取出领域错误（包括评估过程中产生的领域错误）。
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            WorkflowError::Domain(err) => Some(err),
            WorkflowError::Evaluate(EvaluateError::Domain(err)) => Some(err),
            _ => None,
        }
    }
}

/// 重复告警策略。
///
/// 同一读数被同一阈值再次评估时是否再生成一条告警。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// 每次评估都生成新告警（重复升级）。
    #[default]
    Repeat,
    /// 已存在同一 (读数, 阈值) 的告警时跳过。
    SuppressRepeated,
}

/// 流程参数。
#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
    pub duplicate_policy: DuplicatePolicy,
}

/// 设备更新输入。
#[derive(Debug, Clone, Default)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
}
