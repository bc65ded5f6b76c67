//! 领域错误类型。
//!
//! 三类错误对应三种失败语义：
//! - Validation：构造输入非法（空字符串、非有限数值、上下限颠倒）
//! - InvalidTransition：当前状态不允许该操作
//! - Precondition：操作的结构性前置条件不满足
//!
//! 所有错误同步返回给调用方，失败时实体不发生任何修改。

/// 领域错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
    #[error("precondition failed: {0}")]
    Precondition(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }
}
