//! 实体标识。
//!
//! 标识是构造时由外部注入的不透明字符串，实体本身不负责生成。

use std::sync::atomic::{AtomicU64, Ordering};

/// 具备稳定标识的实体。
pub trait Entity {
    fn id(&self) -> &str;
}

/// 标识来源抽象。
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUID v4 标识来源（运行时默认）。
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// 递增序号标识来源：`{prefix}-{n}`，便于测试断言。
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
