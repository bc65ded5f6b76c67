//! 存储层错误类型
//!
//! 定义统一的存储错误类型，用于封装底层错误：
//! - 锁获取失败（持锁线程 panic 导致中毒）
//! - 标识冲突

#[derive(Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 锁中毒。
    pub fn lock_failed() -> Self {
        Self::new("lock failed")
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}
