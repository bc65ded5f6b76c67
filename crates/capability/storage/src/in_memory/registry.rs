//! 按插入顺序保存实体的内存表
//!
//! 所有内存仓储共用的底座：
//! - `RwLock` 保护 id 索引与插入顺序
//! - 每个实体单独包一层 `Mutex`，对外以句柄形式暴露
//! - 本期实体不删除，索引下标始终有效

use crate::error::StorageError;
use crate::traits::Handle;
use domain::Entity;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

struct RegistryInner<T> {
    index: HashMap<String, usize>,
    items: Vec<Handle<T>>,
}

/// 插入有序的实体表。
pub struct Registry<T> {
    kind: &'static str,
    inner: RwLock<RegistryInner<T>>,
}

impl<T: Entity + Clone> Registry<T> {
    /// `kind` 用于错误信息，如 "device"。
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            inner: RwLock::new(RegistryInner {
                index: HashMap::new(),
                items: Vec::new(),
            }),
        }
    }

    /// 插入实体；id 已存在时报错。
    pub fn insert(&self, item: T) -> Result<Handle<T>, StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::lock_failed())?;
        if inner.index.contains_key(item.id()) {
            return Err(StorageError::new(format!("{} exists", self.kind)));
        }
        let id = item.id().to_string();
        let handle = Arc::new(Mutex::new(item));
        let position = inner.items.len();
        inner.items.push(handle.clone());
        inner.index.insert(id, position);
        Ok(handle)
    }

    pub fn get(&self, id: &str) -> Result<Option<Handle<T>>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::lock_failed())?;
        Ok(inner
            .index
            .get(id)
            .and_then(|position| inner.items.get(*position))
            .cloned())
    }

    /// 按插入顺序复制全部句柄（不持有索引锁返回）。
    pub fn handles(&self) -> Result<Vec<Handle<T>>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::lock_failed())?;
        Ok(inner.items.clone())
    }

    /// 按插入顺序复制满足条件的实体。
    pub fn snapshot_where(&self, filter: impl Fn(&T) -> bool) -> Result<Vec<T>, StorageError> {
        let handles = self.handles()?;
        let mut items = Vec::with_capacity(handles.len());
        for handle in handles {
            let item = lock_entity(&handle)?;
            if filter(&item) {
                items.push(item.clone());
            }
        }
        Ok(items)
    }

    pub fn snapshot(&self) -> Result<Vec<T>, StorageError> {
        self.snapshot_where(|_| true)
    }
}

/// 获取实体锁。
pub fn lock_entity<T>(handle: &Handle<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    handle.lock().map_err(|_| StorageError::lock_failed())
}
