//! # IoT Storage 模块
//!
//! 本模块提供设备监控系统的仓储抽象层。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：每类实体一个同步 Trait
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **实现层** (`in_memory/`)：按插入顺序保存的内存实现
//!
//! ## 并发模型
//!
//! - 索引由 `RwLock` 保护，实体由各自的 `Mutex` 保护
//! - 告警/工单的状态迁移在实体锁内读-改-写，保证单实体线性一致
//! - 不同实体之间不提供顺序保证
//! - 快照接口先复制句柄、释放索引锁，再逐个锁实体
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use iot_storage::{InMemoryStores, DeviceStore};
//! use domain::Device;
//!
//! let stores = InMemoryStores::new().into_stores();
//! let device = Device::new("dev-1", "Boiler-01", "Plant-A")?;
//! stores.devices.create_device(device)?;
//! let all = stores.devices.list_devices()?;
//! ```
//!
//! ## 非目标
//!
//! 不提供持久化，状态只在进程生命周期内存在。

pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use traits::*;

pub use in_memory::{
    InMemoryAlertStore, InMemoryDeviceStore, InMemoryStores, InMemoryTechnicianStore,
    InMemoryThresholdStore, InMemoryTicketStore, Registry, lock_entity,
};
