//! 内存存储实现模块
//!
//! 状态只存在于进程生命周期内。
//!
//! 包含以下实现：
//! - DeviceStore: InMemoryDeviceStore
//! - ThresholdStore: InMemoryThresholdStore
//! - AlertStore: InMemoryAlertStore
//! - TicketStore: InMemoryTicketStore
//! - TechnicianStore: InMemoryTechnicianStore

pub mod alert;
pub mod device;
pub mod registry;
pub mod technician;
pub mod threshold;
pub mod ticket;

pub use alert::*;
pub use device::*;
pub use registry::*;
pub use technician::*;
pub use threshold::*;
pub use ticket::*;

use crate::traits::Stores;
use std::sync::Arc;

/// 一组全新的内存仓储。
#[derive(Default)]
pub struct InMemoryStores {
    pub devices: InMemoryDeviceStore,
    pub thresholds: InMemoryThresholdStore,
    pub alerts: InMemoryAlertStore,
    pub tickets: InMemoryTicketStore,
    pub technicians: InMemoryTechnicianStore,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// 转为以 trait object 注入的仓储集合。
    pub fn into_stores(self) -> Stores {
        Stores {
            devices: Arc::new(self.devices),
            thresholds: Arc::new(self.thresholds),
            alerts: Arc::new(self.alerts),
            tickets: Arc::new(self.tickets),
            technicians: Arc::new(self.technicians),
        }
    }
}
