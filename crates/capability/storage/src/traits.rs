//! 存储接口 Trait 定义
//!
//! 定义所有仓储的同步接口：
//! - DeviceStore：设备目录（设备持有传感器与最近读数）
//! - ThresholdStore：阈值注册表
//! - AlertStore：告警
//! - TicketStore：维修工单
//! - TechnicianStore：技术员
//!
//! 设计原则：
//! - 仓储对象显式传入调用方，不使用进程级全局表
//! - 可变实体以句柄（`Arc<Mutex<T>>`）返回，状态迁移在实体锁内完成
//! - 列表接口返回按插入顺序排列的快照
//! - 所有接口返回 StorageError

use crate::error::StorageError;
use domain::{Alert, AlertStatus, Device, MaintenanceTicket, Technician, Threshold};
use std::sync::{Arc, Mutex};

/// 实体句柄：每个实体独立加锁。
pub type Handle<T> = Arc<Mutex<T>>;

/// 设备存储接口
pub trait DeviceStore: Send + Sync {
    /// 创建设备（id 冲突时报错）
    fn create_device(&self, device: Device) -> Result<Handle<Device>, StorageError>;

    /// 查找设备句柄
    fn find_device(&self, device_id: &str) -> Result<Option<Handle<Device>>, StorageError>;

    /// 按插入顺序列出设备快照
    fn list_devices(&self) -> Result<Vec<Device>, StorageError>;
}

/// 阈值存储接口
///
/// 阈值不可变，直接以值返回。
pub trait ThresholdStore: Send + Sync {
    fn create_threshold(&self, threshold: Threshold) -> Result<Threshold, StorageError>;

    fn list_thresholds(&self) -> Result<Vec<Threshold>, StorageError>;

    /// 列出作用于 (设备, 传感器类型) 的阈值，类型忽略大小写
    fn list_thresholds_for(
        &self,
        device_id: &str,
        sensor_type: &str,
    ) -> Result<Vec<Threshold>, StorageError>;
}

/// 告警存储接口
pub trait AlertStore: Send + Sync {
    fn create_alert(&self, alert: Alert) -> Result<Handle<Alert>, StorageError>;

    fn find_alert(&self, alert_id: &str) -> Result<Option<Handle<Alert>>, StorageError>;

    fn list_alerts(&self) -> Result<Vec<Alert>, StorageError>;

    fn list_alerts_by_status(&self, status: AlertStatus) -> Result<Vec<Alert>, StorageError>;

    /// 是否已存在由同一读数、同一阈值触发的告警
    fn has_alert_for(&self, reading_id: &str, threshold_id: &str) -> Result<bool, StorageError>;
}

/// 工单存储接口
pub trait TicketStore: Send + Sync {
    fn create_ticket(
        &self,
        ticket: MaintenanceTicket,
    ) -> Result<Handle<MaintenanceTicket>, StorageError>;

    fn find_ticket(
        &self,
        ticket_id: &str,
    ) -> Result<Option<Handle<MaintenanceTicket>>, StorageError>;

    fn list_tickets(&self) -> Result<Vec<MaintenanceTicket>, StorageError>;
}

/// 技术员存储接口
pub trait TechnicianStore: Send + Sync {
    fn create_technician(&self, technician: Technician) -> Result<Technician, StorageError>;

    fn find_technician(&self, technician_id: &str) -> Result<Option<Technician>, StorageError>;

    fn list_technicians(&self) -> Result<Vec<Technician>, StorageError>;
}

/// 组合的仓储集合，便于整体注入。
#[derive(Clone)]
pub struct Stores {
    pub devices: Arc<dyn DeviceStore>,
    pub thresholds: Arc<dyn ThresholdStore>,
    pub alerts: Arc<dyn AlertStore>,
    pub tickets: Arc<dyn TicketStore>,
    pub technicians: Arc<dyn TechnicianStore>,
}
