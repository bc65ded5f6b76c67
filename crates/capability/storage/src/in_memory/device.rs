//! 设备内存存储实现
//!
//! 设备持有有序传感器及各自的最近读数，采集时通过设备句柄原位更新。

use super::registry::Registry;
use crate::error::StorageError;
use crate::traits::{DeviceStore, Handle};
use domain::Device;

/// 设备内存存储
pub struct InMemoryDeviceStore {
    devices: Registry<Device>,
}

impl InMemoryDeviceStore {
    /// 创建新的设备存储
    pub fn new() -> Self {
        Self {
            devices: Registry::new("device"),
        }
    }
}

impl Default for InMemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceStore for InMemoryDeviceStore {
    fn create_device(&self, device: Device) -> Result<Handle<Device>, StorageError> {
        self.devices.insert(device)
    }

    fn find_device(&self, device_id: &str) -> Result<Option<Handle<Device>>, StorageError> {
        self.devices.get(device_id)
    }

    fn list_devices(&self) -> Result<Vec<Device>, StorageError> {
        self.devices.snapshot()
    }
}
