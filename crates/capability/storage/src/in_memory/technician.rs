//! 技术员内存存储实现

use super::registry::{Registry, lock_entity};
use crate::error::StorageError;
use crate::traits::TechnicianStore;
use domain::Technician;

/// 技术员内存存储
pub struct InMemoryTechnicianStore {
    technicians: Registry<Technician>,
}

impl InMemoryTechnicianStore {
    pub fn new() -> Self {
        Self {
            technicians: Registry::new("technician"),
        }
    }
}

impl Default for InMemoryTechnicianStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TechnicianStore for InMemoryTechnicianStore {
    fn create_technician(&self, technician: Technician) -> Result<Technician, StorageError> {
        let created = technician.clone();
        self.technicians.insert(technician)?;
        Ok(created)
    }

    fn find_technician(&self, technician_id: &str) -> Result<Option<Technician>, StorageError> {
        match self.technicians.get(technician_id)? {
            Some(handle) => Ok(Some(lock_entity(&handle)?.clone())),
            None => Ok(None),
        }
    }

    fn list_technicians(&self) -> Result<Vec<Technician>, StorageError> {
        self.technicians.snapshot()
    }
}
