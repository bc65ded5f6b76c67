//! 工单内存存储实现

use super::registry::Registry;
use crate::error::StorageError;
use crate::traits::{Handle, TicketStore};
use domain::MaintenanceTicket;

/// 工单内存存储
pub struct InMemoryTicketStore {
    tickets: Registry<MaintenanceTicket>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self {
            tickets: Registry::new("ticket"),
        }
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for InMemoryTicketStore {
    fn create_ticket(
        &self,
        ticket: MaintenanceTicket,
    ) -> Result<Handle<MaintenanceTicket>, StorageError> {
        self.tickets.insert(ticket)
    }

    fn find_ticket(
        &self,
        ticket_id: &str,
    ) -> Result<Option<Handle<MaintenanceTicket>>, StorageError> {
        self.tickets.get(ticket_id)
    }

    fn list_tickets(&self) -> Result<Vec<MaintenanceTicket>, StorageError> {
        self.tickets.snapshot()
    }
}
