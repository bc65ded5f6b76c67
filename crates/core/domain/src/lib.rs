//! 设备监控领域模型：实体、不变量与告警/工单状态机。

pub mod alert;
pub mod clock;
pub mod device;
pub mod error;
pub mod identity;
pub mod reading;
pub mod technician;
pub mod threshold;
pub mod ticket;
pub mod validation;

pub use alert::{Alert, AlertStatus};
pub use clock::{Clock, ManualClock, SystemClock, now_epoch_ms};
pub use device::{Device, Sensor};
pub use error::DomainError;
pub use identity::{Entity, IdSource, SequentialIdSource, UuidIdSource};
pub use reading::Reading;
pub use technician::Technician;
pub use threshold::{Severity, Threshold};
pub use ticket::{ActionLogEntry, MaintenanceTicket, SYSTEM_ACTOR, TicketStatus};
