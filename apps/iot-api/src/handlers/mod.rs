//! Handlers 模块

pub mod alerts;
pub mod devices;
pub mod system;
pub mod technicians;
pub mod thresholds;
pub mod tickets;

pub use alerts::*;
pub use devices::*;
pub use system::*;
pub use technicians::*;
pub use thresholds::*;
pub use tickets::*;
