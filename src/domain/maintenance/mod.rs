//! Maintenance aggregate
//!
//! Out-of-service periods for vehicles, with cost, reason and kind.

pub mod model;

pub use model::{Maintenance, MaintenanceKind};
