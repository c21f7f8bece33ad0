//! Vehicle aggregate
//!
//! Contains the Vehicle entity, its variant payloads and the availability
//! state machine.

pub mod model;

pub use model::{Vehicle, VehicleKind, VehicleStatus};
