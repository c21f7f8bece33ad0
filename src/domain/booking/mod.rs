//! Booking aggregate
//!
//! Contains the Booking entity and the reservation lifecycle: creation with
//! an eager estimate, finalization with real usage, payment and cancellation.

pub mod model;

pub use model::{Booking, BookingStatus};
