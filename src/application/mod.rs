//! Business logic and orchestration

pub mod services;

pub use services::{PaymentSummary, RentalService};
