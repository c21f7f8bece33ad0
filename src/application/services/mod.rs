//! Application services

mod rental;

pub use rental::{PaymentSummary, RentalService};
