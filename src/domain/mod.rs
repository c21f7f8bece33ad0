//! Core business entities and rules

pub mod booking;
pub mod branch;
pub mod error;
pub mod maintenance;
pub mod rate;
pub mod user;
pub mod vehicle;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use branch::Branch;
pub use error::{DomainError, DomainResult};
pub use maintenance::{Maintenance, MaintenanceKind};
pub use rate::Rate;
pub use user::{NewUser, User, UserRole};
pub use vehicle::{Vehicle, VehicleKind, VehicleStatus};

use chrono::NaiveDate;

/// Parse a strict `YYYY-MM-DD` date string.
///
/// Malformed input surfaces as a [`DomainError::Validation`].
pub fn parse_date(input: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| DomainError::Validation(format!("invalid date '{}': {}", input, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let d = parse_date("2025-11-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }

    #[test]
    fn parse_date_rejects_malformed_input() {
        for bad in &["2025/11/01", "01-11-2025", "2025-13-01", "not a date", ""] {
            let err = parse_date(bad).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{}", bad);
        }
    }
}
