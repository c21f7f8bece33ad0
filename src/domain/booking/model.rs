//! Booking domain entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::rate::Rate;

/// Lifecycle status of a booking.
///
/// `Finalized` and `Cancelled` are terminal; nothing leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Finalized,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finalized => "Finalized",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation binding a customer, a vehicle, a rate and two branches.
///
/// Identity fields are fixed at construction; only the status and payment
/// fields evolve, each at most once through the lifecycle. The booking keeps
/// a snapshot of the rate it was priced with — rates are immutable, so the
/// snapshot never diverges from the service's copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub pickup_branch_id: Uuid,
    pub return_branch_id: Uuid,
    pub rate: Rate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole days between start and end
    pub duration_days: i64,
    /// Stay-only price computed eagerly at construction
    pub estimated_total: Decimal,
    pub status: BookingStatus,
    pub paid: bool,
    pub final_total: Option<Decimal>,
    pub payment_method: Option<String>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: Uuid,
        vehicle_id: Uuid,
        pickup_branch_id: Uuid,
        return_branch_id: Uuid,
        rate: Rate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<Self> {
        if end_date <= start_date {
            return Err(DomainError::Validation(
                "end date must be after start date".to_string(),
            ));
        }

        let duration_days = (end_date - start_date).num_days();
        let estimated_total = rate.base_price(duration_days)?;

        Ok(Self {
            id: Uuid::new_v4(),
            customer_id,
            vehicle_id,
            pickup_branch_id,
            return_branch_id,
            rate,
            start_date,
            end_date,
            duration_days,
            estimated_total,
            status: BookingStatus::Active,
            paid: false,
            final_total: None,
            payment_method: None,
        })
    }

    /// Close out the booking with real usage data and compute the final
    /// charge.
    ///
    /// There is deliberately no status guard here: finalizing is legal from
    /// any state, and repeating it reprices and overwrites the total. The
    /// vehicle and branch updates belong to the orchestrator.
    pub fn finalize(
        &mut self,
        distance_travelled: Decimal,
        delay_days: i64,
        fuel_returned_full: bool,
    ) -> DomainResult<Decimal> {
        let total = self.rate.price(
            self.duration_days,
            distance_travelled,
            delay_days,
            fuel_returned_full,
        )?;
        self.final_total = Some(total);
        self.status = BookingStatus::Finalized;
        Ok(total)
    }

    /// Mark the booking as paid.
    ///
    /// Repeat calls succeed and overwrite the payment method.
    pub fn register_payment(&mut self, method: impl Into<String>) -> DomainResult<()> {
        if self.status != BookingStatus::Finalized {
            return Err(DomainError::InvalidState(
                "only finalized bookings can be paid".to_string(),
            ));
        }
        self.paid = true;
        self.payment_method = Some(method.into());
        Ok(())
    }

    /// Cancel an active booking.
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::Active {
            return Err(DomainError::InvalidState(
                "only active bookings can be cancelled".to_string(),
            ));
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let payment = if self.paid { "paid" } else { "pending" };
        write!(
            f,
            "[Booking {}] vehicle: {} | from: {} to: {} ({} days) | status: {} | \
             payment: {} | estimated: {}",
            self.id,
            self.vehicle_id,
            self.start_date,
            self.end_date,
            self.duration_days,
            self.status,
            payment,
            self.estimated_total
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_rate() -> Rate {
        Rate::new(
            "Compact rate",
            "Compact",
            dec("45"),
            dec("300"),
            dec("0.15"),
            dec("25"),
            dec("40"),
        )
        .unwrap()
    }

    fn sample_booking() -> Booking {
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            sample_rate(),
            date("2025-11-01"),
            date("2025-11-05"),
        )
        .unwrap()
    }

    #[test]
    fn new_booking_is_active_with_eager_estimate() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Active);
        assert_eq!(b.duration_days, 4);
        assert_eq!(b.estimated_total, dec("180.00"));
        assert!(!b.paid);
        assert!(b.final_total.is_none());
        assert!(b.payment_method.is_none());
    }

    #[test]
    fn rejects_end_date_not_after_start() {
        let rate = sample_rate();
        let same_day = Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            rate.clone(),
            date("2025-11-01"),
            date("2025-11-01"),
        );
        assert!(same_day.is_err());

        let inverted = Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            rate,
            date("2025-11-05"),
            date("2025-11-01"),
        );
        assert!(inverted.is_err());
    }

    #[test]
    fn finalize_prices_real_usage() {
        let mut b = sample_booking();
        // 650 km within the 1200 km allowance, 1 day late, tank short
        let total = b.finalize(dec("650"), 1, false).unwrap();
        assert_eq!(total, dec("245.00"));
        assert_eq!(b.status, BookingStatus::Finalized);
        assert_eq!(b.final_total, Some(dec("245.00")));
    }

    #[test]
    fn finalize_has_no_status_guard() {
        let mut b = sample_booking();
        b.cancel().unwrap();
        // still finalizes, matching the permissive lifecycle
        let total = b.finalize(dec("0"), 0, true).unwrap();
        assert_eq!(total, dec("180.00"));
        assert_eq!(b.status, BookingStatus::Finalized);
    }

    #[test]
    fn finalize_propagates_pricing_errors() {
        let mut b = sample_booking();
        assert!(b.finalize(dec("-10"), 0, true).is_err());
        assert_eq!(b.status, BookingStatus::Active);
        assert!(b.final_total.is_none());
    }

    #[test]
    fn payment_requires_finalized_status() {
        let mut b = sample_booking();
        assert!(b.register_payment("Card").is_err());
        b.finalize(dec("0"), 0, true).unwrap();
        b.register_payment("Card").unwrap();
        assert!(b.paid);
        assert_eq!(b.payment_method.as_deref(), Some("Card"));
    }

    #[test]
    fn repeat_payment_overwrites_method() {
        let mut b = sample_booking();
        b.finalize(dec("0"), 0, true).unwrap();
        b.register_payment("Card").unwrap();
        b.register_payment("Cash").unwrap();
        assert!(b.paid);
        assert_eq!(b.payment_method.as_deref(), Some("Cash"));
    }

    #[test]
    fn cancel_requires_active_status() {
        let mut b = sample_booking();
        b.cancel().unwrap();
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert!(b.cancel().is_err());

        let mut finalized = sample_booking();
        finalized.finalize(dec("0"), 0, true).unwrap();
        assert!(finalized.cancel().is_err());
    }
}
