//! Rate domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Named pricing policy for a vehicle category.
///
/// A rate is immutable after creation; bookings keep the rate they were
/// priced with for their whole life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rate {
    pub id: Uuid,
    pub name: String,
    /// Vehicle category this rate applies to (e.g. "Compact", "SUV")
    pub category: String,
    /// Price per rental day
    pub daily_price: Decimal,
    /// Mileage allowance per rental day; overage is billed per km
    pub included_km_per_day: Decimal,
    /// Cost per km above the full-stay allowance
    pub extra_km_cost: Decimal,
    /// Surcharge per day of late return
    pub delay_surcharge_per_day: Decimal,
    /// Flat penalty when the tank comes back short
    pub fuel_penalty: Decimal,
}

impl Rate {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        daily_price: Decimal,
        included_km_per_day: Decimal,
        extra_km_cost: Decimal,
        delay_surcharge_per_day: Decimal,
        fuel_penalty: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let category = category.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::Validation(
                "rate name cannot be empty".to_string(),
            ));
        }
        if daily_price <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "daily price must be positive".to_string(),
            ));
        }
        if included_km_per_day < Decimal::ZERO {
            return Err(DomainError::Validation(
                "included km per day cannot be negative".to_string(),
            ));
        }
        if extra_km_cost < Decimal::ZERO
            || delay_surcharge_per_day < Decimal::ZERO
            || fuel_penalty < Decimal::ZERO
        {
            return Err(DomainError::Validation(
                "surcharges and penalties cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
            daily_price,
            included_km_per_day,
            extra_km_cost,
            delay_surcharge_per_day,
            fuel_penalty,
        })
    }

    /// Whether this rate applies to the given vehicle category.
    ///
    /// Matching is an exact case-insensitive comparison.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Total charge for a rental, applied in a fixed additive order:
    /// base stay, mileage overage, delay surcharge, fuel penalty.
    ///
    /// The mileage allowance scales with the stay: overage is only billed
    /// for kilometres beyond `included_km_per_day * duration_days`.
    /// The result is rounded to 2 decimal places, half to even.
    pub fn price(
        &self,
        duration_days: i64,
        distance_travelled: Decimal,
        delay_days: i64,
        fuel_returned_full: bool,
    ) -> DomainResult<Decimal> {
        if duration_days <= 0 {
            return Err(DomainError::Validation(
                "rental duration must be at least one day".to_string(),
            ));
        }
        if distance_travelled < Decimal::ZERO {
            return Err(DomainError::Validation(
                "distance travelled cannot be negative".to_string(),
            ));
        }
        if delay_days < 0 {
            return Err(DomainError::Validation(
                "delay days cannot be negative".to_string(),
            ));
        }

        let mut total = Decimal::from(duration_days) * self.daily_price;

        let allowance = self.included_km_per_day * Decimal::from(duration_days);
        if distance_travelled > allowance {
            total += (distance_travelled - allowance) * self.extra_km_cost;
        }

        if delay_days > 0 {
            total += Decimal::from(delay_days) * self.delay_surcharge_per_day;
        }

        if !fuel_returned_full {
            total += self.fuel_penalty;
        }

        Ok(total.round_dp(2))
    }

    /// Estimated charge for the stay alone, before any usage is known.
    pub fn base_price(&self, duration_days: i64) -> DomainResult<Decimal> {
        self.price(duration_days, Decimal::ZERO, 0, true)
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Rate {}] {} | category: {} | daily: {} | included km/day: {} | \
             extra km: {} | delay/day: {} | fuel penalty: {}",
            self.id,
            self.name,
            self.category,
            self.daily_price,
            self.included_km_per_day,
            self.extra_km_cost,
            self.delay_surcharge_per_day,
            self.fuel_penalty
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────
