//! Maintenance domain entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Kind of maintenance operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceKind {
    Inspection,
    Repair,
    /// Statutory roadworthiness test (MOT / ITV)
    Mot,
    Other,
}

impl MaintenanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inspection => "Inspection",
            Self::Repair => "Repair",
            Self::Mot => "MOT",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MaintenanceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inspection" => Ok(Self::Inspection),
            "repair" => Ok(Self::Repair),
            "mot" | "itv" => Ok(Self::Mot),
            "other" => Ok(Self::Other),
            other => Err(DomainError::Validation(format!(
                "unknown maintenance kind '{}'",
                other
            ))),
        }
    }
}

/// Record of an out-of-service period for a vehicle.
///
/// Opening a record takes the vehicle off the fleet (status `Maintenance`);
/// finalizing it hands the vehicle back. Both transitions are performed by
/// the rental service, which owns the vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost: Decimal,
    pub kind: MaintenanceKind,
}

impl Maintenance {
    pub fn new(
        vehicle_id: Uuid,
        reason: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        cost: Decimal,
        kind: MaintenanceKind,
    ) -> DomainResult<Self> {
        let reason = reason.into().trim().to_string();

        if reason.is_empty() {
            return Err(DomainError::Validation(
                "maintenance reason cannot be empty".to_string(),
            ));
        }
        if cost < Decimal::ZERO {
            return Err(DomainError::Validation(
                "maintenance cost cannot be negative".to_string(),
            ));
        }
        if end_date < start_date {
            return Err(DomainError::Validation(
                "maintenance end date cannot precede its start date".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            vehicle_id,
            reason,
            start_date,
            end_date,
            cost,
            kind,
        })
    }
}

impl std::fmt::Display for Maintenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Maintenance {}] vehicle: {} | kind: {} | from: {} to: {} | cost: {} | reason: {}",
            self.id, self.vehicle_id, self.kind, self.start_date, self.end_date, self.cost, self.reason
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────
