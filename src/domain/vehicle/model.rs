//! Vehicle domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Availability status of a fleet unit.
///
/// `Reserved` covers the whole booked-out period; the `Rented` state exists
/// for callers that want to distinguish a picked-up vehicle, but nothing in
/// the booking flow requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    Reserved,
    Rented,
    Maintenance,
}

impl Default for VehicleStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "rented" => Ok(Self::Rented),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(DomainError::Validation(format!(
                "unknown vehicle status '{}'",
                other
            ))),
        }
    }
}

/// Variant-specific payload of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VehicleKind {
    Car { doors: u8, engine_type: String },
    Motorcycle { displacement_cc: u32 },
    Van { cargo_capacity_kg: Decimal },
}

/// A fleet unit owned by a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Category string used to resolve the applicable rate
    pub category: String,
    pub odometer_km: Decimal,
    pub status: VehicleStatus,
    /// Branch the vehicle is physically located at
    pub branch_id: Option<Uuid>,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        category: impl Into<String>,
        odometer_km: Decimal,
        kind: VehicleKind,
    ) -> DomainResult<Self> {
        let plate = plate.into().trim().to_string();
        let brand = brand.into().trim().to_string();
        let model = model.into().trim().to_string();
        let category = category.into().trim().to_string();

        if plate.is_empty() {
            return Err(DomainError::Validation(
                "plate cannot be empty".to_string(),
            ));
        }
        if odometer_km < Decimal::ZERO {
            return Err(DomainError::Validation(
                "odometer cannot be negative".to_string(),
            ));
        }
        if !(1990..=2035).contains(&year) {
            return Err(DomainError::Validation(format!(
                "vehicle year {} is out of range",
                year
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            plate,
            brand,
            model,
            year,
            category,
            odometer_km,
            status: VehicleStatus::default(),
            branch_id: None,
            kind,
        })
    }

    /// Overwrite the status.
    ///
    /// Any status may follow any other; there is no legality table. Booking
    /// and maintenance flows rely on this overwrite semantics (a finished
    /// maintenance releases the vehicle no matter what happened in between).
    pub fn set_status(&mut self, new_status: VehicleStatus) {
        self.status = new_status;
    }

    /// Add driven kilometres to the odometer.
    pub fn add_distance(&mut self, extra_km: Decimal) -> DomainResult<()> {
        if extra_km < Decimal::ZERO {
            return Err(DomainError::Validation(
                "added distance cannot be negative".to_string(),
            ));
        }
        self.odometer_km += extra_km;
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) - plate: {} | category: {} | km: {} | status: {}",
            self.brand, self.model, self.year, self.plate, self.category, self.odometer_km, self.status
        )?;
        match &self.kind {
            VehicleKind::Car { doors, engine_type } => {
                write!(f, " | doors: {} | engine: {}", doors, engine_type)
            }
            VehicleKind::Motorcycle { displacement_cc } => {
                write!(f, " | displacement: {}cc", displacement_cc)
            }
            VehicleKind::Van { cargo_capacity_kg } => {
                write!(f, " | cargo: {} kg", cargo_capacity_kg)
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
