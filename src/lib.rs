//! # Rental Service
//!
//! In-memory domain model for a car-rental business: fleet, branches,
//! pricing rates, the booking lifecycle and maintenance records.
//!
//! ## Architecture
//!
//! - **domain**: core business entities and rules (rates, vehicles,
//!   branches, bookings, maintenance, users)
//! - **application**: the [`RentalService`] orchestrator, which owns every
//!   entity collection and enforces cross-entity invariants
//! - **config**: TOML application configuration
//!
//! Persistence, HTTP transport and authentication live outside this crate;
//! the service consumes validated primitives and hands back plain domain
//! objects.

pub mod application;
pub mod config;
pub mod domain;

pub use application::{PaymentSummary, RentalService};
pub use config::{default_config_path, AppConfig, ConfigError};
pub use domain::{
    Booking, BookingStatus, Branch, DomainError, DomainResult, Maintenance, MaintenanceKind,
    NewUser, Rate, User, UserRole, Vehicle, VehicleKind, VehicleStatus,
};
