//! Rental service orchestrating bookings, vehicles, rates and maintenance

use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    parse_date, Booking, Branch, DomainError, DomainResult, Maintenance, MaintenanceKind, NewUser,
    Rate, User, Vehicle, VehicleKind, VehicleStatus,
};

/// Flat summary returned when a booking is closed out and paid.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSummary {
    pub booking_id: Uuid,
    pub customer_name: String,
    pub vehicle_plate: String,
    pub final_total: Decimal,
    pub payment_method: String,
    pub paid: bool,
}

/// Orchestrator and in-memory repository for the whole rental domain.
///
/// Owns every entity collection and is the sole entry point for cross-entity
/// operations; callers hand in validated primitives (ids, ISO date strings,
/// decimals) and get back plain domain objects. Lookups by id are O(1);
/// rate-by-category and user-by-email scans are O(n).
///
/// Multi-step operations are not transactional: when a later step fails,
/// earlier mutations stay committed. The design assumes one logical caller
/// at a time per entity.
pub struct RentalService {
    users: DashMap<Uuid, User>,
    branches: DashMap<Uuid, Branch>,
    vehicles: DashMap<Uuid, Vehicle>,
    rates: DashMap<Uuid, Rate>,
    bookings: DashMap<Uuid, Booking>,
    maintenance: DashMap<Uuid, Maintenance>,
}

impl RentalService {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            branches: DashMap::new(),
            vehicles: DashMap::new(),
            rates: DashMap::new(),
            bookings: DashMap::new(),
            maintenance: DashMap::new(),
        }
    }

    // ── Users ──────────────────────────────────────────────────

    /// Register a customer or an administrator.
    ///
    /// Emails are unique across the system, compared case-insensitively.
    pub fn register_user(&self, new_user: NewUser) -> DomainResult<User> {
        let email = match &new_user {
            NewUser::Customer { email, .. } | NewUser::Administrator { email, .. } => email.trim(),
        };
        if self.find_user_by_email(email).is_some() {
            return Err(DomainError::Conflict(format!(
                "a user with email '{}' is already registered",
                email
            )));
        }

        let user = User::new(new_user)?;
        info!("Registered user {} ({})", user.name, user.email);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn user(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .get(&id)
            .map(|u| u.clone())
            .ok_or_else(|| DomainError::not_found("user", id))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let needle = email.trim().to_lowercase();
        self.users
            .iter()
            .find(|u| u.email.to_lowercase() == needle)
            .map(|u| u.clone())
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.iter().map(|u| u.clone()).collect()
    }

    // ── Branches ───────────────────────────────────────────────

    pub fn add_branch(
        &self,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Branch> {
        let branch = Branch::new(name, address, phone)?;
        info!("Added branch {} ({})", branch.name, branch.id);
        self.branches.insert(branch.id, branch.clone());
        Ok(branch)
    }

    pub fn branch(&self, id: Uuid) -> DomainResult<Branch> {
        self.branches
            .get(&id)
            .map(|b| b.clone())
            .ok_or_else(|| DomainError::not_found("branch", id))
    }

    pub fn list_branches(&self) -> Vec<Branch> {
        self.branches.iter().map(|b| b.clone()).collect()
    }

    // ── Vehicles ───────────────────────────────────────────────

    /// Register a vehicle and place it in a branch's inventory.
    #[allow(clippy::too_many_arguments)]
    pub fn register_vehicle(
        &self,
        plate: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        category: impl Into<String>,
        odometer_km: Decimal,
        kind: VehicleKind,
        branch_id: Uuid,
    ) -> DomainResult<Vehicle> {
        if !self.branches.contains_key(&branch_id) {
            return Err(DomainError::not_found("branch", branch_id));
        }

        let mut vehicle = Vehicle::new(plate, brand, model, year, category, odometer_km, kind)?;
        vehicle.branch_id = Some(branch_id);
        info!("Registered vehicle {} ({})", vehicle.plate, vehicle.id);

        self.vehicles.insert(vehicle.id, vehicle.clone());
        if let Some(mut branch) = self.branches.get_mut(&branch_id) {
            branch.add_vehicle(vehicle.id);
        }
        Ok(vehicle)
    }

    pub fn vehicle(&self, id: Uuid) -> DomainResult<Vehicle> {
        self.vehicles
            .get(&id)
            .map(|v| v.clone())
            .ok_or_else(|| DomainError::not_found("vehicle", id))
    }

    pub fn list_available_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.is_available())
            .map(|v| v.clone())
            .collect()
    }

    // ── Rates ──────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn create_rate(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        daily_price: Decimal,
        included_km_per_day: Decimal,
        extra_km_cost: Decimal,
        delay_surcharge_per_day: Decimal,
        fuel_penalty: Decimal,
    ) -> DomainResult<Rate> {
        let rate = Rate::new(
            name,
            category,
            daily_price,
            included_km_per_day,
            extra_km_cost,
            delay_surcharge_per_day,
            fuel_penalty,
        )?;
        info!("Created rate '{}' for category '{}'", rate.name, rate.category);
        self.rates.insert(rate.id, rate.clone());
        Ok(rate)
    }

    /// Resolve the rate for a vehicle category.
    ///
    /// First case-insensitive exact match wins; with several rates on the
    /// same category the winner depends on map iteration order.
    pub fn rate_for_category(&self, category: &str) -> DomainResult<Rate> {
        self.rates
            .iter()
            .find(|r| r.matches_category(category))
            .map(|r| r.clone())
            .ok_or(DomainError::NotFound {
                entity: "rate",
                field: "category",
                value: category.to_string(),
            })
    }

    // ── Bookings ───────────────────────────────────────────────

    /// Create a booking for an available vehicle.
    ///
    /// The pickup branch is the vehicle's home branch; the booking is logged
    /// in both pickup and return branch (twice in the same branch when they
    /// coincide) and the vehicle moves to `Reserved`.
    pub fn create_booking(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
        start_date: &str,
        end_date: &str,
        return_branch_id: Uuid,
    ) -> DomainResult<Booking> {
        let customer = self.user(customer_id)?;
        if !customer.is_customer() {
            return Err(DomainError::Validation(format!(
                "user '{}' is not a customer",
                customer.name
            )));
        }

        let vehicle = self.vehicle(vehicle_id)?;
        if !vehicle.is_available() {
            return Err(DomainError::Validation(format!(
                "vehicle '{}' is not available (status: {})",
                vehicle.plate, vehicle.status
            )));
        }
        let pickup_branch_id = vehicle.branch_id.ok_or_else(|| {
            DomainError::Validation(format!(
                "vehicle '{}' is not assigned to a branch",
                vehicle.plate
            ))
        })?;

        if !self.branches.contains_key(&return_branch_id) {
            return Err(DomainError::not_found("branch", return_branch_id));
        }

        let rate = self.rate_for_category(&vehicle.category)?;
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;

        let booking = Booking::new(
            customer_id,
            vehicle_id,
            pickup_branch_id,
            return_branch_id,
            rate,
            start,
            end,
        )?;

        self.bookings.insert(booking.id, booking.clone());
        if let Some(mut user) = self.users.get_mut(&customer_id) {
            user.record_booking(booking.id)?;
        }
        if let Some(mut v) = self.vehicles.get_mut(&vehicle_id) {
            v.set_status(VehicleStatus::Reserved);
        }
        if let Some(mut branch) = self.branches.get_mut(&pickup_branch_id) {
            branch.log_reservation(booking.id);
        }
        if let Some(mut branch) = self.branches.get_mut(&return_branch_id) {
            branch.log_reservation(booking.id);
        }

        info!(
            "Created booking {} for vehicle '{}' ({} days, estimated {})",
            booking.id, vehicle.plate, booking.duration_days, booking.estimated_total
        );
        Ok(booking)
    }

    pub fn booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.bookings
            .get(&id)
            .map(|b| b.clone())
            .ok_or_else(|| DomainError::not_found("booking", id))
    }

    /// Close out a booking with real usage data, hand the vehicle back and
    /// register the payment.
    pub fn finalize_booking(
        &self,
        booking_id: Uuid,
        distance_travelled: Decimal,
        delay_days: i64,
        fuel_returned_full: bool,
        payment_method: &str,
    ) -> DomainResult<PaymentSummary> {
        let mut booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| DomainError::not_found("booking", booking_id))?;

        let final_total = booking.finalize(distance_travelled, delay_days, fuel_returned_full)?;

        // The vehicle comes back on the spot: odometer first, then release.
        let vehicle_plate = {
            let mut vehicle = self
                .vehicles
                .get_mut(&booking.vehicle_id)
                .ok_or_else(|| DomainError::not_found("vehicle", booking.vehicle_id))?;
            vehicle.add_distance(distance_travelled)?;
            vehicle.set_status(VehicleStatus::Available);
            vehicle.plate.clone()
        };

        booking.register_payment(payment_method)?;

        let customer_name = self
            .users
            .get(&booking.customer_id)
            .map(|u| u.name.clone())
            .ok_or_else(|| DomainError::not_found("user", booking.customer_id))?;

        info!(
            "Finalized booking {}: {} charged {} ({})",
            booking.id, customer_name, final_total, payment_method
        );

        Ok(PaymentSummary {
            booking_id: booking.id,
            customer_name,
            vehicle_plate,
            final_total,
            payment_method: payment_method.to_string(),
            paid: booking.paid,
        })
    }

    /// Cancel an active booking and release its vehicle.
    pub fn cancel_booking(&self, booking_id: Uuid) -> DomainResult<Booking> {
        let mut booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| DomainError::not_found("booking", booking_id))?;
        booking.cancel()?;

        if let Some(mut vehicle) = self.vehicles.get_mut(&booking.vehicle_id) {
            vehicle.set_status(VehicleStatus::Available);
        }

        info!("Cancelled booking {}", booking.id);
        Ok(booking.clone())
    }

    // ── Maintenance ────────────────────────────────────────────

    /// Open a maintenance record, taking the vehicle off the fleet.
    pub fn register_maintenance(
        &self,
        vehicle_id: Uuid,
        reason: impl Into<String>,
        start_date: &str,
        end_date: &str,
        cost: Decimal,
        kind: MaintenanceKind,
    ) -> DomainResult<Maintenance> {
        if !self.vehicles.contains_key(&vehicle_id) {
            return Err(DomainError::not_found("vehicle", vehicle_id));
        }

        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        let record = Maintenance::new(vehicle_id, reason, start, end, cost, kind)?;

        self.maintenance.insert(record.id, record.clone());
        if let Some(mut vehicle) = self.vehicles.get_mut(&vehicle_id) {
            vehicle.set_status(VehicleStatus::Maintenance);
        }

        info!(
            "Opened {} maintenance {} for vehicle {}",
            record.kind, record.id, vehicle_id
        );
        Ok(record)
    }

    /// Close a maintenance record and hand the vehicle back, whatever state
    /// it moved through in between.
    pub fn finalize_maintenance(&self, id: Uuid) -> DomainResult<Maintenance> {
        let record = self
            .maintenance
            .get(&id)
            .map(|m| m.clone())
            .ok_or_else(|| DomainError::not_found("maintenance", id))?;

        if let Some(mut vehicle) = self.vehicles.get_mut(&record.vehicle_id) {
            vehicle.set_status(VehicleStatus::Available);
        }

        info!("Closed maintenance {} for vehicle {}", record.id, record.vehicle_id);
        Ok(record)
    }

    pub fn maintenance(&self, id: Uuid) -> DomainResult<Maintenance> {
        self.maintenance
            .get(&id)
            .map(|m| m.clone())
            .ok_or_else(|| DomainError::not_found("maintenance", id))
    }
}

impl Default for RentalService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────
