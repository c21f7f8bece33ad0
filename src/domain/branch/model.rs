//! Branch domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// A rental location.
///
/// Both collections are append-only logs: vehicles stay in the inventory for
/// the branch's lifetime, and every reservation that picks up or returns here
/// is recorded. A booking whose pickup and return branch coincide appears in
/// the log twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub vehicle_ids: Vec<Uuid>,
    pub reservation_ids: Vec<Uuid>,
}

impl Branch {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let address = address.into().trim().to_string();
        let phone = phone.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::Validation(
                "branch name cannot be empty".to_string(),
            ));
        }
        if address.is_empty() {
            return Err(DomainError::Validation(
                "branch address cannot be empty".to_string(),
            ));
        }
        if phone.is_empty() {
            return Err(DomainError::Validation(
                "branch phone cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            address,
            phone,
            vehicle_ids: Vec::new(),
            reservation_ids: Vec::new(),
        })
    }

    pub fn add_vehicle(&mut self, vehicle_id: Uuid) {
        self.vehicle_ids.push(vehicle_id);
    }

    pub fn log_reservation(&mut self, booking_id: Uuid) {
        self.reservation_ids.push(booking_id);
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Branch {}] {} | address: {} | phone: {} | vehicles: {} | reservations: {}",
            self.id,
            self.name,
            self.address,
            self.phone,
            self.vehicle_ids.len(),
            self.reservation_ids.len()
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_branch_starts_empty() {
        let b = Branch::new("Downtown", "45 Angel St", "981 000 123").unwrap();
        assert!(b.vehicle_ids.is_empty());
        assert!(b.reservation_ids.is_empty());
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert!(Branch::new("  ", "45 Angel St", "981 000 123").is_err());
        assert!(Branch::new("Downtown", "", "981 000 123").is_err());
        assert!(Branch::new("Downtown", "45 Angel St", "  ").is_err());
    }

    #[test]
    fn reservation_log_keeps_duplicates() {
        let mut b = Branch::new("Downtown", "45 Angel St", "981 000 123").unwrap();
        let booking = Uuid::new_v4();
        b.log_reservation(booking);
        b.log_reservation(booking);
        assert_eq!(b.reservation_ids, vec![booking, booking]);
    }

    #[test]
    fn inventory_appends_in_order() {
        let mut b = Branch::new("Downtown", "45 Angel St", "981 000 123").unwrap();
        let v1 = Uuid::new_v4();
        let v2 = Uuid::new_v4();
        b.add_vehicle(v1);
        b.add_vehicle(v2);
        assert_eq!(b.vehicle_ids, vec![v1, v2]);
    }
}
