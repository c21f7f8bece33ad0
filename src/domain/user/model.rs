//! User domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Role tag carried by every user.
///
/// Only customers own a driving license, a postal address and a booking
/// history; administrators manage the fleet and carry no extra data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum UserRole {
    Customer {
        license: String,
        address: String,
        booking_ids: Vec<Uuid>,
    },
    Administrator,
}

/// Registration request for a new user.
#[derive(Debug, Clone)]
pub enum NewUser {
    Customer {
        name: String,
        email: String,
        credential: String,
        license: String,
        address: String,
    },
    Administrator {
        name: String,
        email: String,
        credential: String,
    },
}

/// A registered user of the rental system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Opaque credential; hashing and token issuance live outside the core
    #[serde(skip_serializing, default)]
    pub credential: String,
    #[serde(flatten)]
    pub role: UserRole,
}

impl User {
    pub fn new(new_user: NewUser) -> DomainResult<Self> {
        match new_user {
            NewUser::Customer {
                name,
                email,
                credential,
                license,
                address,
            } => {
                let license = license.trim().to_string();
                let address = address.trim().to_string();
                if license.is_empty() {
                    return Err(DomainError::Validation(
                        "customer license cannot be empty".to_string(),
                    ));
                }
                if address.is_empty() {
                    return Err(DomainError::Validation(
                        "customer address cannot be empty".to_string(),
                    ));
                }
                Self::with_role(
                    name,
                    email,
                    credential,
                    UserRole::Customer {
                        license,
                        address,
                        booking_ids: Vec::new(),
                    },
                )
            }
            NewUser::Administrator {
                name,
                email,
                credential,
            } => Self::with_role(name, email, credential, UserRole::Administrator),
        }
    }

    fn with_role(
        name: String,
        email: String,
        credential: String,
        role: UserRole,
    ) -> DomainResult<Self> {
        let name = name.trim().to_string();
        let email = email.trim().to_string();

        if name.is_empty() {
            return Err(DomainError::Validation(
                "user name cannot be empty".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation(format!(
                "'{}' is not a valid email",
                email
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            credential,
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Administrator)
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, UserRole::Customer { .. })
    }

    /// Append a booking to a customer's history.
    pub fn record_booking(&mut self, booking_id: Uuid) -> DomainResult<()> {
        match &mut self.role {
            UserRole::Customer { booking_ids, .. } => {
                booking_ids.push(booking_id);
                Ok(())
            }
            UserRole::Administrator => Err(DomainError::Validation(
                "administrators do not hold bookings".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.role {
            UserRole::Customer {
                license, address, ..
            } => write!(
                f,
                "[Customer {}] {} ({}) | license: {} | address: {}",
                self.id, self.name, self.email, license, address
            ),
            UserRole::Administrator => {
                write!(f, "[Admin {}] {} ({})", self.id, self.name, self.email)
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> User {
        User::new(NewUser::Customer {
            name: "Carlos".to_string(),
            email: "carlos@example.com".to_string(),
            credential: "secret".to_string(),
            license: "B1234567".to_string(),
            address: "12 Galicia Ave".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn customer_is_not_admin() {
        let u = sample_customer();
        assert!(u.is_customer());
        assert!(!u.is_admin());
    }

    #[test]
    fn administrator_is_admin() {
        let u = User::new(NewUser::Administrator {
            name: "Laura".to_string(),
            email: "laura@example.com".to_string(),
            credential: "secret".to_string(),
        })
        .unwrap();
        assert!(u.is_admin());
        assert!(!u.is_customer());
    }

    #[test]
    fn email_must_contain_at_sign() {
        let err = User::new(NewUser::Administrator {
            name: "Laura".to_string(),
            email: "laura.example.com".to_string(),
            credential: "secret".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn customer_requires_license_and_address() {
        let missing_license = User::new(NewUser::Customer {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            credential: "secret".to_string(),
            license: "  ".to_string(),
            address: "22 Barcelona St".to_string(),
        });
        assert!(missing_license.is_err());

        let missing_address = User::new(NewUser::Customer {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            credential: "secret".to_string(),
            license: "B7654321".to_string(),
            address: "".to_string(),
        });
        assert!(missing_address.is_err());
    }

    #[test]
    fn record_booking_appends_for_customers_only() {
        let mut customer = sample_customer();
        let booking = Uuid::new_v4();
        customer.record_booking(booking).unwrap();
        match &customer.role {
            UserRole::Customer { booking_ids, .. } => assert_eq!(booking_ids, &vec![booking]),
            UserRole::Administrator => unreachable!(),
        }

        let mut admin = User::new(NewUser::Administrator {
            name: "Laura".to_string(),
            email: "laura@example.com".to_string(),
            credential: "secret".to_string(),
        })
        .unwrap();
        assert!(admin.record_booking(booking).is_err());
    }
}
