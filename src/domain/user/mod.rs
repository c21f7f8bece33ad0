//! User aggregate
//!
//! Customers and administrators, discriminated by an explicit role tag.

pub mod model;

pub use model::{NewUser, User, UserRole};
