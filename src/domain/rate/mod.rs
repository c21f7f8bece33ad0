//! Rate aggregate
//!
//! Contains the Rate entity and the rental pricing logic.

pub mod model;

pub use model::Rate;
