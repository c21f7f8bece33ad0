//! Branch aggregate
//!
//! A physical rental location with its vehicle inventory and reservation log.

pub mod model;

pub use model::Branch;
