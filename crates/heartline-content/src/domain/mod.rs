//! Content domain types and rules.

pub mod model;
pub mod validation;
