//! Pure narrative rules. Nothing in here sleeps or touches a sink.

pub mod ambient;
pub mod decline;
pub mod gesture;
pub mod timing;
pub mod typing;
