//! Timed orchestration on top of the domain rules.

pub mod sequencer;
pub mod session;
