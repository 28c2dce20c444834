//! Heartline — narrative orchestration.
//!
//! Responsible for turning a content model into a timed performance:
//! message timings, swipe and decline handling, simulated typing, ambient
//! effects, and the strictly ordered sequencer that plays them through the
//! effect sinks.

pub mod application;
pub mod domain;
