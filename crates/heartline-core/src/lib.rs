//! Heartline Core — shared abstractions.
//!
//! This crate defines the traits and vocabulary types that the content,
//! narrative and front-end crates agree on: time, randomness, screens,
//! user input and the effect cues sent to the platform. It contains no
//! presentation code.

pub mod clock;
pub mod effects;
pub mod error;
pub mod input;
pub mod rng;
pub mod screen;
pub mod sink;
