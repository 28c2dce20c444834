//! Heartline — content model.
//!
//! Responsible for the personalised data a story is built from: loading it
//! from YAML or JSON, validating it up front, fingerprinting it, and
//! materialising it into a presentation-ready [`application::storyboard::Storyboard`].

pub mod application;
pub mod domain;
