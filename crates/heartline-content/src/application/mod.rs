//! Loading and rendering of content.

pub mod loader;
pub mod storyboard;
