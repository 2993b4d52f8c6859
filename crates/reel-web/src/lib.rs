//! Browser platform layer: DOM-backed implementations of the reel-core
//! traits and the page features mounted by the site entry point.

pub mod input;
pub mod media;
pub mod page;
pub mod platform;
pub mod render;
