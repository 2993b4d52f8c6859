//! Browser events turned into [`reel_core::input::InputEvent`]s.

pub mod listeners;
pub mod messages;
mod observer;
mod queue;

pub use observer::SectionObserver;
pub use queue::{InputQueue, QueuedInput};
