#![cfg_attr(not(test), no_std)]

//! Platform-agnostic state machines for the site's interactive surfaces.
//!
//! The centerpiece is [`carousel::Carousel`], a synchronized media carousel:
//! several media items play in parallel, one of them is in the foreground,
//! and wheel/touch/keyboard/slider/visibility input switches between them
//! through a single serialized `switch_to`. The hero player and the season
//! player are two configurations of the same controller.
//!
//! Nothing here touches the DOM. Hosts implement [`media::MediaElement`],
//! [`stage::Stage`] and [`input::InputProvider`] and pump
//! [`carousel::Carousel::tick`] with a millisecond timestamp.

pub mod carousel;
pub mod chrome;
pub mod contact;
pub mod input;
pub mod media;
pub mod messages;
pub mod overlay;
pub mod projects;
pub mod reveal;
pub mod router;
pub mod section;
pub mod stage;
pub mod switcher;
pub mod sync;
mod text;
