//! Synchronized media carousel: one controller for both the hero and the
//! season player, parameterized by [`CarouselConfig`].

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    input::{InputEvent, InputProvider},
    media::{MAX_MEDIA, MediaElement, MediaRegistry, ReadyProgress, RegistryError},
    overlay::{OverlayConfig, OverlayPresenter},
    router::{Axis, InputRouter, Route, RouteContext, RouterConfig, SliderScale},
    section::{CaptionData, SectionSpec},
    stage::{Stage, selector_fill_pct},
    switcher::{SectionState, SectionSwitcher, SwitchOutcome, SwitchStep, TransitionTimings},
    sync::{PlaybackSynchronizer, SyncConfig},
};

/// Caption slots of the hero: category, title, description, call to action.
pub const HERO_CAPTION_SLOTS: u8 = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    Idle,
    Changed,
}

/// Where a newly foregrounded item starts playing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivationMode {
    /// Rewind to zero; the other items follow on the next resync.
    RestartFromZero,
    /// Continue from the outgoing item's position once everything is ready.
    MatchReference,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub timings: TransitionTimings,
    pub activation: ActivationMode,
    pub router: RouterConfig,
    pub sync: SyncConfig,
    pub overlay: OverlayConfig,
    pub caption_slots: u8,
    /// Reveal delay after a switch completes.
    pub caption_delay_ms: u64,
    /// Reveal delay after the first synchronized start.
    pub initial_caption_delay_ms: u64,
}

impl CarouselConfig {
    /// Full-viewport vertical hero with cross-fades and staggered captions.
    pub const fn hero() -> Self {
        Self {
            timings: TransitionTimings::new(200, 600),
            activation: ActivationMode::RestartFromZero,
            router: RouterConfig::new(Axis::Vertical),
            sync: SyncConfig::new().with_resume_before_start(true),
            overlay: OverlayConfig::new(),
            caption_slots: HERO_CAPTION_SLOTS,
            caption_delay_ms: 400,
            initial_caption_delay_ms: 1_500,
        }
    }

    /// Season widget: instant swaps driven by a slider, icons and arrow keys.
    pub const fn season() -> Self {
        Self {
            timings: TransitionTimings::immediate(),
            activation: ActivationMode::MatchReference,
            router: RouterConfig::new(Axis::Horizontal)
                .with_wheel(None)
                .with_scroll_follows(false)
                .with_slider(SliderScale::new(0.0, 3.0)),
            sync: SyncConfig::new(),
            overlay: OverlayConfig::new().with_cooldown_ms(0),
            caption_slots: 0,
            caption_delay_ms: 0,
            initial_caption_delay_ms: 0,
        }
    }

    pub const fn with_timings(mut self, timings: TransitionTimings) -> Self {
        self.timings = timings;
        self
    }

    pub const fn with_activation(mut self, activation: ActivationMode) -> Self {
        self.activation = activation;
        self
    }

    pub const fn with_router(mut self, router: RouterConfig) -> Self {
        self.router = router;
        self
    }

    pub const fn with_sync(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }

    pub const fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    pub const fn with_caption_slots(mut self, caption_slots: u8) -> Self {
        self.caption_slots = caption_slots;
        self
    }

    pub const fn with_caption_delays(mut self, after_switch_ms: u64, initial_ms: u64) -> Self {
        self.caption_delay_ms = after_switch_ms;
        self.initial_caption_delay_ms = initial_ms;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::hero()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CarouselError {
    TooManySections,
}

impl From<RegistryError> for CarouselError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Full => Self::TooManySections,
        }
    }
}

pub struct Carousel<M, S, IN>
where
    M: MediaElement,
    S: Stage,
    IN: InputProvider,
{
    config: CarouselConfig,
    registry: MediaRegistry<M>,
    captions: Vec<CaptionData, MAX_MEDIA>,
    sync: PlaybackSynchronizer,
    switcher: SectionSwitcher,
    router: InputRouter,
    overlay: OverlayPresenter,
    stage: S,
    input: IN,
    pending_change: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

#[cfg(test)]
mod tests;
