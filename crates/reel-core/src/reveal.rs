//! Entrance animations: the landing page's first-interaction gate and the
//! reveal-on-scroll groups.

use log::debug;

use crate::input::IntersectionSample;

/// Delay between hiding the intro overlay and showing the hero frame.
pub const HERO_REVEAL_DELAY_MS: u64 = 500;

/// Class added to an element once it has been revealed.
pub const ANIMATE_CLASS: &str = "animate";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GateState {
    Waiting,
    Revealing { at_ms: u64 },
    Done,
}

/// Reacts to the first wheel, touch, click or arrow key only.
#[derive(Clone, Copy, Debug)]
pub struct FirstInteractionGate {
    delay_ms: u64,
    state: GateState,
}

impl Default for FirstInteractionGate {
    fn default() -> Self {
        Self::new(HERO_REVEAL_DELAY_MS)
    }
}

impl FirstInteractionGate {
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            state: GateState::Waiting,
        }
    }

    /// Returns true exactly once: the caller hides the intro overlay now.
    pub fn interact(&mut self, now_ms: u64) -> bool {
        if self.state != GateState::Waiting {
            return false;
        }
        debug!("reveal: first interaction at {}", now_ms);
        self.state = GateState::Revealing {
            at_ms: now_ms.saturating_add(self.delay_ms),
        };
        true
    }

    /// Returns true exactly once, when the hero container should appear.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.state {
            GateState::Revealing { at_ms } if now_ms >= at_ms => {
                self.state = GateState::Done;
                true
            }
            _ => false,
        }
    }

    pub fn has_interacted(&self) -> bool {
        self.state != GateState::Waiting
    }

    /// Time of the pending container reveal, if one is scheduled.
    pub fn pending_reveal_ms(&self) -> Option<u64> {
        match self.state {
            GateState::Revealing { at_ms } => Some(at_ms),
            _ => None,
        }
    }
}

/// Groups of marked elements revealed when they scroll into view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RevealGroup {
    Services,
    Work,
    Clients,
    Contact,
}

impl RevealGroup {
    pub const ALL: [Self; 4] = [Self::Services, Self::Work, Self::Clients, Self::Contact];

    /// Marker attribute on the animated elements.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Services => "data-services-animate",
            Self::Work => "data-work-animate",
            Self::Clients => "data-clients-animate",
            Self::Contact => "data-contact-animate",
        }
    }

    /// Container the markers are searched in; `None` means the whole document.
    pub const fn scope(self) -> Option<&'static str> {
        match self {
            Self::Services => Some(".services-title"),
            Self::Clients => Some(".clients-section"),
            Self::Work | Self::Contact => None,
        }
    }

    /// Visible fraction that triggers the reveal.
    pub const fn threshold(self) -> f32 {
        match self {
            Self::Services | Self::Clients => 0.3,
            Self::Work | Self::Contact => 0.2,
        }
    }

    /// Per-entry delay inside one observer batch.
    pub const fn stagger_ms(self) -> u64 {
        match self {
            Self::Work => 150,
            _ => 0,
        }
    }
}

/// One element to reveal after `delay_ms`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reveal {
    pub index: u16,
    pub delay_ms: u64,
}

/// Reveals for one observer callback. The stagger follows the entry's
/// position in the batch, so non-intersecting entries and entries the host
/// could not resolve (`None`) still take a slot.
pub fn plan_batch<I>(group: RevealGroup, entries: I) -> impl Iterator<Item = Reveal>
where
    I: IntoIterator<Item = Option<IntersectionSample>>,
{
    let stagger = group.stagger_ms();
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, sample)| Some((position, sample?)))
        .filter(|(_, sample)| sample.intersecting)
        .map(move |(position, sample)| Reveal {
            index: sample.index,
            delay_ms: stagger.saturating_mul(position as u64),
        })
}
