//! Section switcher: `Idle(active)` -> `Transitioning(from, to)` -> `Idle(to)`.

use log::debug;

/// Cross-fade delays. Switching is blocked for `settle_ms + finish_ms`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionTimings {
    /// From the switch request until the target is brought to the foreground.
    pub settle_ms: u64,
    /// From activation until the switcher is idle again.
    pub finish_ms: u64,
}

impl TransitionTimings {
    pub const fn new(settle_ms: u64, finish_ms: u64) -> Self {
        Self {
            settle_ms,
            finish_ms,
        }
    }

    /// No cross-fade: request, activation and completion happen together.
    pub const fn immediate() -> Self {
        Self::new(0, 0)
    }

    pub const fn total_ms(self) -> u64 {
        self.settle_ms + self.finish_ms
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self::new(200, 600)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Idle,
    Settling { from: u16, to: u16, until_ms: u64 },
    Finishing { to: u16, until_ms: u64 },
}

/// Page-wide section state snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionState {
    pub active_index: u16,
    pub is_transitioning: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchOutcome {
    Started { from: u16, to: u16 },
    AlreadyActive,
    Busy,
    OutOfRange,
}

impl SwitchOutcome {
    pub fn started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Side effect the owner must apply after [`SectionSwitcher::advance`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchStep {
    None,
    /// Bring `to` to the foreground and push `from` back.
    Activate { from: u16, to: u16 },
    /// Transition over; `to` is the idle active index.
    Completed { to: u16 },
}

/// Switch serializer. `active_index` follows the foreground item, so it
/// changes at the activation step rather than at the request.
#[derive(Clone, Copy, Debug)]
pub struct SectionSwitcher {
    timings: TransitionTimings,
    section_count: u16,
    active_index: u16,
    phase: Phase,
}

impl SectionSwitcher {
    pub const fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            section_count: 0,
            active_index: 0,
            phase: Phase::Idle,
        }
    }

    pub fn set_section_count(&mut self, section_count: u16) {
        self.section_count = section_count;
    }

    pub fn section_count(&self) -> u16 {
        self.section_count
    }

    pub fn active_index(&self) -> u16 {
        self.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Target of the running transition, if any.
    pub fn pending_target(&self) -> Option<u16> {
        match self.phase {
            Phase::Idle => None,
            Phase::Settling { to, .. } | Phase::Finishing { to, .. } => Some(to),
        }
    }

    pub fn state(&self) -> SectionState {
        SectionState {
            active_index: self.active_index,
            is_transitioning: self.is_transitioning(),
        }
    }

    /// Next index, clamped at the last section.
    pub fn next_index(&self) -> u16 {
        self.active_index
            .saturating_add(1)
            .min(self.section_count.saturating_sub(1))
    }

    /// Previous index, clamped at zero.
    pub fn previous_index(&self) -> u16 {
        self.active_index.saturating_sub(1)
    }

    pub fn request(&mut self, target: u16, now_ms: u64) -> SwitchOutcome {
        if target >= self.section_count {
            return SwitchOutcome::OutOfRange;
        }
        if self.is_transitioning() {
            debug!(
                "switch: busy, dropped target={} pending={:?}",
                target,
                self.pending_target()
            );
            return SwitchOutcome::Busy;
        }
        if target == self.active_index {
            return SwitchOutcome::AlreadyActive;
        }

        let from = self.active_index;
        debug!("switch: start {} -> {} at {}", from, target, now_ms);
        self.phase = Phase::Settling {
            from,
            to: target,
            until_ms: now_ms.saturating_add(self.timings.settle_ms),
        };
        SwitchOutcome::Started { from, to: target }
    }

    /// Move the transition forward by at most one step. Call repeatedly
    /// until it returns [`SwitchStep::None`].
    pub fn advance(&mut self, now_ms: u64) -> SwitchStep {
        match self.phase {
            Phase::Idle => SwitchStep::None,
            Phase::Settling { from, to, until_ms } => {
                if now_ms < until_ms {
                    return SwitchStep::None;
                }
                self.active_index = to;
                self.phase = Phase::Finishing {
                    to,
                    until_ms: until_ms.saturating_add(self.timings.finish_ms),
                };
                SwitchStep::Activate { from, to }
            }
            Phase::Finishing { to, until_ms } => {
                if now_ms < until_ms {
                    return SwitchStep::None;
                }
                self.phase = Phase::Idle;
                debug!("switch: idle at {} ({})", to, now_ms);
                SwitchStep::Completed { to }
            }
        }
    }
}
