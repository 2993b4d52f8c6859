//! Staggered caption reveal and the input cooldown that follows it.

use core::ops::Range;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OverlayConfig {
    /// Delay between consecutive caption slots.
    pub stagger_ms: u64,
    /// Input stays blocked this long after the last slot appears.
    pub cooldown_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayConfig {
    pub const fn new() -> Self {
        Self {
            stagger_ms: 150,
            cooldown_ms: 2_000,
        }
    }

    pub const fn with_stagger_ms(mut self, stagger_ms: u64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub const fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InputGate {
    Open,
    /// Closed until a reveal is scheduled and completes.
    Closed,
    CoolingDown { until_ms: u64 },
}

#[derive(Debug)]
pub struct OverlayPresenter {
    config: OverlayConfig,
    slots: u8,
    revealed: u8,
    reveal_start_ms: Option<u64>,
    gate: InputGate,
}

impl OverlayPresenter {
    pub const fn new(config: OverlayConfig, slots: u8) -> Self {
        Self {
            config,
            slots,
            revealed: 0,
            reveal_start_ms: None,
            gate: InputGate::Open,
        }
    }

    pub fn slots(&self) -> u8 {
        self.slots
    }

    /// Number of leading slots currently visible.
    pub fn visible_slots(&self) -> u8 {
        self.revealed
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal_start_ms.is_some()
    }

    /// Hide every slot and cancel a pending reveal. Returns the slots that
    /// were visible and must be hidden by the host.
    pub fn hide(&mut self) -> Range<u8> {
        let was_visible = 0..self.revealed;
        self.revealed = 0;
        self.reveal_start_ms = None;
        was_visible
    }

    /// Block input until the next reveal completes and cools down.
    pub fn block_input(&mut self) {
        self.gate = InputGate::Closed;
    }

    /// Schedule slot `i` at `now + initial_delay + i * stagger`.
    pub fn show(&mut self, now_ms: u64, initial_delay_ms: u64) {
        self.block_input();
        self.revealed = 0;
        self.reveal_start_ms = Some(now_ms.saturating_add(initial_delay_ms));
    }

    /// Returns the slots that became visible since the last call.
    pub fn tick(&mut self, now_ms: u64) -> Range<u8> {
        let newly = match self.reveal_start_ms {
            Some(start) => self.reveal_due(start, now_ms),
            None => self.revealed..self.revealed,
        };

        if let InputGate::CoolingDown { until_ms } = self.gate
            && now_ms >= until_ms
        {
            self.gate = InputGate::Open;
        }
        newly
    }

    fn reveal_due(&mut self, start: u64, now_ms: u64) -> Range<u8> {
        let from = self.revealed;
        if now_ms < start {
            return from..from;
        }

        let stagger = self.config.stagger_ms;
        let elapsed = now_ms - start;
        let due = if stagger == 0 {
            self.slots
        } else {
            ((elapsed / stagger).saturating_add(1)).min(self.slots as u64) as u8
        };
        self.revealed = due.max(from);

        if self.revealed >= self.slots {
            let last_at = start + stagger * (self.slots.saturating_sub(1)) as u64;
            self.reveal_start_ms = None;
            self.gate = InputGate::CoolingDown {
                until_ms: last_at.saturating_add(self.config.cooldown_ms),
            };
            if now_ms >= last_at.saturating_add(self.config.cooldown_ms) {
                self.gate = InputGate::Open;
            }
        }
        from..self.revealed
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.gate, InputGate::Open)
    }
}
