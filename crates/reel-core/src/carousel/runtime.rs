impl<M, S, IN> Carousel<M, S, IN>
where
    M: MediaElement,
    S: Stage,
    IN: InputProvider,
{
    /// Drain input, advance a running transition, reveal due captions and
    /// resync playback.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let mut changed = self.advance_transition(now_ms);
        let revealed = self.overlay.tick(now_ms);
        if !revealed.is_empty() {
            for slot in revealed {
                self.stage.set_caption_visible(slot, true);
            }
            changed = true;
        }

        let reference = self.switcher.active_index();
        self.sync.tick(&mut self.registry, reference, now_ms);

        if core::mem::take(&mut self.pending_change) || changed {
            TickResult::Changed
        } else {
            TickResult::Idle
        }
    }

    /// The single serialization point for every switch trigger.
    pub fn switch_to(&mut self, target: u16, now_ms: u64) -> SwitchOutcome {
        let outcome = self.switcher.request(target, now_ms);
        if let SwitchOutcome::Started { from, to } = outcome {
            debug!("carousel: switching {} -> {}", from, to);
            self.hide_captions();
            self.overlay.block_input();
            self.pending_change = true;
            // Zero-length timings complete within this call.
            self.advance_transition(now_ms);
        }
        outcome
    }

    pub fn next(&mut self, now_ms: u64) -> SwitchOutcome {
        let target = self.switcher.next_index();
        self.switch_to(target, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> SwitchOutcome {
        let target = self.switcher.previous_index();
        self.switch_to(target, now_ms)
    }

    /// The media element for `index` has loaded enough data to play.
    pub fn media_ready(&mut self, index: u16, now_ms: u64) -> ReadyProgress {
        let progress = self.registry.mark_ready(index);
        if progress != ReadyProgress::AllReady {
            return progress;
        }

        let report = self.sync.start_all(&mut self.registry, now_ms);
        if report.refused > 0 {
            info!(
                "carousel: {} of {} items waiting for a user gesture",
                report.refused, report.requested
            );
        }

        // A running switch reveals its own caption on completion.
        if !self.switcher.is_transitioning() {
            let active = self.switcher.active_index();
            if let Some(caption) = self.captions.get(active as usize) {
                self.stage.set_caption(caption);
            }
            self.overlay
                .show(now_ms, self.config.initial_caption_delay_ms);
        }
        self.pending_change = true;
        progress
    }

    /// An item reported `seeking`. Non-reference items are pulled back.
    pub fn media_seeking(&mut self, index: u16) -> bool {
        let reference = self.switcher.active_index();
        self.sync.on_seeking(&mut self.registry, index, reference)
    }

    /// An item reported `play`.
    pub fn media_played(&mut self) -> u16 {
        let reference = self.switcher.active_index();
        self.sync.on_play(&mut self.registry, reference)
    }

    pub fn visibility_changed(&mut self, hidden: bool) -> u16 {
        if hidden {
            return 0;
        }
        let reference = self.switcher.active_index();
        let resumed = self.sync.on_visibility_regained(&mut self.registry, reference);
        if resumed > 0 {
            debug!("carousel: page visible again, resumed {} items", resumed);
        }
        resumed
    }

    fn hide_captions(&mut self) {
        let _ = self.overlay.hide();
        // Every slot, so markup that starts visible is covered too.
        for slot in 0..self.overlay.slots() {
            self.stage.set_caption_visible(slot, false);
        }
    }

    fn advance_transition(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        loop {
            match self.switcher.advance(now_ms) {
                SwitchStep::None => break,
                SwitchStep::Activate { from, to } => self.activate(from, to),
                SwitchStep::Completed { to } => {
                    debug!("carousel: section {} active", to);
                    self.overlay.show(now_ms, self.config.caption_delay_ms);
                }
            }
            changed = true;
        }
        changed
    }

    fn activate(&mut self, from: u16, to: u16) {
        let reference_position = self.registry.position_of(from);
        let all_ready = self.registry.all_ready();

        if let Some(item) = self.registry.get_mut(from) {
            item.element.set_foreground(false);
        }

        if let Some(item) = self.registry.get_mut(to) {
            item.element.set_foreground(true);
            match self.config.activation {
                ActivationMode::RestartFromZero => item.element.seek(0.0),
                ActivationMode::MatchReference => {
                    if all_ready && let Some(position) = reference_position {
                        item.element.seek(position);
                    }
                }
            }
            let _ = item.play_logged("switch");
        }

        if let Some(caption) = self.captions.get(to as usize) {
            self.stage.set_caption(caption);
        }
        let count = self.registry.len();
        self.stage.set_selector(to, selector_fill_pct(to, count));
    }
}
