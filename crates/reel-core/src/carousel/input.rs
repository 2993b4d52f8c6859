impl<M, S, IN> Carousel<M, S, IN>
where
    M: MediaElement,
    S: Stage,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.apply_input_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("carousel: input provider error, draining stopped");
                    break;
                }
            }
        }
    }

    /// Route one event immediately, bypassing the input provider. `None`
    /// means the router ignored it.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Option<SwitchOutcome> {
        self.apply_input_event(event, now_ms)
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) -> Option<SwitchOutcome> {
        let ctx = self.route_context();
        match self.router.route(event, ctx, now_ms) {
            Route::Ignore => None,
            Route::Switch { target, scroll } => {
                let outcome = self.switch_to(target, now_ms);
                // Scroll position must not run ahead of a dropped switch.
                if scroll && outcome.started() {
                    self.stage.scroll_to_section(target);
                }
                Some(outcome)
            }
        }
    }

    fn route_context(&self) -> RouteContext {
        RouteContext {
            active: self.switcher.active_index(),
            section_count: self.registry.len(),
            accepting: self.accepts_input(),
        }
    }
}
