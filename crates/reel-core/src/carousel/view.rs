impl<M, S, IN> Carousel<M, S, IN>
where
    M: MediaElement,
    S: Stage,
    IN: InputProvider,
{
    pub fn new(config: CarouselConfig, stage: S, input: IN) -> Self {
        Self {
            config,
            registry: MediaRegistry::new(),
            captions: Vec::new(),
            sync: PlaybackSynchronizer::new(config.sync),
            switcher: SectionSwitcher::new(config.timings),
            router: InputRouter::new(config.router),
            overlay: OverlayPresenter::new(config.overlay, config.caption_slots),
            stage,
            input,
            pending_change: false,
        }
    }

    /// Register one section in display order. The first section starts in
    /// the foreground.
    pub fn add_section(&mut self, spec: SectionSpec<'_>, mut element: M) -> Result<u16, CarouselError> {
        if self.captions.is_full() {
            return Err(CarouselError::TooManySections);
        }

        let active = self.switcher.active_index();
        let next_index = self.registry.len();
        element.set_foreground(next_index == active);

        let index = self.registry.register(spec.source_url, element)?;
        let caption = spec.caption();
        if index == active {
            self.stage.set_caption(&caption);
        }
        if self.captions.push(caption).is_err() {
            return Err(CarouselError::TooManySections);
        }

        let count = self.registry.len();
        self.switcher.set_section_count(count);
        self.stage.set_selector(active, selector_fill_pct(active, count));
        debug!("carousel: section {} registered", index);
        Ok(index)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn section_count(&self) -> u16 {
        self.registry.len()
    }

    pub fn active_index(&self) -> u16 {
        self.switcher.active_index()
    }

    pub fn section_state(&self) -> SectionState {
        self.switcher.state()
    }

    pub fn is_playing(&self) -> bool {
        self.sync.is_started()
    }

    /// No transition running and the caption cooldown has expired.
    pub fn accepts_input(&self) -> bool {
        !self.switcher.is_transitioning() && self.overlay.accepts_input()
    }

    pub fn caption(&self, index: u16) -> Option<&CaptionData> {
        self.captions.get(index as usize)
    }

    pub fn visible_caption_slots(&self) -> u8 {
        self.overlay.visible_slots()
    }

    pub fn registry(&self) -> &MediaRegistry<M> {
        &self.registry
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
