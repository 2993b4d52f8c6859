//! Keeps parallel media items aligned to one reference item.

use log::{debug, info};

use crate::media::{MediaElement, MediaRegistry};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncConfig {
    pub interval_ms: u64,
    /// Allowed drift in seconds before an item is snapped.
    pub tolerance: f32,
    /// Resume paused items on visibility regain even before the
    /// synchronized start.
    pub resume_before_start: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncConfig {
    pub const fn new() -> Self {
        Self {
            interval_ms: 100,
            tolerance: 0.1,
            resume_before_start: false,
        }
    }

    pub const fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub const fn with_resume_before_start(mut self, resume: bool) -> Self {
        self.resume_before_start = resume;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StartReport {
    pub requested: u16,
    pub refused: u16,
}

#[derive(Debug)]
pub struct PlaybackSynchronizer {
    config: SyncConfig,
    started: bool,
    next_resync_ms: u64,
}

impl PlaybackSynchronizer {
    pub const fn new(config: SyncConfig) -> Self {
        Self {
            config,
            started: false,
            next_resync_ms: 0,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Rewind every item and request playback. Called once, on all-ready.
    /// Refusals are logged per item and not retried.
    pub fn start_all<M>(&mut self, registry: &mut MediaRegistry<M>, now_ms: u64) -> StartReport
    where
        M: MediaElement,
    {
        info!("sync: all {} items ready, starting playback", registry.len());

        let mut report = StartReport::default();
        for item in registry.items_mut() {
            item.element.seek(0.0);
            report.requested += 1;
            if !item.play_logged("autoplay") {
                report.refused += 1;
            }
        }

        self.started = true;
        self.next_resync_ms = now_ms.saturating_add(self.config.interval_ms);
        report
    }

    /// Snap every non-reference item that drifted past the tolerance.
    /// Returns how many items were moved.
    pub fn resync<M>(&self, registry: &mut MediaRegistry<M>, reference: u16) -> u16
    where
        M: MediaElement,
    {
        if !self.started {
            return 0;
        }
        let Some(target) = registry.position_of(reference) else {
            return 0;
        };

        let mut snapped = 0;
        for item in registry.items_mut() {
            if item.index == reference {
                continue;
            }
            if (item.element.position() - target).abs() > self.config.tolerance {
                item.element.seek(target);
                snapped += 1;
            }
        }
        if snapped > 0 {
            debug!(
                "sync: snapped {} items to reference={} at {}",
                snapped, reference, target
            );
        }
        snapped
    }

    /// Periodic entry point. Runs [`Self::resync`] when the interval elapsed.
    pub fn tick<M>(&mut self, registry: &mut MediaRegistry<M>, reference: u16, now_ms: u64) -> u16
    where
        M: MediaElement,
    {
        if !self.started || now_ms < self.next_resync_ms {
            return 0;
        }
        // Schedule from `now` so a throttled background tab does not burst.
        self.next_resync_ms = now_ms.saturating_add(self.config.interval_ms.max(1));
        self.resync(registry, reference)
    }

    /// A non-reference item started seeking on its own: pull it back.
    pub fn on_seeking<M>(&self, registry: &mut MediaRegistry<M>, index: u16, reference: u16) -> bool
    where
        M: MediaElement,
    {
        if !self.started || index == reference {
            return false;
        }
        let Some(target) = registry.position_of(reference) else {
            return false;
        };
        let Some(item) = registry.get_mut(index) else {
            return false;
        };
        if (item.element.position() - target).abs() <= self.config.tolerance {
            return false;
        }
        item.element.seek(target);
        true
    }

    /// An item resumed playing.
    pub fn on_play<M>(&self, registry: &mut MediaRegistry<M>, reference: u16) -> u16
    where
        M: MediaElement,
    {
        self.resync(registry, reference)
    }

    /// The page became visible again: resume paused items, then resync.
    /// Returns how many paused items were asked to resume. Before the
    /// synchronized start this only resumes when the config allows it.
    pub fn on_visibility_regained<M>(&self, registry: &mut MediaRegistry<M>, reference: u16) -> u16
    where
        M: MediaElement,
    {
        if !self.started && !self.config.resume_before_start {
            return 0;
        }

        let mut resumed = 0;
        for item in registry.items_mut() {
            if item.element.is_paused() {
                resumed += 1;
                let _ = item.play_logged("resume");
            }
        }
        self.resync(registry, reference);
        resumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fake::FakeMedia;

    fn ready_registry(positions: &[f32]) -> MediaRegistry<FakeMedia> {
        let mut registry = MediaRegistry::new();
        for (i, _) in positions.iter().enumerate() {
            registry.register("clip.mp4", FakeMedia::new()).unwrap();
            registry.mark_ready(i as u16);
        }
        registry
    }

    fn set_positions(registry: &mut MediaRegistry<FakeMedia>, positions: &[f32]) {
        for (item, position) in registry.items_mut().iter_mut().zip(positions) {
            item.element.position = *position;
        }
    }

    #[test]
    fn start_all_rewinds_and_counts_refusals() {
        let mut registry = ready_registry(&[0.0, 0.0, 0.0]);
        set_positions(&mut registry, &[3.0, 1.0, 2.0]);
        registry.get_mut(1).unwrap().element.refuse_play = true;

        let mut sync = PlaybackSynchronizer::new(SyncConfig::default());
        let report = sync.start_all(&mut registry, 0);

        assert_eq!(report, StartReport { requested: 3, refused: 1 });
        assert!(registry.items().iter().all(|i| i.element.position == 0.0));
        assert!(registry.get(1).unwrap().element.paused);
        assert!(!registry.get(0).unwrap().element.paused);
    }

    #[test]
    fn nothing_happens_before_start() {
        let mut registry = ready_registry(&[0.0, 0.0]);
        set_positions(&mut registry, &[0.0, 5.0]);
        let mut sync = PlaybackSynchronizer::new(SyncConfig::default());

        assert_eq!(sync.tick(&mut registry, 0, 1_000), 0);
        assert_eq!(registry.get(1).unwrap().element.position, 5.0);
    }

    #[test]
    fn tick_snaps_drifted_items_within_tolerance_after_interval() {
        let mut registry = ready_registry(&[0.0; 4]);
        let mut sync = PlaybackSynchronizer::new(SyncConfig::default());
        sync.start_all(&mut registry, 0);

        set_positions(&mut registry, &[1.50, 1.55, 1.90, 0.20]);
        assert_eq!(sync.tick(&mut registry, 0, 50), 0, "interval not elapsed");
        assert_eq!(sync.tick(&mut registry, 0, 100), 2);

        let reference = registry.get(0).unwrap().element.position;
        for item in registry.items() {
            assert!((item.element.position - reference).abs() <= 0.1);
        }
        // 1.55 was inside tolerance and left alone.
        assert_eq!(registry.get(1).unwrap().element.seeks, 1);
    }

    #[test]
    fn seeking_non_reference_item_is_pulled_back() {
        let mut registry = ready_registry(&[0.0; 3]);
        let mut sync = PlaybackSynchronizer::new(SyncConfig::default());
        sync.start_all(&mut registry, 0);
        set_positions(&mut registry, &[4.0, 4.0, 9.0]);

        assert!(!sync.on_seeking(&mut registry, 1, 1), "reference may seek freely");
        assert!(sync.on_seeking(&mut registry, 2, 1));
        assert_eq!(registry.get(2).unwrap().element.position, 4.0);
    }

    #[test]
    fn visibility_regained_resumes_paused_items() {
        let mut registry = ready_registry(&[0.0; 3]);
        let mut sync = PlaybackSynchronizer::new(SyncConfig::default());
        sync.start_all(&mut registry, 0);
        registry.get_mut(2).unwrap().element.paused = true;
        set_positions(&mut registry, &[7.0, 7.0, 2.0]);

        assert_eq!(sync.on_visibility_regained(&mut registry, 0), 1);
        assert!(!registry.get(2).unwrap().element.paused);
        assert_eq!(registry.get(2).unwrap().element.position, 7.0);
    }

    #[test]
    fn visibility_before_start_follows_config() {
        let mut registry = ready_registry(&[0.0; 2]);
        let gated = PlaybackSynchronizer::new(SyncConfig::default());
        assert_eq!(gated.on_visibility_regained(&mut registry, 0), 0);
        assert!(registry.items().iter().all(|item| item.element.paused));

        let eager = PlaybackSynchronizer::new(SyncConfig::new().with_resume_before_start(true));
        set_positions(&mut registry, &[3.0, 0.5]);
        assert_eq!(eager.on_visibility_regained(&mut registry, 0), 2);
        assert!(registry.items().iter().all(|item| !item.element.paused));
        // No resync before the synchronized start.
        assert_eq!(registry.get(1).unwrap().element.position, 0.5);
    }
}
