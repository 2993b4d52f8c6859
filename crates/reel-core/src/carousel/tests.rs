use std::collections::VecDeque;

use super::*;
use crate::{
    input::{Key, mock::MockInput},
    media::fake::FakeMedia,
    messages::FrameMessage,
};

#[derive(Default)]
struct ScriptedInput {
    events: VecDeque<InputEvent>,
    fail_next: bool,
}

impl ScriptedInput {
    fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl InputProvider for ScriptedInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if core::mem::take(&mut self.fail_next) {
            return Err(());
        }
        Ok(self.events.pop_front())
    }
}

#[derive(Default)]
struct RecordingStage {
    title: std::string::String,
    caption_updates: u32,
    visible: [bool; 4],
    scrolled: std::vec::Vec<u16>,
    selector: Option<(u16, u8)>,
}

impl RecordingStage {
    fn visible_count(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }
}

impl Stage for RecordingStage {
    fn set_caption(&mut self, caption: &CaptionData) {
        self.title = caption.title.as_str().into();
        self.caption_updates += 1;
    }

    fn set_caption_visible(&mut self, slot: u8, visible: bool) {
        if let Some(entry) = self.visible.get_mut(slot as usize) {
            *entry = visible;
        }
    }

    fn scroll_to_section(&mut self, index: u16) {
        self.scrolled.push(index);
    }

    fn set_selector(&mut self, index: u16, fill_pct: u8) {
        self.selector = Some((index, fill_pct));
    }
}

type TestCarousel = Carousel<FakeMedia, RecordingStage, ScriptedInput>;

const SECTIONS: [SectionSpec<'static>; 4] = [
    SectionSpec {
        source_url: "videos/brand.mp4",
        category: "Branding",
        title: "Identity",
        description: "Logos and systems.",
    },
    SectionSpec {
        source_url: "videos/motion.mp4",
        category: "Motion",
        title: "Film",
        description: "Moving pictures.",
    },
    SectionSpec {
        source_url: "videos/web.mp4",
        category: "Digital",
        title: "Web",
        description: "Sites and apps.",
    },
    SectionSpec {
        source_url: "videos/print.mp4",
        category: "Print",
        title: "Paper",
        description: "Books and posters.",
    },
];

/// Time at which the hero accepts input after the first reveal.
const HERO_OPEN_MS: u64 = 4_000;

fn carousel(config: CarouselConfig) -> TestCarousel {
    let mut carousel = Carousel::new(config, RecordingStage::default(), ScriptedInput::default());
    for spec in SECTIONS {
        carousel.add_section(spec, FakeMedia::new()).unwrap();
    }
    carousel
}

fn mark_all_ready(carousel: &mut TestCarousel, now_ms: u64) {
    for index in 0..carousel.section_count() {
        carousel.media_ready(index, now_ms);
    }
}

fn run(carousel: &mut TestCarousel, from_ms: u64, to_ms: u64) {
    let mut now = from_ms;
    while now <= to_ms {
        carousel.tick(now);
        now += 50;
    }
}

/// Hero with all media playing and input open at [`HERO_OPEN_MS`].
fn open_hero() -> TestCarousel {
    let mut hero = carousel(CarouselConfig::hero());
    mark_all_ready(&mut hero, 0);
    run(&mut hero, 0, HERO_OPEN_MS - 50);
    assert!(hero.accepts_input());
    hero
}

fn foreground(carousel: &TestCarousel) -> std::vec::Vec<u16> {
    carousel
        .registry()
        .items()
        .iter()
        .filter(|item| item.element.foreground)
        .map(|item| item.index)
        .collect()
}

fn position(carousel: &TestCarousel, index: u16) -> f32 {
    carousel.registry().position_of(index).unwrap()
}

fn set_position(carousel: &mut TestCarousel, index: u16, position: f32) {
    carousel.registry.get_mut(index).unwrap().element.position = position;
}

#[test]
fn first_section_starts_in_foreground_with_its_caption() {
    let hero = carousel(CarouselConfig::hero());
    assert_eq!(foreground(&hero), [0]);
    assert_eq!(hero.stage().title, "Identity");
    assert_eq!(hero.stage().selector, Some((0, 0)));
    assert_eq!(
        hero.section_state(),
        SectionState {
            active_index: 0,
            is_transitioning: false
        }
    );
}

#[test]
fn all_ready_starts_playback_once_and_reveals_captions() {
    let mut hero = carousel(CarouselConfig::hero());
    for index in 0..3 {
        assert!(matches!(hero.media_ready(index, 0), ReadyProgress::Waiting { .. }));
    }
    assert!(!hero.is_playing());
    assert_eq!(hero.media_ready(3, 10), ReadyProgress::AllReady);
    assert!(hero.is_playing());
    assert_eq!(hero.media_ready(3, 20), ReadyProgress::Unchanged);

    for item in hero.registry().items() {
        assert_eq!(item.element.play_requests, 1);
        assert!(!item.element.paused);
    }

    hero.tick(1_509);
    assert_eq!(hero.stage().visible_count(), 0);
    hero.tick(1_510);
    assert_eq!(hero.stage().visible_count(), 1);
    hero.tick(1_960);
    assert_eq!(hero.stage().visible_count(), 4);

    // Input opens 2000 ms after the last slot.
    hero.tick(3_959);
    assert!(!hero.accepts_input());
    hero.tick(3_960);
    assert!(hero.accepts_input());
}

#[test]
fn wheel_down_switches_to_next_section_after_transition() {
    let mut hero = open_hero();
    for index in 0..4 {
        set_position(&mut hero, index, 5.0);
    }

    hero.input_mut().push(InputEvent::Wheel { delta_y: 50.0 });
    assert_eq!(hero.tick(HERO_OPEN_MS), TickResult::Changed);
    assert_eq!(hero.stage().scrolled, [1]);
    assert!(hero.section_state().is_transitioning);
    assert_eq!(hero.stage().visible_count(), 0);
    assert_eq!(foreground(&hero), [0]);

    hero.tick(HERO_OPEN_MS + 199);
    assert_eq!(hero.active_index(), 0);

    hero.tick(HERO_OPEN_MS + 200);
    assert_eq!(hero.active_index(), 1);
    assert_eq!(foreground(&hero), [1]);
    assert_eq!(position(&hero, 1), 0.0);
    let item = hero.registry().get(1).unwrap();
    assert_eq!(item.element.play_requests, 2);
    assert!(!item.element.paused);
    assert_eq!(hero.stage().title, "Film");
    assert_eq!(hero.stage().selector, Some((1, 33)));

    hero.tick(HERO_OPEN_MS + 799);
    assert!(hero.section_state().is_transitioning);
    hero.tick(HERO_OPEN_MS + 800);
    assert_eq!(
        hero.section_state(),
        SectionState {
            active_index: 1,
            is_transitioning: false
        }
    );

    // Captions come back 400 ms after completion.
    hero.tick(HERO_OPEN_MS + 1_199);
    assert_eq!(hero.stage().visible_count(), 0);
    hero.tick(HERO_OPEN_MS + 1_200);
    assert_eq!(hero.stage().visible_count(), 1);
}

#[test]
fn every_target_reaches_idle_with_one_foreground_item() {
    for target in 1..4 {
        let mut hero = open_hero();
        set_position(&mut hero, target, 3.0);

        assert!(hero.switch_to(target, HERO_OPEN_MS).started());
        run(&mut hero, HERO_OPEN_MS, HERO_OPEN_MS + 800);

        assert_eq!(
            hero.section_state(),
            SectionState {
                active_index: target,
                is_transitioning: false
            }
        );
        assert_eq!(foreground(&hero), [target]);
        assert!(position(&hero, target) <= 0.1);
    }
}

#[test]
fn switching_to_active_index_is_idempotent() {
    let mut hero = open_hero();
    let updates = hero.stage().caption_updates;

    assert_eq!(hero.switch_to(0, HERO_OPEN_MS), SwitchOutcome::AlreadyActive);
    assert!(!hero.section_state().is_transitioning);
    assert_eq!(hero.stage().visible_count(), 4);
    assert_eq!(hero.stage().caption_updates, updates);
    assert!(hero.accepts_input());
}

#[test]
fn second_request_during_transition_is_dropped() {
    let mut hero = open_hero();

    assert!(hero.switch_to(2, HERO_OPEN_MS).started());
    assert_eq!(hero.switch_to(3, HERO_OPEN_MS + 100), SwitchOutcome::Busy);
    hero.input_mut().push(InputEvent::Wheel { delta_y: 120.0 });
    hero.input_mut().push(InputEvent::Key(Key::ArrowDown));
    run(&mut hero, HERO_OPEN_MS + 100, HERO_OPEN_MS + 800);

    assert_eq!(hero.active_index(), 2);
    assert_eq!(foreground(&hero), [2]);
    // The dropped key press never scrolled ahead of the media.
    assert!(hero.stage().scrolled.is_empty());
}

#[test]
fn arrow_up_at_first_section_is_clamped() {
    let mut hero = open_hero();
    hero.input_mut().push(InputEvent::Key(Key::ArrowUp));

    assert_eq!(hero.tick(HERO_OPEN_MS), TickResult::Idle);
    assert_eq!(hero.active_index(), 0);
    assert!(!hero.section_state().is_transitioning);
    assert!(hero.stage().scrolled.is_empty());
    assert_eq!(hero.previous(HERO_OPEN_MS), SwitchOutcome::AlreadyActive);
}

#[test]
fn next_at_last_section_is_clamped() {
    let mut hero = open_hero();
    assert!(hero.switch_to(3, HERO_OPEN_MS).started());
    run(&mut hero, HERO_OPEN_MS, HERO_OPEN_MS + 800);

    assert_eq!(hero.next(HERO_OPEN_MS + 900), SwitchOutcome::AlreadyActive);
    assert_eq!(hero.active_index(), 3);
}

#[test]
fn intersection_path_switches_without_scrolling() {
    let mut hero = open_hero();
    hero.input_mut().push(InputEvent::SectionVisible(2));
    hero.tick(HERO_OPEN_MS);
    run(&mut hero, HERO_OPEN_MS, HERO_OPEN_MS + 800);

    assert_eq!(hero.active_index(), 2);
    assert!(hero.stage().scrolled.is_empty());
}

#[test]
fn resync_snaps_drifted_items_to_active_reference() {
    let mut hero = carousel(CarouselConfig::hero());
    mark_all_ready(&mut hero, 0);

    set_position(&mut hero, 0, 2.0);
    set_position(&mut hero, 1, 2.05);
    set_position(&mut hero, 2, 3.0);
    set_position(&mut hero, 3, 0.5);

    hero.tick(99);
    assert_eq!(position(&hero, 2), 3.0);
    hero.tick(100);

    for index in 1..4 {
        assert!((position(&hero, index) - position(&hero, 0)).abs() <= 0.1);
    }
    assert_eq!(position(&hero, 1), 2.05, "within tolerance is left alone");
}

#[test]
fn seeking_item_is_pulled_back_only_after_start() {
    let mut hero = carousel(CarouselConfig::hero());
    set_position(&mut hero, 3, 9.0);
    assert!(!hero.media_seeking(3));

    mark_all_ready(&mut hero, 0);
    set_position(&mut hero, 0, 1.0);
    set_position(&mut hero, 3, 9.0);
    assert!(hero.media_seeking(3));
    assert_eq!(position(&hero, 3), 1.0);
    assert!(!hero.media_seeking(0), "reference item may seek freely");
}

#[test]
fn visibility_regain_resumes_paused_items() {
    let mut hero = carousel(CarouselConfig::hero());
    mark_all_ready(&mut hero, 0);
    hero.registry.get_mut(2).unwrap().element.paused = true;

    assert_eq!(hero.visibility_changed(true), 0);
    assert_eq!(hero.visibility_changed(false), 1);
    assert!(!hero.registry().get(2).unwrap().element.paused);
}

#[test]
fn refused_autoplay_is_not_fatal() {
    let mut hero = Carousel::new(
        CarouselConfig::hero(),
        RecordingStage::default(),
        ScriptedInput::default(),
    );
    for (index, spec) in SECTIONS.into_iter().enumerate() {
        let mut media = FakeMedia::new();
        media.refuse_play = index == 1;
        hero.add_section(spec, media).unwrap();
    }
    mark_all_ready(&mut hero, 0);

    assert!(hero.is_playing());
    assert!(hero.registry().get(1).unwrap().element.paused);
    run(&mut hero, 0, HERO_OPEN_MS - 50);

    assert!(hero.switch_to(1, HERO_OPEN_MS).started());
    run(&mut hero, HERO_OPEN_MS, HERO_OPEN_MS + 800);
    assert_eq!(hero.active_index(), 1);
    assert_eq!(hero.registry().get(1).unwrap().element.play_requests, 2);
}

#[test]
fn input_error_stops_draining_until_next_tick() {
    let mut hero = open_hero();
    hero.input_mut().push(InputEvent::Key(Key::ArrowDown));
    hero.input_mut().fail_next = true;

    hero.tick(HERO_OPEN_MS);
    assert!(!hero.section_state().is_transitioning);
    hero.tick(HERO_OPEN_MS + 50);
    assert!(hero.section_state().is_transitioning);
    assert_eq!(hero.stage().scrolled, [1]);
}

#[test]
fn season_switches_immediately_and_keeps_playback_position() {
    let mut season = Carousel::new(
        CarouselConfig::season(),
        RecordingStage::default(),
        ScriptedInput::default(),
    );
    for spec in SECTIONS {
        season
            .add_section(SectionSpec::media_only(spec.source_url), FakeMedia::new())
            .unwrap();
    }
    mark_all_ready(&mut season, 0);
    season.tick(0);
    set_position(&mut season, 0, 7.5);

    season.input_mut().push(InputEvent::Slider { value: 1.8 });
    season.tick(10);
    assert_eq!(season.active_index(), 2);
    assert!(!season.section_state().is_transitioning);
    assert_eq!(foreground(&season), [2]);
    assert_eq!(position(&season, 2), 7.5);
    assert_eq!(season.stage().selector, Some((2, 66)));
    assert!(season.stage().scrolled.is_empty());

    season.input_mut().push(InputEvent::Key(Key::ArrowRight));
    season.input_mut().push(InputEvent::Key(Key::ArrowRight));
    season.input_mut().push(InputEvent::Wheel { delta_y: -80.0 });
    season.tick(20);
    assert_eq!(season.active_index(), 3);

    season.input_mut().push(InputEvent::Select(0));
    season.tick(30);
    assert_eq!(season.active_index(), 0);
    assert_eq!(season.stage().selector, Some((0, 0)));
}

#[test]
fn registering_past_capacity_fails() {
    let mut hero = Carousel::new(
        CarouselConfig::hero(),
        RecordingStage::default(),
        ScriptedInput::default(),
    );
    for _ in 0..MAX_MEDIA {
        hero.add_section(SectionSpec::media_only("clip.mp4"), FakeMedia::new())
            .unwrap();
    }
    assert_eq!(
        hero.add_section(SectionSpec::media_only("clip.mp4"), FakeMedia::new()),
        Err(CarouselError::TooManySections)
    );
    assert_eq!(hero.section_count(), MAX_MEDIA as u16);
}

#[test]
fn direct_calls_drive_a_carousel_without_input() {
    let mut season = Carousel::new(
        CarouselConfig::season(),
        RecordingStage::default(),
        MockInput::new(),
    );
    for spec in SECTIONS.iter().take(3) {
        season
            .add_section(SectionSpec::media_only(spec.source_url), FakeMedia::new())
            .unwrap();
    }
    assert_eq!(season.tick(0), TickResult::Idle);

    assert!(season.next(10).started());
    assert!(season.next(20).started());
    assert!(!season.next(30).started());
    assert_eq!(season.active_index(), 2);

    assert!(season.previous(40).started());
    assert_eq!(season.active_index(), 1);
    assert_eq!(season.stage().selector, Some((1, 50)));
}

#[test]
fn hero_visibility_resumes_before_all_ready() {
    let mut hero = carousel(CarouselConfig::hero());
    hero.media_ready(0, 0);
    assert!(!hero.is_playing());

    assert_eq!(hero.visibility_changed(false), 4);
    assert!(hero.registry().items().iter().all(|item| !item.element.paused));
}

#[test]
fn season_waits_for_all_ready_before_matching_position() {
    let mut season = Carousel::new(
        CarouselConfig::season(),
        RecordingStage::default(),
        ScriptedInput::default(),
    );
    season
        .add_section(SectionSpec::media_only("a.mp4"), FakeMedia::at(4.0))
        .unwrap();
    for spec in SECTIONS.iter().skip(1) {
        season
            .add_section(SectionSpec::media_only(spec.source_url), FakeMedia::new())
            .unwrap();
    }
    season.media_ready(0, 0);
    season.media_ready(1, 0);
    assert_eq!(season.visibility_changed(false), 0, "season resumes only once started");

    assert!(season.switch_to(2, 10).started());
    assert_eq!(season.active_index(), 2);
    let target = &season.registry().get(2).unwrap().element;
    assert_eq!(target.seeks, 0);
    assert_eq!(target.position, 0.0);
    assert_eq!(target.play_requests, 1);
    assert!(target.foreground);
}

#[test]
fn frame_scroll_next_advances_and_scrolls() {
    let mut hero = open_hero();
    let message = FrameMessage::parse("scrollNext", None).unwrap();
    hero.input_mut().push(message.into_input());

    hero.tick(HERO_OPEN_MS);
    assert!(hero.section_state().is_transitioning);
    assert_eq!(hero.stage().scrolled, [1]);

    run(&mut hero, HERO_OPEN_MS, HERO_OPEN_MS + 800);
    assert_eq!(hero.active_index(), 1);
    assert_eq!(foreground(&hero), [1]);
}

#[test]
fn vertical_swipe_switches_past_threshold_only() {
    let mut hero = open_hero();
    hero.input_mut().push(InputEvent::Swipe { delta_y: -120.0 });
    hero.input_mut().push(InputEvent::Swipe { delta_y: 30.0 });
    hero.tick(HERO_OPEN_MS);
    assert!(!hero.section_state().is_transitioning);
    assert!(hero.stage().scrolled.is_empty());

    hero.input_mut().push(InputEvent::Swipe { delta_y: 120.0 });
    hero.tick(HERO_OPEN_MS + 10);
    assert_eq!(hero.stage().scrolled, [1]);

    run(&mut hero, HERO_OPEN_MS + 10, HERO_OPEN_MS + 810);
    assert_eq!(hero.active_index(), 1);
    assert_eq!(foreground(&hero), [1]);
}
