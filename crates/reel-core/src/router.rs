//! Normalizes raw input into section switch requests.

use log::debug;

use crate::input::{InputEvent, Key};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Deltas below this magnitude are trackpad noise.
    pub noise_threshold: f32,
    /// One accepted switch per gesture; later wheel events are dropped this long.
    pub gesture_lock_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelConfig {
    pub const fn new() -> Self {
        Self {
            noise_threshold: 10.0,
            gesture_lock_ms: 800,
        }
    }

    pub fn is_noise(&self, delta_y: f32) -> bool {
        delta_y.abs() < self.noise_threshold
    }
}

/// Which arrow keys step through sections.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    /// ArrowDown / Space forward, ArrowUp back.
    Vertical,
    /// ArrowRight forward, ArrowLeft back.
    Horizontal,
}

impl Axis {
    /// Whether `key` steps through sections on this axis.
    pub fn handles(self, key: Key) -> bool {
        self.step(key).is_some()
    }

    fn step(self, key: Key) -> Option<Direction> {
        match (self, key) {
            (Self::Vertical, Key::ArrowDown | Key::Space) => Some(Direction::Forward),
            (Self::Vertical, Key::ArrowUp) => Some(Direction::Back),
            (Self::Horizontal, Key::ArrowRight) => Some(Direction::Forward),
            (Self::Horizontal, Key::ArrowLeft) => Some(Direction::Back),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Back,
}

/// Maps a slider's continuous value onto section indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderScale {
    pub min: f32,
    pub max: f32,
}

impl SliderScale {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Nearest section index for `value`, clamped to the scale.
    pub fn nearest_index(&self, value: f32, section_count: u16) -> u16 {
        let last = section_count.saturating_sub(1);
        let span = self.max - self.min;
        if last == 0 || !(span > 0.0) || value.is_nan() {
            return 0;
        }

        let t = ((value - self.min) / span).clamp(0.0, 1.0);
        // Round half up without `f32::round`, which is not in `core`.
        let scaled = t * last as f32 + 0.5;
        (scaled as u16).min(last)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterConfig {
    /// `None` leaves wheel events to the browser.
    pub wheel: Option<WheelConfig>,
    pub axis: Axis,
    pub swipe_threshold: f32,
    pub slider: SliderScale,
    /// Also scroll the section anchor into view for step/select input.
    pub scroll_follows: bool,
}

impl RouterConfig {
    pub const fn new(axis: Axis) -> Self {
        Self {
            wheel: Some(WheelConfig::new()),
            axis,
            swipe_threshold: 50.0,
            slider: SliderScale::new(0.0, 100.0),
            scroll_follows: true,
        }
    }

    pub const fn with_wheel(mut self, wheel: Option<WheelConfig>) -> Self {
        self.wheel = wheel;
        self
    }

    pub const fn with_swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub const fn with_slider(mut self, slider: SliderScale) -> Self {
        self.slider = slider;
        self
    }

    pub const fn with_scroll_follows(mut self, scroll_follows: bool) -> Self {
        self.scroll_follows = scroll_follows;
        self
    }
}

/// What the carousel should do with one event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Ignore,
    Switch { target: u16, scroll: bool },
}

/// Carousel state the router decides against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RouteContext {
    pub active: u16,
    pub section_count: u16,
    /// Not transitioning and the caption cooldown has expired.
    pub accepting: bool,
}

impl RouteContext {
    fn stepped(&self, direction: Direction) -> u16 {
        match direction {
            Direction::Forward => self
                .active
                .saturating_add(1)
                .min(self.section_count.saturating_sub(1)),
            Direction::Back => self.active.saturating_sub(1),
        }
    }
}

#[derive(Debug)]
pub struct InputRouter {
    config: RouterConfig,
    wheel_locked_until_ms: Option<u64>,
    last_visible: Option<u16>,
}

impl InputRouter {
    pub const fn new(config: RouterConfig) -> Self {
        Self {
            config,
            wheel_locked_until_ms: None,
            last_visible: None,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn route(&mut self, event: InputEvent, ctx: RouteContext, now_ms: u64) -> Route {
        if ctx.section_count == 0 {
            return Route::Ignore;
        }

        let scroll = self.config.scroll_follows;
        match event {
            InputEvent::Wheel { delta_y } => self.route_wheel(delta_y, ctx, now_ms),
            InputEvent::Swipe { delta_y } => {
                if !ctx.accepting || delta_y.abs() < self.config.swipe_threshold {
                    return Route::Ignore;
                }
                let direction = if delta_y > 0.0 {
                    Direction::Forward
                } else {
                    Direction::Back
                };
                switch_if_moved(ctx, ctx.stepped(direction), scroll)
            }
            InputEvent::Key(key) => match self.config.axis.step(key) {
                Some(direction) => switch_if_moved(ctx, ctx.stepped(direction), scroll),
                None => Route::Ignore,
            },
            InputEvent::Advance => switch_if_moved(ctx, ctx.stepped(Direction::Forward), scroll),
            InputEvent::Slider { value } => {
                let target = self.config.slider.nearest_index(value, ctx.section_count);
                switch_if_moved(ctx, target, false)
            }
            InputEvent::Select(target) => switch_if_moved(ctx, target, scroll),
            InputEvent::SectionVisible(index) => {
                if self.last_visible == Some(index) {
                    return Route::Ignore;
                }
                self.last_visible = Some(index);
                switch_if_moved(ctx, index, false)
            }
        }
    }

    fn route_wheel(&mut self, delta_y: f32, ctx: RouteContext, now_ms: u64) -> Route {
        let Some(wheel) = self.config.wheel else {
            return Route::Ignore;
        };
        if !ctx.accepting {
            return Route::Ignore;
        }
        if self.wheel_locked_until_ms.is_some_and(|until| now_ms < until) {
            return Route::Ignore;
        }
        if wheel.is_noise(delta_y) {
            return Route::Ignore;
        }

        // The lock applies even when the step is clamped at either end.
        self.wheel_locked_until_ms = Some(now_ms.saturating_add(wheel.gesture_lock_ms));
        let direction = if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Back
        };
        let route = switch_if_moved(ctx, ctx.stepped(direction), true);
        debug!("router: wheel delta={} -> {:?}", delta_y, route);
        route
    }
}

fn switch_if_moved(ctx: RouteContext, target: u16, scroll: bool) -> Route {
    if target == ctx.active {
        Route::Ignore
    } else {
        Route::Switch { target, scroll }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(active: u16) -> RouteContext {
        RouteContext {
            active,
            section_count: 4,
            accepting: true,
        }
    }

    fn hero_router() -> InputRouter {
        InputRouter::new(RouterConfig::new(Axis::Vertical))
    }

    #[test]
    fn wheel_accepts_one_switch_per_gesture() {
        let mut router = hero_router();
        let wheel = InputEvent::Wheel { delta_y: 50.0 };

        assert_eq!(
            router.route(wheel, ctx(0), 0),
            Route::Switch {
                target: 1,
                scroll: true
            }
        );
        assert_eq!(router.route(wheel, ctx(1), 400), Route::Ignore);
        assert_eq!(router.route(wheel, ctx(1), 799), Route::Ignore);
        assert_eq!(
            router.route(wheel, ctx(1), 800),
            Route::Switch {
                target: 2,
                scroll: true
            }
        );
    }

    #[test]
    fn wheel_noise_and_blocked_input_are_ignored_without_locking() {
        let mut router = hero_router();
        assert_eq!(router.route(InputEvent::Wheel { delta_y: 9.0 }, ctx(0), 0), Route::Ignore);

        let blocked = RouteContext {
            accepting: false,
            ..ctx(0)
        };
        assert_eq!(router.route(InputEvent::Wheel { delta_y: 80.0 }, blocked, 1), Route::Ignore);

        assert!(matches!(
            router.route(InputEvent::Wheel { delta_y: -80.0 }, ctx(2), 2),
            Route::Switch { target: 1, .. }
        ));
        assert!(!WheelConfig::new().is_noise(10.0));
        assert!(WheelConfig::new().is_noise(-9.5));
    }

    #[test]
    fn keys_clamp_at_range_ends() {
        let mut router = hero_router();
        assert_eq!(router.route(InputEvent::Key(Key::ArrowUp), ctx(0), 0), Route::Ignore);
        assert_eq!(router.route(InputEvent::Key(Key::ArrowDown), ctx(3), 0), Route::Ignore);
        assert_eq!(
            router.route(InputEvent::Key(Key::Space), ctx(2), 0),
            Route::Switch {
                target: 3,
                scroll: true
            }
        );
        assert_eq!(router.route(InputEvent::Key(Key::ArrowRight), ctx(0), 0), Route::Ignore);
        assert!(Axis::Vertical.handles(Key::Space));
        assert!(!Axis::Vertical.handles(Key::ArrowLeft));
    }

    #[test]
    fn horizontal_axis_uses_left_right() {
        let mut router = InputRouter::new(
            RouterConfig::new(Axis::Horizontal)
                .with_wheel(None)
                .with_scroll_follows(false),
        );
        assert_eq!(
            router.route(InputEvent::Key(Key::ArrowRight), ctx(0), 0),
            Route::Switch {
                target: 1,
                scroll: false
            }
        );
        assert_eq!(router.route(InputEvent::Key(Key::ArrowDown), ctx(0), 0), Route::Ignore);
        assert_eq!(router.route(InputEvent::Wheel { delta_y: 90.0 }, ctx(0), 0), Route::Ignore);
    }

    #[test]
    fn swipe_needs_threshold_and_open_input() {
        let mut router = hero_router();
        assert_eq!(router.route(InputEvent::Swipe { delta_y: 20.0 }, ctx(1), 0), Route::Ignore);
        assert!(matches!(
            router.route(InputEvent::Swipe { delta_y: 120.0 }, ctx(1), 0),
            Route::Switch { target: 2, .. }
        ));
        assert!(matches!(
            router.route(InputEvent::Swipe { delta_y: -120.0 }, ctx(1), 0),
            Route::Switch { target: 0, .. }
        ));
    }

    #[test]
    fn slider_snaps_to_nearest_of_four_positions() {
        let scale = SliderScale::new(0.0, 3.0);
        assert_eq!(scale.nearest_index(0.0, 4), 0);
        assert_eq!(scale.nearest_index(1.4, 4), 1);
        assert_eq!(scale.nearest_index(1.6, 4), 2);
        assert_eq!(scale.nearest_index(3.0, 4), 3);
        assert_eq!(scale.nearest_index(7.0, 4), 3);
        assert_eq!(scale.nearest_index(-1.0, 4), 0);

        let percent = SliderScale::new(0.0, 100.0);
        assert_eq!(percent.nearest_index(66.0, 4), 2);
    }

    #[test]
    fn visibility_reports_are_deduplicated() {
        let mut router = hero_router();
        assert_eq!(
            router.route(InputEvent::SectionVisible(2), ctx(0), 0),
            Route::Switch {
                target: 2,
                scroll: false
            }
        );
        assert_eq!(router.route(InputEvent::SectionVisible(2), ctx(0), 10), Route::Ignore);
        assert!(matches!(
            router.route(InputEvent::SectionVisible(1), ctx(2), 20),
            Route::Switch { target: 1, .. }
        ));
    }
}
