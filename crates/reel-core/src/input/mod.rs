//! Input abstraction layer.

pub mod mock;
mod visibility;

pub use visibility::{IntersectionSample, most_visible};

/// Keys the carousels react to. Everything else maps to [`Key::Other`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Space => " ",
            Self::Other => "",
        }
    }
}

/// Logical input consumed by the carousel router.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel / trackpad scroll. Positive is "down".
    Wheel { delta_y: f32 },
    /// Completed touch gesture; `start_y - end_y`, so positive is a swipe up.
    Swipe { delta_y: f32 },
    Key(Key),
    /// Raw slider value on the slider's own scale.
    Slider { value: f32 },
    /// Direct selection, e.g. a season icon click.
    Select(u16),
    /// "Continue" button or a forwarded `scrollNext` message.
    Advance,
    /// The visibility observer settled on a most-visible section.
    SectionVisible(u16),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
