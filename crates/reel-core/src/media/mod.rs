//! Media items and their load-readiness.

mod registry;

pub use registry::{MAX_MEDIA, MediaRegistry, ReadyProgress, RegistryError, SOURCE_URL_BYTES};

use heapless::String;

/// Host media element (a `<video>` in the browser).
///
/// Positions are in seconds. `request_play` only reports synchronous
/// failures; hosts whose playback start resolves later log a late rejection
/// themselves.
pub trait MediaElement {
    type Error: core::fmt::Debug;

    fn position(&self) -> f32;
    fn seek(&mut self, position: f32);
    fn request_play(&mut self) -> Result<(), Self::Error>;
    fn is_paused(&self) -> bool;
    /// Toggle the foreground ("active") marking.
    fn set_foreground(&mut self, foreground: bool);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadyState {
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct MediaItem<M> {
    pub index: u16,
    pub source_url: String<SOURCE_URL_BYTES>,
    pub ready_state: ReadyState,
    pub element: M,
}

impl<M> MediaItem<M>
where
    M: MediaElement,
{
    /// Request playback, logging instead of propagating a refusal.
    pub(crate) fn play_logged(&mut self, context: &str) -> bool {
        match self.element.request_play() {
            Ok(()) => true,
            Err(err) => {
                log::info!(
                    "media: {} play prevented index={} err={:?}",
                    context,
                    self.index,
                    err
                );
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::MediaElement;

    /// Scriptable in-memory media element.
    #[derive(Debug, Default, Clone)]
    pub struct FakeMedia {
        pub position: f32,
        pub paused: bool,
        pub foreground: bool,
        pub play_requests: u32,
        pub seeks: u32,
        pub refuse_play: bool,
    }

    impl FakeMedia {
        pub fn new() -> Self {
            Self {
                paused: true,
                ..Self::default()
            }
        }

        pub fn at(position: f32) -> Self {
            Self {
                position,
                ..Self::new()
            }
        }
    }

    impl MediaElement for FakeMedia {
        type Error = &'static str;

        fn position(&self) -> f32 {
            self.position
        }

        fn seek(&mut self, position: f32) {
            self.position = position;
            self.seeks += 1;
        }

        fn request_play(&mut self) -> Result<(), Self::Error> {
            self.play_requests += 1;
            if self.refuse_play {
                return Err("autoplay blocked");
            }
            self.paused = false;
            Ok(())
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn set_foreground(&mut self, foreground: bool) {
            self.foreground = foreground;
        }
    }
}
