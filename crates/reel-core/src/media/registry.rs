use log::{info, warn};

use super::{MediaElement, MediaItem, ReadyState};
use crate::text::truncated;

pub const MAX_MEDIA: usize = 8;
pub const SOURCE_URL_BYTES: usize = 192;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    Full,
}

/// Result of reporting one item as loaded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadyProgress {
    Waiting { ready: u16, total: u16 },
    /// Every registered item is ready. Returned once per registry.
    AllReady,
    /// Item was already ready, or everything was already announced.
    Unchanged,
    UnknownIndex,
}

/// Ordered, append-only list of media items.
///
/// A failed load leaves its item in `Loading` forever, so the all-ready
/// notification never fires and the carousel stays in its initial state.
#[derive(Debug)]
pub struct MediaRegistry<M> {
    items: heapless::Vec<MediaItem<M>, MAX_MEDIA>,
    ready_count: u16,
    all_ready_announced: bool,
}

impl<M> Default for MediaRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MediaRegistry<M> {
    pub const fn new() -> Self {
        Self {
            items: heapless::Vec::new(),
            ready_count: 0,
            all_ready_announced: false,
        }
    }

    pub fn len(&self) -> u16 {
        self.items.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ready_count(&self) -> u16 {
        self.ready_count
    }

    /// Whether the all-ready notification has fired.
    pub fn all_ready(&self) -> bool {
        self.all_ready_announced
    }

    pub fn get(&self, index: u16) -> Option<&MediaItem<M>> {
        self.items.get(index as usize)
    }

    pub fn get_mut(&mut self, index: u16) -> Option<&mut MediaItem<M>> {
        self.items.get_mut(index as usize)
    }

    pub fn items(&self) -> &[MediaItem<M>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [MediaItem<M>] {
        &mut self.items
    }

    /// Append an item; its index is its display position.
    pub fn register(&mut self, source_url: &str, element: M) -> Result<u16, RegistryError> {
        let index = self.items.len() as u16;
        let (source_url, cut) = truncated(source_url);
        if cut {
            warn!("media: source url truncated index={}", index);
        }

        self.items
            .push(MediaItem {
                index,
                source_url,
                ready_state: ReadyState::Loading,
                element,
            })
            .map_err(|_| RegistryError::Full)?;
        Ok(index)
    }

    /// Record that `index` has loaded enough data to play.
    pub fn mark_ready(&mut self, index: u16) -> ReadyProgress {
        let total = self.len();
        let Some(item) = self.items.get_mut(index as usize) else {
            return ReadyProgress::UnknownIndex;
        };
        if item.ready_state == ReadyState::Ready {
            return ReadyProgress::Unchanged;
        }

        item.ready_state = ReadyState::Ready;
        self.ready_count = self.ready_count.saturating_add(1);
        info!(
            "media: item {} ready ({}/{})",
            index.saturating_add(1),
            self.ready_count,
            total
        );

        if self.ready_count < total {
            return ReadyProgress::Waiting {
                ready: self.ready_count,
                total,
            };
        }
        if self.all_ready_announced {
            return ReadyProgress::Unchanged;
        }
        self.all_ready_announced = true;
        ReadyProgress::AllReady
    }
}

impl<M> MediaRegistry<M>
where
    M: MediaElement,
{
    pub fn position_of(&self, index: u16) -> Option<f32> {
        self.get(index).map(|item| item.element.position())
    }
}
