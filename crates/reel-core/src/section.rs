//! Static per-section configuration supplied by the page.

use heapless::String;
use log::warn;

use crate::text::copy_truncated;

pub const CATEGORY_BYTES: usize = 64;
pub const TITLE_BYTES: usize = 128;
pub const DESCRIPTION_BYTES: usize = 512;

/// Caption text shown over a section's media.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CaptionData {
    pub category: String<CATEGORY_BYTES>,
    pub title: String<TITLE_BYTES>,
    pub description: String<DESCRIPTION_BYTES>,
}

impl CaptionData {
    /// Build from borrowed text, truncating overlong fields.
    pub fn new(category: &str, title: &str, description: &str) -> Self {
        let mut caption = Self::default();
        let cut = copy_truncated(&mut caption.category, category)
            | copy_truncated(&mut caption.title, title)
            | copy_truncated(&mut caption.description, description);
        if cut {
            warn!("section: caption truncated title={:?}", caption.title.as_str());
        }
        caption
    }
}

/// One `{ sourceUrl, category, title, description }` tuple from the markup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionSpec<'a> {
    pub source_url: &'a str,
    pub category: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> SectionSpec<'a> {
    /// A section with media only, as used by the season player.
    pub const fn media_only(source_url: &'a str) -> Self {
        Self {
            source_url,
            category: "",
            title: "",
            description: "",
        }
    }

    pub fn caption(&self) -> CaptionData {
        CaptionData::new(self.category, self.title, self.description)
    }
}
