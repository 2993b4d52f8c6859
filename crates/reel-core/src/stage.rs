//! Host surface the carousel writes visual state to.

use crate::section::CaptionData;

/// Everything a carousel changes on the page besides the media themselves.
pub trait Stage {
    /// Replace caption content. Called while the caption is hidden.
    fn set_caption(&mut self, caption: &CaptionData);

    /// Show or hide one caption slot (category, title, ... in order).
    fn set_caption_visible(&mut self, slot: u8, visible: bool);

    /// Smoothly bring a section's scroll anchor into view.
    fn scroll_to_section(&mut self, index: u16);

    /// Move the section selector (slider, icons) to `index`.
    fn set_selector(&mut self, index: u16, fill_pct: u8);
}

/// Linear selector fill: first section 0%, last section 100%.
pub fn selector_fill_pct(index: u16, section_count: u16) -> u8 {
    let last = section_count.saturating_sub(1);
    if last == 0 {
        return 0;
    }
    ((index.min(last) as u32 * 100) / last as u32) as u8
}
