//! [`Stage`] over page elements.

use reel_core::{router::SliderScale, section::CaptionData, stage::Stage};
use web_sys::{Document, Element, HtmlInputElement};

use crate::platform::dom;

const SHOW_CLASS: &str = "show";
const ACTIVE_CLASS: &str = "active";
const HIGHLIGHT_CLASS: &str = "highlight";

/// Caption text nodes. `slots` are revealed in order; the first three also
/// receive category, title and description.
pub struct CaptionNodes {
    pub category: Element,
    pub title: Element,
    pub description: Element,
    pub slots: Vec<Element>,
}

/// Season selector: a range input, its fill bar and one icon per section.
pub struct SelectorNodes {
    pub slider: Option<HtmlInputElement>,
    /// Value range of `slider` and the number of positions on it.
    pub scale: SliderScale,
    pub positions: u16,
    pub fill: Option<Element>,
    pub icons: Vec<Element>,
}

pub struct DomStage {
    document: Document,
    captions: Option<CaptionNodes>,
    selector: Option<SelectorNodes>,
    sections: Vec<Element>,
}

impl DomStage {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            captions: None,
            selector: None,
            sections: Vec::new(),
        }
    }

    pub fn with_captions(mut self, captions: CaptionNodes) -> Self {
        self.captions = Some(captions);
        self
    }

    pub fn with_selector(mut self, selector: SelectorNodes) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Scroll anchors, one per section.
    pub fn with_sections(mut self, sections: Vec<Element>) -> Self {
        self.sections = sections;
        self
    }
}

impl Stage for DomStage {
    fn set_caption(&mut self, caption: &CaptionData) {
        let Some(nodes) = &self.captions else {
            return;
        };
        nodes.category.set_text_content(Some(caption.category.as_str()));
        nodes.title.set_text_content(Some(caption.title.as_str()));
        nodes.description.set_text_content(Some(caption.description.as_str()));
        // Trailing highlight span, styled by the page.
        match dom::element(&self.document, "span", Some(HIGHLIGHT_CLASS), None) {
            Ok(span) => {
                if let Err(err) = nodes.description.append_child(&span) {
                    log::debug!("stage: highlight append failed: {:?}", err);
                }
            }
            Err(err) => log::debug!("stage: highlight create failed: {:?}", err),
        }
    }

    fn set_caption_visible(&mut self, slot: u8, visible: bool) {
        let Some(element) = self
            .captions
            .as_ref()
            .and_then(|nodes| nodes.slots.get(slot as usize))
        else {
            return;
        };
        dom::set_class(element, SHOW_CLASS, visible);
    }

    fn scroll_to_section(&mut self, index: u16) {
        if let Some(section) = self.sections.get(index as usize) {
            dom::scroll_into_view(section);
        }
    }

    fn set_selector(&mut self, index: u16, fill_pct: u8) {
        let Some(selector) = &self.selector else {
            return;
        };
        if let Some(slider) = &selector.slider {
            let last = selector.positions.saturating_sub(1).max(1) as f32;
            let span = selector.scale.max - selector.scale.min;
            let value = selector.scale.min + span * index as f32 / last;
            slider.set_value(&value.to_string());
        }
        if let Some(fill) = &selector.fill {
            dom::set_style(fill, "width", &format!("{fill_pct}%"));
        }
        for (i, icon) in selector.icons.iter().enumerate() {
            dom::set_class(icon, ACTIVE_CLASS, i == index as usize);
        }
    }
}
