//! `<video>` elements as carousel media.

use log::{debug, info};
use reel_core::media::MediaElement;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement};

use crate::platform::dom;

const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug)]
pub struct VideoElement {
    index: u16,
    element: HtmlVideoElement,
}

impl VideoElement {
    /// Create a muted, looping, inline `<video>` for `src`. Muted is set as
    /// both property and attribute for autoplay policies.
    pub fn create(
        document: &Document,
        index: u16,
        src: &str,
        class: &str,
    ) -> Result<Self, JsValue> {
        let element = dom::element(document, "video", Some(class), None)?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| dom::missing("video element"))?;
        element.set_src(src);
        element.set_muted(true);
        element.set_attribute("muted", "")?;
        element.set_autoplay(true);
        element.set_loop(true);
        element.set_attribute("playsinline", "")?;
        element.set_attribute("webkit-playsinline", "")?;
        element.set_preload("auto");
        Ok(Self { index, element })
    }

    /// Adopt a `<video>` already present in the markup.
    pub fn adopt(index: u16, element: HtmlVideoElement) -> Self {
        Self { index, element }
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }

    pub fn load(&self) {
        self.element.load();
    }
}

impl MediaElement for VideoElement {
    type Error = JsValue;

    fn position(&self) -> f32 {
        self.element.current_time() as f32
    }

    fn seek(&mut self, position: f32) {
        self.element.set_current_time(position as f64);
    }

    fn request_play(&mut self) -> Result<(), Self::Error> {
        let promise = self.element.play()?;
        let index = self.index;
        // Rejections arrive later; they are logged and left for the next
        // user gesture.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                info!("media: play prevented index={} err={:?}", index, err);
            }
        });
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn set_foreground(&mut self, foreground: bool) {
        debug!("media: index={} foreground={}", self.index, foreground);
        dom::set_class(&self.element, ACTIVE_CLASS, foreground);
    }
}
