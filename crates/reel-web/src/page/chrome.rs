//! Scroll reset, smooth in-page anchors and the `loaded` body class.

use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use reel_core::chrome::{IN_PAGE_LINKS, LOADED_CLASS, PageChrome, fragment_target};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::platform::dom;

pub struct MountedChrome {
    _listeners: Vec<EventListener>,
}

pub fn mount_chrome(document: &Document, chrome: PageChrome) -> Result<MountedChrome, JsValue> {
    let window = dom::window()?;
    let mut attached = Vec::new();

    if chrome.smooth_anchors {
        for link in dom::query_all_in(document, IN_PAGE_LINKS)? {
            attached.push(smooth_anchor(document, &link));
        }
        debug!("chrome: {} in-page links", attached.len());
    }

    if chrome.mark_loaded {
        if document.ready_state() == "complete" {
            mark_loaded(document);
        } else {
            let document = document.clone();
            attached.push(EventListener::once(&window, "load", move |_| {
                mark_loaded(&document);
            }));
        }
    }

    if chrome.reset_scroll {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    Ok(MountedChrome {
        _listeners: attached,
    })
}

fn smooth_anchor(document: &Document, link: &Element) -> EventListener {
    let document = document.clone();
    let anchor = link.clone();
    EventListener::new_with_options(
        link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            let target = fragment_target(&href).and_then(|id| document.get_element_by_id(id));
            if let Some(target) = target {
                dom::scroll_into_view(&target);
            }
        },
    )
}

fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        dom::set_class(&body, LOADED_CLASS, true);
    }
}
