//! Reveal-on-scroll groups and the client logo tracks.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::debug;
use reel_core::{
    input::IntersectionSample,
    reveal::{ANIMATE_CLASS, RevealGroup, plan_batch},
};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::platform::dom;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct GroupObserver {
    _observer: IntersectionObserver,
    _callback: ObserverCallback,
}

pub struct MountedReveals {
    _groups: Vec<GroupObserver>,
    _listeners: Vec<EventListener>,
}

pub fn mount_reveals(document: &Document) -> Result<MountedReveals, JsValue> {
    let mut groups = Vec::new();
    for group in RevealGroup::ALL {
        let selector = format!("[{}]", group.attribute());
        let elements = match group.scope() {
            Some(scope) => match document.query_selector(scope)? {
                Some(root) => dom::query_all(&root, &selector)?,
                None => continue,
            },
            None => dom::query_all_in(document, &selector)?,
        };
        if elements.is_empty() {
            continue;
        }
        debug!("reveal: {:?} watching {} elements", group, elements.len());
        groups.push(observe_group(group, elements)?);
    }

    Ok(MountedReveals {
        _groups: groups,
        _listeners: logo_hover(document)?,
    })
}

fn observe_group(group: RevealGroup, elements: Vec<Element>) -> Result<GroupObserver, JsValue> {
    let targets = elements.clone();
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            // One slot per entry, resolved or not, so the stagger follows
            // the batch order.
            let samples: Vec<Option<IntersectionSample>> = entries
                .iter()
                .map(|entry| {
                    let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                    let target = entry.target();
                    let index = targets.iter().position(|element| *element == target)?;
                    Some(IntersectionSample {
                        index: index as u16,
                        ratio: entry.intersection_ratio() as f32,
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect();

            for reveal in plan_batch(group, samples) {
                let Some(element) = targets.get(reveal.index as usize).cloned() else {
                    continue;
                };
                observer.unobserve(&element);
                if reveal.delay_ms == 0 {
                    dom::set_class(&element, ANIMATE_CLASS, true);
                } else {
                    Timeout::new(reveal.delay_ms as u32, move || {
                        dom::set_class(&element, ANIMATE_CLASS, true);
                    })
                    .forget();
                }
            }
        });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(group.threshold() as f64));
    init.set_root_margin("0px");

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in &elements {
        observer.observe(element);
    }
    Ok(GroupObserver {
        _observer: observer,
        _callback: callback,
    })
}

/// Pause a logo track's CSS animation while it is hovered.
fn logo_hover(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    let mut attached = Vec::new();
    for track in dom::query_all_in(document, ".logos-track")? {
        for (event, state) in [("mouseenter", "paused"), ("mouseleave", "running")] {
            let target = track.clone();
            attached.push(EventListener::new(&track, event, move |_| {
                dom::set_style(&target, "animation-play-state", state);
            }));
        }
    }
    Ok(attached)
}
