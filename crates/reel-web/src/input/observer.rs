use js_sys::Array;
use reel_core::input::{InputEvent, IntersectionSample, most_visible};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::InputQueue;

const THRESHOLDS: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];
const ROOT_MARGIN: &str = "-10% 0px -10% 0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reports the most visible scroll section as [`InputEvent::SectionVisible`].
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl SectionObserver {
    pub fn observe(sections: Vec<Element>, queue: InputQueue) -> Result<Self, JsValue> {
        let targets = sections.clone();
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let samples = entries.iter().filter_map(|entry| {
                    let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                    let target = entry.target();
                    let index = targets.iter().position(|section| *section == target)?;
                    Some(IntersectionSample {
                        index: index as u16,
                        ratio: entry.intersection_ratio() as f32,
                        intersecting: entry.is_intersecting(),
                    })
                });
                if let Some(index) = most_visible(samples) {
                    queue.push(InputEvent::SectionVisible(index));
                }
            });

        let thresholds: Array = THRESHOLDS.iter().copied().map(JsValue::from_f64).collect();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        init.set_root_margin(ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for section in &sections {
            observer.observe(section);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
