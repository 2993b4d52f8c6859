//! DOM listeners that feed an [`InputQueue`].

use std::{cell::Cell, rc::Rc};

use gloo_events::{EventListener, EventListenerOptions};
use reel_core::{
    input::{InputEvent, Key},
    router::{Axis, WheelConfig},
};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, KeyboardEvent, TouchEvent, WheelEvent};

use super::InputQueue;

/// Wheel deltas. Everything but noise cancels native scrolling.
pub fn wheel(target: &EventTarget, queue: InputQueue, config: WheelConfig) -> EventListener {
    EventListener::new_with_options(
        target,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let delta_y = event.delta_y() as f32;
            if !config.is_noise(delta_y) {
                event.prevent_default();
            }
            queue.push(InputEvent::Wheel { delta_y });
        },
    )
}

/// Vertical swipes: `touchstart` remembers the start, `touchend` reports.
pub fn swipe(target: &EventTarget, queue: InputQueue) -> [EventListener; 2] {
    let start_y = Rc::new(Cell::new(None::<f32>));

    let start = {
        let start_y = Rc::clone(&start_y);
        EventListener::new(target, "touchstart", move |event| {
            let y = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| event.touches().get(0))
                .map(|touch| touch.client_y() as f32);
            start_y.set(y);
        })
    };

    let end = EventListener::new(target, "touchend", move |event| {
        let Some(from) = start_y.take() else {
            return;
        };
        let to = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| event.changed_touches().get(0))
            .map(|touch| touch.client_y() as f32);
        if let Some(to) = to {
            queue.push(InputEvent::Swipe { delta_y: from - to });
        }
    });

    [start, end]
}

/// Arrow keys and space. Keys the axis steps with lose their default.
pub fn keys(target: &EventTarget, queue: InputQueue, axis: Axis) -> EventListener {
    EventListener::new_with_options(
        target,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key::from_key_name(&event.key());
            if !axis.handles(key) {
                return;
            }
            event.prevent_default();
            queue.push(InputEvent::Key(key));
        },
    )
}

/// Push `input` on every click of `target`.
pub fn click(target: &EventTarget, queue: InputQueue, input: InputEvent) -> EventListener {
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            queue.push(input);
        },
    )
}

pub fn slider(input: &HtmlInputElement, queue: InputQueue) -> EventListener {
    let element = input.clone();
    EventListener::new(input, "input", move |_event| {
        let value = element.value_as_number();
        let value = if value.is_nan() {
            element.value().trim().parse::<f64>().unwrap_or(0.0)
        } else {
            value
        };
        queue.push(InputEvent::Slider {
            value: value as f32,
        });
    })
}
