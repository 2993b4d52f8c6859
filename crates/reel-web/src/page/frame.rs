//! Landing page hosting the hero in a frame: the first-interaction gate and
//! the message relay into the frame.

use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use reel_core::{
    input::Key,
    messages::FrameMessage,
    reveal::FirstInteractionGate,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlIFrameElement, KeyboardEvent};

use crate::{
    input::messages,
    platform::{
        clock::{current_year, now_ms},
        dom,
    },
};

const HIDE_CLASS: &str = "hide";
const SHOW_CLASS: &str = "show";

pub struct MountedFrameGate {
    _listeners: Vec<EventListener>,
}

#[derive(Clone)]
struct Gate {
    state: Rc<RefCell<FirstInteractionGate>>,
    intro: Option<Element>,
    container: Option<Element>,
}

impl Gate {
    fn interact(&self) {
        if !self.state.borrow_mut().interact(now_ms()) {
            return;
        }
        if let Some(intro) = &self.intro {
            dom::set_class(intro, HIDE_CLASS, true);
        }

        let Some(delay_ms) = self
            .state
            .borrow()
            .pending_reveal_ms()
            .map(|at_ms| at_ms.saturating_sub(now_ms()))
        else {
            return;
        };
        let gate = self.clone();
        Timeout::new(delay_ms as u32, move || {
            if gate.state.borrow_mut().tick(now_ms())
                && let Some(container) = &gate.container
            {
                dom::set_class(container, SHOW_CLASS, true);
            }
        })
        .forget();
    }
}

/// Frame handle plus the origin messages are addressed to.
#[derive(Clone)]
struct Relay {
    frame: Option<HtmlIFrameElement>,
    target_origin: String,
}

impl Relay {
    fn send(&self, message: FrameMessage) {
        let Some(target) = self.frame.as_ref().and_then(|frame| frame.content_window()) else {
            return;
        };
        let result = messages::encode(message)
            .map_err(JsValue::from)
            .and_then(|value| target.post_message(&value, &self.target_origin));
        if let Err(err) = result {
            warn!("frame: relay {} failed: {:?}", message.action(), err);
        }
    }
}

/// Mount when the page has the intro overlay or the hero frame.
/// `target_origin` defaults to the page's own origin.
pub fn mount_frame_gate(
    document: &Document,
    target_origin: Option<&str>,
) -> Result<Option<MountedFrameGate>, JsValue> {
    let intro = dom::by_id::<Element>(document, "heroInitial");
    let frame = dom::by_id::<HtmlIFrameElement>(document, "videoFrame");
    if intro.is_none() && frame.is_none() {
        return Ok(None);
    }

    let window = dom::window()?;
    let target_origin = match target_origin {
        Some(origin) => origin.to_owned(),
        None => window.location().origin()?,
    };
    debug!("frame: relaying to origin={}", target_origin);

    let gate = Gate {
        state: Rc::new(RefCell::new(FirstInteractionGate::default())),
        intro,
        container: dom::by_id(document, "videoContainer"),
    };
    let relay = Relay {
        frame,
        target_origin,
    };

    let mut attached = Vec::new();
    for event in ["wheel", "touchstart"] {
        let gate = gate.clone();
        attached.push(EventListener::new(&window, event, move |_| gate.interact()));
    }
    if let Some(instruction) = dom::by_id::<Element>(document, "scrollInstruction") {
        let gate = gate.clone();
        attached.push(EventListener::new(&instruction, "click", move |_| {
            gate.interact()
        }));
    }
    if let Some(arrow) = dom::by_id::<Element>(document, "scrollArrow") {
        let gate = gate.clone();
        let relay = relay.clone();
        attached.push(EventListener::new(&arrow, "click", move |_| {
            gate.interact();
            relay.send(FrameMessage::ScrollNext);
        }));
    }
    attached.push(EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(message) = FrameMessage::relayed_key(Key::from_key_name(&event.key())) {
            gate.interact();
            relay.send(message);
        }
    }));

    Ok(Some(MountedFrameGate {
        _listeners: attached,
    }))
}

/// Show the current year in `#year`, when present.
pub fn fill_footer_year(document: &Document) {
    if let Some(year) = dom::by_id::<Element>(document, "year") {
        year.set_text_content(Some(&current_year().to_string()));
    }
}
