//! Cross-frame messages between the landing page and the hero frame.

use gloo_events::EventListener;
use log::{debug, warn};
use reel_core::messages::{FrameMessage, OriginAllowList};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, Window};

use super::InputQueue;

#[derive(Deserialize)]
struct IncomingMessage {
    action: String,
    #[serde(default)]
    key: Option<String>,
}

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
}

/// Encode as `{ action, key? }`.
pub fn encode(message: FrameMessage) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let key = match message {
        FrameMessage::KeyDown(key) => Some(key.name()),
        FrameMessage::ScrollNext => None,
    };
    serde_wasm_bindgen::to_value(&OutgoingMessage {
        action: message.action(),
        key,
    })
}

/// Accept frame messages from `own_origin` and the allow-list only.
pub fn listen(
    window: &Window,
    queue: InputQueue,
    allowed: OriginAllowList<'static>,
    own_origin: String,
) -> EventListener {
    EventListener::new(window, "message", move |event| {
        let Some(event) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        let origin = event.origin();
        if origin != own_origin && !allowed.allows(&origin) {
            warn!("frame: message rejected origin={}", origin);
            return;
        }

        let incoming: IncomingMessage = match serde_wasm_bindgen::from_value(event.data()) {
            Ok(incoming) => incoming,
            Err(err) => {
                debug!("frame: unreadable message origin={} err={}", origin, err);
                return;
            }
        };
        match FrameMessage::parse(&incoming.action, incoming.key.as_deref()) {
            Some(message) => queue.push(message.into_input()),
            None => debug!("frame: ignored action={}", incoming.action),
        }
    })
}
