//! Cross-frame messages between the landing page and the embedded hero.

use heapless::Vec;

use crate::input::{InputEvent, Key};

pub const MAX_ALLOWED_ORIGINS: usize = 8;

/// Messages the hero frame accepts from its host page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameMessage {
    /// `{ action: "scrollNext" }`
    ScrollNext,
    /// `{ action: "keydown", key }`
    KeyDown(Key),
}

impl FrameMessage {
    pub const ACTION_SCROLL_NEXT: &'static str = "scrollNext";
    pub const ACTION_KEYDOWN: &'static str = "keydown";

    /// Decode the `action`/`key` fields. Unknown actions, and key messages
    /// without a recognized key, yield `None`.
    pub fn parse(action: &str, key: Option<&str>) -> Option<Self> {
        match action {
            Self::ACTION_SCROLL_NEXT => Some(Self::ScrollNext),
            Self::ACTION_KEYDOWN => match Key::from_key_name(key?) {
                Key::Other => None,
                key => Some(Self::KeyDown(key)),
            },
            _ => None,
        }
    }

    /// Keys the landing page relays into the hero frame.
    pub const fn relayed_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp | Key::ArrowDown => Some(Self::KeyDown(key)),
            _ => None,
        }
    }

    pub const fn action(self) -> &'static str {
        match self {
            Self::ScrollNext => Self::ACTION_SCROLL_NEXT,
            Self::KeyDown(_) => Self::ACTION_KEYDOWN,
        }
    }

    pub const fn into_input(self) -> InputEvent {
        match self {
            Self::ScrollNext => InputEvent::Advance,
            Self::KeyDown(key) => InputEvent::Key(key),
        }
    }
}

/// Exact-match origin allow-list. There is no wildcard: an empty list
/// rejects everything.
#[derive(Clone, Debug, Default)]
pub struct OriginAllowList<'a> {
    origins: Vec<&'a str, MAX_ALLOWED_ORIGINS>,
}

impl<'a> OriginAllowList<'a> {
    pub const fn new() -> Self {
        Self { origins: Vec::new() }
    }

    /// Parse a comma separated list. Blank entries and `*` are skipped;
    /// entries past capacity are dropped with a warning.
    pub fn from_csv(csv: &'a str) -> Self {
        let mut list = Self::new();
        for origin in csv.split(',') {
            list.allow(origin);
        }
        list
    }

    pub fn allow(&mut self, origin: &'a str) -> bool {
        let origin = origin.trim().trim_end_matches('/');
        if origin.is_empty() || origin == "*" {
            return false;
        }
        if self.origins.contains(&origin) {
            return true;
        }
        if self.origins.push(origin).is_err() {
            log::warn!("messages: origin allow-list full, dropped {}", origin);
            return false;
        }
        true
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|allowed| *allowed == origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}
