use core::{cell::RefCell, convert::Infallible};
use std::rc::Rc;

use heapless::Deque;
use log::debug;
use reel_core::input::{InputEvent, InputProvider};

const QUEUE_CAPACITY: usize = 32;

type SharedQueue = Rc<RefCell<Deque<InputEvent, QUEUE_CAPACITY>>>;

/// Producer side, cloned into every event listener.
#[derive(Clone, Default)]
pub struct InputQueue {
    events: SharedQueue,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event; when full the oldest event is dropped.
    pub fn push(&self, event: InputEvent) {
        let mut events = self.events.borrow_mut();
        if events.is_full() {
            let dropped = events.pop_front();
            debug!("input: queue full, dropped {:?}", dropped);
        }
        let _ = events.push_back(event);
    }

    /// Consumer side for the carousel.
    pub fn provider(&self) -> QueuedInput {
        QueuedInput {
            events: Rc::clone(&self.events),
        }
    }
}

/// Drains events pushed by the DOM listeners.
pub struct QueuedInput {
    events: SharedQueue,
}

impl InputProvider for QueuedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.borrow_mut().pop_front())
    }
}
