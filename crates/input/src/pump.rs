//! Per-frame event collection.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::map_event;
use crate::types::InputEvent;

/// Collects the mapped events of one frame, reusing its buffer across frames.
#[derive(Debug, Default)]
pub struct EventPump {
    buf: Vec<InputEvent>,
}

impl EventPump {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(16),
        }
    }

    /// Block until `deadline`, collecting every event that arrives.
    ///
    /// Returns early-arriving events in order once the deadline passes.
    pub fn poll_until(&mut self, deadline: Instant) -> Result<&[InputEvent]> {
        self.buf.clear();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            self.push(&event::read()?);
            if Instant::now() >= deadline {
                break;
            }
        }
        Ok(&self.buf)
    }

    /// Map and collect already-read events (frame-less hosts and tests).
    pub fn extend<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) -> &[InputEvent] {
        self.buf.clear();
        for event in events {
            self.push(event);
        }
        &self.buf
    }

    fn push(&mut self, event: &Event) {
        if let Some(mapped) = map_event(event) {
            self.buf.push(mapped);
        }
    }
}
