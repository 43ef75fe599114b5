//! Per-frame input sampling.
//!
//! The sampler makes exactly one non-blocking poll per frame, so at most one
//! key is seen per frame. Simultaneous keys are not representable.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::{Key, KeyFlags};

/// Non-blocking event source.
pub trait KeySource {
    /// Return the next pending event, or `None` without blocking.
    fn poll_event(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermSource;

impl KeySource for CrosstermSource {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    flags: KeyFlags,
    resized_to: Option<(u16, u16)>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll once and record the event, if any.
    pub fn sample<S: KeySource>(&mut self, source: &mut S) -> io::Result<&KeyFlags> {
        self.clear();
        if let Some(ev) = source.poll_event()? {
            self.record(&ev);
        }
        Ok(&self.flags)
    }

    /// Record one event. Returns the key it mapped to.
    pub fn record(&mut self, ev: &Event) -> Option<Key> {
        let key = match ev {
            Event::Key(k) if k.kind != KeyEventKind::Release => map_key_event(*k),
            Event::Resize(w, h) => {
                self.resized_to = Some((*w, *h));
                Some(Key::Resize)
            }
            _ => None,
        }?;
        self.flags.set(key);
        Some(key)
    }

    pub fn flags(&self) -> &KeyFlags {
        &self.flags
    }

    /// New terminal size carried by this frame's resize event.
    pub fn resized_to(&self) -> Option<(u16, u16)> {
        if self.flags.is_set(Key::Resize) {
            self.resized_to
        } else {
            None
        }
    }

    /// Drop every flag. Called once the frame's modes have consumed them.
    pub fn clear(&mut self) {
        self.flags.clear();
        self.resized_to = None;
    }
}
