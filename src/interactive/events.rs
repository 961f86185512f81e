//! Keyboard input for the interactive UI

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

pub struct EventHandler {
    /// Poll timeout; also the tick interval of the countdown
    timeout: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { timeout: tick_rate }
    }

    /// Next key press, if one arrives before the timeout
    pub fn next(&self) -> Result<Option<KeyEvent>> {
        if event::poll(self.timeout)? {
            // key releases are reported on some platforms; only presses count
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some(key_event));
                }
            }
        }
        Ok(None)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
