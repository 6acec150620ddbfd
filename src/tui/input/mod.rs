//! Input handling for the demo shell.
//!
//! Dispatches keyboard and mouse events to the window controller and the
//! sequencer, returning control flow signals to the main loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Duration;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::sequencer::AnimationSequencer;
use crate::window::WindowController;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue running
    Continue,
    /// Exit the demo
    Quit,
}

/// Handle any input event, dispatching to the appropriate handler.
///
/// `now` is the shared timeline instant the event arrived at; `frame` is
/// the current terminal area (needed to hit-test the chip affordances).
pub fn handle_event(
    event: Event,
    controller: &mut WindowController,
    sequencer: &mut AnimationSequencer,
    now: Duration,
    frame: Rect,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, controller, sequencer, now),
        Event::Mouse(mouse) => {
            handle_mouse_event(mouse, controller, sequencer, now, frame);
            InputResult::Continue
        }
        Event::Resize(cols, rows) => {
            controller.handle_viewport_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus/paste events
    }
}
