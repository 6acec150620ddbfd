//! Keyboard shortcuts: quit, pause, and keyboard equivalents of the three
//! chrome buttons plus the dock/reopen affordances.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sequencer::AnimationSequencer;
use crate::tui::input::InputResult;
use crate::window::{LifecycleMode, WindowController};

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut WindowController,
    sequencer: &mut AnimationSequencer,
    now: Duration,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback ===
        KeyCode::Char(' ') => {
            // Pause is meaningful only while the panel is on screen;
            // hidden panels already hold the sequencer paused.
            if controller.state().panel_visible() {
                if sequencer.is_paused() {
                    sequencer.resume();
                } else {
                    sequencer.pause();
                }
            }
            InputResult::Continue
        }

        // === Window chrome ===
        KeyCode::Char('c') => {
            controller.close(sequencer, now);
            InputResult::Continue
        }
        KeyCode::Char('m') => {
            if controller.state().mode == LifecycleMode::Minimized {
                controller.restore(sequencer);
            } else {
                controller.minimize(sequencer);
            }
            InputResult::Continue
        }
        KeyCode::Char('x') => {
            controller.toggle_maximize();
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            controller.reopen(sequencer);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
