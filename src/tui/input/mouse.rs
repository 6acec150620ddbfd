//! Mouse input: chrome button clicks, title-bar drag, and clicks on the
//! dock/reopen chips.

use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::sequencer::AnimationSequencer;
use crate::tui::layout::{self, ChromeHit, ChromeLayout};
use crate::window::WindowController;

/// Handle a mouse event.
///
/// Only the primary button interacts with the chrome; everything else is
/// ignored.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    controller: &mut WindowController,
    sequencer: &mut AnimationSequencer,
    now: Duration,
    frame: Rect,
) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_press(mouse.column, mouse.row, controller, sequencer, now, frame);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            controller.drag_move(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            controller.drag_end();
        }
        _ => {}
    }
}

/// Route a primary-button press to whatever it landed on.
fn handle_press(
    column: u16,
    row: u16,
    controller: &mut WindowController,
    sequencer: &mut AnimationSequencer,
    now: Duration,
    frame: Rect,
) {
    let state = *controller.state();

    if state.panel_visible() {
        let chrome = ChromeLayout::compute(state.geometry, frame);
        match chrome.hit(column, row) {
            Some(ChromeHit::Close) => controller.close(sequencer, now),
            Some(ChromeHit::Minimize) => controller.minimize(sequencer),
            Some(ChromeHit::Maximize) => controller.toggle_maximize(),
            Some(ChromeHit::TitleBar) => controller.drag_start(column, row),
            Some(ChromeHit::Body) | None => {}
        }
        return;
    }

    if state.dock_visible && layout::chip_contains(layout::dock_chip(frame), column, row) {
        controller.restore(sequencer);
    } else if state.reopen_visible
        && layout::chip_contains(layout::reopen_chip(frame), column, row)
    {
        controller.reopen(sequencer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::script::DemoScript;
    use crate::sequencer::RenderTargets;
    use crate::window::LifecycleMode;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn frame() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn release(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn opened() -> (WindowController, AnimationSequencer) {
        let mut sequencer = AnimationSequencer::new(DemoScript::builtin());
        let mut controller = WindowController::new(120, 40);
        controller.open(&mut sequencer, RenderTargets::new());
        sequencer.start();
        (controller, sequencer)
    }

    #[test]
    fn clicking_the_close_dot_closes_the_panel() {
        let (mut controller, mut sequencer) = opened();
        let geometry = controller.state().geometry;

        // Close dot sits at x+2 on the title row.
        let event = press(geometry.x + 2, geometry.y);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Closed);
    }

    #[test]
    fn clicking_the_minimize_dot_minimizes() {
        let (mut controller, mut sequencer) = opened();
        let geometry = controller.state().geometry;

        let event = press(geometry.x + 4, geometry.y);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Minimized);
    }

    #[test]
    fn clicking_the_maximize_dot_toggles_maximize() {
        let (mut controller, mut sequencer) = opened();
        let geometry = controller.state().geometry;

        let event = press(geometry.x + 6, geometry.y);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Maximized);
    }

    #[test]
    fn title_bar_press_drag_release_moves_the_panel() {
        let (mut controller, mut sequencer) = opened();
        let before = controller.state().geometry;

        handle_mouse_event(
            press(before.x + 10, before.y),
            &mut controller,
            &mut sequencer,
            ms(0),
            frame(),
        );
        assert!(controller.is_dragging());

        handle_mouse_event(
            drag(before.x + 15, before.y + 2),
            &mut controller,
            &mut sequencer,
            ms(0),
            frame(),
        );
        handle_mouse_event(
            release(before.x + 15, before.y + 2),
            &mut controller,
            &mut sequencer,
            ms(0),
            frame(),
        );

        let after = controller.state().geometry;
        assert_eq!(after.x, before.x + 5);
        assert_eq!(after.y, before.y + 2);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn body_clicks_do_nothing() {
        let (mut controller, mut sequencer) = opened();
        let geometry = controller.state().geometry;

        let event = press(geometry.x + 10, geometry.y + 5);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Normal);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn clicking_the_dock_chip_restores() {
        let (mut controller, mut sequencer) = opened();
        controller.minimize(&mut sequencer);

        let chip = layout::dock_chip(frame());
        let event = press(chip.x, chip.y);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Normal);
        assert!(!sequencer.is_paused());
    }

    #[test]
    fn clicking_the_reopen_chip_reopens() {
        let (mut controller, mut sequencer) = opened();
        controller.close(&mut sequencer, ms(0));

        let chip = layout::reopen_chip(frame());
        let event = press(chip.x + 1, chip.y);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(100), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Normal);
        assert!(!sequencer.is_paused());
    }

    #[test]
    fn stray_clicks_while_hidden_do_nothing() {
        let (mut controller, mut sequencer) = opened();
        controller.minimize(&mut sequencer);

        let event = press(60, 20);
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Minimized);
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let (mut controller, mut sequencer) = opened();
        let geometry = controller.state().geometry;

        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: geometry.x + 2,
            row: geometry.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(event, &mut controller, &mut sequencer, ms(0), frame());

        assert_eq!(controller.state().mode, LifecycleMode::Normal);
    }
}
