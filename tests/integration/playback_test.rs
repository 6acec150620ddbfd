//! Library-level playback tests: the sequencer and window controller
//! working together on a virtual timeline, the way the TUI shell drives
//! them.

use std::time::Duration;

use adp::script::{DemoScript, LineStyle, OutputLine, Sequence};
use adp::sequencer::{AnimationSequencer, RenderTargets};
use adp::window::{LifecycleMode, WindowController};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn demo_script() -> DemoScript {
    DemoScript {
        sequences: vec![
            Sequence {
                command: "agent fix".to_string(),
                outputs: vec![
                    OutputLine::styled("scanning", 100, LineStyle::Info),
                    OutputLine::styled("done", 100, LineStyle::Success),
                ],
            },
            Sequence {
                command: "agent test".to_string(),
                outputs: vec![OutputLine::styled("42 passed", 100, LineStyle::Success)],
            },
        ],
    }
}

/// Build the wired-up pair the way `tui::app` does at startup.
fn boot() -> (WindowController, AnimationSequencer, RenderTargets) {
    let mut sequencer = AnimationSequencer::new(demo_script());
    let targets = RenderTargets::new();
    let mut controller = WindowController::new(120, 40);
    controller.open(&mut sequencer, targets.clone());
    sequencer.start();
    (controller, sequencer, targets)
}

/// Tick both components the way the main loop does.
fn tick(controller: &mut WindowController, sequencer: &mut AnimationSequencer, now: Duration) {
    sequencer.tick(now);
    controller.tick(sequencer, now);
}

#[test]
fn minimize_freezes_playback_and_restore_continues_it() {
    let (mut controller, mut sequencer, targets) = boot();

    tick(&mut controller, &mut sequencer, ms(0));
    tick(&mut controller, &mut sequencer, ms(120));
    let typed_before = targets.command.borrow().text().to_string();
    assert!(!typed_before.is_empty());

    controller.minimize(&mut sequencer);
    tick(&mut controller, &mut sequencer, ms(60_000));
    assert_eq!(targets.command.borrow().text(), typed_before);

    controller.restore(&mut sequencer);
    tick(&mut controller, &mut sequencer, ms(60_000));
    tick(&mut controller, &mut sequencer, ms(60_040));
    assert_eq!(
        targets.command.borrow().text().chars().count(),
        typed_before.chars().count() + 1,
        "exactly the next character follows the restore"
    );
}

#[test]
fn closed_panel_reopens_on_its_own_and_playback_resumes() {
    let (mut controller, mut sequencer, targets) = boot();

    tick(&mut controller, &mut sequencer, ms(0));
    tick(&mut controller, &mut sequencer, ms(80));
    controller.close(&mut sequencer, ms(80));
    assert_eq!(controller.state().mode, LifecycleMode::Closed);

    // Just before the 8s deadline: still closed, still frozen.
    tick(&mut controller, &mut sequencer, ms(8_079));
    assert_eq!(controller.state().mode, LifecycleMode::Closed);
    assert!(sequencer.is_paused());

    // Deadline fires: panel back, playback running again.
    tick(&mut controller, &mut sequencer, ms(8_080));
    assert_eq!(controller.state().mode, LifecycleMode::Normal);
    assert!(!sequencer.is_paused());

    // Next frame re-arms the held step, then it fires a full delay later.
    tick(&mut controller, &mut sequencer, ms(8_080));
    let before = targets.command.borrow().text().to_string();
    tick(&mut controller, &mut sequencer, ms(8_120));
    assert_eq!(
        targets.command.borrow().text().chars().count(),
        before.chars().count() + 1
    );
}

#[test]
fn a_full_catalog_pass_wraps_back_to_the_first_sequence() {
    let (mut controller, mut sequencer, targets) = boot();

    tick(&mut controller, &mut sequencer, ms(0));
    // Sequence 0: 9*40 + 400 + 100 + 100 + 8000 = 8960ms.
    // Sequence 1: 10*40 + 400 + 100 + 8000 = 8900ms. Total 17860ms.
    tick(&mut controller, &mut sequencer, ms(8_960));
    assert_eq!(sequencer.sequence_index(), 1);

    tick(&mut controller, &mut sequencer, ms(17_860));
    assert_eq!(sequencer.sequence_index(), 0);

    // The restarted first sequence retypes its command from scratch.
    tick(&mut controller, &mut sequencer, ms(17_900));
    assert_eq!(targets.command.borrow().text(), "a");
}

#[test]
fn chrome_actions_while_hidden_leave_everything_consistent() {
    let (mut controller, mut sequencer, targets) = boot();
    tick(&mut controller, &mut sequencer, ms(0));

    controller.minimize(&mut sequencer);
    let frozen = targets.command.borrow().text().to_string();

    // None of these are defined transitions from minimized.
    controller.toggle_maximize();
    controller.close(&mut sequencer, ms(100));
    controller.reopen(&mut sequencer);
    assert_eq!(controller.state().mode, LifecycleMode::Minimized);
    assert!(sequencer.is_paused());

    tick(&mut controller, &mut sequencer, ms(30_000));
    assert_eq!(targets.command.borrow().text(), frozen);

    controller.restore(&mut sequencer);
    assert_eq!(controller.state().mode, LifecycleMode::Normal);
    assert!(!sequencer.is_paused());
}
