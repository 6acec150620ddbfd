//! Terminal lifecycle and the main event loop.
//!
//! The loop runs everything on one thread: tick the sequencer and the
//! controller on the shared wall clock, draw, then poll input for one
//! frame interval. The alternate screen is restored on every exit path.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use crate::script::DemoScript;
use crate::sequencer::{AnimationSequencer, Clock, RenderTargets, WallClock};
use crate::tui::input::{self, InputResult};
use crate::tui::render::{self, Screen};
use crate::tui::theme::Theme;
use crate::window::WindowController;

/// Input poll timeout, which doubles as the frame interval (~30 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Run the demo until the user quits.
pub fn run(script: DemoScript, theme: Theme) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, script, theme);
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    script: DemoScript,
    theme: Theme,
) -> Result<()> {
    let clock = WallClock::new();
    let mut sequencer = AnimationSequencer::new(script);
    let targets = RenderTargets::new();

    let size = terminal.size().context("failed to query terminal size")?;
    let mut controller = WindowController::new(size.width, size.height);
    controller.open(&mut sequencer, targets.clone());
    sequencer.start();
    info!("demo loop started");

    loop {
        let now = clock.now();
        sequencer.tick(now);
        controller.tick(&mut sequencer, now);

        terminal.draw(|frame| {
            render::draw(
                frame,
                &Screen {
                    controller: &controller,
                    sequencer: &sequencer,
                    targets: &targets,
                    theme: &theme,
                    now,
                },
            )
        })?;

        if event::poll(FRAME_INTERVAL).context("failed to poll terminal events")? {
            let event = event::read().context("failed to read terminal event")?;
            let size = terminal.size().context("failed to query terminal size")?;
            let area = Rect::new(0, 0, size.width, size.height);
            let outcome =
                input::handle_event(event, &mut controller, &mut sequencer, clock.now(), area);
            if outcome == InputResult::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
    .context("failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
    .context("failed to leave alternate screen")?;
    Ok(())
}
