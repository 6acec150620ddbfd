//! Default command: play the demo.

use std::path::Path;

use anyhow::{bail, Context, Result};

use adp::config::Config;
use adp::script::DemoScript;
use adp::tui::{app, Theme};

/// Minimum terminal size the demo is worth drawing in.
const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 12;

/// Resolve script and theme from flags and config, then run the TUI.
pub fn handle(
    script_arg: Option<&Path>,
    theme_arg: Option<&str>,
    config: &Config,
) -> Result<()> {
    let theme = resolve_theme(theme_arg.or(config.theme.as_deref()))?;
    let script = match script_arg.or(config.script.as_deref()) {
        Some(path) => DemoScript::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => DemoScript::builtin(),
    };

    if !atty::is(atty::Stream::Stdout) {
        bail!("adp needs an interactive terminal (stdout is not a TTY)");
    }
    ensure_terminal_size()?;

    app::run(script, theme)
}

fn resolve_theme(name: Option<&str>) -> Result<Theme> {
    match name {
        None => Ok(Theme::default()),
        Some(name) => Theme::from_name(name).with_context(|| {
            format!("unknown theme {name:?} (expected terminal, classic, or ocean)")
        }),
    }
}

fn ensure_terminal_size() -> Result<()> {
    if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    {
        if cols < MIN_COLS || rows < MIN_ROWS {
            bail!(
                "terminal is too small for the demo ({cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS})"
            );
        }
    }
    Ok(())
}
