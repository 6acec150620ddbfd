//! `check` command: validate a script file and print a summary.

use std::path::Path;

use anyhow::{Context, Result};

use adp::script::DemoScript;
use adp::sequencer::timing;
use adp::tui::Theme;

/// Load and validate a script, then report its shape and loop duration.
pub fn handle(path: &Path) -> Result<()> {
    let script = DemoScript::load(path)
        .with_context(|| format!("invalid script {}", path.display()))?;
    let theme = Theme::default();
    let duration = timing::full_pass(&script);

    println!(
        "{}",
        theme.success_text(&format!("{} is valid", path.display()))
    );
    println!(
        "{}",
        theme.primary_text(&format!(
            "  {} sequences, {} output lines",
            script.len(),
            script.total_lines()
        ))
    );
    println!(
        "{}",
        theme.primary_text(&format!(
            "  one full pass takes {:.1}s",
            duration.as_secs_f64()
        ))
    );
    Ok(())
}
