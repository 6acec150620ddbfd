//! `config` command: print the effective configuration.

use anyhow::Result;

use adp::config::Config;
use adp::tui::Theme;

/// Show the config file path and its effective contents as TOML.
pub fn handle() -> Result<()> {
    let theme = Theme::default();
    let path = Config::config_path()?;
    let config = Config::load()?;

    println!(
        "{}",
        theme.primary_text(&format!("# config file: {}", path.display()))
    );
    let rendered = toml::to_string_pretty(&config)?;
    if rendered.is_empty() {
        println!("{}", theme.primary_text("# (all defaults)"));
    } else {
        print!("{rendered}");
    }
    Ok(())
}
