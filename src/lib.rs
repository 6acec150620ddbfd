//! Agent Demo Player (adp)
//!
//! A looping, scripted fake-terminal animation simulating an AI coding
//! agent, played inside a draggable/minimizable/maximizable floating panel.
//! Nothing is executed: every "output" is a pre-authored literal string
//! revealed on a timer.
//!
//! Core pieces:
//! - [`script`]: the immutable demo catalog (built-in or TOML/JSON file)
//! - [`sequencer`]: the tick-driven playback engine with pause/resume
//! - [`window`]: the floating panel's lifecycle, chrome, and drag behavior
//! - [`tui`]: the ratatui/crossterm shell hosting it all

pub mod config;
pub mod script;
pub mod sequencer;
pub mod tui;
pub mod window;

pub use config::Config;
pub use script::DemoScript;
pub use sequencer::AnimationSequencer;
pub use window::WindowController;
