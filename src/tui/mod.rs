//! Terminal UI shell for the demo.
//!
//! The shell hosts the floating panel: terminal setup/teardown and the
//! main loop (`app`), keyboard/mouse dispatch (`input`), chrome geometry
//! (`layout`), frame rendering (`render`), and colors (`theme`).

pub mod app;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

pub use input::InputResult;
pub use theme::Theme;
