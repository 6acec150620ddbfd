//! Floating demo panel: presentation state and chrome behavior.
//!
//! - `state`: window geometry, lifecycle mode, and the chip affordances
//! - `controller`: the chrome operations (close/minimize/restore/maximize/
//!   reopen), drag, the auto-reopen timer, and viewport-resize reaction
//!
//! The controller owns all geometry; the TUI renderer is a pure function of
//! [`WindowState`], so geometry reassignment after construction is the
//! normal case rather than a special capability.

pub mod controller;
pub mod state;

pub use controller::WindowController;
pub use state::{Geometry, LifecycleMode, WindowState};
