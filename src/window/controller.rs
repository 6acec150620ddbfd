//! The window controller: chrome operations, drag, and the auto-reopen
//! timer.
//!
//! Every operation is synchronous and completes before the event loop
//! continues. Operations that change panel visibility pause or resume the
//! sequencer so the animation never plays into a hidden panel. Lifecycle
//! transitions outside the state machine resolve to no-ops.

use std::time::Duration;

use tracing::debug;

use crate::sequencer::{AnimationSequencer, RenderTargets};
use crate::window::state::{Geometry, LifecycleMode, WindowState};

/// Delay before a closed panel reopens on its own.
pub const AUTO_REOPEN_DELAY: Duration = Duration::from_millis(8000);

/// In-flight drag: last pointer cell seen.
#[derive(Debug, Clone, Copy)]
struct DragState {
    last_col: u16,
    last_row: u16,
}

/// Owns one floating panel and mediates the sequencer's pause/resume and
/// target binding against panel visibility.
#[derive(Debug)]
pub struct WindowController {
    state: WindowState,
    drag: Option<DragState>,
    /// One-shot auto-reopen deadline armed by `close`
    reopen_deadline: Option<Duration>,
}

impl WindowController {
    /// New controller for the given viewport. The panel starts closed;
    /// call [`open`](Self::open) to show it and begin playback.
    pub fn new(viewport_cols: u16, viewport_rows: u16) -> Self {
        Self {
            state: WindowState::new((viewport_cols, viewport_rows)),
            drag: None,
            reopen_deadline: None,
        }
    }

    /// Read-only view of the presentation state, consumed by the renderer
    /// every frame.
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Show the panel at its initial geometry, hand the render targets to
    /// the sequencer, and resume playback. No-op unless currently closed.
    pub fn open(&mut self, sequencer: &mut AnimationSequencer, targets: RenderTargets) {
        if self.state.mode != LifecycleMode::Closed {
            return;
        }
        self.state.geometry = Geometry::initial(self.state.viewport);
        self.state.mode = LifecycleMode::Normal;
        self.state.reopen_visible = false;
        self.reopen_deadline = None;
        sequencer.bind_targets(targets);
        sequencer.resume();
        debug!(geometry = ?self.state.geometry, "panel opened");
    }

    /// Hide the panel, pause playback, show the reopen affordance, and arm
    /// the one-shot auto-reopen timer. No-op unless in normal mode.
    pub fn close(&mut self, sequencer: &mut AnimationSequencer, now: Duration) {
        if self.state.mode != LifecycleMode::Normal {
            return;
        }
        sequencer.pause();
        self.drag = None;
        self.state.mode = LifecycleMode::Closed;
        self.state.reopen_visible = true;
        self.reopen_deadline = Some(now + AUTO_REOPEN_DELAY);
        debug!("panel closed, auto-reopen armed");
    }

    /// Hide the panel, pause playback, and show the dock chip. No-op
    /// unless in normal mode.
    pub fn minimize(&mut self, sequencer: &mut AnimationSequencer) {
        if self.state.mode != LifecycleMode::Normal {
            return;
        }
        sequencer.pause();
        self.drag = None;
        self.state.mode = LifecycleMode::Minimized;
        self.state.dock_visible = true;
        debug!("panel minimized");
    }

    /// Bring a minimized panel back and resume playback. No-op unless
    /// minimized.
    pub fn restore(&mut self, sequencer: &mut AnimationSequencer) {
        if self.state.mode != LifecycleMode::Minimized {
            return;
        }
        self.state.mode = LifecycleMode::Normal;
        self.state.dock_visible = false;
        sequencer.resume();
        debug!("panel restored from dock");
    }

    /// Toggle between floating and pinned-to-viewport geometry.
    ///
    /// Entering maximized snapshots the current geometry; leaving restores
    /// that snapshot bit-for-bit. No-op when minimized or closed.
    pub fn toggle_maximize(&mut self) {
        match self.state.mode {
            LifecycleMode::Normal => {
                self.state.saved_geometry = Some(self.state.geometry);
                self.state.geometry = Geometry::maximized(self.state.viewport);
                self.state.mode = LifecycleMode::Maximized;
                self.drag = None;
                debug!("panel maximized");
            }
            LifecycleMode::Maximized => {
                if let Some(saved) = self.state.saved_geometry.take() {
                    self.state.geometry = saved;
                }
                self.state.mode = LifecycleMode::Normal;
                debug!("panel unmaximized");
            }
            LifecycleMode::Minimized | LifecycleMode::Closed => {}
        }
    }

    /// Bring a closed panel back: cancel a pending auto-reopen, show the
    /// panel, and resume playback. No-op unless closed.
    pub fn reopen(&mut self, sequencer: &mut AnimationSequencer) {
        if self.state.mode != LifecycleMode::Closed {
            return;
        }
        self.reopen_deadline = None;
        self.state.mode = LifecycleMode::Normal;
        self.state.reopen_visible = false;
        sequencer.resume();
        debug!("panel reopened");
    }

    /// Fire the auto-reopen timer if it has elapsed and the panel is still
    /// closed.
    pub fn tick(&mut self, sequencer: &mut AnimationSequencer, now: Duration) {
        if let Some(deadline) = self.reopen_deadline {
            if now >= deadline && self.state.mode == LifecycleMode::Closed {
                debug!("auto-reopen timer fired");
                self.reopen(sequencer);
            }
        }
    }

    /// Begin a drag from a pointer press on the title bar. Ignored on
    /// narrow viewports and unless the panel floats in normal mode
    /// (maximized geometry is pinned).
    pub fn drag_start(&mut self, col: u16, row: u16) {
        if self.state.narrow || self.state.mode != LifecycleMode::Normal {
            return;
        }
        self.drag = Some(DragState {
            last_col: col,
            last_row: row,
        });
    }

    /// Apply the pointer delta to the panel origin, clamped to the
    /// viewport.
    pub fn drag_move(&mut self, col: u16, row: u16) {
        let Some(drag) = self.drag else {
            return;
        };
        let (cols, rows) = self.state.viewport;
        let geometry = &mut self.state.geometry;

        let dx = i32::from(col) - i32::from(drag.last_col);
        let dy = i32::from(row) - i32::from(drag.last_row);
        let max_x = i32::from(cols.saturating_sub(geometry.width));
        let max_y = i32::from(rows.saturating_sub(geometry.height));
        geometry.x = (i32::from(geometry.x) + dx).clamp(0, max_x) as u16;
        geometry.y = (i32::from(geometry.y) + dy).clamp(0, max_y) as u16;

        self.drag = Some(DragState {
            last_col: col,
            last_row: row,
        });
    }

    /// End an in-flight drag.
    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// React to a terminal resize: re-evaluate the narrow classification
    /// and cancel any drag it invalidates. An already-open floating panel
    /// is not repositioned; a maximized panel stays pinned to the new
    /// viewport.
    pub fn handle_viewport_resize(&mut self, cols: u16, rows: u16) {
        self.state.viewport = (cols, rows);
        self.state.narrow = cols <= super::state::NARROW_BREAKPOINT;
        if self.state.narrow {
            self.drag = None;
        }
        if self.state.mode == LifecycleMode::Maximized {
            self.state.geometry = Geometry::maximized(self.state.viewport);
        }
    }
}
