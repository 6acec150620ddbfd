//! Chrome geometry: where the panel, its buttons, and the chip affordances
//! sit on screen.
//!
//! The renderer and the mouse handler both consume [`ChromeLayout`], so hit
//! boxes always match what is drawn.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::window::Geometry;

/// Label on the dock chip shown while minimized.
pub const DOCK_LABEL: &str = " ▣ agent demo ";

/// Label on the reopen affordance shown while closed.
pub const REOPEN_LABEL: &str = " ↻ reopen demo ";

/// Column offsets of the three chrome dots inside the top border row.
const CLOSE_OFFSET: u16 = 2;
const MINIMIZE_OFFSET: u16 = 4;
const MAXIMIZE_OFFSET: u16 = 6;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    /// The close dot
    Close,
    /// The minimize dot
    Minimize,
    /// The maximize dot
    Maximize,
    /// The title bar row outside the dots (drag handle)
    TitleBar,
    /// Anywhere else inside the panel
    Body,
}

/// Computed chrome geometry for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ChromeLayout {
    /// Panel rectangle, clamped to the frame
    pub panel: Rect,
}

impl ChromeLayout {
    /// Compute the layout from the controller's geometry, clamped to the
    /// frame so a panel dragged against an edge never draws outside it.
    pub fn compute(geometry: Geometry, frame: Rect) -> Self {
        let panel = Rect::new(geometry.x, geometry.y, geometry.width, geometry.height)
            .intersection(frame);
        Self { panel }
    }

    /// Absolute column of a chrome dot, if it fits inside the panel.
    fn dot_column(&self, offset: u16) -> Option<u16> {
        let column = self.panel.x + offset;
        (column + 1 < self.panel.right()).then_some(column)
    }

    pub fn close_column(&self) -> Option<u16> {
        self.dot_column(CLOSE_OFFSET)
    }

    pub fn minimize_column(&self) -> Option<u16> {
        self.dot_column(MINIMIZE_OFFSET)
    }

    pub fn maximize_column(&self) -> Option<u16> {
        self.dot_column(MAXIMIZE_OFFSET)
    }

    /// Classify a pointer position against the visible panel.
    pub fn hit(&self, column: u16, row: u16) -> Option<ChromeHit> {
        if !self.panel.contains(Position::new(column, row)) {
            return None;
        }
        if row == self.panel.y {
            if Some(column) == self.close_column() {
                return Some(ChromeHit::Close);
            }
            if Some(column) == self.minimize_column() {
                return Some(ChromeHit::Minimize);
            }
            if Some(column) == self.maximize_column() {
                return Some(ChromeHit::Maximize);
            }
            return Some(ChromeHit::TitleBar);
        }
        Some(ChromeHit::Body)
    }
}

/// Dock chip rectangle, anchored at the bottom-left of the frame.
pub fn dock_chip(frame: Rect) -> Rect {
    let width = (DOCK_LABEL.width() as u16).min(frame.width);
    Rect::new(
        frame.x + 1,
        frame.bottom().saturating_sub(2),
        width,
        1,
    )
    .intersection(frame)
}

/// Reopen affordance rectangle, anchored at the bottom-right of the frame.
pub fn reopen_chip(frame: Rect) -> Rect {
    let width = (REOPEN_LABEL.width() as u16).min(frame.width);
    Rect::new(
        frame.right().saturating_sub(width + 1),
        frame.bottom().saturating_sub(2),
        width,
        1,
    )
    .intersection(frame)
}

/// Whether a pointer position lands inside a chip rectangle.
pub fn chip_contains(chip: Rect, column: u16, row: u16) -> bool {
    chip.contains(Position::new(column, row))
}
