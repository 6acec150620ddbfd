//! Window presentation state.

/// Panel width cap, in columns.
pub const PANEL_MAX_WIDTH: u16 = 54;

/// Horizontal margin kept on each side of the panel when the viewport is
/// narrower than the cap.
pub const PANEL_SIDE_MARGIN: u16 = 4;

/// Fixed panel height, in rows.
pub const PANEL_HEIGHT: u16 = 24;

/// Height of the top banner strip the panel sits below.
pub const BANNER_HEIGHT: u16 = 4;

/// Viewports at or below this width count as narrow: the panel centers
/// itself and drag is disabled.
pub const NARROW_BREAKPOINT: u16 = 100;

/// Lifecycle mode of the panel. The modes are mutually exclusive;
/// transitions outside the state machine are guarded no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMode {
    /// Panel visible at its floating geometry
    Normal,
    /// Panel hidden, dock chip shown
    Minimized,
    /// Panel pinned to the viewport below the banner
    Maximized,
    /// Panel hidden, reopen affordance shown
    Closed,
}

/// Panel position and size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    /// Floating geometry for a freshly opened panel: width capped and
    /// centered, sitting just below the banner.
    pub fn initial(viewport: (u16, u16)) -> Self {
        let (cols, rows) = viewport;
        let width = PANEL_MAX_WIDTH
            .min(cols.saturating_sub(2 * PANEL_SIDE_MARGIN))
            .max(2);
        let height = PANEL_HEIGHT.min(rows.saturating_sub(BANNER_HEIGHT + 1)).max(2);
        Self {
            x: (cols.saturating_sub(width)) / 2,
            y: BANNER_HEIGHT + 1,
            width,
            height,
        }
    }

    /// Pinned geometry for a maximized panel: full viewport below the
    /// banner.
    pub fn maximized(viewport: (u16, u16)) -> Self {
        let (cols, rows) = viewport;
        Self {
            x: 0,
            y: BANNER_HEIGHT,
            width: cols,
            height: rows.saturating_sub(BANNER_HEIGHT),
        }
    }
}

/// All presentation state of the floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    /// Current lifecycle mode
    pub mode: LifecycleMode,
    /// Current panel geometry
    pub geometry: Geometry,
    /// Geometry snapshot taken on entering maximized, restored on exit
    pub saved_geometry: Option<Geometry>,
    /// Dock chip shown while minimized
    pub dock_visible: bool,
    /// Reopen affordance shown while closed
    pub reopen_visible: bool,
    /// Terminal size in (columns, rows)
    pub viewport: (u16, u16),
    /// Narrow viewport: centered panel, drag disabled
    pub narrow: bool,
}

impl WindowState {
    pub fn new(viewport: (u16, u16)) -> Self {
        Self {
            mode: LifecycleMode::Closed,
            geometry: Geometry::initial(viewport),
            saved_geometry: None,
            dock_visible: false,
            reopen_visible: false,
            viewport,
            narrow: viewport.0 <= NARROW_BREAKPOINT,
        }
    }

    /// Whether the panel itself is on screen.
    pub fn panel_visible(&self) -> bool {
        matches!(self.mode, LifecycleMode::Normal | LifecycleMode::Maximized)
    }
}
