//! Render surfaces the playback engine writes into.
//!
//! A [`Surface`] is pure presentation data: set-text, append-line, and
//! set-visibility, observed by whatever draws the screen. The engine holds
//! the three panel surfaces behind an optional [`RenderTargets`] slot; while
//! the slot is unbound every write silently skips, so playback can never
//! fault on a missing target.

use std::cell::RefCell;
use std::rc::Rc;

use crate::script::LineStyle;

/// One appended output line with its style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub text: String,
    pub style: LineStyle,
}

/// A write-only text region: text content, appended lines, visibility.
#[derive(Debug, Default)]
pub struct Surface {
    text: String,
    lines: Vec<OutputEntry>,
    visible: bool,
}

impl Surface {
    /// New visible surface.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            lines: Vec::new(),
            visible: true,
        }
    }

    /// New hidden surface (the cursor surface starts hidden until the
    /// engine binds it).
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::new()
        }
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Append a line bearing a style tag.
    pub fn append_line(&mut self, text: &str, style: LineStyle) {
        self.lines.push(OutputEntry {
            text: text.to_string(),
            style,
        });
    }

    /// Toggle visibility.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Clear text content and appended lines.
    pub fn clear(&mut self) {
        self.text.clear();
        self.lines.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[OutputEntry] {
        &self.lines
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Shared handle to a surface.
///
/// The whole UI runs on one thread; surfaces are shared between the engine
/// (writer) and the renderer (reader) within a single event-loop iteration.
pub type SharedSurface = Rc<RefCell<Surface>>;

/// The three surfaces of the demo panel, lent to the engine as one unit.
#[derive(Debug, Clone)]
pub struct RenderTargets {
    /// Command line being typed
    pub command: SharedSurface,
    /// Output area lines are appended to
    pub output: SharedSurface,
    /// Blinking cursor glyph (visibility only)
    pub cursor: SharedSurface,
}

impl RenderTargets {
    /// Fresh surfaces: command and output visible, cursor hidden until
    /// bound.
    pub fn new() -> Self {
        Self {
            command: Rc::new(RefCell::new(Surface::new())),
            output: Rc::new(RefCell::new(Surface::new())),
            cursor: Rc::new(RefCell::new(Surface::hidden())),
        }
    }
}

impl Default for RenderTargets {
    fn default() -> Self {
        Self::new()
    }
}
