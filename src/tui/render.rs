//! Frame rendering: backdrop, floating panel, and chip affordances.
//!
//! Rendering is immediate-mode: every frame is a pure function of the
//! window state and the playback surfaces, so geometry changes (drag,
//! maximize, resize) take effect on the next draw with no retained widget
//! tree to update.

use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::sequencer::AnimationSequencer;
use crate::sequencer::RenderTargets;
use crate::tui::layout::{self, ChromeLayout};
use crate::tui::theme::Theme;
use crate::window::state::BANNER_HEIGHT;
use crate::window::WindowController;

/// Cursor blink period (full on/off cycle is twice this).
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Everything one frame needs.
pub struct Screen<'a> {
    pub controller: &'a WindowController,
    pub sequencer: &'a AnimationSequencer,
    pub targets: &'a RenderTargets,
    pub theme: &'a Theme,
    pub now: Duration,
}

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    render_banner(frame, area, screen.theme);
    render_footer(frame, area, screen.theme);

    let state = screen.controller.state();
    if state.panel_visible() {
        let chrome = ChromeLayout::compute(state.geometry, area);
        render_panel(frame, chrome.panel, screen);
    }
    if state.dock_visible {
        render_chip(frame, layout::dock_chip(area), layout::DOCK_LABEL, screen.theme);
    }
    if state.reopen_visible {
        render_chip(
            frame,
            layout::reopen_chip(area),
            layout::REOPEN_LABEL,
            screen.theme,
        );
    }
}

/// Top banner strip the panel floats under.
fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme) {
    let banner = Rect {
        height: BANNER_HEIGHT.min(area.height),
        ..area
    };
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("  adp", theme.accent_bold_style())),
        Line::from(Span::styled(
            "  an AI coding agent, on a loop",
            theme.text_secondary_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), banner);
}

/// Bottom key-hint line.
fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height < 2 {
        return;
    }
    let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in [
        ("space", ":pause "),
        ("c", ":close "),
        ("m", ":minimize "),
        ("x", ":maximize "),
        ("r", ":reopen "),
        ("q", ":quit"),
    ] {
        spans.push(Span::styled(key, theme.accent_style()));
        spans.push(Span::styled(action, theme.text_secondary_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), footer);
}

/// The floating demo panel.
fn render_panel(frame: &mut Frame, panel: Rect, screen: &Screen) {
    if panel.width < 2 || panel.height < 2 {
        return;
    }
    let theme = screen.theme;

    // Chrome dots land at panel.x + 2/4/6, matching the layout hit boxes.
    let dots = Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.error)),
        Span::raw(" "),
        Span::styled("●", theme.accent_style()),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.success)),
        Span::raw(" "),
    ]);
    let badge = if screen.sequencer.is_paused() {
        " ⏸ paused "
    } else {
        " agent demo "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(dots)
        .title(Line::from(Span::styled(badge, theme.text_secondary_style())).right_aligned());

    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);
    render_panel_content(frame, inner, screen);
}

/// Prompt line plus revealed output, scrolled to the tail.
fn render_panel_content(frame: &mut Frame, inner: Rect, screen: &Screen) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let theme = screen.theme;
    let command = screen.targets.command.borrow();
    let output = screen.targets.output.borrow();
    let cursor = screen.targets.cursor.borrow();

    let blink_on = cursor.is_visible()
        && !screen.sequencer.is_paused()
        && (screen.now.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0;

    // Leave room for the prompt and the cursor glyph.
    let max_width = usize::from(inner.width).saturating_sub(3);
    let mut prompt = vec![
        Span::styled("❯ ", theme.accent_bold_style()),
        Span::styled(fit_tail(command.text(), max_width), theme.text_style()),
    ];
    if blink_on {
        prompt.push(Span::styled("▌", theme.accent_style()));
    }

    let mut lines = vec![Line::from(prompt), Line::default()];
    for entry in output.lines() {
        lines.push(Line::from(Span::styled(
            entry.text.clone(),
            theme.output_style(entry.style),
        )));
    }

    // Keep the latest output in view when it outgrows the panel.
    let overflow = lines.len().saturating_sub(usize::from(inner.height)) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((overflow, 0)), inner);
}

/// A small inverted chip (dock / reopen affordance).
fn render_chip(frame: &mut Frame, chip: Rect, label: &str, theme: &Theme) {
    if chip.width == 0 {
        return;
    }
    let style = theme.accent_style().add_modifier(Modifier::REVERSED);
    frame.render_widget(Clear, chip);
    frame.render_widget(Paragraph::new(Span::styled(label, style)), chip);
}

/// Trailing slice of `text` that fits in `max_width` display columns.
///
/// While a long command is being typed the tail stays in view, like a real
/// prompt.
fn fit_tail(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut tail: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        tail.push(ch);
    }
    tail.iter().rev().collect()
}
