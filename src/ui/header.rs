//! Header and common widget rendering
//!
//! Title block, status banner, tab strip, nav bar and the help overlay hook.

use crate::app::{AppState, DashboardTab};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

/// Header renderer containing the dashboard title
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the title block
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled("🎓 K-CET Counselling Helper", Styles::title())]),
            Line::from(vec![Span::styled(
                "🔍 Explore Seat Matrix and Make Informed Choices",
                Style::default().fg(Colors::SECONDARY),
            )]),
            Line::from(vec![Span::styled(
                "Press D for the disclaimer",
                Styles::text_muted(),
            )]),
        ]
    }
}

/// Render the status banner
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let status = &state.status;
    let banner = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", Theme::status_icon(status.level))),
        Span::styled(status.text.clone(), Theme::status_style(status.level)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::status_style(status.level)),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

/// Render the result tab strip
pub fn render_tabs(f: &mut Frame, state: &AppState, area: Rect) {
    let titles: Vec<String> = DashboardTab::iter().map(|t| t.to_string()).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(Styles::text_muted())
        .highlight_style(Styles::chosen())
        .divider(Span::styled("|", Styles::nav_hint()));
    f.render_widget(tabs, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
