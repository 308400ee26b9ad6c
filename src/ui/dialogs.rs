//! Dialog rendering

use crate::components::floating_window::{FloatingWindow, FloatingWindowConfig};
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    style::Style,
    text::{Line, Span},
    Frame,
};

/// Disclaimer bullet points
pub const DISCLAIMER_LINES: [&str; 3] = [
    "The seat matrix displayed is based on available data.",
    "Actual results may vary during counselling.",
    "Use this app for reference and decision-making.",
];

/// Render the disclaimer popup
pub fn render_disclaimer(f: &mut Frame) {
    let window = FloatingWindow::new(FloatingWindowConfig {
        title: "📢 Disclaimer".to_string(),
        width_percent: UiConstants::POPUP_WIDTH_PCT,
        height_percent: UiConstants::POPUP_HEIGHT_PCT,
        min_height: 8,
        max_height: 12,
        ..FloatingWindowConfig::default()
    });

    let mut lines = vec![Line::from("")];
    lines.extend(DISCLAIMER_LINES.iter().map(|text| {
        Line::from(vec![
            Span::styled("  - ", Style::default().fg(Colors::SECONDARY)),
            Span::styled(*text, Styles::text()),
        ])
    }));

    window.render_lines(f, f.area(), &lines, Some("Press D, Enter or Esc to close"));
}
