//! Floating window component
//!
//! A centered, bordered popup drawn over the dashboard. The area underneath
//! is cleared first so table cells do not bleed through.

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sizing and decoration of a floating window
#[derive(Debug, Clone)]
pub struct FloatingWindowConfig {
    pub title: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl Default for FloatingWindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width_percent: 60,
            height_percent: 60,
            min_width: 40,
            min_height: 10,
            max_width: 90,
            max_height: 30,
        }
    }
}

/// Floating window
pub struct FloatingWindow {
    config: FloatingWindowConfig,
}

impl FloatingWindow {
    pub fn new(config: FloatingWindowConfig) -> Self {
        Self { config }
    }

    /// Area of the window inside `parent`, clamped to the configured bounds
    /// and never larger than the parent itself.
    pub fn area(&self, parent: Rect) -> Rect {
        let width = (parent.width * self.config.width_percent / 100)
            .clamp(self.config.min_width, self.config.max_width)
            .min(parent.width);
        let height = (parent.height * self.config.height_percent / 100)
            .clamp(self.config.min_height, self.config.max_height)
            .min(parent.height);

        let x = parent.x + parent.width.saturating_sub(width) / 2;
        let y = parent.y + parent.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }

    /// Render pre-built lines inside the window with an optional footer hint
    pub fn render_lines(
        &self,
        f: &mut Frame,
        parent: Rect,
        lines: &[Line<'static>],
        footer: Option<&str>,
    ) {
        let area = self.area(parent);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(true))
            .title(format!(" {} ", self.config.title))
            .title_style(Styles::title())
            .style(Styles::panel_bg());
        if let Some(footer) = footer {
            block = block.title_bottom(
                Line::styled(format!(" {} ", footer), Style::default().fg(Colors::FG_MUTED))
                    .alignment(Alignment::Center),
            );
        }

        let paragraph = Paragraph::new(lines.to_vec())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
