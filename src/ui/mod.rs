//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, status banner, tab strip and nav bar
//! - `menus` - Category and college selectors
//! - `table` - Seat matrix result table
//! - `dialogs` - Disclaimer popup
//!
//! # Layout
//!
//! ```text
//! +--------------------------------------------------+
//! | title / subtitle                                 |
//! | status banner                                    |
//! | tabs                                             |
//! +-----------+--------------------------------------+
//! | category  | college selector                     |
//! | selector  +--------------------------------------+
//! |           | results                              |
//! +-----------+--------------------------------------+
//! | nav bar                                          |
//! +--------------------------------------------------+
//! ```

mod dialogs;
mod header;
mod menus;
mod table;

pub use dialogs::DISCLAIMER_LINES;
pub use header::HeaderRenderer;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer that handles all rendering logic
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(1), // Tabs
                Constraint::Min(5),    // Body
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render_header(f, rows[0]);
        header::render_status(f, state, rows[1]);
        header::render_tabs(f, state, rows[2]);
        self.render_body(f, state, rows[3]);
        header::render_nav_bar(f, state, keybinding_ctx, rows[4]);

        if state.disclaimer_visible {
            dialogs::render_disclaimer(f);
        }
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_body(&self, f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(UiConstants::CATEGORY_PANEL_PCT),
                Constraint::Min(20),
            ])
            .split(area);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::COLLEGE_PANEL_HEIGHT),
                Constraint::Min(3),
            ])
            .split(columns[1]);

        menus::render_category_menu(f, state, columns[0]);
        menus::render_college_menu(f, state, right[0]);
        table::render_results(f, state, right[1]);
    }
}
