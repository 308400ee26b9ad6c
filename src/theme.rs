//! Centralized theme and styling for the dashboard
//!
//! Single source of truth for colors, styles and layout constants used by the
//! renderers.
//!
//! # Usage
//! ```rust
//! use seatmatrix::theme::{Colors, Styles, Theme, StatusLevel};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let banner_style = Theme::status_style(StatusLevel::Warning);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for most panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Alternating table row background
    pub const BG_ROW_ALT: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Green;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Border of the focused panel
    pub const BORDER_ACTIVE: Color = Color::Green;

    /// Border of unfocused panels
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header row
    pub fn table_header() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a panel, depending on focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Alternate table row background
    pub fn row_alt() -> Style {
        Style::default().bg(Colors::BG_ROW_ALT)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Item that holds the committed selection
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// A selector that cannot be used yet
    pub fn disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Key label in the navigation bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Level of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style of the status banner text
    pub fn status_style(level: StatusLevel) -> Style {
        match level {
            StatusLevel::Info => Style::default().fg(Colors::INFO),
            StatusLevel::Success => Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
            StatusLevel::Warning => Style::default().fg(Colors::WARNING),
            StatusLevel::Error => Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Icon shown before the status banner
    pub fn status_icon(level: StatusLevel) -> &'static str {
        match level {
            StatusLevel::Info => "🔍",
            StatusLevel::Success => "🎓",
            StatusLevel::Warning => "🚫",
            StatusLevel::Error => "❌",
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Title block height
    pub const HEADER_HEIGHT: u16 = 4;

    /// Status banner height
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Category panel width percentage
    pub const CATEGORY_PANEL_PCT: u16 = 25;

    /// College selector height inside the analysis tab
    pub const COLLEGE_PANEL_HEIGHT: u16 = 10;

    /// Popup width percentage
    pub const POPUP_WIDTH_PCT: u16 = 60;

    /// Popup height percentage
    pub const POPUP_HEIGHT_PCT: u16 = 60;

    /// Scroll page size (items)
    pub const PAGE_SCROLL_SIZE: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_tracks_focus() {
        assert_eq!(Styles::border(true).fg, Some(Colors::BORDER_ACTIVE));
        assert_eq!(Styles::border(false).fg, Some(Colors::BORDER_INACTIVE));
    }

    #[test]
    fn test_status_styles_are_distinct() {
        assert_ne!(
            Theme::status_style(StatusLevel::Success),
            Theme::status_style(StatusLevel::Error)
        );
        assert_eq!(StatusLevel::default(), StatusLevel::Info);
    }
}
