//! Reusable UI components
//!
//! - `keybindings` - context-aware key registry
//! - `floating_window` - centered popup container
//! - `help_overlay` - `?` help popup
//! - `nav_bar` - bottom key hint bar

pub mod floating_window;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
