//! Application module
//!
//! Owns the loaded dataset and the dashboard state, and turns key presses into
//! state transitions.
//!
//! # Flow
//!
//! ```text
//! Category selector --Enter--> College selector --Enter--> Result table
//!        ^                          |                           |
//!        +----------Esc-------------+-----------Esc-------------+
//! ```
//!
//! Results are recomputed synchronously whenever a committed selection
//! changes. The dataset is never modified after loading.

mod state;

pub use state::{AppMode, AppState, DashboardTab, StatusMessage};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::dataset::SeatMatrix;
use crate::error::Result;
use crate::logic::fallback::FallbackTable;
use crate::logic::filter::{category_options, college_options};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application
pub struct App {
    state: AppState,
    matrix: SeatMatrix,
    fallback: FallbackTable,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a dashboard over a loaded seat matrix
    pub fn new(matrix: SeatMatrix, fallback: FallbackTable) -> Self {
        let state = AppState::new(category_options(&matrix), college_options(&matrix));
        info!(
            "Dashboard ready: {} categories, {} colleges, {} rows",
            state.category_choices.len() - 1,
            state.college_choices.len() - 1,
            matrix.len()
        );

        Self {
            state,
            matrix,
            fallback,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Render one frame
    pub fn draw(&self, f: &mut Frame) {
        self.ui_renderer
            .render(f, &self.state, &self.keybinding_context);
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Popups swallow input until closed
        if self.state.help_visible {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }
        if self.state.disclaimer_visible {
            if matches!(key.code, KeyCode::Char('d') | KeyCode::Esc | KeyCode::Enter) {
                self.state.disclaimer_visible = false;
            }
            return false;
        }

        let Some(action) =
            self.keybinding_context
                .action_for(&self.state.mode, key.code, key.modifiers)
        else {
            return false;
        };
        debug!("{:?} in {} panel", action, self.state.mode);

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Disclaimer => self.state.disclaimer_visible = true,
            KeyAction::NavigateUp => self.state.move_up(),
            KeyAction::NavigateDown => self.state.move_down(),
            KeyAction::PageUp => self.state.page_up(),
            KeyAction::PageDown => self.state.page_down(),
            KeyAction::Home => self.state.home(),
            KeyAction::End => self.state.end(),
            KeyAction::NextPanel => self.state.next_panel(),
            KeyAction::PreviousPanel => self.state.previous_panel(),
            KeyAction::NextTab => self.state.next_tab(),
            KeyAction::Back => self.state.back(),
            KeyAction::Select => {
                if self.state.select() {
                    self.state.refresh(&self.matrix, &self.fallback);
                }
            }
        }
        false
    }
}
