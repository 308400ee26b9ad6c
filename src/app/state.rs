//! Application state definitions
//!
//! Contains the dashboard's focus, selector cursors, committed selections and
//! the most recent query results. Everything here is plain data; the dataset
//! is passed in when a refresh is needed.

use crate::dataset::SeatMatrix;
use crate::logic::fallback::FallbackTable;
use crate::logic::filter::{
    all_colleges, ProjectedTable, QueryOutcome, QueryRequest, Selection, NO_DATA_MESSAGE,
    PLACEHOLDER,
};
use crate::theme::{StatusLevel, UiConstants};
use strum::{Display, EnumIter};

/// Focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    #[strum(serialize = "Category")]
    CategoryMenu,
    #[strum(serialize = "College")]
    CollegeMenu,
    #[strum(serialize = "Results")]
    ResultTable,
}

/// Result tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum DashboardTab {
    #[default]
    #[strum(serialize = "College Analysis")]
    CollegeAnalysis,
    #[strum(serialize = "All Colleges")]
    AllColleges,
}

impl DashboardTab {
    pub fn next(self) -> Self {
        match self {
            Self::CollegeAnalysis => Self::AllColleges,
            Self::AllColleges => Self::CollegeAnalysis,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::CollegeAnalysis => 0,
            Self::AllColleges => 1,
        }
    }
}

/// Banner text with its severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

const START_HINT: &str = "Select a category to begin.";

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Focused panel
    pub mode: AppMode,
    /// Visible result tab
    pub tab: DashboardTab,
    /// Category selector entries, placeholder first
    pub category_choices: Vec<String>,
    /// College selector entries, placeholder first
    pub college_choices: Vec<String>,
    pub category_cursor: usize,
    pub college_cursor: usize,
    /// Committed category
    pub selected_category: Selection,
    /// Committed college
    pub selected_college: Selection,
    /// Result of the college query, once both selectors are set
    pub outcome: Option<QueryOutcome>,
    /// All-colleges table, once a category is set
    pub overview: Option<ProjectedTable>,
    /// Banner for user feedback
    pub status: StatusMessage,
    /// Highlighted row of the visible table
    pub result_cursor: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the disclaimer popup is visible
    pub disclaimer_visible: bool,
}

impl AppState {
    pub fn new(categories: Vec<String>, colleges: Vec<String>) -> Self {
        let with_placeholder = |options: Vec<String>| {
            std::iter::once(PLACEHOLDER.to_string())
                .chain(options)
                .collect::<Vec<_>>()
        };

        Self {
            mode: AppMode::CategoryMenu,
            tab: DashboardTab::default(),
            category_choices: with_placeholder(categories),
            college_choices: with_placeholder(colleges),
            category_cursor: 0,
            college_cursor: 0,
            selected_category: Selection::Unselected,
            selected_college: Selection::Unselected,
            outcome: None,
            overview: None,
            status: StatusMessage::info(START_HINT),
            result_cursor: 0,
            help_visible: false,
            disclaimer_visible: false,
        }
    }

    /// The college selector stays disabled until a category is chosen.
    pub fn college_selector_enabled(&self) -> bool {
        self.selected_category.is_selected()
    }

    /// Table shown in the current tab, if any
    pub fn visible_table(&self) -> Option<&ProjectedTable> {
        match self.tab {
            DashboardTab::CollegeAnalysis => self.outcome.as_ref().and_then(QueryOutcome::table),
            DashboardTab::AllColleges => self.overview.as_ref(),
        }
    }

    // ========================================================================
    // Cursor movement
    // ========================================================================

    fn focused_len(&self) -> usize {
        match self.mode {
            AppMode::CategoryMenu => self.category_choices.len(),
            AppMode::CollegeMenu => self.college_choices.len(),
            AppMode::ResultTable => self.visible_table().map_or(0, ProjectedTable::len),
        }
    }

    fn focused_cursor(&mut self) -> &mut usize {
        match self.mode {
            AppMode::CategoryMenu => &mut self.category_cursor,
            AppMode::CollegeMenu => &mut self.college_cursor,
            AppMode::ResultTable => &mut self.result_cursor,
        }
    }

    /// Move the focused cursor by `delta`, clamped to the list
    fn shift_cursor(&mut self, delta: isize) {
        let len = self.focused_len();
        let cursor = self.focused_cursor();
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn move_up(&mut self) {
        self.shift_cursor(-1);
    }

    pub fn move_down(&mut self) {
        self.shift_cursor(1);
    }

    pub fn page_up(&mut self) {
        self.shift_cursor(-(UiConstants::PAGE_SCROLL_SIZE as isize));
    }

    pub fn page_down(&mut self) {
        self.shift_cursor(UiConstants::PAGE_SCROLL_SIZE as isize);
    }

    pub fn home(&mut self) {
        *self.focused_cursor() = 0;
    }

    pub fn end(&mut self) {
        let last = self.focused_len().saturating_sub(1);
        *self.focused_cursor() = last;
    }

    // ========================================================================
    // Selection and focus
    // ========================================================================

    /// Commit the entry under the cursor of the focused selector.
    ///
    /// Returns `true` when a selection changed and results must be refreshed.
    pub fn select(&mut self) -> bool {
        match self.mode {
            AppMode::CategoryMenu => {
                let choice = self
                    .category_choices
                    .get(self.category_cursor)
                    .map_or(Selection::Unselected, |c| Selection::from_choice(c));
                if choice.is_selected() {
                    self.mode = AppMode::CollegeMenu;
                }
                self.commit(choice, true)
            }
            AppMode::CollegeMenu => {
                if !self.college_selector_enabled() {
                    self.status = StatusMessage::warning("Select a category first.");
                    return false;
                }
                let choice = self
                    .college_choices
                    .get(self.college_cursor)
                    .map_or(Selection::Unselected, |c| Selection::from_choice(c));
                if choice.is_selected() {
                    self.mode = AppMode::ResultTable;
                    self.tab = DashboardTab::CollegeAnalysis;
                }
                self.commit(choice, false)
            }
            AppMode::ResultTable => false,
        }
    }

    fn commit(&mut self, choice: Selection, category: bool) -> bool {
        let slot = if category {
            &mut self.selected_category
        } else {
            &mut self.selected_college
        };
        if *slot == choice {
            return false;
        }
        let selector = if category { "Category" } else { "College" };
        tracing::debug!("{} selection -> {:?}", selector, choice);
        *slot = choice;
        true
    }

    fn panel_order(&self) -> Vec<AppMode> {
        if self.college_selector_enabled() {
            vec![AppMode::CategoryMenu, AppMode::CollegeMenu, AppMode::ResultTable]
        } else {
            vec![AppMode::CategoryMenu, AppMode::ResultTable]
        }
    }

    fn cycle_panel(&mut self, forward: bool) {
        let order = self.panel_order();
        let position = order.iter().position(|m| *m == self.mode).unwrap_or(0);
        let next = if forward {
            (position + 1) % order.len()
        } else {
            (position + order.len() - 1) % order.len()
        };
        self.mode = order[next];
    }

    pub fn next_panel(&mut self) {
        self.cycle_panel(true);
    }

    pub fn previous_panel(&mut self) {
        self.cycle_panel(false);
    }

    /// Step focus back towards the category selector
    pub fn back(&mut self) {
        self.mode = match self.mode {
            AppMode::ResultTable if self.college_selector_enabled() => AppMode::CollegeMenu,
            _ => AppMode::CategoryMenu,
        };
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.result_cursor = 0;
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Recompute both result tables from the committed selections.
    pub fn refresh(&mut self, matrix: &SeatMatrix, fallback: &FallbackTable) {
        self.result_cursor = 0;
        self.outcome = None;
        self.overview = None;

        let Some(category) = self.selected_category.value().map(str::to_string) else {
            self.status = StatusMessage::info(START_HINT);
            return;
        };

        match all_colleges(matrix, &fallback.resolve(&category)) {
            Ok(table) => self.overview = Some(table),
            Err(e) => {
                tracing::error!("Overview for '{}' failed: {}", category, e);
                self.status = StatusMessage::error(e.to_string());
                return;
            }
        }

        let Some(request) =
            QueryRequest::from_selections(&self.selected_category, &self.selected_college)
        else {
            self.status = StatusMessage::info(format!(
                "Category {} selected. Now choose a college.",
                category
            ));
            return;
        };

        match request.run(matrix, fallback) {
            Ok(QueryOutcome::NoData) => {
                self.status = StatusMessage::warning(NO_DATA_MESSAGE);
                self.outcome = Some(QueryOutcome::NoData);
            }
            Ok(outcome) => {
                self.status = StatusMessage::success(request.success_message());
                self.outcome = Some(outcome);
            }
            Err(e) => {
                tracing::error!(
                    "Query for '{}' in '{}' failed: {}",
                    request.category,
                    request.college,
                    e
                );
                self.status = StatusMessage::error(e.to_string());
            }
        }
    }
}
