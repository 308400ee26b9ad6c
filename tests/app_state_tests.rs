//! Tests for the Dashboard State Machine
//!
//! These tests drive `App` with key events the way the event loop does and
//! check:
//! - The college selector stays locked until a category is chosen
//! - Results are recomputed when a selection changes
//! - No-data and configuration-error banners
//! - Popups swallow input until closed
//! - The rendered screen (via ratatui's TestBackend)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use seatmatrix::app::{App, AppMode, DashboardTab};
use seatmatrix::dataset::CellValue;
use seatmatrix::logic::filter::{QueryOutcome, Selection, NO_DATA_MESSAGE};
use seatmatrix::theme::StatusLevel;
use seatmatrix::{FallbackTable, SeatMatrix};

// =============================================================================
// Fixtures
// =============================================================================

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn seat_matrix() -> SeatMatrix {
    let headers = [
        "College Code", "Place", "College Name", "Branch Name", "Branch code", "1G", "1K", "1R",
        "GM", "SNQ", "Total",
    ];
    let row = |code: &str, college: &str, branch: &str, counts: [i64; 4], snq: i64| {
        let mut record = vec![
            text(code),
            text("Bangalore"),
            text(college),
            text(branch),
            text(&branch[..2]),
        ];
        record.extend(counts.iter().map(|&c| CellValue::Int(c)));
        record.push(CellValue::Int(snq));
        record.push(CellValue::Int(counts.iter().sum::<i64>() + snq));
        record
    };
    SeatMatrix::from_records(
        &headers,
        vec![
            row("E001", "ABC College", "CS Engineering", [0, 0, 2, 10], 3),
            row("E001", "ABC College", "ME Engineering", [0, 0, 0, 0], 1),
            row("E002", "XYZ College", "EC Engineering", [1, 0, 0, 0], 0),
            row("E003", "Empty College", "CV Engineering", [0, 0, 0, 0], 2),
        ],
    )
    .unwrap()
}

fn app() -> App {
    App::new(seat_matrix(), FallbackTable::builtin().unwrap())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press_n(app: &mut App, code: KeyCode, times: usize) {
    for _ in 0..times {
        press(app, code);
    }
}

/// Category choices: --Select--, 1G, 1K, 1R, GM
fn choose_category(app: &mut App, position: usize) {
    press(app, KeyCode::Home);
    press_n(app, KeyCode::Down, position);
    press(app, KeyCode::Enter);
}

/// College choices: --Select--, ABC College, Empty College, XYZ College
fn choose_college(app: &mut App, position: usize) {
    press(app, KeyCode::Home);
    press_n(app, KeyCode::Down, position);
    press(app, KeyCode::Enter);
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    screen(&terminal)
}

// =============================================================================
// Selection Flow
// =============================================================================

#[test]
fn test_initial_state() {
    let app = app();
    let state = app.state();
    assert_eq!(state.mode, AppMode::CategoryMenu);
    assert_eq!(state.category_choices, vec!["--Select--", "1G", "1K", "1R", "GM"]);
    assert_eq!(
        state.college_choices,
        vec!["--Select--", "ABC College", "Empty College", "XYZ College"]
    );
    assert!(!state.college_selector_enabled());
    assert!(state.outcome.is_none());
    assert_eq!(state.status.level, StatusLevel::Info);
}

#[test]
fn test_placeholder_category_does_not_unlock_colleges() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().mode, AppMode::CategoryMenu);
    assert!(!app.state().college_selector_enabled());

    // Tab skips the locked college selector
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, AppMode::ResultTable);
}

#[test]
fn test_category_then_college_runs_query() {
    let mut app = app();
    choose_category(&mut app, 3);
    {
        let state = app.state();
        assert_eq!(state.selected_category, Selection::Selected("1R".to_string()));
        assert_eq!(state.mode, AppMode::CollegeMenu);
        assert!(state.college_selector_enabled());
        // Overview is ready before a college is chosen
        assert_eq!(state.overview.as_ref().map(|t| t.len()), Some(4));
        assert!(state.outcome.is_none());
    }

    choose_college(&mut app, 1);
    let state = app.state();
    assert_eq!(state.mode, AppMode::ResultTable);
    assert_eq!(state.status.level, StatusLevel::Success);
    assert_eq!(state.status.text, "Showing seat matrix for 1R in ABC College:");

    let table = state.visible_table().unwrap();
    assert_eq!(table.columns, vec!["Branch Name", "1R", "1G", "GM", "SNQ", "Total"]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].index, 1);
    assert_eq!(table.rows[0].values[0].to_string(), "CS Engineering");
}

#[test]
fn test_fallback_reaches_general_category() {
    let mut app = app();
    // 1K has no seats at XYZ, but 1G (its fallback) does
    choose_category(&mut app, 2);
    choose_college(&mut app, 3);
    let table = app.state().visible_table().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.column("1G").unwrap()[0], &CellValue::Int(1));
}

#[test]
fn test_no_data_banner() {
    let mut app = app();
    choose_category(&mut app, 3);
    choose_college(&mut app, 2);
    let state = app.state();
    assert_eq!(state.outcome, Some(QueryOutcome::NoData));
    assert_eq!(state.status.level, StatusLevel::Warning);
    assert_eq!(state.status.text, NO_DATA_MESSAGE);
    assert!(state.visible_table().is_none());
}

#[test]
fn test_changing_category_recomputes() {
    let mut app = app();
    choose_category(&mut app, 4); // GM
    choose_college(&mut app, 3); // XYZ: no GM seats
    assert!(app.state().outcome.as_ref().unwrap().is_no_data());

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().mode, AppMode::CategoryMenu);

    choose_category(&mut app, 1); // 1G
    let state = app.state();
    assert_eq!(state.selected_college, Selection::Selected("XYZ College".to_string()));
    assert_eq!(state.status.text, "Showing seat matrix for 1G in XYZ College:");
    assert_eq!(state.visible_table().map(|t| t.len()), Some(1));
}

#[test]
fn test_missing_fallback_column_shows_error() {
    let matrix = SeatMatrix::from_records(
        &[
            "College Code", "Place", "College Name", "Branch Name", "Branch code", "2AR", "GM",
            "SNQ", "Total",
        ],
        vec![vec![
            text("E001"),
            text("Mysore"),
            text("ABC College"),
            text("CS"),
            text("CS"),
            CellValue::Int(1),
            CellValue::Int(0),
            CellValue::Int(0),
            CellValue::Int(1),
        ]],
    )
    .unwrap();
    let mut app = App::new(matrix, FallbackTable::builtin().unwrap());

    // Choices: --Select--, 2AR, GM. 2AR falls back to 2AG, which is absent
    choose_category(&mut app, 1);
    let state = app.state();
    assert_eq!(state.status.level, StatusLevel::Error);
    assert!(state.status.text.contains("2AG"));
    assert!(state.overview.is_none());
}

#[test]
fn test_tab_switch_shows_overview() {
    let mut app = app();
    choose_category(&mut app, 3);
    press(&mut app, KeyCode::Right);
    let state = app.state();
    assert_eq!(state.tab, DashboardTab::AllColleges);
    let table = state.visible_table().unwrap();
    assert_eq!(table.columns[0], "College Name");
    assert_eq!(table.len(), 4);
}

#[test]
fn test_result_cursor_stays_in_table() {
    let mut app = app();
    choose_category(&mut app, 3);
    press(&mut app, KeyCode::Right);
    // College selector -> results
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, AppMode::ResultTable);
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.state().result_cursor, 3);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().result_cursor, 2);
}

// =============================================================================
// Popups and Quitting
// =============================================================================

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn test_disclaimer_toggle() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.state().disclaimer_visible);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().category_cursor, 0);
    press(&mut app, KeyCode::Enter);
    assert!(!app.state().disclaimer_visible);
}

#[test]
fn test_ctrl_c_quits_from_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_initial_screen() {
    let screen = render(&app());
    assert!(screen.contains("K-CET Counselling Helper"));
    assert!(screen.contains("Select a category to begin."));
    assert!(screen.contains("--Select--"));
    assert!(screen.contains("choose a category first"));
}

#[test]
fn test_render_result_table() {
    let mut app = app();
    choose_category(&mut app, 3);
    choose_college(&mut app, 1);
    let screen = render(&app);
    assert!(screen.contains("Showing seat matrix for 1R in ABC College:"));
    assert!(screen.contains("Branch Name"));
    assert!(screen.contains("CS Engineering"));
    assert!(!screen.contains("ME Engineering"));
}

#[test]
fn test_render_no_data() {
    let mut app = app();
    choose_category(&mut app, 3);
    choose_college(&mut app, 2);
    assert!(render(&app).contains(NO_DATA_MESSAGE));
}

#[test]
fn test_render_popups() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    assert!(render(&app).contains("Actual results may vary during counselling."));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('?'));
    assert!(render(&app).contains("K-CET Seat Matrix Help"));
}
