//! Result table rendering

use crate::app::{AppMode, AppState, DashboardTab};
use crate::dataset::{BRANCH_NAME, COLLEGE_NAME};
use crate::logic::filter::{ProjectedTable, QueryOutcome, NO_DATA_MESSAGE};
use crate::theme::{StatusLevel, Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// Width of each column: names stretch, counts hug their content.
fn column_widths(table: &ProjectedTable) -> Vec<Constraint> {
    let index_width = table.len().to_string().len().max(1) as u16 + 1;
    std::iter::once(Constraint::Length(index_width))
        .chain(table.columns.iter().enumerate().map(|(i, name)| {
            if name == BRANCH_NAME || name == COLLEGE_NAME {
                Constraint::Fill(1)
            } else {
                let widest = table
                    .rows
                    .iter()
                    .map(|row| row.values[i].to_string().chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0);
                Constraint::Length(widest as u16)
            }
        }))
        .collect()
}

fn title_for(state: &AppState, table: Option<&ProjectedTable>) -> String {
    match (state.tab, state.selected_category.value()) {
        (DashboardTab::AllColleges, Some(category)) => {
            format!(" Displaying seat matrix for {} across all colleges ", category)
        }
        _ => match table {
            Some(table) => format!(" Seat Matrix ({} rows) ", table.len()),
            None => " Seat Matrix ".to_string(),
        },
    }
}

fn placeholder_text(state: &AppState) -> (&'static str, StatusLevel) {
    match state.tab {
        DashboardTab::CollegeAnalysis => match state.outcome {
            Some(QueryOutcome::NoData) => (NO_DATA_MESSAGE, StatusLevel::Warning),
            _ => (
                "Select a category and a college to see the seat matrix.",
                StatusLevel::Info,
            ),
        },
        DashboardTab::AllColleges => (
            "Select a category to see every college.",
            StatusLevel::Info,
        ),
    }
}

/// Render the table of the visible tab, or a hint when there is none
pub fn render_results(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == AppMode::ResultTable;
    let table = state.visible_table();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(title_for(state, table));

    let Some(table) = table else {
        let (text, level) = placeholder_text(state);
        let hint = Paragraph::new(Line::styled(text, Theme::status_style(level)))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    };

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(table.columns.iter().map(|c| Cell::from(c.as_str()))),
    )
    .style(Styles::table_header());

    let rows = table.rows.iter().map(|row| {
        let cells = std::iter::once(Cell::from(row.index.to_string()).style(Styles::text_muted()))
            .chain(row.values.iter().map(|v| Cell::from(v.to_string())));
        let style = if row.index % 2 == 0 {
            Styles::row_alt()
        } else {
            Styles::text()
        };
        Row::new(cells).style(style)
    });

    let widget = Table::new(rows, column_widths(table))
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(if focused { Styles::selected() } else { Styles::text() });

    let mut table_state =
        TableState::default().with_selected(focused.then_some(state.result_cursor));
    f.render_stateful_widget(widget, area, &mut table_state);
}
