//! Selector rendering
//!
//! Both selectors list their placeholder first. The committed entry is marked
//! with a check; the cursor is shown only in the focused panel.

use crate::app::{AppMode, AppState};
use crate::logic::filter::Selection;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

fn selector_items<'a>(
    choices: &'a [String],
    committed: &Selection,
    enabled: bool,
) -> Vec<ListItem<'a>> {
    choices
        .iter()
        .map(|choice| {
            let is_committed = committed.value() == Some(choice.as_str());
            let (marker, style) = match (enabled, is_committed) {
                (false, _) => ("  ", Styles::disabled()),
                (true, true) => ("✓ ", Styles::chosen()),
                (true, false) => ("  ", Styles::text()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(choice.as_str(), style),
            ]))
        })
        .collect()
}

fn render_selector(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
) {
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused))
                .title(title.to_string()),
        )
        .highlight_style(if focused { Styles::selected() } else { Styles::text() })
        .highlight_symbol(if focused { ">> " } else { "   " });

    let mut list_state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the category selector
pub fn render_category_menu(f: &mut Frame, state: &AppState, area: Rect) {
    let items = selector_items(&state.category_choices, &state.selected_category, true);
    render_selector(
        f,
        area,
        "📊 Select Category",
        items,
        state.category_cursor,
        state.mode == AppMode::CategoryMenu,
    );
}

/// Render the college selector, greyed out until a category is chosen
pub fn render_college_menu(f: &mut Frame, state: &AppState, area: Rect) {
    let enabled = state.college_selector_enabled();
    let title = if enabled {
        "🏫 Select College"
    } else {
        "🏫 Select College (choose a category first)"
    };
    let items = selector_items(&state.college_choices, &state.selected_college, enabled);
    render_selector(
        f,
        area,
        title,
        items,
        state.college_cursor,
        enabled && state.mode == AppMode::CollegeMenu,
    );
}
