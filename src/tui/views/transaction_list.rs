//! Uncleared transaction list view
//!
//! One row per transaction in server order, the selected row highlighted,
//! and a footer with the position and running total.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{format_selection, format_summary, format_transaction_row, RowLayout, NO_TRANSACTIONS};
use crate::tui::navigation::NavigationState;

/// Marker drawn in front of the selected row
pub const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render the list
pub fn render(frame: &mut Frame, nav: &NavigationState, layout: RowLayout, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if nav.is_empty() {
        let text = Paragraph::new(NO_TRANSACTIONS)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = nav
        .transactions()
        .iter()
        .map(|txn| {
            let style = if txn.amount.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(format_transaction_row(txn, layout)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(nav.cursor());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the footer line: position and total
pub fn render_footer(frame: &mut Frame, nav: &NavigationState, area: Rect) {
    let mut spans = Vec::new();

    if let Some(selection) = format_selection(nav.cursor(), nav.len()) {
        spans.push(Span::styled(
            format!(" {}", selection),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" │ "));
    }

    let total = nav.total();
    let total_color = if total.is_negative() { Color::Red } else { Color::Green };
    spans.push(Span::styled(
        format_summary(nav.len(), total),
        Style::default().fg(total_color),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
