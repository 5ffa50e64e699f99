//! TUI views
//!
//! Rendering is a pure function of [`App`]: the header and status bar are
//! always drawn, and the main area follows [`ViewState`].

pub mod status_bar;
pub mod transaction_list;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, ViewState, LOADING_MESSAGE};
use super::keybindings::{hint_line, KeyContext};
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::{error_dialog_area, notification_area, ErrorDialog, NotificationWidget};

/// Title of the header block
pub const TITLE: &str = "Uncleared Transactions";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let context = match app.view {
        ViewState::Ready(_) => KeyContext::List,
        ViewState::Failed(_) => KeyContext::Error,
        ViewState::Loading => KeyContext::Global,
    };
    render_header(frame, context, layout.header);

    match &app.view {
        ViewState::Loading => render_loading(frame, layout.main),
        ViewState::Failed(info) => {
            let hint = hint_line(KeyContext::Error);
            frame.render_widget(
                ErrorDialog::new(info).with_hint(&hint),
                error_dialog_area(layout.main),
            );
        }
        ViewState::Ready(nav) => {
            transaction_list::render(frame, nav, app.layout, layout.main);
            transaction_list::render_footer(frame, nav, layout.footer);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(layout.main),
        );
    }
}

fn render_header(frame: &mut Frame, context: KeyContext, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let hints = Paragraph::new(hint_line(context))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(hints, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let width = LOADING_MESSAGE.len() as u16 + 6;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = Paragraph::new(LOADING_MESSAGE)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(text, centered_rect_fixed(width, 3, area));
}
