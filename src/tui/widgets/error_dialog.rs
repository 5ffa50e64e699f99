//! Error panel widget
//!
//! Shown in place of the list when loading fails, with the message and any
//! remediation hint the error carries.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ReviewError;

/// What the error panel displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Short summary used as the panel title
    pub title: String,
    /// The full error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a ReviewError
    pub fn from_error(error: &ReviewError) -> Self {
        let title = match error {
            ReviewError::Config(_) => "Configuration Error",
            ReviewError::AuthenticationFailed(_) => "Authentication Failed",
            ReviewError::RemoteRequest { .. } => "Request Failed",
            ReviewError::InvalidAmountFormat(_) => "Invalid Amount",
            ReviewError::Validation(_) => "Validation Error",
            ReviewError::Io(_) => "I/O Error",
        };

        let mut suggestions: Vec<String> = error.remediation().into_iter().map(String::from).collect();
        if matches!(error, ReviewError::RemoteRequest { .. }) {
            suggestions.push("Check your network connection and press r to retry".to_string());
        }

        Self {
            title: title.to_string(),
            details: error.to_string(),
            suggestions,
        }
    }
}

/// Widget for rendering an error panel
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
    hint: &'a str,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error, hint: "" }
    }

    /// Key hint shown on the last line
    pub fn with_hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Key hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new(self.hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error panel (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = scale(parent.width, 70).clamp(40, 80).min(parent.width);
    let height = scale(parent.height, 50).clamp(10, 20).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

fn scale(length: u16, percent: u32) -> u16 {
    (u32::from(length) * percent / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_from_auth_failure() {
        let error = ReviewError::AuthenticationFailed("Unauthorized".to_string());
        let info = ErrorInfo::from_error(&error);

        assert_eq!(info.title, "Authentication Failed");
        assert_eq!(info.details, "Authentication failed: Unauthorized");
        assert_eq!(info.suggestions.len(), 1);
    }

    #[test]
    fn test_error_info_from_remote_failure() {
        let info = ErrorInfo::from_error(&ReviewError::fetch_failed("Network error"));

        assert_eq!(info.title, "Request Failed");
        assert_eq!(info.details, "Failed to fetch transactions: Network error");
        assert!(info.suggestions[0].contains("retry"));
    }

    #[test]
    fn test_error_info_from_validation() {
        let info = ErrorInfo::from_error(&ReviewError::Validation("Budget ID is required".into()));

        assert_eq!(info.title, "Validation Error");
        assert_eq!(info.details, "Budget ID is required");
        assert!(info.suggestions.is_empty());
    }

    #[test]
    fn test_area_fits_small_terminal() {
        let area = error_dialog_area(Rect::new(0, 0, 30, 8));
        assert_eq!(area, Rect::new(0, 0, 30, 8));

        let area = error_dialog_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(15, 10, 70, 20));
    }

    #[test]
    fn test_area_on_huge_terminal() {
        let area = error_dialog_area(Rect::new(0, 0, 2000, 1500));
        assert_eq!(area, Rect::new(960, 740, 80, 20));
    }
}
