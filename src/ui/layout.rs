//! Screen chrome: header banner and status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form, and status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header banner
            Constraint::Min(16),   // Ballot form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the department branding header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "The Republic of Atlantis",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "DEPARTMENT OF ELECTORAL AFFAIRS",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(banner, area);
}

/// Draw the key-hint status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::raw(": choose candidate  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": select/submit  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Ctrl+R", Style::default().fg(Color::Cyan)),
        Span::raw(": reload candidates  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(hints, area);
}
