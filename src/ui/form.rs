//! Ballot form rendering

use super::components::{draw_text_field, render_button, BUTTON_HEIGHT};
use crate::api::BallotApi;
use crate::app::App;
use crate::state::{Candidate, FormFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One selectable row in the candidate list
struct CandidateRow<'a> {
    candidate: &'a Candidate,
    selected: bool,
}

/// Build the selectable rows for the candidate list, in fetched order. A row
/// is marked selected when the draft's chosen id equals its `candidate_id`.
fn candidate_rows<'a>(
    candidates: &'a [Candidate],
    selected_id: Option<&str>,
) -> Vec<CandidateRow<'a>> {
    candidates
        .iter()
        .map(|candidate| CandidateRow {
            candidate,
            selected: selected_id == Some(candidate.candidate_id.as_str()),
        })
        .collect()
}

/// Draw the ballot form
pub fn draw<C: BallotApi>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .title(" Ballot Submission ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // National ID
            Constraint::Length(3),             // Ballot number
            Constraint::Min(4),                // Candidate list
            Constraint::Length(4),             // Comments
            Constraint::Length(BUTTON_HEIGHT), // Submit button
        ])
        .margin(1)
        .split(area);

    let focus = app.state.focus;
    let draft = &app.state.draft;

    draw_text_field(
        frame,
        chunks[0],
        "Your National ID",
        &draft.voter_national_id,
        focus == FormFocus::NationalId,
        false,
    );

    draw_text_field(
        frame,
        chunks[1],
        "Your Ballot Number",
        &draft.ballot_number,
        focus == FormFocus::BallotNumber,
        false,
    );

    draw_candidate_list(frame, chunks[2], app);

    draw_text_field(
        frame,
        chunks[3],
        "Additional Voter Comments",
        &draft.comments,
        focus == FormFocus::Comments,
        true,
    );

    let button_area = Rect {
        width: chunks[4].width.min(17),
        ..chunks[4]
    };
    render_button(frame, button_area, "Submit Vote", focus == FormFocus::Submit);
}

/// Draw the radio-style candidate list
fn draw_candidate_list<C: BallotApi>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.state.focus == FormFocus::Candidates;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Choose a Candidate for Chancellor of the Republic ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let rows = candidate_rows(
        &app.state.candidates,
        app.state.draft.selected_candidate_id.as_deref(),
    );

    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates available. Press Ctrl+R to reload.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let marker = if row.selected { "(•)" } else { "( )" };
                let style = if is_focused && i == app.state.candidate_cursor {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!("{marker} {}", row.candidate.name),
                    style,
                ))
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
