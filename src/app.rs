//! Application state and core logic

use crate::api::{ApiError, BallotApi};
use crate::state::{AppState, FormFocus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Success notice shown after a counted ballot. Carries the voter-privacy
/// guidance the submission screen owes the voter.
const BALLOT_COUNTED_NOTICE: &str = "Your ballot has been counted.\n\
    Your vote is secret, and you have the right to de-register after voting \
    to protect your data.\n\
    Do not include personally identifiable information in the comments field; \
    it risks compromising your voter secrecy.\n\
    Voting more than once will prevent de-registration and be flagged as fraud.";

/// Main application struct
pub struct App<C: BallotApi> {
    /// Current application state
    pub state: AppState,
    /// Election API client
    api: C,
}

impl<C: BallotApi> App<C> {
    /// Create a new App instance with an empty draft
    pub fn new(api: C) -> Self {
        Self {
            state: AppState::default(),
            api,
        }
    }

    /// Fetch the candidate list and replace the local one. On failure the
    /// list is left as-is (empty on first load) and an error notice with a
    /// retry hint is shown.
    pub async fn load_candidates(&mut self) {
        match self.api.get_all_candidates().await {
            Ok(candidates) => self.state.set_candidates(candidates),
            Err(e) => {
                tracing::warn!(error = %e, "candidate fetch failed");
                self.state.push_error(format!(
                    "Could not load the candidate list: {e}\nPress Ctrl+R to retry."
                ));
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle notice dismissal first (modal)
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => {
                    self.load_candidates().await;
                    return Ok(());
                }
                KeyCode::Char('s') => {
                    self.submit_ballot().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            _ => self.handle_focused_key(key).await,
        }

        Ok(())
    }

    /// Route a key to the focused form field
    async fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.state.focus {
            focus if focus.is_text_input() => match key.code {
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.backspace(),
                // Enter adds a newline only in the multiline comments field
                KeyCode::Enter if focus == FormFocus::Comments => {
                    self.input_char('\n');
                }
                _ => {}
            },
            FormFocus::Candidates => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.state.candidate_cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => self.state.candidate_cursor_down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.state.select_candidate_under_cursor();
                }
                _ => {}
            },
            FormFocus::Submit => {
                if key.code == KeyCode::Enter {
                    self.submit_ballot().await;
                }
            }
            _ => {}
        }
    }

    /// Append a character to the focused text field, replacing the draft
    /// wholesale (last-write-wins per field)
    fn input_char(&mut self, c: char) {
        let draft = self.state.draft.clone();
        self.state.draft = match self.state.focus {
            FormFocus::NationalId => {
                let mut value = draft.voter_national_id.clone();
                value.push(c);
                draft.with_national_id(value)
            }
            FormFocus::BallotNumber => {
                let mut value = draft.ballot_number.clone();
                value.push(c);
                draft.with_ballot_number(value)
            }
            FormFocus::Comments => {
                let mut value = draft.comments.clone();
                value.push(c);
                draft.with_comments(value)
            }
            _ => draft,
        };
    }

    /// Remove the last character from the focused text field
    fn backspace(&mut self) {
        let draft = self.state.draft.clone();
        self.state.draft = match self.state.focus {
            FormFocus::NationalId => {
                let mut value = draft.voter_national_id.clone();
                value.pop();
                draft.with_national_id(value)
            }
            FormFocus::BallotNumber => {
                let mut value = draft.ballot_number.clone();
                value.pop();
                draft.with_ballot_number(value)
            }
            FormFocus::Comments => {
                let mut value = draft.comments.clone();
                value.pop();
                draft.with_comments(value)
            }
            _ => draft,
        };
    }

    /// Validate the draft and submit it for counting. Validation failures
    /// short-circuit before any network call; a rejected or failed submit
    /// leaves the draft untouched so the voter can retry without re-entering
    /// their data.
    pub async fn submit_ballot(&mut self) {
        let payload = match self.state.draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.state.push_error(e.to_string());
                return;
            }
        };

        match self.api.count_ballot(payload).await {
            Ok(()) => {
                self.state.clear_draft();
                self.state.push_success(BALLOT_COUNTED_NOTICE);
            }
            Err(ApiError::Rejected { status }) => {
                self.state.push_error(format!("Error casting ballot: {status}"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "ballot submission failed");
                self.state.push_error(format!("Error casting ballot: {e}"));
            }
        }
    }
}
