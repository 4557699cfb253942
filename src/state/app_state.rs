//! Application state definitions

use super::draft::BallotDraft;
use serde::Deserialize;

/// An electoral option with a display name and stable identifier, as
/// returned by `GET /get_all_candidates`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub candidate_id: String,
}

/// Which part of the form currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    NationalId,
    BallotNumber,
    Candidates,
    Comments,
    Submit,
}

impl FormFocus {
    /// Move focus to the next field (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::NationalId => Self::BallotNumber,
            Self::BallotNumber => Self::Candidates,
            Self::Candidates => Self::Comments,
            Self::Comments => Self::Submit,
            Self::Submit => Self::NationalId,
        }
    }

    /// Move focus to the previous field (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::NationalId => Self::Submit,
            Self::BallotNumber => Self::NationalId,
            Self::Candidates => Self::BallotNumber,
            Self::Comments => Self::Candidates,
            Self::Submit => Self::Comments,
        }
    }

    /// True for fields that accept free text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::NationalId | Self::BallotNumber | Self::Comments)
    }
}

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Error,
    Success,
}

/// A transient user-facing message conveying success or failure.
/// Dismissed with Enter/Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: NoticeSeverity,
}

/// State for the ballot form screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Candidate list as last fetched, in received order
    pub candidates: Vec<Candidate>,
    /// The in-progress ballot draft
    pub draft: BallotDraft,
    /// Currently focused form field
    pub focus: FormFocus,
    /// Highlight cursor within the candidate list
    pub candidate_cursor: usize,
    /// Pending notices, shown front-first
    notices: Vec<Notice>,
}

impl AppState {
    /// Push an error notice onto the queue
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notices.push(Notice {
            message: message.into(),
            severity: NoticeSeverity::Error,
        });
    }

    /// Push a success notice onto the queue
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.notices.push(Notice {
            message: message.into(),
            severity: NoticeSeverity::Success,
        });
    }

    /// The notice currently displayed, if any
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    /// Whether a notice dialog is up
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Dismiss the currently displayed notice
    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    /// Replace the candidate list with a freshly fetched one. A selected
    /// candidate id that is no longer present is dropped, keeping the
    /// selection consistent with the most recent list.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        if let Some(selected) = &self.draft.selected_candidate_id {
            if !self.candidates.iter().any(|c| &c.candidate_id == selected) {
                self.draft = self.draft.clone().with_selected_candidate(None);
            }
        }
        if self.candidate_cursor >= self.candidates.len() {
            self.candidate_cursor = self.candidates.len().saturating_sub(1);
        }
    }

    /// Move the candidate highlight up
    pub fn candidate_cursor_up(&mut self) {
        if self.candidate_cursor > 0 {
            self.candidate_cursor -= 1;
        }
    }

    /// Move the candidate highlight down
    pub fn candidate_cursor_down(&mut self) {
        if !self.candidates.is_empty() && self.candidate_cursor < self.candidates.len() - 1 {
            self.candidate_cursor += 1;
        }
    }

    /// Select the candidate under the highlight cursor
    pub fn select_candidate_under_cursor(&mut self) {
        if let Some(candidate) = self.candidates.get(self.candidate_cursor) {
            self.draft = self
                .draft
                .clone()
                .with_selected_candidate(Some(candidate.candidate_id.clone()));
        }
    }

    /// Reset the draft to empty after a successful submission
    pub fn clear_draft(&mut self) {
        self.draft = BallotDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_candidates() -> Vec<Candidate> {
        vec![
            Candidate {
                name: "Alice".to_string(),
                candidate_id: "1".to_string(),
            },
            Candidate {
                name: "Bob".to_string(),
                candidate_id: "2".to_string(),
            },
        ]
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_cycles_through_all_fields() {
            let mut focus = FormFocus::default();
            for _ in 0..5 {
                focus = focus.next();
            }
            assert_eq!(focus, FormFocus::NationalId);
        }

        #[test]
        fn test_prev_wraps_to_submit() {
            assert_eq!(FormFocus::NationalId.prev(), FormFocus::Submit);
        }

        #[test]
        fn test_text_input_fields() {
            assert!(FormFocus::NationalId.is_text_input());
            assert!(FormFocus::BallotNumber.is_text_input());
            assert!(FormFocus::Comments.is_text_input());
            assert!(!FormFocus::Candidates.is_text_input());
            assert!(!FormFocus::Submit.is_text_input());
        }
    }

    mod notices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_notices_are_shown_front_first() {
            let mut state = AppState::default();
            state.push_error("first");
            state.push_success("second");

            assert_eq!(state.current_notice().unwrap().message, "first");
            assert_eq!(
                state.current_notice().unwrap().severity,
                NoticeSeverity::Error
            );

            state.dismiss_notice();
            assert_eq!(state.current_notice().unwrap().message, "second");
            assert_eq!(
                state.current_notice().unwrap().severity,
                NoticeSeverity::Success
            );

            state.dismiss_notice();
            assert!(!state.has_notices());
        }

        #[test]
        fn test_dismiss_on_empty_queue_is_noop() {
            let mut state = AppState::default();
            state.dismiss_notice();
            assert!(!state.has_notices());
        }
    }

    mod candidates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_candidates_replaces_list_in_received_order() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            assert_eq!(state.candidates.len(), 2);
            assert_eq!(state.candidates[0].name, "Alice");
            assert_eq!(state.candidates[1].name, "Bob");
        }

        #[test]
        fn test_selection_survives_reload_when_still_listed() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            state.candidate_cursor = 1;
            state.select_candidate_under_cursor();

            state.set_candidates(two_candidates());
            assert_eq!(state.draft.selected_candidate_id, Some("2".to_string()));
        }

        #[test]
        fn test_stale_selection_dropped_on_reload() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            state.candidate_cursor = 1;
            state.select_candidate_under_cursor();

            // Bob is gone from the refreshed list
            state.set_candidates(vec![Candidate {
                name: "Alice".to_string(),
                candidate_id: "1".to_string(),
            }]);
            assert_eq!(state.draft.selected_candidate_id, None);
        }

        #[test]
        fn test_cursor_clamped_to_shorter_list() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            state.candidate_cursor = 1;

            state.set_candidates(vec![Candidate {
                name: "Alice".to_string(),
                candidate_id: "1".to_string(),
            }]);
            assert_eq!(state.candidate_cursor, 0);
        }

        #[test]
        fn test_cursor_movement_bounds() {
            let mut state = AppState::default();
            state.candidate_cursor_up();
            state.candidate_cursor_down();
            assert_eq!(state.candidate_cursor, 0);

            state.set_candidates(two_candidates());
            state.candidate_cursor_down();
            state.candidate_cursor_down();
            assert_eq!(state.candidate_cursor, 1);
        }

        #[test]
        fn test_select_sets_id_from_fetched_list() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            state.select_candidate_under_cursor();
            assert_eq!(state.draft.selected_candidate_id, Some("1".to_string()));
        }

        #[test]
        fn test_select_on_empty_list_is_noop() {
            let mut state = AppState::default();
            state.select_candidate_under_cursor();
            assert_eq!(state.draft.selected_candidate_id, None);
        }
    }

    mod draft_lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::BallotDraft;

        #[test]
        fn test_clear_draft_resets_every_field() {
            let mut state = AppState::default();
            state.set_candidates(two_candidates());
            state.draft = state
                .draft
                .clone()
                .with_ballot_number("B100".to_string())
                .with_national_id("N1".to_string())
                .with_comments("none".to_string());
            state.select_candidate_under_cursor();

            state.clear_draft();
            assert_eq!(state.draft, BallotDraft::default());
        }
    }
}
