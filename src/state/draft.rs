//! Ballot draft value type and submission validation

use serde::Serialize;
use thiserror::Error;

/// The in-progress, unsubmitted set of form field values for one voting
/// session. Field updates replace the draft wholesale (value semantics);
/// nothing is validated until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotDraft {
    pub ballot_number: String,
    pub voter_national_id: String,
    pub comments: String,
    pub selected_candidate_id: Option<String>,
}

/// Wire payload for `POST /count_ballot`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BallotPayload {
    pub voter_national_id: String,
    pub ballot_number: String,
    pub chosen_candidate_id: String,
    pub voter_comments: String,
}

/// Validation failures, in submit priority order. The display strings are
/// shown verbatim in the notice dialog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please specify a ballot number")]
    MissingBallotNumber,
    #[error("Please specify your National ID")]
    MissingNationalId,
    #[error("Please select a candidate")]
    MissingCandidate,
}

impl BallotDraft {
    /// Replace the ballot number, returning the updated draft
    pub fn with_ballot_number(mut self, value: String) -> Self {
        self.ballot_number = value;
        self
    }

    /// Replace the national ID, returning the updated draft
    pub fn with_national_id(mut self, value: String) -> Self {
        self.voter_national_id = value;
        self
    }

    /// Replace the comments, returning the updated draft
    pub fn with_comments(mut self, value: String) -> Self {
        self.comments = value;
        self
    }

    /// Replace the candidate selection, returning the updated draft
    pub fn with_selected_candidate(mut self, candidate_id: Option<String>) -> Self {
        self.selected_candidate_id = candidate_id;
        self
    }

    /// Validate the draft for submission. First failure wins: ballot number,
    /// then national ID, then candidate selection. Comments are never
    /// required. On success, returns the wire payload to POST.
    pub fn validate(&self) -> Result<BallotPayload, ValidationError> {
        if self.ballot_number.is_empty() {
            return Err(ValidationError::MissingBallotNumber);
        }
        if self.voter_national_id.is_empty() {
            return Err(ValidationError::MissingNationalId);
        }
        let chosen_candidate_id = match &self.selected_candidate_id {
            Some(id) => id.clone(),
            None => return Err(ValidationError::MissingCandidate),
        };

        Ok(BallotPayload {
            voter_national_id: self.voter_national_id.clone(),
            ballot_number: self.ballot_number.clone(),
            chosen_candidate_id,
            voter_comments: self.comments.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_draft() -> BallotDraft {
        BallotDraft::default()
            .with_ballot_number("B100".to_string())
            .with_national_id("N1".to_string())
            .with_selected_candidate(Some("2".to_string()))
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_draft_fails_on_ballot_number_first() {
            let draft = BallotDraft::default();
            assert_eq!(draft.validate(), Err(ValidationError::MissingBallotNumber));
        }

        #[test]
        fn test_missing_national_id_checked_second() {
            let draft = BallotDraft::default().with_ballot_number("B100".to_string());
            assert_eq!(draft.validate(), Err(ValidationError::MissingNationalId));
        }

        #[test]
        fn test_missing_candidate_checked_last() {
            let draft = BallotDraft::default()
                .with_ballot_number("B100".to_string())
                .with_national_id("N1".to_string());
            assert_eq!(draft.validate(), Err(ValidationError::MissingCandidate));
        }

        #[test]
        fn test_ballot_number_outranks_national_id() {
            // Both missing: the ballot number message must win
            let draft =
                BallotDraft::default().with_selected_candidate(Some("1".to_string()));
            assert_eq!(draft.validate(), Err(ValidationError::MissingBallotNumber));
        }

        #[test]
        fn test_comments_never_required() {
            let draft = complete_draft();
            assert_eq!(draft.comments, "");
            assert!(draft.validate().is_ok());
        }

        #[test]
        fn test_error_messages_match_notice_text() {
            assert_eq!(
                ValidationError::MissingBallotNumber.to_string(),
                "Please specify a ballot number"
            );
            assert_eq!(
                ValidationError::MissingNationalId.to_string(),
                "Please specify your National ID"
            );
            assert_eq!(
                ValidationError::MissingCandidate.to_string(),
                "Please select a candidate"
            );
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_draft_produces_expected_payload() {
            let payload = complete_draft().validate().expect("draft is complete");
            assert_eq!(
                payload,
                BallotPayload {
                    voter_national_id: "N1".to_string(),
                    ballot_number: "B100".to_string(),
                    chosen_candidate_id: "2".to_string(),
                    voter_comments: String::new(),
                }
            );
        }

        #[test]
        fn test_payload_wire_field_names() {
            let payload = complete_draft().validate().expect("draft is complete");
            let json = serde_json::to_value(&payload).expect("payload serializes");
            assert_eq!(json["voter_national_id"], "N1");
            assert_eq!(json["ballot_number"], "B100");
            assert_eq!(json["chosen_candidate_id"], "2");
            assert_eq!(json["voter_comments"], "");
        }
    }

    mod value_semantics {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_update_is_idempotent() {
            let once = BallotDraft::default().with_ballot_number("B100".to_string());
            let twice = once.clone().with_ballot_number("B100".to_string());
            assert_eq!(once, twice);
        }

        #[test]
        fn test_last_write_wins_per_field() {
            let draft = BallotDraft::default()
                .with_national_id("N1".to_string())
                .with_national_id("N2".to_string());
            assert_eq!(draft.voter_national_id, "N2");
        }

        #[test]
        fn test_updates_leave_other_fields_untouched() {
            let draft = complete_draft().with_comments("no concerns".to_string());
            assert_eq!(draft.ballot_number, "B100");
            assert_eq!(draft.voter_national_id, "N1");
            assert_eq!(draft.selected_candidate_id, Some("2".to_string()));
        }

        #[test]
        fn test_clearing_selection() {
            let draft = complete_draft().with_selected_candidate(None);
            assert_eq!(draft.selected_candidate_id, None);
        }
    }
}
