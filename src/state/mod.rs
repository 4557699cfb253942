//! State module for the ballot form

mod app_state;
mod draft;

pub use app_state::{AppState, Candidate, FormFocus, Notice, NoticeSeverity};
pub use draft::{BallotDraft, BallotPayload, ValidationError};
