//! Board state: the last-fetched roster, the signup form, and the feedback
//! banner.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::Roster;

/// What the activity list area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RosterView {
    /// No fetch has completed yet.
    #[default]
    Loading,
    Loaded(Roster),
    /// The newest fetch failed; the list shows a static notice.
    Failed,
}

/// Values bound to the signup form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Selected activity name; empty means the placeholder option.
    pub activity: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient notice describing the outcome of the last action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Error }
    }
}

/// Identifies one shown feedback message. A pending auto-hide only hides the
/// message its ticket was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

/// Identifies one roster fetch. Only the newest issued fetch may apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub roster: RosterView,
    /// Entries of the activity selection control, rebuilt on each
    /// successful load and left alone on failure.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub feedback: Option<Feedback>,
    feedback_seq: u64,
    load_seq: u64,
}

impl BoardState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        LoadTicket(self.load_seq)
    }

    pub fn is_current_load(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_seq
    }

    /// Replace the roster and the selection options wholesale; the selection
    /// falls back to the placeholder. Returns `false` (and changes nothing)
    /// if a newer fetch has been issued.
    pub fn apply_roster(&mut self, ticket: LoadTicket, roster: Roster) -> bool {
        if !self.is_current_load(ticket) {
            return false;
        }
        self.options = roster.names().map(str::to_owned).collect();
        self.form.activity.clear();
        self.roster = RosterView::Loaded(roster);
        true
    }

    /// Replace the list with the failure notice. Returns `false` if a newer
    /// fetch has been issued.
    pub fn apply_load_failure(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current_load(ticket) {
            return false;
        }
        self.roster = RosterView::Failed;
        true
    }

    /// Show `feedback`, replacing whatever was visible.
    pub fn show_feedback(&mut self, feedback: Feedback) -> FeedbackTicket {
        self.feedback_seq += 1;
        self.feedback = Some(feedback);
        FeedbackTicket(self.feedback_seq)
    }

    /// Hide the banner if it still shows the message `ticket` was issued for.
    pub fn hide_feedback(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.feedback_seq || self.feedback.is_none() {
            return false;
        }
        self.feedback = None;
        true
    }

    pub fn reset_form(&mut self) {
        self.form = SignupForm::default();
    }
}
