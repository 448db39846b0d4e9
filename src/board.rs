//! Activity board controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ActivityBoard` owns the four user-facing operations: load the roster,
//! sign up, remove a participant, and auto-dismiss feedback. It talks to
//! three seams so it can run against a test harness:
//!
//! - `ActivityApi`: the REST calls (`net::api::HttpApi` in the browser)
//! - `BoardView`: the mutable `BoardState` the page renders
//! - `Platform`: the confirmation dialog and the timer
//!
//! REFRESH AFTER WRITE
//! ===================
//! Writes never touch the roster locally. A successful signup or removal is
//! followed by a full reload; the roster only changes when that reload lands.
//! Reloads are not cancelled, but a response older than the newest issued
//! reload is dropped (see `BoardState::apply_roster`).

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::net::api::{ActivityApi, ApiError, HttpApi};
use crate::state::board::{BoardState, Feedback, FeedbackTicket};

pub const SIGNUP_SUCCEEDED: &str = "Signed up successfully";
pub const SIGNUP_REJECTED: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_SUCCEEDED: &str = "Participant removed";
pub const REMOVAL_REJECTED: &str = "Failed to remove participant";
pub const REMOVAL_FAILED: &str = "Failed to remove participant. Please try again.";

/// Mutable access to the rendered board state.
pub trait BoardView {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;
}

/// Browser facilities the controller needs beyond HTTP.
#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Ask the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool;
    async fn sleep(&self, duration: Duration);
}

/// Result of one roster fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The roster was replaced; holds the activity count.
    Loaded(usize),
    /// The list now shows the failure notice.
    Failed,
    /// A newer reload was issued before this one finished; nothing changed.
    Superseded,
}

/// Completion signal of a signup or removal handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request finished and feedback is showing.
    Completed { ticket: FeedbackTicket, succeeded: bool },
    /// The user declined the confirmation; no request was sent.
    Cancelled,
}

impl ActionOutcome {
    pub fn ticket(self) -> Option<FeedbackTicket> {
        match self {
            Self::Completed { ticket, .. } => Some(ticket),
            Self::Cancelled => None,
        }
    }

    pub fn succeeded(self) -> bool {
        matches!(self, Self::Completed { succeeded: true, .. })
    }
}

#[derive(Clone, Debug)]
pub struct ActivityBoard<A, V, P> {
    api: A,
    view: V,
    platform: P,
    feedback_timeout: Duration,
}

impl<A, V, P> ActivityBoard<A, V, P>
where
    A: ActivityApi,
    V: BoardView,
    P: Platform,
{
    pub fn new(api: A, view: V, platform: P, config: &BoardConfig) -> Self {
        Self { api, view, platform, feedback_timeout: config.feedback_timeout }
    }

    /// Fetch the full roster and rebuild the list and selection control.
    pub async fn load_activities(&self) -> LoadOutcome {
        let ticket = self.view.update(BoardState::begin_load);
        match self.api.fetch_activities().await {
            Ok(roster) => {
                let count = roster.len();
                if self.view.update(|s| s.apply_roster(ticket, roster)) {
                    LoadOutcome::Loaded(count)
                } else {
                    leptos::logging::log!("dropping superseded activity reload");
                    LoadOutcome::Superseded
                }
            }
            Err(err) => {
                leptos::logging::error!("Error fetching activities: {err}");
                if self.view.update(|s| s.apply_load_failure(ticket)) {
                    LoadOutcome::Failed
                } else {
                    LoadOutcome::Superseded
                }
            }
        }
    }

    /// Register `email` for `activity`. On success the form is reset and the
    /// roster reloaded before the message is shown, so the feedback window
    /// starts when the message appears.
    pub async fn submit_signup(&self, activity: &str, email: &str) -> ActionOutcome {
        match self.api.signup(activity, email).await {
            Ok(message) => {
                self.view.update(BoardState::reset_form);
                self.load_activities().await;
                let text = message.unwrap_or_else(|| SIGNUP_SUCCEEDED.to_owned());
                let ticket = self.view.update(|s| s.show_feedback(Feedback::success(text)));
                ActionOutcome::Completed { ticket, succeeded: true }
            }
            Err(err) => {
                let feedback = failure_feedback(&err, SIGNUP_REJECTED, SIGNUP_FAILED, "Error signing up");
                let ticket = self.view.update(|s| s.show_feedback(feedback));
                ActionOutcome::Completed { ticket, succeeded: false }
            }
        }
    }

    /// Unregister `email` from `activity` after the user confirms.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> ActionOutcome {
        if !self.platform.confirm(&format!("Unregister {email} from {activity}?")) {
            return ActionOutcome::Cancelled;
        }
        match self.api.unregister(activity, email).await {
            Ok(message) => {
                self.load_activities().await;
                let text = message.unwrap_or_else(|| REMOVAL_SUCCEEDED.to_owned());
                let ticket = self.view.update(|s| s.show_feedback(Feedback::success(text)));
                ActionOutcome::Completed { ticket, succeeded: true }
            }
            Err(err) => {
                let feedback = failure_feedback(&err, REMOVAL_REJECTED, REMOVAL_FAILED, "Error removing participant");
                let ticket = self.view.update(|s| s.show_feedback(feedback));
                ActionOutcome::Completed { ticket, succeeded: false }
            }
        }
    }

    /// Wait out the feedback timeout, then hide the message if it is still
    /// the one `ticket` was issued for.
    pub async fn dismiss_feedback(&self, ticket: FeedbackTicket) -> bool {
        self.platform.sleep(self.feedback_timeout).await;
        self.view.update(|s| s.hide_feedback(ticket))
    }

    /// Run an action's feedback to completion: no-op for `Cancelled`.
    pub async fn settle(&self, outcome: ActionOutcome) {
        if let Some(ticket) = outcome.ticket() {
            self.dismiss_feedback(ticket).await;
        }
    }
}

/// Bootstrap the board: performs the first roster load.
pub async fn initialize<A, V, P>(board: &ActivityBoard<A, V, P>) -> LoadOutcome
where
    A: ActivityApi,
    V: BoardView,
    P: Platform,
{
    let outcome = board.load_activities().await;
    leptos::logging::log!("activity board initialized: {outcome:?}");
    outcome
}

fn failure_feedback(err: &ApiError, rejected: &str, failed: &str, context: &str) -> Feedback {
    if err.is_transport() {
        leptos::logging::error!("{context}: {err}");
        return Feedback::error(failed);
    }
    Feedback::error(err.detail().unwrap_or(rejected))
}

// =============================================================================
// BROWSER ADAPTERS
// =============================================================================

/// `BoardView` over the page's shared signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalView(pub RwSignal<BoardState>);

impl BoardView for SignalView {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut *self.0.write())
    }
}

/// `window.confirm` and `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }

    #[allow(clippy::unused_async)]
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "csr"))]
        let _ = duration;
    }
}

pub type BrowserBoard = ActivityBoard<HttpApi, SignalView, BrowserPlatform>;

impl BrowserBoard {
    pub fn for_browser(state: RwSignal<BoardState>, config: &BoardConfig) -> Self {
        Self::new(HttpApi::new(config), SignalView(state), BrowserPlatform, config)
    }
}
