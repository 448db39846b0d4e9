//! Transient outcome banner.

#[cfg(test)]
#[path = "feedback_banner_test.rs"]
mod feedback_banner_test;

use leptos::prelude::*;

use crate::state::board::{BoardState, Feedback};

/// CSS class for the banner: the feedback kind, or `hidden`.
pub fn banner_class(feedback: Option<&Feedback>) -> &'static str {
    feedback.map_or("hidden", |f| f.kind.css_class())
}

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let class = move || board.with(|s| banner_class(s.feedback.as_ref()));
    let text = move || board.with(|s| s.feedback.as_ref().map(|f| f.text.clone()).unwrap_or_default());

    view! {
        <div id="message" class=class role="status">
            {text}
        </div>
    }
}
