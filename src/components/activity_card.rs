//! Activity card markup.
//!
//! Cards are produced as HTML strings and injected into the list container,
//! so every server-supplied string goes through `escape_html`. Delete
//! buttons carry their activity and email in `data-*` attributes for the
//! list's delegated click handler.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use std::fmt::Write as _;

use crate::net::types::Activity;
use crate::state::board::RosterView;
use crate::util::escape::escape_html;

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Render one activity card.
pub fn render_activity(name: &str, details: &Activity) -> String {
    let name = escape_html(name);
    let participants = if details.participants.is_empty() {
        format!(r#"<p class="no-participants">{NO_PARTICIPANTS}</p>"#)
    } else {
        let mut items = String::new();
        for email in &details.participants {
            let email = escape_html(email);
            let _ = write!(
                items,
                r#"<li class="participant-item"><span class="participant-email">{email}</span><button class="delete-btn" aria-label="Remove participant" data-activity="{name}" data-email="{email}">🗑️</button></li>"#
            );
        }
        format!(r#"<ul class="participants-list">{items}</ul>"#)
    };

    format!(
        concat!(
            r#"<div class="activity-card">"#,
            "<h4>{name}</h4>",
            "<p>{description}</p>",
            "<p><strong>Schedule:</strong> {schedule}</p>",
            "<p><strong>Availability:</strong> {spots} spots left</p>",
            r#"<div class="participants"><h5>Participants</h5>{participants}</div>"#,
            "</div>"
        ),
        name = name,
        description = escape_html(&details.description),
        schedule = escape_html(&details.schedule),
        spots = details.spots_left(),
        participants = participants,
    )
}

/// Render the whole list area for the current view.
pub fn render_roster(view: &RosterView) -> String {
    match view {
        RosterView::Loading => format!("<p>{LOADING_NOTICE}</p>"),
        RosterView::Failed => format!("<p>{LOAD_FAILED_NOTICE}</p>"),
        RosterView::Loaded(roster) => {
            roster.iter().map(|(name, details)| render_activity(name, details)).collect()
        }
    }
}
