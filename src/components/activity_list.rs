//! Activity list container.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is rebuilt from `render_roster` markup whenever the roster
//! changes (typing in the form leaves it alone), so
//! delete buttons are not individual Leptos nodes. A single click listener
//! on the container resolves clicks inside `.delete-btn` to an
//! `(activity, email)` pair.

#[cfg(test)]
#[path = "activity_list_test.rs"]
mod activity_list_test;

use leptos::prelude::*;

use crate::components::activity_card::render_roster;
use crate::state::board::{BoardState, RosterView};

/// The roster slice of the board state. Form edits do not notify it.
pub fn roster_memo(board: RwSignal<BoardState>) -> Memo<RosterView> {
    Memo::new(move |_| board.with(|s| s.roster.clone()))
}

#[component]
pub fn ActivityList(on_remove: Callback<(String, String)>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let roster = roster_memo(board);
    let markup = move || roster.with(render_roster);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(target) = delete_target(&ev) {
                on_remove.run(target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, on_remove);
        }
    };

    view! {
        <div id="activities-container">
            <h3>"Available Activities"</h3>
            <div id="activities-list" on:click=on_click inner_html=markup></div>
        </div>
    }
}

/// Resolve a click to the delete button it landed in, if any. Buttons
/// missing either data attribute are ignored.
#[cfg(feature = "csr")]
fn delete_target(ev: &leptos::ev::MouseEvent) -> Option<(String, String)> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest(".delete-btn").ok()??;
    let activity = button.get_attribute("data-activity").filter(|v| !v.is_empty())?;
    let email = button.get_attribute("data-email").filter(|v| !v.is_empty())?;
    Some((activity, email))
}
