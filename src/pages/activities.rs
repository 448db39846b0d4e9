//! Activities page: roster, signup form, and feedback banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the browser `ActivityBoard` over the shared `BoardState` signal,
//! runs `initialize` on mount, and turns component events into controller
//! calls. Each handler runs as its own local task; in-flight requests are
//! never cancelled when a new action starts.

use leptos::prelude::*;

use crate::board::BrowserBoard;
use crate::components::activity_list::ActivityList;
use crate::components::feedback_banner::FeedbackBanner;
use crate::components::signup_form::SignupForm;
use crate::config::BoardConfig;
use crate::state::board::BoardState;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<BoardConfig>();
    let board = BrowserBoard::for_browser(state, &config);

    #[cfg(feature = "csr")]
    {
        let board = board.clone();
        leptos::task::spawn_local(async move {
            crate::board::initialize(&board).await;
        });
    }

    let signup_board = board.clone();
    let on_signup = Callback::new(move |(activity, email): (String, String)| {
        #[cfg(feature = "csr")]
        {
            let board = signup_board.clone();
            leptos::task::spawn_local(async move {
                let outcome = board.submit_signup(&activity, &email).await;
                board.settle(outcome).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&signup_board, activity, email);
        }
    });

    let on_remove = Callback::new(move |(activity, email): (String, String)| {
        #[cfg(feature = "csr")]
        {
            let board = board.clone();
            leptos::task::spawn_local(async move {
                let outcome = board.remove_participant(&activity, &email).await;
                board.settle(outcome).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&board, activity, email);
        }
    });

    view! {
        <section class="activities-page">
            <ActivityList on_remove=on_remove/>
            <SignupForm on_submit=on_signup/>
            <FeedbackBanner/>
        </section>
    }
}
