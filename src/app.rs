//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::BoardConfig;
use crate::pages::activities::ActivitiesPage;
use crate::state::board::BoardState;

/// Root application component.
///
/// Provides the board config and the shared `BoardState` signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BoardConfig::from_build_env().unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; using default board config");
        BoardConfig::default()
    });
    provide_context(config);
    provide_context(RwSignal::new(BoardState::default()));

    view! {
        <Stylesheet id="activity-board" href="/static/styles.css"/>
        <Title text="Mergington High School Activities"/>

        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <ActivitiesPage/>
        </main>
    }
}
