//! Signup form with the activity selection control.

use leptos::prelude::*;

use crate::state::board::BoardState;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Selection entries of the board state. Typing an email does not notify it.
pub fn options_memo(board: RwSignal<BoardState>) -> Memo<Vec<String>> {
    Memo::new(move |_| board.with(|s| s.options.clone()))
}

/// Emits `(activity, email)` on submit. Inputs are bound to
/// `BoardState::form`, so a successful signup resets them through state.
#[component]
pub fn SignupForm(on_submit: Callback<(String, String)>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = board.with_untracked(|s| s.form.clone());
        on_submit.run((form.activity, form.email));
    };

    let option_names = options_memo(board);
    let email = Memo::new(move |_| board.with(|s| s.form.email.clone()));
    let selected = Memo::new(move |_| board.with(|s| s.form.activity.clone()));

    // Options are rebuilt wholesale whenever a load lands.
    let options = move || {
        option_names.with(|names| {
            names
                .iter()
                .map(|name| {
                    view! { <option value=name.clone()>{name.clone()}</option> }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="your-email@mergington.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| board.update(|s| s.form.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required=true
                        prop:value=move || selected.get()
                        on:change=move |ev| board.update(|s| s.form.activity = event_target_value(&ev))
                    >
                        <option value="">{SELECT_PLACEHOLDER}</option>
                        {options}
                    </select>
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
        </div>
    }
}
