//! Action Buttons
//!
//! Form actions derived from whether a reference code is present.

use leptos::prelude::*;

use crate::events::Intent;

/// Buttons the form exposes: UPDATE and CANCEL for an existing booking,
/// SUBMIT for a new one. Pure derivation from one boolean, re-evaluated on
/// every render.
pub fn form_actions(has_res_code: bool) -> Vec<Intent> {
    if has_res_code {
        vec![Intent::Update, Intent::Cancel]
    } else {
        vec![Intent::Submit]
    }
}

/// Submit-button row for the booking form.
///
/// Every button is `type="submit"` so the click records the intent right
/// before the form's own submit event fires.
#[component]
pub fn ActionButtons(
    #[prop(into)] has_res_code: Signal<bool>,
    #[prop(into)] on_intent: Callback<Intent>,
) -> impl IntoView {
    view! {
        <div class="field is-centered is-grouped">
            {move || {
                form_actions(has_res_code.get())
                    .into_iter()
                    .map(|intent| {
                        view! {
                            <p class="control">
                                <button
                                    type="submit"
                                    class=intent.css_class()
                                    on:click=move |_| on_intent.run(intent)
                                >
                                    {intent.label()}
                                </button>
                            </p>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
