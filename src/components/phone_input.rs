//! Phone Input Component
//!
//! Controlled tel input that applies the (###) ###-#### mask while typing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::form_helpers::format_phone;

/// Masked phone input. The mask is applied on display, so the field renders
/// formatted whether the state holds typed (already masked) input or the
/// digits-only phone an adopted server push carries. Submission strips the
/// value back to digits.
#[component]
pub fn PhoneInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="input is-medium"
            type="tel"
            placeholder="(778) 123-4567"
            required=true
            prop:value=move || format_phone(&value.get())
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                on_change.run(format_phone(&input.value()));
            }
        />
    }
}
