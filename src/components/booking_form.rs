//! Booking Form Component
//!
//! The reservation form: controlled field state, action buttons derived from
//! the reference code, and typed event emission over the reservation channel.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::channel::ReservationChannel;
use crate::components::{ActionButtons, PhoneInput};
use crate::events::{Intent, ReservationEvent};
use crate::models::{should_adopt, FormData};

/// Reservation form, mounted on both the customer and the admin view.
///
/// The `reservation` signal is the externally supplied copy (the server stays
/// authoritative); `is_admin` says which view this instance renders; `channel`
/// is the write-only handle submissions go out on.
#[component]
pub fn BookingForm(
    reservation: ReadSignal<FormData>,
    is_admin: bool,
    channel: ReservationChannel,
) -> impl IntoView {
    // Seed unconditionally on mount; later pushes go through the adoption rule.
    let (form, set_form) = signal(reservation.get_untracked());
    let (intent, set_intent) = signal(Intent::Submit);
    let (last_adopted, set_last_adopted) = signal(reservation.get_untracked());
    // The channel wraps browser socket state, which never leaves this thread
    let channel = StoredValue::new_local(channel);

    // Adopt external pushes only when they originate from this view and
    // differ from what was adopted last.
    Effect::new(move |_| {
        let incoming = reservation.get();
        if last_adopted.with_untracked(|last| should_adopt(is_admin, &incoming, last)) {
            set_last_adopted.set(incoming.clone());
            set_form.set(incoming);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        // A plain form post would navigate away
        ev.prevent_default();
        let event = form.with_untracked(|data| {
            ReservationEvent::from_form(intent.get_untracked(), data, is_admin)
        });
        if let Err(err) = channel.with_value(|ch| ch.send(event)) {
            web_sys::console::warn_1(&format!("[FORM] submission not sent: {err}").into());
        }
    };

    // Masked value comes back from PhoneInput already formatted
    let on_phone_change = move |masked: String| {
        set_form.update(|data| data.phone = masked);
    };

    // Which button was clicked, recorded before the submit event fires
    let on_intent_select = move |picked: Intent| {
        set_intent.set(picked);
    };

    view! {
        {move || {
            form.with(|data| {
                data.has_res_code().then(|| {
                    let res_code = data.res_code.clone();
                    view! {
                        <span class="subtitle is-5">
                            <em>" - Reference ID: " {res_code}</em>
                        </span>
                    }
                })
            })
        }}
        <form on:submit=on_submit>
            <div class="field">
                <label class="label is-medium">"Name*"</label>
                <div class="control has-icons-left has-icons-right">
                    <input
                        class="input is-medium"
                        type="text"
                        placeholder="Your name"
                        required=true
                        prop:value=move || form.with(|data| data.name.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_form.update(|data| data.name = value);
                        }
                    />
                    <span class="icon is-medium is-left">
                        <i class="fas fa-user-alt"></i>
                    </span>
                    <span class="icon is-medium is-right">
                        <i class="fas fa-check fa-lg"></i>
                    </span>
                </div>
            </div>

            <div class="field">
                <label class="label is-medium">"Phone*"</label>
                <div class="control has-icons-left has-icons-right">
                    <PhoneInput
                        value=Signal::derive(move || form.with(|data| data.phone.clone()))
                        on_change=on_phone_change
                    />
                    <span class="icon is-medium is-left">
                        <a class="button is-static">"+1"</a>
                    </span>
                    <span class="icon is-medium is-right">
                        <i class="fas fa-check fa-lg"></i>
                    </span>
                </div>
            </div>

            <div class="field">
                <label class="label is-medium">"Group Size*"</label>
                <div class="control has-icons-left has-icons-right">
                    <input
                        class="input is-medium"
                        type="number"
                        min="1"
                        max="10"
                        placeholder="e.g. 2"
                        required=true
                        prop:value=move || form.with(|data| data.group_size.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_form.update(|data| data.group_size = value);
                        }
                    />
                    <span class="icon is-medium is-left">
                        <i class="fas fa-user-alt"></i>
                    </span>
                    <span class="icon is-medium is-right">
                        <i class="fas fa-check fa-lg"></i>
                    </span>
                </div>
            </div>

            <div class="field">
                <label class="label is-medium">"Email (optional)"</label>
                <div class="control has-icons-left has-icons-right">
                    <input
                        class="input is-medium"
                        type="email"
                        placeholder="example@gmail.com"
                        prop:value=move || form.with(|data| data.email.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_form.update(|data| data.email = value);
                        }
                    />
                    <span class="icon is-medium is-left">
                        <i class="fas fa-envelope"></i>
                    </span>
                    <span class="icon is-medium is-right">
                        <i class="fas fa-check fa-lg"></i>
                    </span>
                </div>
            </div>

            <ActionButtons
                has_res_code=Signal::derive(move || form.with(FormData::has_res_code))
                on_intent=on_intent_select
            />
        </form>
    }
}
