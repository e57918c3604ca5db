//! Reservation App Shell
//!
//! Owns the externally supplied reservation data and wires the socket client
//! to the booking form.

use leptos::prelude::*;

use crate::components::BookingForm;
use crate::config::AppConfig;
use crate::models::FormData;
use crate::socket::SocketClient;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    let socket = SocketClient::connect();
    let channel = socket.reservation_channel();

    // The server is authoritative: every booked reservation is pushed back to
    // all connected views, and the form decides whether to adopt it.
    let (reservation, set_reservation) =
        signal(FormData::new(config.host.clone(), config.is_admin));
    socket.on_reservation(move |data| {
        web_sys::console::log_1(
            &format!("[APP] reservation push (origin admin: {})", data.is_admin).into(),
        );
        set_reservation.set(data);
    });

    let heading = if config.is_admin {
        "Reservations (Admin)"
    } else {
        "Book a Table"
    };

    view! {
        <section class="section">
            <div class="container">
                <h1 class="title">{heading}</h1>
                <BookingForm
                    reservation=reservation
                    is_admin=config.is_admin
                    channel=channel
                />
            </div>
        </section>
    }
}
