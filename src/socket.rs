//! Socket Bindings
//!
//! wasm-bindgen bindings to the socket.io client loaded by the host page,
//! plus the typed wrappers the rest of the app uses.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::channel::ReservationChannel;
use crate::models::FormData;

/// Server broadcast carrying the authoritative copy of a booked reservation.
pub const BOOKED_EVENT: &str = "reservationBooked";

#[wasm_bindgen]
extern "C" {
    /// socket.io client handle created by the page's `io()` global
    type Socket;

    #[wasm_bindgen(js_name = io)]
    fn io_connect() -> Socket;

    #[wasm_bindgen(method)]
    fn emit(this: &Socket, event: &str, payload: JsValue);

    #[wasm_bindgen(method)]
    fn on(this: &Socket, event: &str, callback: &js_sys::Function);
}

/// Connection to the reservation server, shared by emitters and listeners
#[derive(Clone)]
pub struct SocketClient {
    socket: Rc<Socket>,
}

impl SocketClient {
    /// Connect to the origin the page was served from.
    pub fn connect() -> Self {
        Self {
            socket: Rc::new(io_connect()),
        }
    }

    /// Write-only handle for the booking form.
    pub fn reservation_channel(&self) -> ReservationChannel {
        let socket = Rc::clone(&self.socket);
        ReservationChannel::new(move |event| {
            match serde_wasm_bindgen::to_value(event.payload()) {
                Ok(payload) => socket.emit(event.name(), payload),
                Err(err) => web_sys::console::error_1(
                    &format!("[SOCKET] failed to encode {}: {err}", event.name()).into(),
                ),
            }
        })
    }

    /// Subscribe to booked-reservation broadcasts. Malformed pushes are
    /// logged and dropped.
    pub fn on_reservation(&self, callback: impl Fn(FormData) + 'static) {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<FormData>(value) {
                Ok(data) => callback(data),
                Err(err) => web_sys::console::warn_1(
                    &format!("[SOCKET] dropped malformed reservation push: {err}").into(),
                ),
            }
        });
        self.socket.on(BOOKED_EVENT, handler.as_ref().unchecked_ref());
        handler.forget();
    }
}
