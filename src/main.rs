#![allow(warnings)]
//! Reservation Frontend Entry Point

mod app;
mod channel;
mod components;
mod config;
mod events;
mod form_helpers;
mod models;
mod socket;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
