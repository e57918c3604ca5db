//! UI Components
//!
//! The booking form and its child controls.

mod action_buttons;
mod booking_form;
mod phone_input;

pub use action_buttons::ActionButtons;
pub use booking_form::BookingForm;
pub use phone_input::PhoneInput;
