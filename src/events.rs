//! Reservation Events
//!
//! Typed events the booking form emits over the reservation channel.

use serde::{Deserialize, Serialize};

use crate::form_helpers::{digits_only, proper_case};
use crate::models::FormData;

/// Which action button armed the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Submit,
    Update,
    Cancel,
}

impl Intent {
    /// Wire name of the event this intent emits.
    pub fn event_name(self) -> &'static str {
        match self {
            Intent::Submit => "submitReservation",
            Intent::Update => "updateReservation",
            Intent::Cancel => "cancelReservation",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Intent::Submit => "SUBMIT",
            Intent::Update => "UPDATE",
            Intent::Cancel => "CANCEL",
        }
    }

    /// Bulma styling for the button.
    pub fn css_class(self) -> &'static str {
        match self {
            Intent::Submit => "button is-link",
            Intent::Update => "button is-success",
            Intent::Cancel => "button is-danger",
        }
    }
}

/// Fixed payload shape carried by every reservation event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationPayload {
    pub name: String,
    pub phone: String,
    pub group_size: String,
    pub email: String,
    pub res_code: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub host: String,
}

/// One outbound reservation event: a wire name plus its record
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationEvent {
    intent: Intent,
    payload: ReservationPayload,
}

impl ReservationEvent {
    /// Assemble an event from an already shaped payload. Nothing is
    /// normalized here; the channel boundary still validates the record.
    pub fn new(intent: Intent, payload: ReservationPayload) -> Self {
        Self { intent, payload }
    }

    /// Package the current form state, normalizing name and phone on the way
    /// out. `submitted_by_admin` is the view's own admin flag, not whatever
    /// flag the adopted data carried.
    pub fn from_form(intent: Intent, data: &FormData, submitted_by_admin: bool) -> Self {
        Self {
            intent,
            payload: ReservationPayload {
                name: proper_case(&data.name),
                phone: digits_only(&data.phone),
                group_size: data.group_size.clone(),
                email: data.email.clone(),
                res_code: data.res_code.clone(),
                is_admin: submitted_by_admin,
                host: data.host.clone(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.intent.event_name()
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn payload(&self) -> &ReservationPayload {
        &self.payload
    }
}
