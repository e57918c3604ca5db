//! Reservation Models
//!
//! Form data as exchanged with the reservation server.

use serde::{Deserialize, Serialize};

/// Reservation form data (matches the server's record shape)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub phone: String,
    /// Party size, kept as the integer string the input produced (1-10)
    pub group_size: String,
    pub email: String,
    /// Reference code of an existing booking; empty means "new record"
    pub res_code: String,
    /// Origin identifier stamped on outbound payloads
    pub host: String,
    /// True when this data was submitted on the admin view
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl FormData {
    /// Blank form bound to the given origin.
    pub fn new(host: impl Into<String>, is_admin: bool) -> Self {
        Self {
            host: host.into(),
            is_admin,
            ..Self::default()
        }
    }

    /// An existing booking carries a reference code; a new one does not.
    pub fn has_res_code(&self) -> bool {
        !self.res_code.is_empty()
    }
}

/// Whether an externally pushed copy should replace the local one.
///
/// The same form is mounted on both the admin and the customer view. A push is
/// adopted only when it was submitted on the view this instance renders
/// (otherwise a customer submission would populate the admin form, and vice
/// versa) and when it differs from the snapshot adopted last, so repeated
/// identical pushes stay no-ops.
pub fn should_adopt(view_is_admin: bool, incoming: &FormData, last_adopted: &FormData) -> bool {
    incoming.is_admin == view_is_admin && incoming != last_adopted
}
