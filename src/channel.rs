//! Reservation Channel
//!
//! Write-only boundary between the booking form and the real-time transport.
//! Events are validated against their fixed record shape here, right before
//! they leave the client; the native input constraints are the first line.

use std::rc::Rc;

use thiserror::Error;

use crate::events::{Intent, ReservationEvent};

/// Shape violations caught at the channel boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("phone must be digits only after normalization, got `{0}`")]
    InvalidPhone(String),
    #[error("group size must be a whole number between 1 and 10, got `{0}`")]
    InvalidGroupSize(String),
    #[error("{0} requires a reservation reference code")]
    MissingReference(&'static str),
    #[error("submitReservation must not carry a reference code")]
    UnexpectedReference,
}

/// Handle the form emits reservation events through. The transport behind it
/// is injected by the owning shell; the form only ever writes.
#[derive(Clone)]
pub struct ReservationChannel {
    emit: Rc<dyn Fn(ReservationEvent)>,
}

impl ReservationChannel {
    /// Wrap a raw emit sink. The sink only ever sees validated events.
    pub fn new(emit: impl Fn(ReservationEvent) + 'static) -> Self {
        Self {
            emit: Rc::new(emit),
        }
    }

    /// Check the event's record shape and hand it to the transport.
    /// Fire-and-forget: a passed event is not acknowledged.
    pub fn send(&self, event: ReservationEvent) -> Result<(), ChannelError> {
        validate(&event)?;
        (self.emit)(event);
        Ok(())
    }
}

/// Fixed required fields per event name.
fn validate(event: &ReservationEvent) -> Result<(), ChannelError> {
    let payload = event.payload();
    if payload.name.is_empty() {
        return Err(ChannelError::MissingField("name"));
    }
    if payload.phone.is_empty() {
        return Err(ChannelError::MissingField("phone"));
    }
    if !payload.phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ChannelError::InvalidPhone(payload.phone.clone()));
    }
    if payload.group_size.is_empty() {
        return Err(ChannelError::MissingField("group_size"));
    }
    match payload.group_size.parse::<u32>() {
        Ok(size) if (1..=10).contains(&size) => {}
        _ => return Err(ChannelError::InvalidGroupSize(payload.group_size.clone())),
    }
    match event.intent() {
        Intent::Submit if !payload.res_code.is_empty() => Err(ChannelError::UnexpectedReference),
        Intent::Update | Intent::Cancel if payload.res_code.is_empty() => {
            Err(ChannelError::MissingReference(event.name()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::events::ReservationPayload;
    use crate::models::FormData;

    fn form(res_code: &str) -> FormData {
        FormData {
            name: "john doe".to_string(),
            phone: "(778) 123-4567".to_string(),
            group_size: "2".to_string(),
            email: String::new(),
            res_code: res_code.to_string(),
            host: "localhost:3000".to_string(),
            is_admin: false,
        }
    }

    fn recording_channel() -> (ReservationChannel, Rc<RefCell<Vec<ReservationEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let channel = ReservationChannel::new(move |event| sink.borrow_mut().push(event));
        (channel, seen)
    }

    #[test]
    fn test_valid_submit_reaches_the_sink() {
        let (channel, seen) = recording_channel();
        let event = ReservationEvent::from_form(Intent::Submit, &form(""), false);
        channel.send(event).expect("valid submit");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name(), "submitReservation");
        assert_eq!(seen[0].payload().phone, "7781234567");
    }

    #[test]
    fn test_cancel_requires_reference_code() {
        let (channel, seen) = recording_channel();
        let event = ReservationEvent::from_form(Intent::Cancel, &form(""), false);
        assert_eq!(
            channel.send(event),
            Err(ChannelError::MissingReference("cancelReservation"))
        );
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_submit_rejects_reference_code() {
        let (channel, seen) = recording_channel();
        let event = ReservationEvent::from_form(Intent::Submit, &form("ABC123"), false);
        assert_eq!(channel.send(event), Err(ChannelError::UnexpectedReference));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let (channel, seen) = recording_channel();
        let mut data = form("");
        data.name = "   ".to_string();
        // proper_case collapses whitespace-only names to empty
        let event = ReservationEvent::from_form(Intent::Submit, &data, false);
        assert_eq!(channel.send(event), Err(ChannelError::MissingField("name")));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_group_size_bounds() {
        let (channel, _) = recording_channel();
        for (size, ok) in [("1", true), ("10", true), ("0", false), ("11", false), ("two", false)] {
            let mut data = form("");
            data.group_size = size.to_string();
            let result = channel.send(ReservationEvent::from_form(Intent::Submit, &data, false));
            assert_eq!(result.is_ok(), ok, "group_size={size}");
        }
    }

    #[test]
    fn test_empty_group_size_is_a_missing_field() {
        let (channel, _) = recording_channel();
        let mut data = form("");
        data.group_size = String::new();
        assert_eq!(
            channel.send(ReservationEvent::from_form(Intent::Submit, &data, false)),
            Err(ChannelError::MissingField("group_size"))
        );
    }

    #[test]
    fn test_raw_event_with_masked_phone_is_rejected() {
        // from_form strips the mask on the way out; a raw event skips that
        // and must be caught here instead
        let (channel, seen) = recording_channel();
        let event = ReservationEvent::new(
            Intent::Submit,
            ReservationPayload {
                name: "John Doe".to_string(),
                phone: "(778) 123-4567".to_string(),
                group_size: "2".to_string(),
                email: String::new(),
                res_code: String::new(),
                is_admin: false,
                host: "localhost:3000".to_string(),
            },
        );
        assert_eq!(
            channel.send(event),
            Err(ChannelError::InvalidPhone("(778) 123-4567".to_string()))
        );
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_update_with_reference_passes() {
        let (channel, seen) = recording_channel();
        let event = ReservationEvent::from_form(Intent::Update, &form("ABC123"), true);
        channel.send(event).expect("valid update");
        assert_eq!(seen.borrow()[0].payload().res_code, "ABC123");
    }

    #[test]
    fn test_email_stays_optional() {
        let (channel, _) = recording_channel();
        let event = ReservationEvent::from_form(Intent::Submit, &form(""), false);
        assert!(channel.send(event).is_ok());
    }
}
