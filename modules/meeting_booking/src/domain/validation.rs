//! Booking window rules. Pure: the caller supplies "now".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const SLOT_MINUTES: i64 = 60;

/// A rule a booking window broke. Checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRuleViolation {
    #[error("Booking end datetime cannot be in the past.")]
    EndInPast,

    #[error("The end time cannot be before the start time.")]
    EndBeforeStart,

    #[error("The booking duration must be at least 1 hour and in 1-hour increments.")]
    InvalidDuration,
}

/// True once `date` + `time_to` lies strictly before `now`.
pub fn has_ended(date: NaiveDate, time_to: NaiveTime, now: NaiveDateTime) -> bool {
    date.and_time(time_to) < now
}

/// First violated rule for `[time_from, time_to)` on `date`, if any.
pub fn validate_booking_window(
    date: NaiveDate,
    time_from: NaiveTime,
    time_to: NaiveTime,
    now: NaiveDateTime,
) -> Result<(), BookingRuleViolation> {
    if has_ended(date, time_to, now) {
        return Err(BookingRuleViolation::EndInPast);
    }
    if time_to < time_from {
        return Err(BookingRuleViolation::EndBeforeStart);
    }
    let minutes = (time_to - time_from).num_minutes();
    if minutes < SLOT_MINUTES || minutes % SLOT_MINUTES != 0 {
        return Err(BookingRuleViolation::InvalidDuration);
    }
    Ok(())
}
