use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Bookable meeting room. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoom {
    pub id: Uuid,
    pub name: String,
}

/// A room reserved for `[time_from, time_to)` on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub meeting_room_id: Uuid,
    pub employee_email: String,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}

/// Data for creating a new booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub meeting_room_id: Uuid,
    pub employee_email: String,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}
