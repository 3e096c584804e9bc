use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::rest::error::VALIDATION_ERROR_KEY;
use crate::contract::model::{Booking, MeetingRoom, NewBooking};
use crate::domain::validation::validate_booking_window;

/// Message reported for every absent request field.
pub const MUST_NOT_BE_NULL: &str = "must not be null";

/// REST DTO for a meeting room
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoomDto {
    pub id: Uuid,
    #[schema(example = "Polaris")]
    pub name: String,
}

/// REST DTO for a booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Uuid,
    pub meeting_room_id: Uuid,
    #[schema(example = "employee@example.com")]
    pub employee_email: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub time_from: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub time_to: NaiveTime,
}

/// Booking request body. Every field is required; absence is reported per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingReq {
    pub meeting_room_id: Option<Uuid>,
    #[schema(example = "employee@example.com")]
    pub employee_email: Option<String>,
    pub date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "10:00:00")]
    pub time_from: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "11:00:00")]
    pub time_to: Option<NaiveTime>,
}

impl CreateBookingReq {
    /// The booking to create, or the per-field errors.
    ///
    /// Each absent field maps to `"must not be null"`. When the date and both
    /// times are present, a broken window rule is reported alongside them under
    /// `"Validation error"`.
    pub fn into_new_booking(
        self,
        now: NaiveDateTime,
    ) -> Result<NewBooking, BTreeMap<String, String>> {
        match (
            self.meeting_room_id,
            self.employee_email,
            self.date,
            self.time_from,
            self.time_to,
        ) {
            (
                Some(meeting_room_id),
                Some(employee_email),
                Some(date),
                Some(time_from),
                Some(time_to),
            ) => Ok(NewBooking {
                meeting_room_id,
                employee_email,
                date,
                time_from,
                time_to,
            }),
            (room, email, date, from, to) => {
                let present = [
                    ("meetingRoomId", room.is_some()),
                    ("employeeEmail", email.is_some()),
                    ("date", date.is_some()),
                    ("timeFrom", from.is_some()),
                    ("timeTo", to.is_some()),
                ];
                let mut errors: BTreeMap<String, String> = present
                    .into_iter()
                    .filter(|(_, ok)| !ok)
                    .map(|(field, _)| (field.to_string(), MUST_NOT_BE_NULL.to_string()))
                    .collect();
                if let (Some(date), Some(from), Some(to)) = (date, from, to) {
                    if let Err(rule) = validate_booking_window(date, from, to, now) {
                        errors.insert(VALIDATION_ERROR_KEY.to_string(), rule.to_string());
                    }
                }
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBookingsQuery {
    pub meeting_room_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteBookingQuery {
    /// Booking id
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateRoomQuery {
    /// Room name, unique ignoring case
    pub name: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<MeetingRoom> for MeetingRoomDto {
    fn from(room: MeetingRoom) -> Self {
        Self {
            id: room.id,
            name: room.name,
        }
    }
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            meeting_room_id: b.meeting_room_id,
            employee_email: b.employee_email,
            date: b.date,
            time_from: b.time_from,
            time_to: b.time_to,
        }
    }
}
