use sea_orm::Set;

use crate::contract::model::{Booking, MeetingRoom};
use crate::infra::storage::entity::{booking, meeting_room};

/// Case-folded form of a room name, compared instead of the name itself.
pub fn room_name_key(name: &str) -> String {
    name.to_lowercase()
}

impl From<meeting_room::Model> for MeetingRoom {
    fn from(m: meeting_room::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

impl From<booking::Model> for Booking {
    fn from(m: booking::Model) -> Self {
        Self {
            id: m.id,
            meeting_room_id: m.meeting_room_id,
            employee_email: m.employee_email,
            date: m.date,
            time_from: m.time_from,
            time_to: m.time_to,
        }
    }
}

impl From<MeetingRoom> for meeting_room::ActiveModel {
    fn from(r: MeetingRoom) -> Self {
        Self {
            id: Set(r.id),
            name_key: Set(room_name_key(&r.name)),
            name: Set(r.name),
        }
    }
}

impl From<Booking> for booking::ActiveModel {
    fn from(b: Booking) -> Self {
        Self {
            id: Set(b.id),
            meeting_room_id: Set(b.meeting_room_id),
            employee_email: Set(b.employee_email),
            date: Set(b.date),
            time_from: Set(b.time_from),
            time_to: Set(b.time_to),
        }
    }
}
