use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::contract::{
    error::MeetingBookingError,
    model::{Booking, MeetingRoom, NewBooking},
};

/// In-process API of the meeting_booking module.
#[async_trait]
pub trait MeetingBookingApi: Send + Sync {
    /// Register a room; returns every room afterwards.
    async fn create_room(&self, name: &str) -> Result<Vec<MeetingRoom>, MeetingBookingError>;

    async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, MeetingBookingError>;

    async fn find_room(&self, id: Uuid) -> Result<MeetingRoom, MeetingBookingError>;

    /// Remove a room together with all of its bookings.
    async fn delete_room(&self, id: Uuid) -> Result<(), MeetingBookingError>;

    /// Book a room; returns the room's bookings for that date, new one included.
    async fn create_booking(
        &self,
        new_booking: NewBooking,
    ) -> Result<Vec<Booking>, MeetingBookingError>;

    async fn list_bookings(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, MeetingBookingError>;

    /// Cancel a booking that has not ended yet.
    async fn delete_booking(&self, id: Uuid) -> Result<(), MeetingBookingError>;
}
