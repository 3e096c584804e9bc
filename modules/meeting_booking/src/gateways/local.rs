use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::MeetingBookingApi,
    error::MeetingBookingError,
    model::{Booking, MeetingRoom, NewBooking},
};
use crate::domain::booking_service::BookingService;
use crate::domain::room_registry::RoomRegistry;

/// In-process `MeetingBookingApi` delegating to the domain services
pub struct MeetingBookingLocalClient {
    rooms: Arc<RoomRegistry>,
    bookings: Arc<BookingService>,
}

impl MeetingBookingLocalClient {
    pub fn new(rooms: Arc<RoomRegistry>, bookings: Arc<BookingService>) -> Self {
        Self { rooms, bookings }
    }
}

#[async_trait]
impl MeetingBookingApi for MeetingBookingLocalClient {
    async fn create_room(&self, name: &str) -> Result<Vec<MeetingRoom>, MeetingBookingError> {
        self.rooms.create_room(name).await.map_err(Into::into)
    }

    async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, MeetingBookingError> {
        self.rooms.list_rooms().await.map_err(Into::into)
    }

    async fn find_room(&self, id: Uuid) -> Result<MeetingRoom, MeetingBookingError> {
        self.rooms.find_room(id).await.map_err(Into::into)
    }

    async fn delete_room(&self, id: Uuid) -> Result<(), MeetingBookingError> {
        self.rooms.delete_room(id).await.map_err(Into::into)
    }

    async fn create_booking(
        &self,
        new_booking: NewBooking,
    ) -> Result<Vec<Booking>, MeetingBookingError> {
        self.bookings
            .create_booking(new_booking)
            .await
            .map_err(Into::into)
    }

    async fn list_bookings(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, MeetingBookingError> {
        self.bookings
            .list_bookings(meeting_room_id, date)
            .await
            .map_err(Into::into)
    }

    async fn delete_booking(&self, id: Uuid) -> Result<(), MeetingBookingError> {
        self.bookings.delete_booking(id).await.map_err(Into::into)
    }
}
