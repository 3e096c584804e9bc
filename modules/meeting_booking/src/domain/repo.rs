use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::contract::model::{Booking, MeetingRoom};

/// Persistence port for rooms.
#[async_trait]
pub trait RoomsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MeetingRoom>>;
    /// Case-insensitive name lookup.
    async fn name_exists(&self, name: &str) -> anyhow::Result<bool>;
    async fn insert(&self, room: MeetingRoom) -> anyhow::Result<()>;
    /// All rooms, storage order.
    async fn list(&self) -> anyhow::Result<Vec<MeetingRoom>>;
    /// Delete by id together with the room's bookings. Returns true if a room was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

/// Persistence port for bookings.
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Booking>>;
    /// Whether any booking of the room on `date` intersects `[time_from, time_to)`.
    async fn overlap_exists(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
        time_from: NaiveTime,
        time_to: NaiveTime,
    ) -> anyhow::Result<bool>;
    async fn insert(&self, booking: Booking) -> anyhow::Result<()>;
    async fn list_for_room_and_date(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<Booking>>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
