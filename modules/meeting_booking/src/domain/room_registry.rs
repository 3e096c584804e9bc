use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::MeetingRoom;
use crate::domain::error::DomainError;
use crate::domain::repo::RoomsRepository;

/// Owns the set of bookable rooms and their name uniqueness.
#[derive(Clone)]
pub struct RoomRegistry {
    repo: Arc<dyn RoomsRepository>,
}

impl RoomRegistry {
    pub fn new(repo: Arc<dyn RoomsRepository>) -> Self {
        Self { repo }
    }

    /// Register `name` and return every room afterwards.
    #[instrument(name = "meeting_booking.rooms.create_room", skip(self))]
    pub async fn create_room(&self, name: &str) -> Result<Vec<MeetingRoom>, DomainError> {
        info!("Creating meeting room");

        if self
            .repo
            .name_exists(name)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::room_already_exists(name));
        }

        let room = MeetingRoom {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        let id = room.id;
        self.repo
            .insert(room)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Created meeting room with id={}", id);
        self.list_rooms().await
    }

    #[instrument(name = "meeting_booking.rooms.list_rooms", skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, DomainError> {
        let rooms = self
            .repo
            .list()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} meeting rooms", rooms.len());
        Ok(rooms)
    }

    #[instrument(name = "meeting_booking.rooms.find_room", skip(self), fields(room_id = %id))]
    pub async fn find_room(&self, id: Uuid) -> Result<MeetingRoom, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::room_not_found(id))
    }

    /// Remove a room; its bookings go with it.
    #[instrument(name = "meeting_booking.rooms.delete_room", skip(self), fields(room_id = %id))]
    pub async fn delete_room(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting meeting room");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            return Err(DomainError::room_not_found(id));
        }

        info!("Deleted meeting room");
        Ok(())
    }
}
