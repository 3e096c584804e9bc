use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Booking, NewBooking};
use crate::domain::error::DomainError;
use crate::domain::ports::Clock;
use crate::domain::repo::BookingsRepository;
use crate::domain::room_registry::RoomRegistry;
use crate::domain::validation::{has_ended, validate_booking_window};

/// Booking rules: window validity, room existence, overlap and cancellation.
#[derive(Clone)]
pub struct BookingService {
    rooms: RoomRegistry,
    repo: Arc<dyn BookingsRepository>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        rooms: RoomRegistry,
        repo: Arc<dyn BookingsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { rooms, repo, clock }
    }

    /// Current time as seen by the booking rules.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Validate and store a booking, then return the room's bookings for that date.
    ///
    /// The overlap check and the insert are separate statements, so two
    /// concurrent requests for the same slot can both succeed.
    #[instrument(
        name = "meeting_booking.bookings.create_booking",
        skip(self, new_booking),
        fields(
            room_id = %new_booking.meeting_room_id,
            date = %new_booking.date,
            time_from = %new_booking.time_from,
            time_to = %new_booking.time_to
        )
    )]
    pub async fn create_booking(&self, new_booking: NewBooking) -> Result<Vec<Booking>, DomainError> {
        info!("Creating booking");

        validate_booking_window(
            new_booking.date,
            new_booking.time_from,
            new_booking.time_to,
            self.clock.now(),
        )?;

        let room = self.rooms.find_room(new_booking.meeting_room_id).await?;

        if self
            .repo
            .overlap_exists(
                room.id,
                new_booking.date,
                new_booking.time_from,
                new_booking.time_to,
            )
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            debug!("Requested slot overlaps an existing booking");
            return Err(DomainError::BookingOverlap);
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            meeting_room_id: room.id,
            employee_email: new_booking.employee_email,
            date: new_booking.date,
            time_from: new_booking.time_from,
            time_to: new_booking.time_to,
        };
        let id = booking.id;
        self.repo
            .insert(booking)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Created booking with id={}", id);
        self.list_bookings(room.id, new_booking.date).await
    }

    #[instrument(
        name = "meeting_booking.bookings.list_bookings",
        skip(self),
        fields(room_id = %meeting_room_id, date = %date)
    )]
    pub async fn list_bookings(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self
            .repo
            .list_for_room_and_date(meeting_room_id, date)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} bookings", bookings.len());
        Ok(bookings)
    }

    #[instrument(
        name = "meeting_booking.bookings.delete_booking",
        skip(self),
        fields(booking_id = %id)
    )]
    pub async fn delete_booking(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Canceling booking");

        let booking = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::booking_not_found(id))?;

        if has_ended(booking.date, booking.time_to, self.clock.now()) {
            return Err(DomainError::past_booking(id));
        }

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            return Err(DomainError::booking_not_found(id));
        }

        info!("Canceled booking");
        Ok(())
    }
}
