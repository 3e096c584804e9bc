use thiserror::Error;
use uuid::Uuid;

use crate::domain::validation::BookingRuleViolation;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("A room with the name '{name}' already exists")]
    RoomAlreadyExists { name: String },

    #[error("The meeting room with ID '{id}' was not found")]
    RoomNotFound { id: Uuid },

    #[error("There is no booking with id {id}")]
    BookingNotFound { id: Uuid },

    #[error("Booking overlaps with an existing booking")]
    BookingOverlap,

    #[error("A booking that has already ended cannot be canceled")]
    PastBooking { id: Uuid },

    #[error(transparent)]
    InvalidBooking(#[from] BookingRuleViolation),

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn room_already_exists(name: impl Into<String>) -> Self {
        Self::RoomAlreadyExists { name: name.into() }
    }

    pub fn room_not_found(id: Uuid) -> Self {
        Self::RoomNotFound { id }
    }

    pub fn booking_not_found(id: Uuid) -> Self {
        Self::BookingNotFound { id }
    }

    pub fn past_booking(id: Uuid) -> Self {
        Self::PastBooking { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
