pub mod client;
pub mod error;
pub mod model;

pub use client::MeetingBookingApi;
pub use error::MeetingBookingError;
pub use model::{Booking, MeetingRoom, NewBooking};
