pub mod booking;
pub mod meeting_room;
