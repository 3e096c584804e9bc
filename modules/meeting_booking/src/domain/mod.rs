pub mod booking_service;
pub mod error;
pub mod ports;
pub mod repo;
pub mod room_registry;
pub mod validation;
