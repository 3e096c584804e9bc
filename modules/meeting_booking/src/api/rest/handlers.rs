use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{error, info};

use crate::api::rest::dto::{
    BookingDto, CreateBookingReq, CreateRoomQuery, DeleteBookingQuery, ListBookingsQuery,
    MeetingRoomDto,
};
use crate::api::rest::error::RestError;
use crate::contract::model::{Booking, MeetingRoom};
use crate::domain::booking_service::BookingService;
use crate::domain::room_registry::RoomRegistry;

fn booking_dtos(bookings: Vec<Booking>) -> Json<Vec<BookingDto>> {
    Json(bookings.into_iter().map(BookingDto::from).collect())
}

fn room_dtos(rooms: Vec<MeetingRoom>) -> Json<Vec<MeetingRoomDto>> {
    Json(rooms.into_iter().map(MeetingRoomDto::from).collect())
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/api/booking/create",
    tag = "bookings",
    request_body = CreateBookingReq,
    responses(
        (status = 201, description = "Bookings of the room on that date", body = [BookingDto]),
        (status = 400, description = "Missing field or booking rule violated"),
        (status = 404, description = "Meeting room not found"),
        (status = 409, description = "Overlaps an existing booking"),
    )
)]
pub async fn create_booking(
    Extension(svc): Extension<Arc<BookingService>>,
    payload: Result<Json<CreateBookingReq>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<BookingDto>>), RestError> {
    let Json(req) = payload?;
    info!("Creating booking: {:?}", req);

    let new_booking = req
        .into_new_booking(svc.now())
        .map_err(RestError::MissingFields)?;

    match svc.create_booking(new_booking).await {
        Ok(bookings) => Ok((StatusCode::CREATED, booking_dtos(bookings))),
        Err(e) => {
            error!("Failed to create booking: {}", e);
            Err(e.into())
        }
    }
}

/// List bookings of a room on a date
#[utoipa::path(
    get,
    path = "/api/booking",
    tag = "bookings",
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "Bookings of the room on that date", body = [BookingDto]),
        (status = 400, description = "Malformed query"),
    )
)]
pub async fn list_bookings(
    Extension(svc): Extension<Arc<BookingService>>,
    query: Result<Query<ListBookingsQuery>, QueryRejection>,
) -> Result<Json<Vec<BookingDto>>, RestError> {
    let Query(query) = query?;
    info!("Listing bookings with query: {:?}", query);

    match svc.list_bookings(query.meeting_room_id, query.date).await {
        Ok(bookings) => Ok(booking_dtos(bookings)),
        Err(e) => {
            error!("Failed to list bookings: {}", e);
            Err(e.into())
        }
    }
}

/// Cancel a booking that has not ended yet
#[utoipa::path(
    delete,
    path = "/api/booking",
    tag = "bookings",
    params(DeleteBookingQuery),
    responses(
        (status = 200, description = "Booking canceled"),
        (status = 400, description = "Booking already ended"),
        (status = 404, description = "Booking not found"),
    )
)]
pub async fn delete_booking(
    Extension(svc): Extension<Arc<BookingService>>,
    query: Result<Query<DeleteBookingQuery>, QueryRejection>,
) -> Result<StatusCode, RestError> {
    let Query(DeleteBookingQuery { id }) = query?;
    info!("Deleting booking: {}", id);

    match svc.delete_booking(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            error!("Failed to delete booking {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// Register a meeting room
#[utoipa::path(
    post,
    path = "/api/meeting-room/create",
    tag = "meeting-rooms",
    params(CreateRoomQuery),
    responses(
        (status = 201, description = "All meeting rooms", body = [MeetingRoomDto]),
        (status = 409, description = "Name already taken"),
    )
)]
pub async fn create_room(
    Extension(registry): Extension<Arc<RoomRegistry>>,
    query: Result<Query<CreateRoomQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Vec<MeetingRoomDto>>), RestError> {
    let Query(CreateRoomQuery { name }) = query?;
    info!("Creating meeting room: {}", name);

    match registry.create_room(&name).await {
        Ok(rooms) => Ok((StatusCode::CREATED, room_dtos(rooms))),
        Err(e) => {
            error!("Failed to create meeting room: {}", e);
            Err(e.into())
        }
    }
}

/// List all meeting rooms
#[utoipa::path(
    get,
    path = "/api/meeting-room",
    tag = "meeting-rooms",
    responses(
        (status = 200, description = "All meeting rooms", body = [MeetingRoomDto]),
    )
)]
pub async fn list_rooms(
    Extension(registry): Extension<Arc<RoomRegistry>>,
) -> Result<Json<Vec<MeetingRoomDto>>, RestError> {
    match registry.list_rooms().await {
        Ok(rooms) => Ok(room_dtos(rooms)),
        Err(e) => {
            error!("Failed to list meeting rooms: {}", e);
            Err(e.into())
        }
    }
}
