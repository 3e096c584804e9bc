use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    info(title = "Meeting Booking API", description = "Meeting rooms and their bookings"),
    paths(
        handlers::create_booking,
        handlers::list_bookings,
        handlers::delete_booking,
        handlers::create_room,
        handlers::list_rooms,
    ),
    components(schemas(dto::MeetingRoomDto, dto::BookingDto, dto::CreateBookingReq)),
    tags(
        (name = "bookings", description = "Create, list and cancel bookings"),
        (name = "meeting-rooms", description = "Register and list meeting rooms"),
    )
)]
pub struct ApiDoc;
