use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::booking_service::BookingService;
use crate::domain::room_registry::RoomRegistry;

/// Mount the booking and meeting-room endpoints onto `router`.
pub fn register_routes(
    router: Router,
    rooms: Arc<RoomRegistry>,
    bookings: Arc<BookingService>,
) -> Router {
    let api = Router::new()
        .route("/api/booking/create", post(handlers::create_booking))
        .route(
            "/api/booking",
            get(handlers::list_bookings).delete(handlers::delete_booking),
        )
        .route("/api/meeting-room/create", post(handlers::create_room))
        .route("/api/meeting-room", get(handlers::list_rooms))
        .layer(Extension(rooms))
        .layer(Extension(bookings));

    router.merge(api)
}
