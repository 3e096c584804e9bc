//! REST layer tests: the real routes driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};
use tower::ServiceExt;

use api_ingress::{ApiIngress, ApiIngressConfig};
use meeting_booking::{
    api::rest::dto::{BookingDto, MeetingRoomDto},
    config::MeetingBookingConfig,
    domain::ports::FixedClock,
    MeetingBooking,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 5, 10)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
}

async fn create_test_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database")
}

async fn router_at(db: &DatabaseConnection, at: NaiveDateTime) -> Router {
    let module = MeetingBooking::init(
        db.clone(),
        MeetingBookingConfig::default(),
        Arc::new(FixedClock(at)),
    )
    .await
    .expect("Failed to init module");
    module.register_rest(Router::new())
}

async fn create_test_router() -> Router {
    router_at(&create_test_db().await, now()).await
}

async fn send(router: &Router, req: Request<Body>) -> Response {
    router.clone().oneshot(req).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(resp: Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

async fn create_room(router: &Router, name: &str) -> String {
    let resp = send(router, post_empty(&format!("/api/meeting-room/create?name={name}"))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let rooms: Vec<MeetingRoomDto> = body_json(resp).await;
    rooms
        .into_iter()
        .find(|r| r.name == name)
        .unwrap()
        .id
        .to_string()
}

fn booking_body(room: &str, date: &str, from: &str, to: &str) -> Value {
    json!({
        "meetingRoomId": room,
        "employeeEmail": "employee@example.com",
        "date": date,
        "timeFrom": from,
        "timeTo": to
    })
}

#[tokio::test]
async fn rooms_are_created_and_listed() {
    let router = create_test_router().await;

    create_room(&router, "Polaris").await;
    let resp = send(&router, post_empty("/api/meeting-room/create?name=Titan")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let rooms: Vec<MeetingRoomDto> = body_json(resp).await;
    assert_eq!(rooms.len(), 2);

    let resp = send(&router, get("/api/meeting-room")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rooms: Value = body_json(resp).await;
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert!(rooms[0]["id"].is_string());
    assert!(rooms[0]["name"].is_string());
}

#[tokio::test]
async fn duplicate_room_is_conflict_text() {
    let router = create_test_router().await;
    create_room(&router, "Polaris").await;

    let resp = send(&router, post_empty("/api/meeting-room/create?name=POLARIS")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_text(resp).await,
        "A room with the name 'POLARIS' already exists"
    );
}

#[tokio::test]
async fn booking_is_created_and_listed() {
    let router = create_test_router().await;
    let room = create_room(&router, "Polaris").await;

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body(&room, "2030-05-11", "10:00:00", "11:00:00"),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = body_json(resp).await;
    let created = created.as_array().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["meetingRoomId"], room.as_str());
    assert_eq!(created[0]["employeeEmail"], "employee@example.com");
    assert_eq!(created[0]["date"], "2030-05-11");
    assert_eq!(created[0]["timeFrom"], "10:00:00");
    assert_eq!(created[0]["timeTo"], "11:00:00");

    let resp = send(
        &router,
        get(&format!("/api/booking?meetingRoomId={room}&date=2030-05-11")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Vec<BookingDto> = body_json(resp).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id.to_string(), created[0]["id"].as_str().unwrap());
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() {
    let router = create_test_router().await;

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            json!({ "employeeEmail": "employee@example.com", "date": "2030-05-11" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors: Value = body_json(resp).await;
    assert_eq!(
        errors,
        json!({
            "meetingRoomId": "must not be null",
            "timeFrom": "must not be null",
            "timeTo": "must not be null"
        })
    );
}

#[tokio::test]
async fn rule_violation_is_reported_with_missing_fields() {
    let router = create_test_router().await;
    let room = create_room(&router, "Polaris").await;

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            json!({
                "meetingRoomId": room,
                "date": "2030-05-11",
                "timeFrom": "10:30:00",
                "timeTo": "11:00:00"
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors: Value = body_json(resp).await;
    assert_eq!(
        errors,
        json!({
            "employeeEmail": "must not be null",
            "Validation error": "The booking duration must be at least 1 hour and in 1-hour increments."
        })
    );
}

#[tokio::test]
async fn rule_violations_use_the_generic_key() {
    let router = create_test_router().await;
    let room = create_room(&router, "Polaris").await;

    let cases = [
        (
            "2030-05-11",
            "10:30:00",
            "11:00:00",
            "The booking duration must be at least 1 hour and in 1-hour increments.",
        ),
        (
            "2030-05-11",
            "11:30:00",
            "10:00:00",
            "The end time cannot be before the start time.",
        ),
        (
            "2030-05-09",
            "10:00:00",
            "11:00:00",
            "Booking end datetime cannot be in the past.",
        ),
    ];

    for (date, from, to, message) in cases {
        let resp = send(
            &router,
            post_json("/api/booking/create", booking_body(&room, date, from, to)),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{from}-{to} on {date}");
        let body: Value = body_json(resp).await;
        assert_eq!(body, json!({ "Validation error": message }));
    }
}

#[tokio::test]
async fn unknown_room_is_404_text() {
    let router = create_test_router().await;
    let missing = uuid::Uuid::new_v4();

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body(&missing.to_string(), "2030-05-11", "10:00:00", "11:00:00"),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(resp).await,
        format!("The meeting room with ID '{missing}' was not found")
    );
}

#[tokio::test]
async fn overlap_is_409_text() {
    let router = create_test_router().await;
    let room = create_room(&router, "Polaris").await;

    let first = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body(&room, "2030-05-11", "10:00:00", "12:00:00"),
        ),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body(&room, "2030-05-11", "11:00:00", "12:00:00"),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_text(resp).await,
        "Booking overlaps with an existing booking"
    );
}

#[tokio::test]
async fn unparseable_input_is_a_validation_error() {
    let router = create_test_router().await;

    let resp = send(
        &router,
        Request::builder()
            .method("POST")
            .uri("/api/booking/create")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["Validation error"].is_string());

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body("not-a-uuid", "2030-05-11", "10:00:00", "11:00:00"),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["Validation error"].is_string());

    let resp = send(&router, get("/api/booking?meetingRoomId=nope&date=2030-05-11")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["Validation error"].is_string());
}

#[tokio::test]
async fn delete_booking_statuses() {
    let db = create_test_db().await;
    let router = router_at(&db, now()).await;
    let room = create_room(&router, "Polaris").await;

    let resp = send(
        &router,
        post_json(
            "/api/booking/create",
            booking_body(&room, "2030-05-10", "10:00:00", "11:00:00"),
        ),
    )
    .await;
    let created: Vec<BookingDto> = body_json(resp).await;
    let id = created[0].id;

    // Unknown id.
    let missing = uuid::Uuid::new_v4();
    let resp = send(&router, delete(&format!("/api/booking?id={missing}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(resp).await,
        format!("There is no booking with id {missing}")
    );

    // Same database, evening of the same day.
    let evening = NaiveDate::from_ymd_opt(2030, 5, 10)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    let later = router_at(&db, evening).await;
    let resp = send(&later, delete(&format!("/api/booking?id={id}"))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(resp).await,
        "A booking that has already ended cannot be canceled"
    );

    let resp = send(&router, delete(&format!("/api/booking?id={id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(
        &router,
        get(&format!("/api/booking?meetingRoomId={room}&date=2030-05-10")),
    )
    .await;
    let listed: Vec<BookingDto> = body_json(resp).await;
    assert!(listed.is_empty());
}

#[tokio::test]
async fn served_behind_the_ingress() {
    let db = create_test_db().await;
    let module = MeetingBooking::init(
        db,
        MeetingBookingConfig::default(),
        Arc::new(FixedClock(now())),
    )
    .await
    .unwrap();
    let router = ApiIngress::new(ApiIngressConfig::default())
        .with_openapi(MeetingBooking::openapi())
        .build_router(module.register_rest(Router::new()));

    let resp = send(&router, get("/api/meeting-room")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = send(&router, get("/openapi.json")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = body_json(resp).await;
    assert!(doc["paths"]["/api/booking/create"]["post"].is_object());
    assert!(doc["components"]["schemas"]["BookingDto"].is_object());
}
