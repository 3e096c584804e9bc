use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::api::rest::{openapi::ApiDoc, routes};
use crate::config::MeetingBookingConfig;
use crate::contract::client::MeetingBookingApi;
use crate::domain::booking_service::BookingService;
use crate::domain::ports::Clock;
use crate::domain::repo::{BookingsRepository, RoomsRepository};
use crate::domain::room_registry::RoomRegistry;
use crate::gateways::local::MeetingBookingLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::{SeaOrmBookingsRepository, SeaOrmRoomsRepository};
use crate::infra::storage::seed::seed_demo_data;

/// The meeting_booking module: migrated storage plus the wired domain services.
#[derive(Clone)]
pub struct MeetingBooking {
    rooms: Arc<RoomRegistry>,
    bookings: Arc<BookingService>,
}

impl MeetingBooking {
    /// Migrate the schema, optionally seed demo data, and wire the services.
    pub async fn init(
        db: DatabaseConnection,
        cfg: MeetingBookingConfig,
        clock: Arc<dyn Clock>,
    ) -> anyhow::Result<Self> {
        info!("Initializing meeting_booking module");
        debug!("Loaded meeting_booking config: {:?}", cfg);

        info!("Running meeting_booking database migrations");
        Migrator::up(&db, None).await?;
        info!("Meeting booking database migrations completed successfully");

        let rooms_repo: Arc<dyn RoomsRepository> =
            Arc::new(SeaOrmRoomsRepository::new(db.clone()));
        let bookings_repo: Arc<dyn BookingsRepository> =
            Arc::new(SeaOrmBookingsRepository::new(db));

        if cfg.seed_demo_data {
            seed_demo_data(
                rooms_repo.as_ref(),
                bookings_repo.as_ref(),
                clock.now().date(),
            )
            .await?;
        }

        let rooms = RoomRegistry::new(rooms_repo);
        let bookings = BookingService::new(rooms.clone(), bookings_repo, clock);

        Ok(Self {
            rooms: Arc::new(rooms),
            bookings: Arc::new(bookings),
        })
    }

    /// Mount the module's REST endpoints onto `router`.
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering meeting_booking REST routes");
        routes::register_routes(router, self.rooms.clone(), self.bookings.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
    }

    /// In-process client for other modules.
    pub fn client(&self) -> Arc<dyn MeetingBookingApi> {
        Arc::new(MeetingBookingLocalClient::new(
            self.rooms.clone(),
            self.bookings.clone(),
        ))
    }
}
