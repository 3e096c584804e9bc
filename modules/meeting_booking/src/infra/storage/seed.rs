//! Demo rooms and bookings for a fresh database.

use chrono::{Days, NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::contract::model::{Booking, MeetingRoom};
use crate::domain::repo::{BookingsRepository, RoomsRepository};

const DEMO_ROOMS: [&str; 6] = [
    "Polaris",
    "Titan",
    "Andromeda",
    "Sirius",
    "Cassiopeia",
    "Milky Way",
];

const DEMO_EMAIL: &str = "employee@example.com";

/// (room index, days after `today`, from, to)
const DEMO_BOOKINGS: [(usize, u64, (u32, u32), (u32, u32)); 5] = [
    (0, 1, (12, 30), (13, 30)),
    (0, 1, (13, 30), (14, 30)),
    (1, 1, (12, 30), (13, 30)),
    (0, 2, (13, 30), (14, 30)),
    (1, 2, (13, 30), (14, 30)),
];

fn hm(h: u32, m: u32) -> anyhow::Result<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| anyhow::anyhow!("invalid time {h}:{m}"))
}

/// Insert the demo data set unless rooms already exist.
///
/// Returns whether anything was written.
pub async fn seed_demo_data(
    rooms: &dyn RoomsRepository,
    bookings: &dyn BookingsRepository,
    today: NaiveDate,
) -> anyhow::Result<bool> {
    if !rooms.list().await?.is_empty() {
        info!("Rooms already present, skipping demo data");
        return Ok(false);
    }

    let mut room_ids = Vec::with_capacity(DEMO_ROOMS.len());
    for name in DEMO_ROOMS {
        let room = MeetingRoom {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        room_ids.push(room.id);
        rooms.insert(room).await?;
    }

    for (room, days, (fh, fm), (th, tm)) in DEMO_BOOKINGS {
        let date = today
            .checked_add_days(Days::new(days))
            .ok_or_else(|| anyhow::anyhow!("date overflow seeding demo bookings"))?;
        bookings
            .insert(Booking {
                id: Uuid::new_v4(),
                meeting_room_id: room_ids[room],
                employee_email: DEMO_EMAIL.to_string(),
                date,
                time_from: hm(fh, fm)?,
                time_to: hm(th, tm)?,
            })
            .await?;
    }

    info!(
        "Seeded {} demo rooms and {} bookings",
        DEMO_ROOMS.len(),
        DEMO_BOOKINGS.len()
    );
    Ok(true)
}
