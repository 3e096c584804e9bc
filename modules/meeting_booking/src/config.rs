use serde::{Deserialize, Serialize};

/// `modules.meeting_booking` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MeetingBookingConfig {
    /// Insert demo rooms and bookings on startup when the rooms table is empty.
    #[serde(default)]
    pub seed_demo_data: bool,
}
