//! Daily roulette rules: which calendar day a play belongs to, and what it
//! pays out.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::types::{Date, Timestamp};

/// Offset of the service timezone from UTC (Asia/Seoul, no DST).
pub const SERVICE_UTC_OFFSET_SECS: i64 = 9 * 60 * 60;

/// Cotton candy payouts on the wheel. Every slot is equally likely.
pub const ROULETTE_SLOTS: [i32; 8] = [1, 2, 3, 5, 10, 20, 50, 100];

/// Calendar day in the service timezone that `at` falls on.
///
/// One play is allowed per member per service day.
pub fn service_date(at: Timestamp) -> Date {
    (at + Duration::seconds(SERVICE_UTC_OFFSET_SECS)).date_naive()
}

/// The current service day.
pub fn service_today() -> Date {
    service_date(Utc::now())
}

/// Spin the wheel once.
pub fn draw_reward<R: Rng>(rng: &mut R) -> i32 {
    ROULETTE_SLOTS[rng.random_range(0..ROULETTE_SLOTS.len())]
}
