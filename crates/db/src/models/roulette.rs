//! Roulette play record model and DTO.

use serde::Serialize;
use sqlx::FromRow;
use moguri_core::types::{Date, DbId, Timestamp};

/// A play record from the `roulettes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roulette {
    pub id: DbId,
    pub member_id: DbId,
    /// Cotton candy won on this spin.
    pub reward: i32,
    /// Service day the play counts against.
    pub play_date: Date,
    pub played_at: Timestamp,
}

/// DTO for recording a play.
#[derive(Debug, Clone)]
pub struct CreateRoulette {
    pub member_id: DbId,
    pub reward: i32,
    pub play_date: Date,
}
