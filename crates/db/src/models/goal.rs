//! Goal entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use moguri_core::types::{Amount, Date, DbId, Timestamp};

/// A goal row from the `goals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "goalId")]
    pub id: DbId,
    pub member_id: DbId,
    pub goal_name: String,
    pub goal_amount: Amount,
    pub current_amount: Amount,
    pub target_percent: Amount,
    pub start_date: Date,
    pub end_date: Date,
    pub goal_category: String,
    pub reward_amount: Amount,
    pub quest_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new goal.
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub member_id: DbId,
    pub goal_name: String,
    pub goal_amount: Amount,
    pub current_amount: Amount,
    pub target_percent: Amount,
    pub start_date: Date,
    pub end_date: Date,
    pub goal_category: String,
    pub reward_amount: Amount,
    pub quest_id: Option<DbId>,
}

/// DTO for updating an existing goal. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateGoal {
    pub goal_name: Option<String>,
    pub goal_amount: Option<Amount>,
    pub current_amount: Option<Amount>,
    pub target_percent: Option<Amount>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub goal_category: Option<String>,
    pub reward_amount: Option<Amount>,
}
