//! Goal quest entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use moguri_core::types::{Amount, DbId, Timestamp};

/// A suggested quest row from the `goal_quests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalQuest {
    pub id: DbId,
    pub goal_category: String,
    pub quest_name: String,
    pub description: Option<String>,
    pub reward_amount: Amount,
    pub created_at: Timestamp,
}

/// DTO for creating a new quest.
#[derive(Debug, Clone)]
pub struct CreateGoalQuest {
    pub goal_category: String,
    pub quest_name: String,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    pub reward_amount: Option<Amount>,
}
