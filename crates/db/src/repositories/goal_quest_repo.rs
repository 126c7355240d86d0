//! Repository for the `goal_quests` table.

use rust_decimal::Decimal;
use sqlx::PgPool;
use moguri_core::types::DbId;

use crate::models::goal_quest::{CreateGoalQuest, GoalQuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, goal_category, quest_name, description, reward_amount, created_at";

/// Provides read access to suggested quests, plus inserts for seeding.
pub struct GoalQuestRepo;

impl GoalQuestRepo {
    /// Insert a new quest, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGoalQuest) -> Result<GoalQuest, sqlx::Error> {
        let query = format!(
            "INSERT INTO goal_quests (goal_category, quest_name, description, reward_amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalQuest>(&query)
            .bind(&input.goal_category)
            .bind(&input.quest_name)
            .bind(&input.description)
            .bind(input.reward_amount.unwrap_or(Decimal::ZERO))
            .fetch_one(pool)
            .await
    }

    /// Find a quest by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GoalQuest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goal_quests WHERE id = $1");
        sqlx::query_as::<_, GoalQuest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of quests ordered by ID.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<GoalQuest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goal_quests ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, GoalQuest>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of quests.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM goal_quests")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// The quest suggested for a goal category.
    ///
    /// When several quests share a category the oldest one wins.
    pub async fn find_by_category(
        pool: &PgPool,
        goal_category: &str,
    ) -> Result<Option<GoalQuest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goal_quests WHERE goal_category = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, GoalQuest>(&query)
            .bind(goal_category)
            .fetch_optional(pool)
            .await
    }
}
