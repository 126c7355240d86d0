//! Repository for the `goals` table.

use sqlx::PgPool;
use moguri_core::types::DbId;

use crate::models::goal::{CreateGoal, Goal, UpdateGoal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, goal_name, goal_amount, current_amount, target_percent, \
     start_date, end_date, goal_category, reward_amount, quest_id, created_at, updated_at";

/// Provides CRUD operations for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGoal) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (member_id, goal_name, goal_amount, current_amount, target_percent,
                                start_date, end_date, goal_category, reward_amount, quest_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(input.member_id)
            .bind(&input.goal_name)
            .bind(input.goal_amount)
            .bind(input.current_amount)
            .bind(input.target_percent)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.goal_category)
            .bind(input.reward_amount)
            .bind(input.quest_id)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of a member's goals, most recently created first.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goals WHERE member_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(member_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of goals owned by a member.
    pub async fn count_by_member(pool: &PgPool, member_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM goals WHERE member_id = $1")
            .bind(member_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a goal. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGoal,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                goal_name = COALESCE($2, goal_name),
                goal_amount = COALESCE($3, goal_amount),
                current_amount = COALESCE($4, current_amount),
                target_percent = COALESCE($5, target_percent),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                goal_category = COALESCE($8, goal_category),
                reward_amount = COALESCE($9, reward_amount),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(&input.goal_name)
            .bind(input.goal_amount)
            .bind(input.current_amount)
            .bind(input.target_percent)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.goal_category)
            .bind(input.reward_amount)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
