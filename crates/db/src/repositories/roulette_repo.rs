//! Repository for the `roulettes` table.

use sqlx::PgPool;
use moguri_core::types::{Date, DbId};

use crate::models::roulette::{CreateRoulette, Roulette};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, reward, play_date, played_at";

/// Provides play-record operations for the daily roulette.
pub struct RouletteRepo;

impl RouletteRepo {
    /// Whether the member already has a play recorded for `play_date`.
    pub async fn has_played_on(
        pool: &PgPool,
        member_id: DbId,
        play_date: Date,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM roulettes WHERE member_id = $1 AND play_date = $2)",
        )
        .bind(member_id)
        .bind(play_date)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Record a play, returning the created row.
    ///
    /// A second play on the same day violates `uq_roulettes_member_play_date`.
    pub async fn create(pool: &PgPool, input: &CreateRoulette) -> Result<Roulette, sqlx::Error> {
        let query = format!(
            "INSERT INTO roulettes (member_id, reward, play_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Roulette>(&query)
            .bind(input.member_id)
            .bind(input.reward)
            .bind(input.play_date)
            .fetch_one(pool)
            .await
    }

    /// Record a play and credit its reward to the member's cotton candy
    /// balance in one transaction.
    pub async fn create_and_credit(
        pool: &PgPool,
        input: &CreateRoulette,
    ) -> Result<Roulette, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO roulettes (member_id, reward, play_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let play = sqlx::query_as::<_, Roulette>(&insert_query)
            .bind(input.member_id)
            .bind(input.reward)
            .bind(input.play_date)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE members SET cotton_candy = cotton_candy + $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(input.member_id)
        .bind(input.reward)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(play)
    }

    /// List one page of a member's plays, newest first.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Roulette>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM roulettes WHERE member_id = $1
             ORDER BY play_date DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Roulette>(&query)
            .bind(member_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of plays recorded for a member.
    pub async fn count_by_member(pool: &PgPool, member_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM roulettes WHERE member_id = $1")
                .bind(member_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
