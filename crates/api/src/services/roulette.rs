//! The once-a-day roulette.

use moguri_core::error::CoreError;
use moguri_core::pagination::PageRequest;
use moguri_core::roulette::{draw_reward, service_today};
use moguri_core::types::DbId;
use moguri_db::models::roulette::{CreateRoulette, Roulette};
use moguri_db::repositories::RouletteRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::MemberService;

pub struct RouletteService;

impl RouletteService {
    /// Whether the member has a play recorded for the current service day.
    pub async fn has_played_roulette_today(pool: &PgPool, member_id: DbId) -> AppResult<bool> {
        Ok(RouletteRepo::has_played_on(pool, member_id, service_today()).await?)
    }

    /// Persist a play record as given, without touching the balance.
    pub async fn create_roulette(pool: &PgPool, input: &CreateRoulette) -> AppResult<Roulette> {
        Ok(RouletteRepo::create(pool, input).await?)
    }

    /// Spin the wheel for `member_id` and credit the winnings.
    ///
    /// The already-played check gives a readable error; the unique
    /// constraint on `(member_id, play_date)` still rejects a concurrent
    /// second spin with a conflict.
    pub async fn play(pool: &PgPool, member_id: DbId) -> AppResult<Roulette> {
        MemberService::get(pool, member_id).await?;

        let today = service_today();
        if RouletteRepo::has_played_on(pool, member_id, today).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Member {member_id} has already played the roulette today"
            ))));
        }

        let reward = draw_reward(&mut rand::rng());
        let play = RouletteRepo::create_and_credit(
            pool,
            &CreateRoulette {
                member_id,
                reward,
                play_date: today,
            },
        )
        .await?;

        tracing::info!(member_id, reward, play_date = %today, "Roulette played");
        Ok(play)
    }

    /// One page of the member's past plays plus their total play count.
    pub async fn history(
        pool: &PgPool,
        member_id: DbId,
        page: PageRequest,
    ) -> AppResult<(Vec<Roulette>, i64)> {
        let plays = RouletteRepo::list_by_member(pool, member_id, page.limit, page.offset()).await?;
        let total = RouletteRepo::count_by_member(pool, member_id).await?;
        Ok((plays, total))
    }
}
