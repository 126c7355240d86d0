//! Quest suggestions.

use moguri_core::error::CoreError;
use moguri_core::pagination::PageRequest;
use moguri_db::models::goal_quest::GoalQuest;
use moguri_db::repositories::GoalQuestRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub struct GoalQuestService;

impl GoalQuestService {
    /// One page of quests plus the total quest count.
    pub async fn list(pool: &PgPool, page: PageRequest) -> AppResult<(Vec<GoalQuest>, i64)> {
        let quests = GoalQuestRepo::list(pool, page.limit, page.offset()).await?;
        let total = GoalQuestRepo::count(pool).await?;
        Ok((quests, total))
    }

    /// The quest suggested for `goal_category`.
    pub async fn get_by_category(pool: &PgPool, goal_category: &str) -> AppResult<GoalQuest> {
        GoalQuestRepo::find_by_category(pool, goal_category)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByKey {
                    entity: "GoalQuest",
                    key: goal_category.to_string(),
                })
            })
    }
}
