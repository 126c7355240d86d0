//! Savings goals.

use moguri_core::error::CoreError;
use moguri_core::goal::{derive_target_percent, resolve_target_percent};
use moguri_core::pagination::PageRequest;
use moguri_core::types::{Amount, Date, DbId};
use moguri_db::models::goal::{CreateGoal, Goal, UpdateGoal};
use moguri_db::repositories::{GoalQuestRepo, GoalRepo};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::MemberService;

/// Request body for `POST /goal`.
///
/// Amount ranges and date ordering are not checked.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub member_id: DbId,
    #[validate(length(min = 1, message = "goalName must not be empty"))]
    pub goal_name: String,
    pub goal_amount: Amount,
    #[serde(default)]
    pub current_amount: Amount,
    /// Derived from the amounts when omitted.
    pub target_percent: Option<Amount>,
    pub start_date: Date,
    pub end_date: Date,
    #[validate(length(min = 1, message = "goalCategory must not be empty"))]
    pub goal_category: String,
    #[serde(default)]
    pub reward_amount: Amount,
    /// Explicit quest to attach. Missing or non-positive means "suggest one
    /// for the category".
    pub quest_id: Option<DbId>,
}

/// Request body for `PATCH /goal/{id}`. Absent fields are left unchanged;
/// present names and categories follow the same rules as on create.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoalChanges {
    #[validate(length(min = 1, message = "goalName must not be empty"))]
    pub goal_name: Option<String>,
    pub goal_amount: Option<Amount>,
    pub current_amount: Option<Amount>,
    pub target_percent: Option<Amount>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[validate(length(min = 1, message = "goalCategory must not be empty"))]
    pub goal_category: Option<String>,
    pub reward_amount: Option<Amount>,
}

pub struct GoalService;

impl GoalService {
    /// One page of a member's goals plus the member's total goal count.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
        page: PageRequest,
    ) -> AppResult<(Vec<Goal>, i64)> {
        let goals = GoalRepo::list_by_member(pool, member_id, page.limit, page.offset()).await?;
        let total = GoalRepo::count_by_member(pool, member_id).await?;
        Ok((goals, total))
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Goal> {
        GoalRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))
    }

    /// Create a goal for an existing member, attaching either the requested
    /// quest or the one suggested for the goal's category.
    pub async fn create(pool: &PgPool, input: NewGoal) -> AppResult<Goal> {
        input.validate()?;
        MemberService::get(pool, input.member_id).await?;

        let quest_id = match input.quest_id.filter(|id| *id > 0) {
            Some(id) => {
                GoalQuestRepo::find_by_id(pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound {
                        entity: "GoalQuest",
                        id,
                    }))?;
                Some(id)
            }
            None => GoalQuestRepo::find_by_category(pool, &input.goal_category)
                .await?
                .map(|quest| quest.id),
        };

        let target_percent =
            resolve_target_percent(input.target_percent, input.current_amount, input.goal_amount)?;

        let goal = GoalRepo::create(
            pool,
            &CreateGoal {
                member_id: input.member_id,
                goal_name: input.goal_name,
                goal_amount: input.goal_amount,
                current_amount: input.current_amount,
                target_percent,
                start_date: input.start_date,
                end_date: input.end_date,
                goal_category: input.goal_category,
                reward_amount: input.reward_amount,
                quest_id,
            },
        )
        .await?;

        tracing::info!(
            goal_id = goal.id,
            member_id = goal.member_id,
            quest_id = ?goal.quest_id,
            "Goal created"
        );
        Ok(goal)
    }

    /// Apply a partial update.
    ///
    /// If either amount changes and no explicit percentage is supplied, the
    /// target percentage is re-derived from the resulting amounts.
    pub async fn update(pool: &PgPool, id: DbId, changes: GoalChanges) -> AppResult<Goal> {
        changes.validate()?;
        let existing = Self::get(pool, id).await?;

        let mut target_percent = changes.target_percent;
        if target_percent.is_none()
            && (changes.goal_amount.is_some() || changes.current_amount.is_some())
        {
            let goal_amount = changes.goal_amount.unwrap_or(existing.goal_amount);
            let current_amount = changes.current_amount.unwrap_or(existing.current_amount);
            target_percent = Some(derive_target_percent(current_amount, goal_amount)?);
        }

        let update = UpdateGoal {
            goal_name: changes.goal_name,
            goal_amount: changes.goal_amount,
            current_amount: changes.current_amount,
            target_percent,
            start_date: changes.start_date,
            end_date: changes.end_date,
            goal_category: changes.goal_category,
            reward_amount: changes.reward_amount,
        };

        let goal = GoalRepo::update(pool, id, &update)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

        tracing::info!(goal_id = id, "Goal updated");
        Ok(goal)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if !GoalRepo::delete(pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound { entity: "Goal", id }));
        }
        tracing::info!(goal_id = id, "Goal deleted");
        Ok(())
    }
}
