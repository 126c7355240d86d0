//! Member accounts and the cotton candy balance.

use moguri_core::error::CoreError;
use moguri_core::pagination::PageRequest;
use moguri_core::types::DbId;
use moguri_db::models::member::{CreateMember, Member, UpdateMember};
use moguri_db::repositories::MemberRepo;
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Request body for `POST /members`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Plaintext; hashed before it reaches the repository.
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    #[validate(length(min = 1, max = 50, message = "nickName must be 1 to 50 characters"))]
    pub nick_name: String,
}

/// Request body for `PATCH /members/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberChanges {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 50, message = "nickName must be 1 to 50 characters"))]
    pub nick_name: Option<String>,
}

/// Request body for `PATCH /members/{id}/cotton-candy`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CottonCandyUpdate {
    #[validate(range(min = 0, message = "cottonCandy must not be negative"))]
    pub cotton_candy: i32,
}

pub struct MemberService;

impl MemberService {
    /// One page of members plus the total member count.
    pub async fn list(pool: &PgPool, page: PageRequest) -> AppResult<(Vec<Member>, i64)> {
        let members = MemberRepo::list(pool, page.limit, page.offset()).await?;
        let total = MemberRepo::count(pool).await?;
        Ok((members, total))
    }

    /// Register a member, storing an Argon2id hash of the supplied password.
    pub async fn create(pool: &PgPool, input: NewMember) -> AppResult<Member> {
        input.validate()?;

        if MemberRepo::find_by_email(pool, &input.email).await?.is_some() {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Email '{}' is already registered",
                input.email
            ))));
        }

        let hashed = hash_password(&input.password)?;

        let member = MemberRepo::create(
            pool,
            &CreateMember {
                email: input.email,
                password: hashed,
                nick_name: input.nick_name,
            },
        )
        .await?;

        tracing::info!(member_id = member.id, "Member created");
        Ok(member)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Member> {
        MemberRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Member", id }))
    }

    /// Apply a partial update. A new password is hashed the same way as on
    /// registration.
    pub async fn update(pool: &PgPool, id: DbId, changes: MemberChanges) -> AppResult<Member> {
        changes.validate()?;

        let password = changes.password.as_deref().map(hash_password).transpose()?;

        let update = UpdateMember {
            password,
            nick_name: changes.nick_name,
        };

        let member = MemberRepo::update(pool, id, &update)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Member", id }))?;

        tracing::info!(member_id = id, "Member updated");
        Ok(member)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if !MemberRepo::delete(pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound { entity: "Member", id }));
        }
        tracing::info!(member_id = id, "Member deleted");
        Ok(())
    }

    pub async fn get_cotton_candy(pool: &PgPool, id: DbId) -> AppResult<i32> {
        MemberRepo::get_cotton_candy(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Member", id }))
    }

    /// Overwrite the balance. Concurrent writers race; the last one wins.
    pub async fn update_cotton_candy(
        pool: &PgPool,
        id: DbId,
        input: CottonCandyUpdate,
    ) -> AppResult<()> {
        input.validate()?;

        if !MemberRepo::update_cotton_candy(pool, id, input.cotton_candy).await? {
            return Err(AppError::Core(CoreError::NotFound { entity: "Member", id }));
        }
        tracing::debug!(member_id = id, cotton_candy = input.cotton_candy, "Cotton candy set");
        Ok(())
    }
}
