//! Member entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use moguri_core::types::{DbId, Timestamp};

/// Full member row from the `members` table.
///
/// `password` holds the Argon2id PHC string, never the plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub nick_name: String,
    pub cotton_candy: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Member representation for API responses.
///
/// Carries the stored password hash so clients can confirm a credential was
/// set; the plaintext is never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub nick_name: String,
    pub cotton_candy: i32,
    pub created_at: Timestamp,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            email: member.email,
            password: member.password,
            nick_name: member.nick_name,
            cotton_candy: member.cotton_candy,
            created_at: member.created_at,
        }
    }
}

/// DTO for creating a new member. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub email: String,
    pub password: String,
    pub nick_name: String,
}

/// DTO for updating an existing member. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateMember {
    /// Already-hashed replacement password.
    pub password: Option<String>,
    pub nick_name: Option<String>,
}
