//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates, where the
//!   entity supports updates

pub mod goal;
pub mod goal_quest;
pub mod member;
pub mod roulette;
