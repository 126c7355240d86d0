//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers check pagination, delegate to the matching service in
//! [`crate::services`], and wrap results in the
//! [`ApiResponse`](crate::response::ApiResponse) envelope.

pub mod goal;
pub mod goal_quest;
pub mod member;
pub mod roulette;
