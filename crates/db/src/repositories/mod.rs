//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod goal_quest_repo;
pub mod goal_repo;
pub mod member_repo;
pub mod roulette_repo;

pub use goal_quest_repo::GoalQuestRepo;
pub use goal_repo::GoalRepo;
pub use member_repo::MemberRepo;
pub use roulette_repo::RouletteRepo;
