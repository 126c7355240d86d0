//! Business operations sitting between the HTTP handlers and the
//! repositories.
//!
//! Services validate input, resolve cross-entity rules (quest suggestions,
//! daily roulette limits, password hashing) and translate missing rows into
//! [`CoreError::NotFound`](moguri_core::error::CoreError::NotFound). Handlers
//! only shape requests and responses.

pub mod goal;
pub mod goal_quest;
pub mod member;
pub mod roulette;

pub use goal::GoalService;
pub use goal_quest::GoalQuestService;
pub use member::MemberService;
pub use roulette::RouletteService;
