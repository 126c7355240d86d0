pub mod error;
pub mod goal;
pub mod pagination;
pub mod roulette;
pub mod types;
