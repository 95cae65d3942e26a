//! Rules: the engine seam and the legality predicates.

pub mod engine;
pub mod legality;

pub use engine::{GameResult, RulesEngine, WinReason};
