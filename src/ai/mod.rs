//! Automated players: the heuristic streak bot and a uniformly random agent.

mod agent;
mod random;
pub mod selector;

pub use agent::Agent;
pub use random::RandomAgent;
pub use selector::{BotConfig, Decision, MoveSelector, CHAOS_ONE_IN, FORCED_MOVE_COUNT};
