//! Core game logic: gravity grid, streak scanning, win detection, and the
//! match state machine.

mod detector;
mod direction;
mod grid;
mod player;
mod state;
pub mod streak;

pub use detector::{BoardEvaluation, Evaluation, Outcome, WinDetector};
pub use direction::{Direction, Orientation};
pub use grid::{Grid, Piece, Position, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{
    GameOutcome, Match, MatchEvent, MatchStatus, MoveReport, Placement, Snapshot, BOT_PLAYER,
};
pub use streak::{Streak, WIN_LENGTH};
