use serde::Serialize;
use tracing::debug;

use super::streak::{self, Streak, NEAR_WIN_LENGTH};
use super::{Grid, Piece, Player};

/// Result of evaluating the board after a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Continue,
    Win { player: Player, streak: Streak },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Continue | Outcome::Draw => None,
        }
    }
}

/// Evaluation of a single placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    /// Updated near-win count, present only when this placement raised it.
    pub near_win: Option<usize>,
}

/// Evaluation of a whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEvaluation {
    pub outcome: Outcome,
    /// Pieces whose longest streak has exactly `NEAR_WIN_LENGTH` pieces.
    pub near_win_pieces: usize,
}

/// Decides win, draw, or continue, and keeps the near-win tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinDetector {
    near_win_count: usize,
}

impl WinDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn near_win_count(&self) -> usize {
        self.near_win_count
    }

    /// Evaluate only the lines through the piece that was just placed.
    ///
    /// A new piece can only complete lines that pass through it, so this is
    /// equivalent to a full-board scan for any position reached by play.
    pub fn evaluate_after_placement(&mut self, grid: &Grid, piece: Piece) -> Evaluation {
        let streaks = streak::scan_all(grid, piece);
        let near_win = streaks.iter().any(|s| s.len() == NEAR_WIN_LENGTH);

        if let Some(winning) = streaks.into_iter().find(Streak::is_winning) {
            debug!(
                player = piece.player.number(),
                orientation = winning.orientation().name(),
                length = winning.len(),
                "winning line found"
            );
            return Evaluation {
                outcome: Outcome::Win {
                    player: piece.player,
                    streak: winning,
                },
                near_win: None,
            };
        }

        let near_win = if near_win {
            self.near_win_count += 1;
            debug!(count = self.near_win_count, "near-win streak");
            Some(self.near_win_count)
        } else {
            None
        };

        let outcome = if grid.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        };

        Evaluation { outcome, near_win }
    }

    /// Evaluate every occupied cell. Does not touch the near-win tally.
    pub fn evaluate_board(&self, grid: &Grid) -> BoardEvaluation {
        let mut near_win_pieces = 0;
        for piece in grid.pieces() {
            let streaks = streak::scan_all(grid, piece);
            let longest = streaks.iter().map(Streak::len).max().unwrap_or(0);

            if let Some(winning) = streaks.into_iter().find(Streak::is_winning) {
                return BoardEvaluation {
                    outcome: Outcome::Win {
                        player: piece.player,
                        streak: winning,
                    },
                    near_win_pieces,
                };
            }
            if longest == NEAR_WIN_LENGTH {
                near_win_pieces += 1;
            }
        }

        let outcome = if grid.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        };
        BoardEvaluation {
            outcome,
            near_win_pieces,
        }
    }
}
