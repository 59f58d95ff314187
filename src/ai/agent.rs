use crate::game::{Grid, Player};

/// Interface for automated players.
pub trait Agent {
    /// Select a column for `player` on `grid`.
    ///
    /// Callers only ask when at least one column is open; an agent may panic
    /// if handed a full grid.
    fn select_column(&mut self, grid: &Grid, player: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
