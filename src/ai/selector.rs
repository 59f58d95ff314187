//! Heuristic move selection for the automated player.
//!
//! The bot looks at the longest streaks on the board for both sides and
//! plays a column that extends one of them. It is deliberately cheap and
//! beatable: a fixed share of its moves are fully random.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use super::agent::Agent;
use crate::game::{streak, Direction, Grid, Orientation, Piece, Player, Streak};

/// One move in this many ignores every heuristic and plays a random column.
pub const CHAOS_ONE_IN: u32 = 6;

/// Number of distinct connecting columns that makes a move forced.
pub const FORCED_MOVE_COUNT: usize = 3;

/// Bot configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Whether player two is played by the bot.
    pub enabled: bool,
    /// Odds of a random move are 1 in `chaos_one_in`; 0 disables them.
    pub chaos_one_in: u32,
    /// Connecting-column count that triggers an immediate extend or block.
    pub forced_move_count: usize,
    /// Fixed PRNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            enabled: true,
            chaos_one_in: CHAOS_ONE_IN,
            forced_move_count: FORCED_MOVE_COUNT,
            seed: None,
        }
    }
}

/// Why the bot picked its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Random legal column, heuristics skipped.
    Chaos(usize),
    /// Extends the bot's own longest streaks.
    Extend(usize),
    /// Blocks the opponent's longest streaks.
    Block(usize),
    /// One of the own or opponent connecting columns, chosen at random.
    Connect(usize),
    /// No streak could be extended; random legal column.
    Random(usize),
}

impl Decision {
    pub fn column(self) -> usize {
        match self {
            Decision::Chaos(column)
            | Decision::Extend(column)
            | Decision::Block(column)
            | Decision::Connect(column)
            | Decision::Random(column) => column,
        }
    }
}

/// All streaks sharing the maximum length for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestStreaks {
    pub length: usize,
    pub streaks: Vec<Streak>,
}

impl LongestStreaks {
    fn offer(&mut self, streak: Streak) {
        if streak.len() > self.length {
            self.length = streak.len();
            self.streaks = vec![streak];
        } else if streak.len() == self.length {
            self.streaks.push(streak);
        }
    }
}

/// Longest streaks through every piece, split into `player`'s and the
/// opponent's.
pub fn longest_streaks(grid: &Grid, player: Player) -> (LongestStreaks, LongestStreaks) {
    let mut own = LongestStreaks::default();
    let mut opponent = LongestStreaks::default();
    for piece in grid.pieces() {
        let streak = streak::longest(grid, piece);
        if piece.player == player {
            own.offer(streak);
        } else {
            opponent.offer(streak);
        }
    }
    (own, opponent)
}

fn step(piece: Piece, direction: Direction) -> (isize, isize) {
    let (dx, dy) = direction.delta();
    (
        piece.position.x as isize + dx,
        piece.position.y as isize + dy,
    )
}

/// Columns whose next placement would extend one of `streaks` by a piece.
///
/// Vertical streaks only grow upwards; the other orientations can grow from
/// either end. Columns are listed once, in the order first found.
pub fn connecting_moves(grid: &Grid, streaks: &[Streak]) -> Vec<usize> {
    let mut columns = Vec::new();
    for streak in streaks {
        let targets = match streak.orientation() {
            Orientation::Vertical => vec![step(streak.highest(), Direction::North)],
            orientation @ (Orientation::Horizontal | Orientation::Backslash | Orientation::Slash) => {
                let (back, forward) = orientation.directions();
                vec![
                    step(streak.leftmost(), back),
                    step(streak.rightmost(), forward),
                ]
            }
        };

        for (x, y) in targets {
            if grid.is_playable(x, y) {
                let column = x as usize;
                if !columns.contains(&column) {
                    columns.push(column);
                }
            }
        }
    }
    columns
}

/// The streak-extending bot.
pub struct MoveSelector {
    rng: StdRng,
    chaos_one_in: u32,
    forced_move_count: usize,
}

impl MoveSelector {
    pub fn new(config: &BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng, config)
    }

    /// Build a selector around an explicit random source.
    pub fn with_rng(rng: StdRng, config: &BotConfig) -> Self {
        MoveSelector {
            rng,
            chaos_one_in: config.chaos_one_in,
            forced_move_count: config.forced_move_count,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(&BotConfig {
            seed: Some(seed),
            ..BotConfig::default()
        })
    }

    fn random_column(&mut self, legal: &[usize]) -> usize {
        legal[self.rng.random_range(0..legal.len())]
    }

    /// First connecting column when their count hits the forcing threshold.
    fn forced(&self, moves: &[usize]) -> Option<usize> {
        if moves.len() == self.forced_move_count {
            moves.first().copied()
        } else {
            None
        }
    }

    /// Choose a column for `player`.
    ///
    /// Panics if the grid is full: a full grid has already ended the match
    /// as a draw, so asking for a move is a caller bug.
    pub fn decide(&mut self, grid: &Grid, player: Player) -> Decision {
        let legal = grid.legal_columns();
        assert!(!legal.is_empty(), "bot asked to move on a full grid");

        if self.chaos_one_in > 0 && self.rng.random_range(0..self.chaos_one_in) == 0 {
            return Decision::Chaos(self.random_column(&legal));
        }

        let (own, opponent) = longest_streaks(grid, player);

        let own_moves = connecting_moves(grid, &own.streaks);
        if let Some(column) = self.forced(&own_moves) {
            return Decision::Extend(column);
        }

        let opponent_moves = connecting_moves(grid, &opponent.streaks);
        if let Some(column) = self.forced(&opponent_moves) {
            return Decision::Block(column);
        }

        let mut candidates = own_moves;
        for column in opponent_moves {
            if !candidates.contains(&column) {
                candidates.push(column);
            }
        }

        if candidates.is_empty() {
            Decision::Random(self.random_column(&legal))
        } else {
            Decision::Connect(self.random_column(&candidates))
        }
    }
}

impl Agent for MoveSelector {
    fn select_column(&mut self, grid: &Grid, player: Player) -> usize {
        let decision = self.decide(grid, player);
        debug!(player = player.number(), ?decision, "bot move");
        decision.column()
    }

    fn name(&self) -> &str {
        "Streak bot"
    }
}
