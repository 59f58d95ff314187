use serde::Serialize;
use tracing::{debug, info, warn};

use super::{Grid, Outcome, Piece, Player, Position, Streak, WinDetector};
use crate::ai::{Agent, BotConfig, MoveSelector};
use crate::config::AppConfig;
use crate::error::MoveError;

/// The seat taken by the bot when one is enabled. Player one always opens.
pub const BOT_PLAYER: Player = Player::Two;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    AwaitingMove(Player),
    Finished(GameOutcome),
}

/// Notifications for the presentation layer, queued in the order they
/// happened. Collect them with [`Match::drain_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    PiecePlaced {
        position: Position,
        player: Player,
    },
    NearWinDetected {
        streak_length: usize,
        count: usize,
    },
    MatchFinished {
        outcome: GameOutcome,
        winning_streak: Option<Streak>,
    },
}

/// A single accepted placement and what it led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub piece: Piece,
    pub outcome: Outcome,
}

/// Everything that happened during one `place_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The move that was asked for.
    pub placement: Placement,
    /// The bot's answer, played in the same call.
    pub reply: Option<Placement>,
}

/// Read-only view of a match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub active_player: Player,
    /// `None` while the match is still running.
    pub result: Option<GameOutcome>,
    pub winning_streak: Option<Streak>,
    pub near_win_count: usize,
}

#[derive(Debug, Clone)]
struct MatchState {
    grid: Grid,
    active_player: Player,
    result: Option<GameOutcome>,
    winning_streak: Option<Streak>,
    detector: WinDetector,
}

impl MatchState {
    fn new(columns: usize, rows: usize) -> Self {
        MatchState {
            grid: Grid::new(columns, rows),
            active_player: Player::One,
            result: None,
            winning_streak: None,
            detector: WinDetector::new(),
        }
    }
}

/// One match: the grid, whose turn it is, and the optional bot opponent.
pub struct Match {
    state: MatchState,
    bot: Option<Box<dyn Agent>>,
    events: Vec<MatchEvent>,
}

impl Match {
    /// Create a match waiting for player one's first move. With
    /// `bot_enabled`, player two is played by the streak bot.
    pub fn new(columns: usize, rows: usize, bot_enabled: bool) -> Self {
        let bot = bot_enabled
            .then(|| Box::new(MoveSelector::new(&BotConfig::default())) as Box<dyn Agent>);
        Self::with_agent(columns, rows, bot)
    }

    /// Create a match with an arbitrary agent (or none) in the bot seat.
    pub fn with_agent(columns: usize, rows: usize, bot: Option<Box<dyn Agent>>) -> Self {
        Match {
            state: MatchState::new(columns, rows),
            bot,
            events: Vec::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let bot = config
            .bot
            .enabled
            .then(|| Box::new(MoveSelector::new(&config.bot)) as Box<dyn Agent>);
        Self::with_agent(config.board.columns, config.board.rows, bot)
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Player to move, or the last player to move once the match is over
    pub fn active_player(&self) -> Player {
        self.state.active_player
    }

    pub fn status(&self) -> MatchStatus {
        match self.state.result {
            Some(outcome) => MatchStatus::Finished(outcome),
            None => MatchStatus::AwaitingMove(self.state.active_player),
        }
    }

    pub fn result(&self) -> Option<GameOutcome> {
        self.state.result
    }

    pub fn is_finished(&self) -> bool {
        self.state.result.is_some()
    }

    pub fn winning_streak(&self) -> Option<&Streak> {
        self.state.winning_streak.as_ref()
    }

    pub fn near_win_count(&self) -> usize {
        self.state.detector.near_win_count()
    }

    pub fn has_bot(&self) -> bool {
        self.bot.is_some()
    }

    /// Drop a piece for the active player into `column`.
    ///
    /// When the move hands the turn to the bot, the bot's reply is played
    /// before returning. Rejected moves leave the match untouched.
    pub fn place_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        let placement = self.apply(column)?;

        let reply = self.bot_column().map(|bot_column| {
            self.apply(bot_column).unwrap_or_else(|e| {
                panic!("bot selected illegal column {}: {}", bot_column, e)
            })
        });

        Ok(MoveReport { placement, reply })
    }

    /// Column chosen by the bot, if it is the bot's turn.
    fn bot_column(&mut self) -> Option<usize> {
        let MatchStatus::AwaitingMove(next) = self.status() else {
            return None;
        };
        if next != BOT_PLAYER {
            return None;
        }
        let bot = self.bot.as_mut()?;
        Some(bot.select_column(&self.state.grid, next))
    }

    fn apply(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_finished() {
            warn!(column, "move rejected: game is already finished");
            return Err(MoveError::GameAlreadyFinished);
        }

        let player = self.state.active_player;
        let position = self
            .state
            .grid
            .place(column, player)
            .inspect_err(|e| warn!(column, error = %e, "move rejected"))?;
        let piece = Piece { position, player };
        debug!(
            player = player.number(),
            x = position.x,
            y = position.y,
            "piece placed"
        );
        self.events.push(MatchEvent::PiecePlaced { position, player });

        let evaluation = self
            .state
            .detector
            .evaluate_after_placement(&self.state.grid, piece);
        debug_assert_eq!(
            self.state
                .detector
                .evaluate_board(&self.state.grid)
                .outcome
                .winner(),
            evaluation.outcome.winner(),
            "incremental and full-board evaluation disagree"
        );

        if let Some(count) = evaluation.near_win {
            self.events.push(MatchEvent::NearWinDetected {
                streak_length: super::streak::NEAR_WIN_LENGTH,
                count,
            });
        }

        match &evaluation.outcome {
            Outcome::Win { player, streak } => {
                self.finish(GameOutcome::Winner(*player), Some(streak.clone()))
            }
            Outcome::Draw => self.finish(GameOutcome::Draw, None),
            Outcome::Continue => self.state.active_player = player.other(),
        }

        Ok(Placement {
            piece,
            outcome: evaluation.outcome,
        })
    }

    fn finish(&mut self, outcome: GameOutcome, winning_streak: Option<Streak>) {
        info!(?outcome, moves = self.state.grid.piece_count(), "match finished");
        self.state.result = Some(outcome);
        self.state.winning_streak = winning_streak.clone();
        self.events.push(MatchEvent::MatchFinished {
            outcome,
            winning_streak,
        });
    }

    /// Start over with an empty grid and player one to move. The bot seat
    /// is kept.
    pub fn reset(&mut self) {
        self.state = MatchState::new(self.state.grid.columns(), self.state.grid.rows());
        self.events.clear();
        debug!("match reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.state.grid.clone(),
            active_player: self.state.active_player,
            result: self.state.result,
            winning_streak: self.state.winning_streak.clone(),
            near_win_count: self.near_win_count(),
        }
    }

    /// Take all notifications raised since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}
