use std::collections::VecDeque;

use crate::game::{GameOutcome, Player};

/// Result of a single finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub length: usize,
}

/// Rolling win/draw statistics over the most recent games.
pub struct MatchStats {
    records: VecDeque<GameRecord>,
    capacity: usize,
    total_games: usize, // lifetime count, never capped
}

impl MatchStats {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchStats {
            records: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record(&mut self, record: GameRecord) {
        self.total_games += 1;
        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    fn rate(&self, last_n: usize, predicate: impl Fn(&GameRecord) -> bool) -> f32 {
        let n = self.records.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .records
            .iter()
            .rev()
            .take(n)
            .filter(|r| predicate(r))
            .count();
        hits as f32 / n as f32
    }

    /// Win rate for `player` in the last N games.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.outcome == GameOutcome::Winner(player))
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.outcome == GameOutcome::Draw)
    }

    /// Average number of pieces placed over the last N games.
    pub fn average_length(&self, last_n: usize) -> f32 {
        let n = self.records.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.records.iter().rev().take(n).map(|r| r.length).sum();
        total as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(player: Player, length: usize) -> GameRecord {
        GameRecord {
            outcome: GameOutcome::Winner(player),
            length,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::new();
        assert_eq!(stats.win_rate(Player::One, 100), 0.0);
        assert_eq!(stats.draw_rate(100), 0.0);
        assert_eq!(stats.average_length(100), 0.0);
        assert_eq!(stats.total_games(), 0);
    }

    #[test]
    fn test_rates() {
        let mut stats = MatchStats::new();
        stats.record(win(Player::One, 7));
        stats.record(win(Player::Two, 10));
        stats.record(win(Player::One, 13));
        stats.record(GameRecord {
            outcome: GameOutcome::Draw,
            length: 42,
        });

        assert!((stats.win_rate(Player::One, 100) - 0.5).abs() < 1e-6);
        assert!((stats.win_rate(Player::Two, 100) - 0.25).abs() < 1e-6);
        assert!((stats.draw_rate(100) - 0.25).abs() < 1e-6);
        assert!((stats.average_length(100) - 18.0).abs() < 1e-6);

        // Only the most recent two games
        assert!((stats.draw_rate(2) - 0.5).abs() < 1e-6);
        assert!((stats.average_length(2) - 27.5).abs() < 1e-6);
    }

    #[test]
    fn test_capacity_keeps_lifetime_total() {
        let mut stats = MatchStats::with_capacity(3);
        for _ in 0..5 {
            stats.record(win(Player::Two, 8));
        }
        stats.record(win(Player::One, 8));

        assert_eq!(stats.total_games(), 6);
        assert!((stats.win_rate(Player::One, 100) - 1.0 / 3.0).abs() < 1e-6);
    }
}
