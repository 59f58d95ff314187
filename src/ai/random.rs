use crate::game::{Grid, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, grid: &Grid, _player: Player) -> usize {
        let columns = grid.legal_columns();
        assert!(!columns.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Match;

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::seeded(7);
        let mut grid = Grid::default();
        for _ in 0..6 {
            grid.place(2, Player::One).unwrap();
        }
        let legal = grid.legal_columns();

        for _ in 0..100 {
            let column = agent.select_column(&grid, Player::Two);
            assert!(legal.contains(&column), "Column {} is not legal", column);
        }
    }

    #[test]
    fn test_random_agents_play_full_game() {
        let mut agents = [RandomAgent::seeded(1), RandomAgent::seeded(2)];
        let mut game = Match::new(7, 6, false);

        let mut turn = 0;
        while !game.is_finished() {
            let column = agents[turn % 2].select_column(game.grid(), game.active_player());
            game.place_move(column).unwrap();
            turn += 1;
        }

        assert!(game.result().is_some());
        assert!(turn <= 42);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }

    #[test]
    #[should_panic(expected = "No legal columns")]
    fn test_random_agent_panics_on_full_grid() {
        let mut grid = Grid::new(1, 1);
        grid.place(0, Player::One).unwrap();
        RandomAgent::seeded(0).select_column(&grid, Player::Two);
    }
}
