use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Agent, BotConfig, MoveSelector, RandomAgent};
use connect_four::config::AppConfig;
use connect_four::game::{Match, Player, Snapshot, WinDetector, BOT_PLAYER};
use connect_four::stats::{GameRecord, MatchStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    /// Uniformly random legal columns
    Random,
    /// Another streak bot
    Bot,
}

/// Play the streak bot against an automated opponent and report results.
#[derive(Parser)]
#[command(name = "simulate", about = "Benchmark the streak bot headlessly")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Base seed; game N uses seed + N
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Who plays first against the bot
    #[arg(long, value_enum, default_value = "random")]
    opponent: Opponent,

    /// Print one JSON line per finished game
    #[arg(long)]
    json: bool,

    /// Print a progress line every N games
    #[arg(long, default_value_t = 100)]
    log_interval: usize,
}

#[derive(Serialize)]
struct GameLine<'a> {
    game: usize,
    moves: usize,
    near_win_pieces: usize,
    snapshot: &'a Snapshot,
}

/// Seed for the opponent of the bot seeded with `seed`, far from the bot's
/// own seed range.
fn opponent_seed(seed: u64) -> u64 {
    seed.wrapping_add(u64::MAX / 2)
}

fn opponent_agent(opponent: Opponent, bot: &BotConfig, seed: u64) -> Box<dyn Agent> {
    match opponent {
        Opponent::Random => Box::new(RandomAgent::seeded(opponent_seed(seed))),
        Opponent::Bot => Box::new(MoveSelector::new(&BotConfig {
            seed: Some(opponent_seed(seed)),
            ..bot.clone()
        })),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be > 0");
    }
    if cli.log_interval == 0 {
        bail!("--log-interval must be > 0");
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    info!(
        games = cli.games,
        columns = config.board.columns,
        rows = config.board.rows,
        opponent = ?cli.opponent,
        "starting simulation"
    );

    let mut stats = MatchStats::with_capacity(cli.games);
    let detector = WinDetector::new();

    for game_index in 0..cli.games {
        let seed = cli.seed.wrapping_add(game_index as u64);
        let bot = MoveSelector::new(&BotConfig {
            seed: Some(seed),
            ..config.bot.clone()
        });
        let mut opponent = opponent_agent(cli.opponent, &config.bot, seed);
        let mut game = Match::with_agent(
            config.board.columns,
            config.board.rows,
            Some(Box::new(bot)),
        );

        while !game.is_finished() {
            let column = opponent.select_column(game.grid(), BOT_PLAYER.other());
            game.place_move(column)
                .with_context(|| format!("{} chose column {}", opponent.name(), column))?;
        }

        let snapshot = game.snapshot();
        let moves = snapshot.grid.piece_count();
        let outcome = snapshot
            .result
            .context("finished game must have a result")?;
        stats.record(GameRecord {
            outcome,
            length: moves,
        });

        if cli.json {
            let line = GameLine {
                game: game_index,
                moves,
                near_win_pieces: detector.evaluate_board(&snapshot.grid).near_win_pieces,
                snapshot: &snapshot,
            };
            println!("{}", serde_json::to_string(&line)?);
        }

        if (game_index + 1) % cli.log_interval == 0 {
            let window = cli.log_interval;
            info!(
                game = game_index + 1,
                bot_win_rate = stats.win_rate(BOT_PLAYER, window),
                draw_rate = stats.draw_rate(window),
                avg_len = stats.average_length(window),
                "progress"
            );
        }
    }

    let total = stats.total_games();
    println!("-------------------------------------------");
    println!("Games:          {}", total);
    println!(
        "Bot wins:       {:.1}%",
        stats.win_rate(BOT_PLAYER, total) * 100.0
    );
    println!(
        "Opponent wins:  {:.1}%",
        stats.win_rate(Player::One, total) * 100.0
    );
    println!("Draws:          {:.1}%", stats.draw_rate(total) * 100.0);
    println!("Average length: {:.1}", stats.average_length(total));

    Ok(())
}
