use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, Match, MatchEvent, Player, Position};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, BoardView};

pub struct App {
    config: AppConfig,
    game: Match,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    alert: Option<String>,
    last_placed: Option<Position>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game = Match::from_config(&config);
        let selected_column = config.board.columns / 2;
        App {
            config,
            game,
            selected_column,
            should_quit: false,
            message: Some("let's play".to_string()),
            alert: None,
            last_placed: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.grid().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.restart_view("New game started!");
            }
            KeyCode::Char('1') => self.new_match(true),
            KeyCode::Char('2') => self.new_match(false),
            _ => {}
        }
    }

    /// Start a fresh match, with or without the bot. A match in progress is
    /// only abandoned through `r`.
    fn new_match(&mut self, bot: bool) {
        if !self.game.is_finished() && self.game.grid().piece_count() > 0 {
            self.message = Some("Finish the game or press r to restart first.".to_string());
            return;
        }
        self.config.bot.enabled = bot;
        self.game = Match::from_config(&self.config);
        self.restart_view(if bot { "1p game vs bot" } else { "2p game" });
    }

    fn restart_view(&mut self, message: &str) {
        self.selected_column = self.game.grid().columns() / 2;
        self.message = Some(message.to_string());
        self.alert = None;
        self.last_placed = None;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.message = None;
        self.alert = None;

        match self.game.place_move(self.selected_column) {
            Ok(_) => {
                for event in self.game.drain_events() {
                    self.apply_event(event);
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameAlreadyFinished) => {
                self.message = Some("Game over! Press 1, 2 or r to play again.".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn apply_event(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::PiecePlaced { position, .. } => {
                self.last_placed = Some(position);
            }
            MatchEvent::NearWinDetected { count, .. } => {
                self.alert = Some(format!("uh-oh! ({} close calls)", count));
            }
            MatchEvent::MatchFinished { outcome, .. } => {
                self.message = Some(match outcome {
                    GameOutcome::Winner(player) => {
                        format!("{} won!  1: 1p game  2: 2p game", player.name().to_lowercase())
                    }
                    GameOutcome::Draw => "it's a draw!  1: 1p game  2: 2p game".to_string(),
                });
            }
        }
    }

    fn mode(&self) -> &'static str {
        if self.game.has_bot() {
            "1 player vs bot"
        } else {
            "2 players"
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let snapshot = self.game.snapshot();
        let view = BoardView {
            snapshot: &snapshot,
            selected_column: self.selected_column,
            last_placed: self.last_placed,
            message: self.message.as_deref(),
            alert: self.alert.as_deref(),
            mode: self.mode(),
        };
        game_view::render(frame, &view);
    }

    /// Whose turn it is, for tests and status lines
    pub fn active_player(&self) -> Player {
        self.game.active_player()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
