use crate::game::{GameOutcome, Player, Position, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the game screen needs to draw one frame.
pub struct BoardView<'a> {
    pub snapshot: &'a Snapshot,
    pub selected_column: usize,
    pub last_placed: Option<Position>,
    pub message: Option<&'a str>,
    pub alert: Option<&'a str>,
    pub mode: &'a str,
}

pub fn render(frame: &mut Frame, view: &BoardView) {
    let board_height = view.snapshot.grid.rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Yellow,
        Player::Two => Color::Red,
    }
}

fn render_header(frame: &mut Frame, view: &BoardView, area: ratatui::layout::Rect) {
    let snapshot = view.snapshot;
    let player = snapshot.active_player;

    let (status, color) = match snapshot.result {
        None => (
            format!("Current Player: {}  |  {}", player.name(), view.mode),
            player_color(player),
        ),
        Some(GameOutcome::Winner(winner)) => (
            format!("{} won  |  {}", winner.name(), view.mode),
            player_color(winner),
        ),
        Some(GameOutcome::Draw) => (format!("Draw  |  {}", view.mode), Color::Magenta),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("4 Gewinnt"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &BoardView, area: ratatui::layout::Rect) {
    let grid = &view.snapshot.grid;
    let winning = view.snapshot.winning_streak.as_ref();
    let inner_width = grid.columns() * 3 + 1;
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..grid.columns() {
        let label = format!("{:^3}", col + 1);
        if col == view.selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    for y in 0..grid.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for x in 0..grid.columns() {
            let position = Position::new(x, y);
            let span = match grid.get(position) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning.is_some_and(|streak| streak.contains(position)) {
                        style = Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD);
                    } else if view.last_placed == Some(position) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..grid.columns() {
        if col == view.selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, view: &BoardView, area: ratatui::layout::Rect) {
    let mut spans = vec![Span::styled(
        view.message.unwrap_or(""),
        Style::default().fg(Color::White),
    )];
    if let Some(alert) = view.alert {
        if view.message.is_some() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            alert,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let msg_widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  1: vs Bot  |  2: Two Players  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
