use super::app::App;
use super::board_widget::{cell_span, player_color};
use crate::game::{Coord, Game, GameResult, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + side panel
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(chunks[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(middle[1]);

    render_header(frame, app, chunks[0]);
    render_board(frame, app.game(), app.cursor(), middle[0]);
    render_info(frame, app.game(), side[0]);
    render_history(frame, app.game(), side[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn status_text(app: &App) -> (String, Color) {
    let game = app.game();
    match game.result() {
        GameResult::Winner(player) => (
            format!("Game Over: {} wins!", player.name()),
            player_color(player),
        ),
        GameResult::Draw => ("Game Over: draw".to_string(), Color::Yellow),
        GameResult::InProgress => {
            let player = game.current_player().unwrap_or(Player::X);
            let text = if app.ai_thinking() {
                format!("AI ({}) is thinking...", player.name())
            } else if app.ai_player() == Some(player) {
                format!("Turn: AI ({})", player.name())
            } else {
                format!("Turn: {}", player.name())
            };
            (text, player_color(player))
        }
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color) = status_text(app);
    let header = Paragraph::new(format!("{}  |  {}", status, app.mode().label()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Fading Connect"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, cursor: Coord, area: Rect) {
    let n = game.board().size();
    let winning = game.winning_line().unwrap_or_default();
    let cursor = if game.is_terminal() { None } else { Some(cursor) };
    let mut lines = Vec::new();

    // Column numbers
    let mut col_line = vec![Span::raw("     ")];
    for col in 0..n {
        col_line.push(Span::raw(format!("{:^3}", col + 1)));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * n + 2);
    lines.push(Line::from(format!("    ╔{rule}╗")));

    for row in 0..n {
        let mut row_spans = vec![Span::raw(format!("{:>3} ║ ", row + 1))];
        for col in 0..n {
            row_spans.push(cell_span(game, Coord::new(row, col), cursor, &winning));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("    ╚{rule}╝")));

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board_widget, area);
}

fn render_info(frame: &mut Frame, game: &Game, area: Rect) {
    let config = game.config();
    let mut lines = vec![
        Line::from(format!(
            "Board {n}x{n}  |  {} in a row",
            config.win_length(),
            n = config.board_size()
        )),
        Line::from(format!("Max pieces: {}", config.max_pieces())),
    ];
    for player in [Player::X, Player::O] {
        let queue = game.queue(player);
        let mut spans = vec![
            Span::styled(
                format!("{}: ", player.name()),
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}/{} on board", queue.len(), queue.capacity())),
        ];
        if let Some(next) = game.next_to_vanish(player) {
            spans.push(Span::styled(
                format!("  next out ({}, {})", next.row + 1, next.col + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("Moves played: {}", game.history().len())));

    let info = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Pieces"));
    frame.render_widget(info, area);
}

fn render_history(frame: &mut Frame, game: &Game, area: Rect) {
    let history = game.history();
    if history.is_empty() {
        let empty = Paragraph::new("No moves yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Moves"));
        frame.render_widget(empty, area);
        return;
    }

    // Newest moves stay visible; older ones scroll off the top.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, record)| {
            let on_board = game.queue(record.player).contains(record.coord);
            let mut style = Style::default().fg(player_color(record.player));
            if !on_board {
                style = style.add_modifier(Modifier::DIM);
            }
            Line::from(vec![
                Span::raw(format!("#{:<4}", i + 1)),
                Span::raw(format!(
                    "({}, {})  ",
                    record.coord.row + 1,
                    record.coord.col + 1
                )),
                Span::styled(record.player.name(), style),
            ])
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(log, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows/hjkl: Move  |  Enter: Place  |  U: Undo  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("P: PvP/PvAI  |  [ ]: Board size  |  - =: Max pieces  |  , .: Win length");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
