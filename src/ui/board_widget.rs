use crate::game::{Cell, Coord, Game, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Cyan,
    }
}

/// Style for a piece by its place in the owner's queue: the newest piece
/// is bold, older ones are dimmed, and the one that vanishes on the owner's
/// next move is dimmed and underlined.
pub fn piece_style(game: &Game, player: Player, age: usize) -> Style {
    let queue = game.queue(player);
    let base = Style::default().fg(player_color(player));
    let newest = queue.len().saturating_sub(1);

    if age == 0 && game.next_to_vanish(player).is_some() {
        base.add_modifier(Modifier::DIM | Modifier::UNDERLINED)
    } else if age == newest {
        base.add_modifier(Modifier::BOLD)
    } else if age * 2 < newest {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

/// One board cell, three columns wide.
pub fn cell_span(
    game: &Game,
    coord: Coord,
    cursor: Option<Coord>,
    winning: &[Coord],
) -> Span<'static> {
    let (symbol, mut style) = match game.board().get(coord.row, coord.col) {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        cell => {
            let (player, symbol) = match cell {
                Cell::X => (Player::X, " X "),
                _ => (Player::O, " O "),
            };
            let age = game
                .piece_age(coord)
                .map(|(_, age)| age)
                .unwrap_or_default();
            (symbol, piece_style(game, player, age))
        }
    };

    if winning.contains(&coord) {
        style = style
            .bg(Color::Green)
            .fg(Color::Black)
            .remove_modifier(Modifier::DIM)
            .add_modifier(Modifier::BOLD);
    }
    if cursor == Some(coord) {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::REVERSED);
    }

    Span::styled(symbol, style)
}
