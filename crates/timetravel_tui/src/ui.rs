//! Stateless UI rendering of the game projection.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_core::{BoardView, GameStatus, GameView, Player, Position, SquareView};

const BOARD_WIDTH: u16 = 17;
const BOARD_HEIGHT: u16 = 5;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = GameView::from(app.game());

    let [title, body, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT * 2 + 4),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let heading = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    let [main, status_area] =
        Layout::vertical([Constraint::Min(BOARD_HEIGHT + 2), Constraint::Length(3)]).areas(body);
    let [board_area, right] =
        Layout::horizontal([Constraint::Length(BOARD_WIDTH + 8), Constraint::Min(30)]).areas(main);
    let [list_area, preview_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(BOARD_HEIGHT + 2)]).areas(right);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, board_area, view.board(), cursor, focused_block("Board", app.focus() == Focus::Board));
    draw_status(frame, status_area, &view, app);
    draw_moves(frame, list_area, &view, app);

    if let Some(entry) = view.moves().get(app.selected()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", entry.label()));
        draw_board(frame, preview_area, entry.board(), None, block);
    }

    let keys = match app.focus() {
        Focus::Board => "←↑↓→ move  Enter play  1-9 play  Tab history  Home start  q quit",
        Focus::History => "↑↓ select  Enter jump  1-9 play  Tab board  Home start  q quit",
    };
    let footer = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, help);
}

fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", title))
}

fn draw_board(frame: &mut Frame, area: Rect, board: &BoardView, cursor: Option<Position>, block: Block) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(5);
    for (row, squares) in board.rows().enumerate() {
        if row > 0 {
            lines.push(Line::styled(
                "─────┼─────┼─────",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(5);
        for (col, square) in squares.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(square, cursor == Some(square.position())));
        }
        lines.push(Line::from(spans));
    }

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(square: &SquareView, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match square.value().player() {
        None => (
            format!("  {}  ", square.position().to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            format!("  {}  ", square.text()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            format!("  {}  ", square.text()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if square.is_winner() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let color = match view.status() {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Yellow,
        GameStatus::InProgress { .. } => Color::White,
    };

    let game = app.game();
    let mut text = view.status_text();
    if !game.is_latest() {
        text.push_str(&format!("  (move {} of {})", game.step(), game.history().len() - 1));
    }

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.current() { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<17}", entry.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.change().to_string(), Style::default().fg(Color::Gray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(focused_block("Moves", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vertical);
    centered
}
