// bingo/src/terminal.rs
// This module handles terminal input/output for the bingo game.

use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::board::DrawnSet;
use crate::card::Card;
use crate::config::GameConfig;
use crate::defs::{COLUMNS_PER_CARD, Column, NUMBERS_PER_CARD, NUMBERS_PER_COLUMN, Number};
use crate::game::Game;
use crate::win::{winning_cells, winning_columns};

const RESET: &str = "\x1b[0m";
const MARKED: &str = "\x1b[1;36m"; // Bold cyan for called numbers
const WINNING: &str = "\x1b[1;33m"; // Bold yellow for winning cells
const LATEST: &str = "\x1b[1;32m"; // Bold green for the last number

const LARGE_CELL: usize = 4;
const SMALL_CELL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Draw,
    AddCard,
    Reset,
    Quit,
}

impl KeyAction {
    pub fn from_key(code: KeyCode) -> Option<KeyAction> {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => Some(KeyAction::Draw),
            KeyCode::Char('c') => Some(KeyAction::AddCard),
            KeyCode::Char('r') => Some(KeyAction::Reset),
            KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
            _ => None,
        }
    }
}

/// How much room a card gets, by its position in the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Small,
    Summary,
}

impl CardSize {
    pub fn for_index(index: usize, config: &GameConfig) -> CardSize {
        if index < config.large_cards {
            CardSize::Large
        } else if index < config.large_cards + config.small_cards {
            CardSize::Small
        } else {
            CardSize::Summary
        }
    }
}

fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

fn ball_color(number: Number) -> &'static str {
    match Column::for_number(number) {
        Some(Column::B) => "\x1b[1;37;41m",
        Some(Column::I) => "\x1b[1;37;44m",
        Some(Column::N) => "\x1b[1;37;45m",
        Some(Column::G) => "\x1b[1;37;42m",
        Some(Column::O) => "\x1b[1;30;43m",
        None => "",
    }
}

pub fn ball(number: Number) -> String {
    paint(&format!("{number:2}"), ball_color(number))
}

/// Last call, the few before it, and every called ball in draw order.
pub fn render_called(drawn: &DrawnSet, recent: usize) -> String {
    let mut out = String::new();
    match drawn.last() {
        Some(last) => {
            out.push_str(&format!("Last number: {}\n", paint(&last.to_string(), LATEST)));
            out.push_str(&format!("Previous numbers: {:?}\n", drawn.last_numbers(recent)));
        }
        None => out.push_str("No numbers called yet\n"),
    }

    out.push_str(&format!("\nAll numbers ({}):\n", drawn.progress()));
    let balls: Vec<String> = drawn.numbers().iter().map(|&n| ball(n)).collect();
    for line in balls.chunks(15) {
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Called numbers laid out under their B/I/N/G/O letter.
pub fn render_board(drawn: &DrawnSet) -> String {
    let groups = drawn.group_by_column();
    let mut out = String::new();

    for column in Column::ALL {
        out.push_str(&format!(" {:>2} ", column.letter()));
    }
    out.push('\n');

    let depth = groups.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..depth {
        for group in &groups {
            match group.get(row) {
                Some(&number) => out.push_str(&format!(" {} ", ball(number))),
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }
    out
}

fn render_cell(number: Number, width: usize, drawn: &DrawnSet, winning: &std::collections::BTreeSet<Number>) -> String {
    let text = format!("{number:>width$}");
    if winning.contains(&number) {
        paint(&text, WINNING)
    } else if drawn.contains(number) {
        paint(&text, MARKED)
    } else {
        text
    }
}

fn render_summary(index: usize, card: &Card, drawn: &DrawnSet) -> String {
    let marked = card.numbers().filter(|&n| drawn.contains(n)).count();
    let letters: Vec<String> = winning_columns(card, drawn).iter().map(Column::to_string).collect();
    let status = if letters.is_empty() {
        String::new()
    } else {
        paint(&format!(" WIN {}", letters.join(" ")), WINNING)
    };
    format!("#{:<3} {} {:>2}/{}{}", index + 1, card.id_string(), marked, NUMBERS_PER_CARD, status)
}

/// Lines of one card. Every line of a framed card has the same visible width.
pub fn render_card(index: usize, card: &Card, drawn: &DrawnSet, size: CardSize) -> Vec<String> {
    let cell = match size {
        CardSize::Large => LARGE_CELL,
        CardSize::Small => SMALL_CELL,
        CardSize::Summary => return vec![render_summary(index, card, drawn)],
    };

    let winning = winning_cells(card, drawn);
    let border_color = if winning.is_empty() { "" } else { WINNING };

    let inner = cell * COLUMNS_PER_CARD;
    let edge = paint(&format!("+{}+", "-".repeat(inner)), border_color);
    let side = paint("|", border_color);

    let mut lines = Vec::with_capacity(NUMBERS_PER_COLUMN + 4);
    let label = match size {
        CardSize::Large => format!("#{} {}", index + 1, card.id_string()),
        _ => format!("#{}", index + 1),
    };
    lines.push(format!("{:<width$}", label, width = inner + 2));
    lines.push(edge.clone());

    if size == CardSize::Large {
        let header: String = Column::ALL
            .iter()
            .map(|c| format!("{:>w$} ", c.letter(), w = cell - 1))
            .collect();
        lines.push(format!("{side}{header}{side}"));
    }

    for row in 0..NUMBERS_PER_COLUMN {
        if let Some(values) = card.row(row) {
            let cells: String = values
                .iter()
                .map(|&n| format!("{} ", render_cell(n, cell - 1, drawn, &winning)))
                .collect();
            lines.push(format!("{side}{cells}{side}"));
        }
    }

    lines.push(edge);
    lines
}

/// All cards, framed ones side by side, summaries one per line.
pub fn render_cards(cards: &[Card], drawn: &DrawnSet, config: &GameConfig) -> String {
    let mut out = String::new();
    let mut pending: Vec<Vec<String>> = Vec::new();
    let mut pending_size = CardSize::Large;

    let flush = |pending: &mut Vec<Vec<String>>, out: &mut String| {
        if let Some(height) = pending.iter().map(Vec::len).max() {
            for line in 0..height {
                let joined: Vec<&str> = pending
                    .iter()
                    .map(|card| card.get(line).map(String::as_str).unwrap_or(""))
                    .collect();
                out.push_str(joined.join("  ").trim_end());
                out.push('\n');
            }
            out.push('\n');
        }
        pending.clear();
    };

    for (index, card) in cards.iter().enumerate() {
        let size = CardSize::for_index(index, config);
        if size != pending_size || pending.len() >= config.cards_per_row {
            flush(&mut pending, &mut out);
        }
        pending_size = size;

        let lines = render_card(index, card, drawn, size);
        if size == CardSize::Summary {
            out.push_str(&lines.join("\n"));
            out.push('\n');
        } else {
            pending.push(lines);
        }
    }
    flush(&mut pending, &mut out);
    out
}

pub fn render_screen(game: &Game, config: &GameConfig, message: Option<&str>) -> String {
    let drawn = game.drawn();
    let mut out = String::new();

    out.push_str("BINGO GAME\n");
    out.push_str(&format!("Game {} started {}\n\n", game.id(), game.created_at_string()));
    out.push_str(&render_called(drawn, config.recent_numbers));
    out.push('\n');
    out.push_str(&render_board(drawn));
    out.push('\n');
    out.push_str(&format!("Bingo cards ({})\n", game.cards().len()));
    out.push_str(&render_cards(game.cards(), drawn, config));

    for winner in game.winners() {
        let letters: Vec<String> = winner.columns.iter().map(Column::to_string).collect();
        out.push_str(&paint(
            &format!("BINGO! card #{} ({}) column {}\n", winner.index + 1, winner.card_id, letters.join(" ")),
            WINNING,
        ));
    }

    if let Some(message) = message {
        out.push_str(&format!("\n{message}\n"));
    }
    out
}

pub fn show_on_terminal(game: &Game, config: &GameConfig, message: Option<&str>) {
    print!("\x1Bc"); // Clear the screen
    print!("{}", render_screen(game, config, message));
    println!("\nENTER/SPACE: draw number  C: add card  R: new game  ESC: exit");
}

/// Blocks until a mapped key is pressed.
pub fn wait_for_user_action() -> std::io::Result<KeyAction> {
    // Enable raw mode to capture individual key presses
    enable_raw_mode()?;

    let result = read_action();
    let restored = disable_raw_mode();
    let action = result?;
    restored?;
    Ok(action)
}

fn read_action() -> std::io::Result<KeyAction> {
    // Clear any pending events in the buffer
    while event::poll(Duration::from_millis(0))? {
        event::read()?;
    }

    loop {
        if let Event::Key(key_event) = event::read()? {
            // Only process key press events, not key release events
            if key_event.kind == KeyEventKind::Press {
                if let Some(action) = KeyAction::from_key(key_event.code) {
                    return Ok(action);
                }
            }
        }
    }
}
