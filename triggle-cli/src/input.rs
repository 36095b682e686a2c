//! Parsing of typed moves and REPL commands
//!
//! Moves are written `ROW COL DIR`: a row letter, a 1-based column and a
//! direction tag, e.g. `A 1 D`, `c 4 dl`, `B2 DR`.

use anyhow::{anyhow, bail, Context, Result};

use triggle_core::{Direction, Move, Vertex};

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    /// Ask the engine for a suggestion
    Hint,
    /// List legal moves
    Moves,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "hint" => Ok(Command::Hint),
        "moves" => Ok(Command::Moves),
        _ => parse_move(line).map(Command::Play),
    }
}

/// Parse `ROW COL DIR` (the row letter may be glued to the column)
pub fn parse_move(line: &str) -> Result<Move> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (row_token, col_token, dir_token) = match tokens.as_slice() {
        [row, col, dir] => (*row, *col, *dir),
        [peg, dir] if peg.len() > 1 => peg
            .char_indices()
            .nth(1)
            .map(|(split, _)| (&peg[..split], &peg[split..], *dir))
            .ok_or_else(|| anyhow!("expected ROW COL DIR"))?,
        _ => bail!("expected ROW COL DIR, e.g. 'A 1 D'"),
    };

    let row = parse_row(row_token)?;
    let col: i8 = col_token
        .parse()
        .with_context(|| format!("column '{}' is not a number", col_token))?;
    if col < 1 {
        bail!("columns start at 1");
    }
    let direction: Direction = dir_token.parse()?;

    Ok(Move::new(Vertex::new(row, col - 1), direction))
}

fn parse_row(token: &str) -> Result<i8> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Ok((letter.to_ascii_uppercase() as u8 - b'A') as i8)
        }
        _ => bail!("row must be a single letter, got '{}'", token),
    }
}
