//! Text rendering of the board and scoreboard
//!
//! Pegs sit six columns apart; rows are indented by three columns per step
//! away from the equator, so diagonals fall on a two-line slope between peg
//! rows. Captured triangles show their owner at the cell's centre.

use std::fmt::Write as _;

use triggle_core::{GameState, Player, Vertex};

const PEG: char = '●';
const PEG_SPACING: usize = 6;
const LABEL_WIDTH: usize = 2;

struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(lines: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; lines],
        }
    }

    fn put(&mut self, line: usize, x: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(line).and_then(|l| l.get_mut(x)) {
            *cell = ch;
        }
    }

    fn into_string(self) -> String {
        let mut out = String::new();
        for line in self.cells {
            let text: String = line.into_iter().collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Text line of peg row `row`
fn peg_line(row: i8) -> usize {
    row as usize * 3
}

/// Text column of a peg
fn peg_x(state: &GameState, v: Vertex) -> usize {
    let indent = (state.lattice().equator() - v.row).unsigned_abs() as usize * PEG_SPACING / 2;
    LABEL_WIDTH + indent + v.col as usize * PEG_SPACING
}

/// Draw the board: row letters on the left, sticks as `-----`, `/` and `\`
pub fn render_board(state: &GameState) -> String {
    let lattice = state.lattice();
    let rows = lattice.rows();
    let width = LABEL_WIDTH + (2 * lattice.side_length() as usize) * PEG_SPACING;
    let mut canvas = Canvas::new(peg_line(rows - 1) + 1, width);

    for v in lattice.vertices() {
        let x = peg_x(state, v);
        let line = peg_line(v.row);
        if v.col == 0 {
            canvas.put(line, 0, (b'A' + v.row as u8) as char);
        }
        canvas.put(line, x, PEG);
    }

    for (a, b) in state.edges().iter() {
        let (xa, xb) = (peg_x(state, a), peg_x(state, b));
        let line = peg_line(a.row);
        if a.row == b.row {
            for x in xa.min(xb) + 1..xa.max(xb) {
                canvas.put(line, x, '-');
            }
        } else if xb < xa {
            canvas.put(line + 1, xa - 1, '/');
            canvas.put(line + 2, xa - 2, '/');
        } else {
            canvas.put(line + 1, xa + 1, '\\');
            canvas.put(line + 2, xa + 2, '\\');
        }
    }

    for (key, owner) in state.triangles().iter() {
        let [top, second, third] = key.corners();
        let mark = owner.to_string().chars().next().unwrap_or('?');
        if top.row == second.row {
            // Two pegs on top: the cell points down
            let x = (peg_x(state, top) + peg_x(state, second)) / 2;
            canvas.put(peg_line(top.row) + 1, x, mark);
        } else {
            debug_assert_eq!(second.row, third.row);
            canvas.put(peg_line(top.row) + 2, peg_x(state, top), mark);
        }
    }

    canvas.into_string()
}

/// Bar chart of captured triangles per player
pub fn render_scoreboard(state: &GameState) -> String {
    let mut out = String::from("Scoreboard\n");
    for player in [Player::X, Player::O] {
        let score = state.score(player);
        let _ = writeln!(out, "{}: {} ({})", player, "█".repeat(score as usize), score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use triggle_core::{Direction, Move};

    fn line_of(board: &str, row: usize) -> String {
        board.lines().nth(row * 3).unwrap_or_default().to_string()
    }

    #[test]
    fn test_empty_board_has_every_peg() {
        let game = GameState::new(4, Player::X).unwrap();
        let board = render_board(&game);
        assert_eq!(board.chars().filter(|&c| c == PEG).count(), 37);
        for (row, width) in [4, 5, 6, 7, 6, 5, 4].into_iter().enumerate() {
            let line = line_of(&board, row);
            assert!(line.starts_with((b'A' + row as u8) as char));
            assert_eq!(line.chars().filter(|&c| c == PEG).count(), width);
        }
        assert!(!board.contains('-'));
    }

    #[test]
    fn test_horizontal_stick() {
        let mut game = GameState::new(4, Player::X).unwrap();
        game.apply_move(Move::new(Vertex::new(0, 0), Direction::Forward)).unwrap();
        let board = render_board(&game);
        let top = line_of(&board, 0);
        assert_eq!(top.matches("●-----●").count(), 2);
        assert!(top.contains("●-----●-----●-----●"));
    }

    #[test]
    fn test_diagonals_and_owner() {
        let mut game = GameState::new(4, Player::X).unwrap();
        game.apply_move(Move::new(Vertex::new(0, 0), Direction::Forward)).unwrap();
        game.apply_move(Move::new(Vertex::new(0, 0), Direction::DownRight)).unwrap();
        game.apply_move(Move::new(Vertex::new(0, 1), Direction::DownLeft)).unwrap();
        let board = render_board(&game);
        let first_slope: Vec<&str> = board.lines().skip(1).take(2).collect();
        assert!(first_slope[0].contains('\\'));
        assert!(first_slope[0].contains('/'));
        assert!(first_slope[0].contains("\\ X /"));
    }

    #[test]
    fn test_scoreboard() {
        let game = GameState::new(4, Player::X).unwrap();
        let text = render_scoreboard(&game);
        assert!(text.contains("X:  (0)"));
        assert!(text.contains("O:  (0)"));
    }
}
