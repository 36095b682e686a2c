//! Hexagonal triangular lattice geometry
//!
//! Rows are numbered top to bottom. The upper half widens by one peg per row
//! until the equator row `n - 1`, after which the lower half narrows again.
//! The lower half is column-shifted relative to the upper half, so the
//! diagonal deltas swap exactly at the equator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TriggleError;

/// Smallest supported side length (pegs per side)
pub const MIN_SIDE_LENGTH: u8 = 4;

/// Largest supported side length (pegs per side)
pub const MAX_SIDE_LENGTH: u8 = 8;

/// A peg on the board, addressed by 0-based row and column
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub row: i8,
    pub col: i8,
}

impl Vertex {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Vertex offset by a `(dr, dc)` delta (may leave the board)
    pub fn offset(&self, (dr, dc): (i8, i8)) -> Vertex {
        Vertex::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Vertex {
    /// Row letter and 1-based column, the way players name pegs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.row.max(0) as u8) as char;
        write!(f, "{}{}", letter, self.col as i16 + 1)
    }
}

/// Which half of the hexagon a vertex lies in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    Upper,
    Lower,
}

/// The three lattice directions a stick can be drawn in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along the row, towards higher columns
    Forward,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Fixed enumeration order used by move generation
    pub const ALL: [Direction; 3] = [Direction::Forward, Direction::DownLeft, Direction::DownRight];

    /// Short tag used in move notation
    pub fn tag(self) -> &'static str {
        match self {
            Direction::Forward => "D",
            Direction::DownLeft => "DL",
            Direction::DownRight => "DR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Direction {
    type Err = TriggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D" | "F" => Ok(Direction::Forward),
            "DL" => Ok(Direction::DownLeft),
            "DR" | "DD" => Ok(Direction::DownRight),
            other => Err(TriggleError::InvalidDirection(other.to_string())),
        }
    }
}

/// Three vertices of a unit cell, sorted so equal cells compare equal
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TriangleKey([Vertex; 3]);

impl TriangleKey {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        let mut corners = [a, b, c];
        corners.sort();
        Self(corners)
    }

    pub fn corners(&self) -> [Vertex; 3] {
        self.0
    }

    /// The three edges bounding this cell
    pub fn edges(&self) -> [(Vertex, Vertex); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (a, c)]
    }
}

/// Board geometry for one side length. Carries no mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    side_length: u8,
}

impl Lattice {
    /// Geometry for `side_length` pegs per side, which must be in `4..=8`
    pub fn new(side_length: u8) -> Result<Self, TriggleError> {
        if !(MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length) {
            return Err(TriggleError::Config(format!(
                "side length must be between {} and {}, got {}",
                MIN_SIDE_LENGTH, MAX_SIDE_LENGTH, side_length
            )));
        }
        Ok(Self { side_length })
    }

    pub fn side_length(&self) -> u8 {
        self.side_length
    }

    /// Number of rows (`2n - 1`)
    pub fn rows(&self) -> i8 {
        2 * self.side_length as i8 - 1
    }

    /// Index of the widest row, where the halves meet
    pub fn equator(&self) -> i8 {
        self.side_length as i8 - 1
    }

    /// Pegs in `row`; zero for rows off the board
    pub fn width(&self, row: i8) -> i8 {
        let n = self.side_length as i8;
        if row < 0 || row >= self.rows() {
            0
        } else if row <= self.equator() {
            n + row
        } else {
            3 * n - 2 - row
        }
    }

    pub fn is_valid(&self, v: Vertex) -> bool {
        v.col >= 0 && v.col < self.width(v.row)
    }

    pub fn half(&self, v: Vertex) -> Half {
        if v.row < self.equator() {
            Half::Upper
        } else {
            Half::Lower
        }
    }

    /// Row/column delta for one step in `direction` from a vertex in `half`
    pub fn delta(half: Half, direction: Direction) -> (i8, i8) {
        match (half, direction) {
            (_, Direction::Forward) => (0, 1),
            (Half::Upper, Direction::DownLeft) => (1, 0),
            (Half::Upper, Direction::DownRight) => (1, 1),
            (Half::Lower, Direction::DownLeft) => (1, -1),
            (Half::Lower, Direction::DownRight) => (1, 0),
        }
    }

    /// Neighbour one step from `v`, or `None` if it falls off the board
    pub fn step(&self, v: Vertex, direction: Direction) -> Option<Vertex> {
        let next = v.offset(Self::delta(self.half(v), direction));
        self.is_valid(next).then_some(next)
    }

    /// `[up, down]` unit triangles anchored at `v`.
    ///
    /// The up triangle has `v` as its apex; the down triangle has `v` as its
    /// top-left corner. Corners may be off the board; callers filter them.
    pub fn unit_triangles(&self, v: Vertex) -> [[Vertex; 3]; 2] {
        let Vertex { row: r, col: c } = v;
        match self.half(v) {
            Half::Upper => [
                [v, Vertex::new(r + 1, c), Vertex::new(r + 1, c + 1)],
                [v, Vertex::new(r, c + 1), Vertex::new(r + 1, c + 1)],
            ],
            Half::Lower => [
                [v, Vertex::new(r + 1, c - 1), Vertex::new(r + 1, c)],
                [v, Vertex::new(r, c + 1), Vertex::new(r + 1, c)],
            ],
        }
    }

    /// All vertices in row-major order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.width(row)).map(move |col| Vertex::new(row, col)))
    }

    /// Total number of pegs
    pub fn peg_count(&self) -> u32 {
        (0..self.rows()).map(|row| self.width(row) as u32).sum()
    }

    /// Number of unit triangles on the board
    pub fn max_triangles(&self) -> u32 {
        let upper: u32 = (0..self.equator())
            .map(|step| 2 * self.width(step) as u32 - 1)
            .sum();
        upper * 2
    }

    /// Number of unit edges on the board.
    ///
    /// Counts connections per peg: corner pegs have 3, the other border pegs
    /// 4 and interior pegs 6; every edge is counted from both ends.
    pub fn max_sticks(&self) -> u32 {
        let n = self.side_length as u32;
        let corner_connections = 6 * 3;
        let side_connections = (n - 2) * 4 * 6;
        let center_connections = (self.peg_count() - 6 - (n - 2) * 6) * 6;
        (corner_connections + side_connections + center_connections) / 2
    }
}
