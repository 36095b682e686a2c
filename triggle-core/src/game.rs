//! Game state, move validation and move application

use crate::edges::EdgeSet;
use crate::error::{Result, TriggleError};
use crate::lattice::{Direction, Lattice, TriangleKey, Vertex};
use crate::movegen;
use crate::triangles::TriangleLedger;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = TriggleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            other => Err(TriggleError::Config(format!("player must be X or O, got '{}'", other))),
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

/// Why a game ended, in the order the conditions are checked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every triangle has an owner
    BoardFull,
    /// One player holds more than half of all triangles
    Majority(Player),
    /// Every unit edge is drawn
    SticksExhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::BoardFull => write!(f, "all triangles are captured"),
            Termination::Majority(player) => write!(f, "player {} has won by majority", player),
            Termination::SticksExhausted => write!(f, "all sticks are placed"),
        }
    }
}

/// A stick: three unit edges drawn from `start` in `direction`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Vertex,
    pub direction: Direction,
}

impl Move {
    pub const fn new(start: Vertex, direction: Direction) -> Self {
        Self { start, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.direction)
    }
}

/// What `play` changed, so `unplay` can revert exactly that
#[derive(Debug)]
pub(crate) struct Played {
    added: [Option<(Vertex, Vertex)>; 3],
    captured: Vec<TriangleKey>,
    mover: Player,
}

impl Played {
    pub(crate) fn captured(&self) -> usize {
        self.captured.len()
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Full state of one game
#[derive(Clone, Debug)]
pub struct GameState {
    lattice: Lattice,
    edges: EdgeSet,
    triangles: TriangleLedger,
    current_player: Player,
    max_triangles: u32,
    max_sticks: u32,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty board with `side_length` pegs per side (4 to 8)
    pub fn new(side_length: u8, first_player: Player) -> Result<Self> {
        let lattice = Lattice::new(side_length)?;
        Ok(Self {
            max_triangles: lattice.max_triangles(),
            max_sticks: lattice.max_sticks(),
            lattice,
            edges: EdgeSet::new(),
            triangles: TriangleLedger::new(),
            current_player: first_player,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn side_length(&self) -> u8 {
        self.lattice.side_length()
    }

    /// Pegs in `row`
    pub fn width(&self, row: i8) -> i8 {
        self.lattice.width(row)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn edge_exists(&self, a: Vertex, b: Vertex) -> bool {
        self.edges.contains(a, b)
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn triangle_owner(&self, key: &TriangleKey) -> Option<Player> {
        self.triangles.owner(key)
    }

    pub fn triangles(&self) -> &TriangleLedger {
        &self.triangles
    }

    /// Triangles captured by `player`
    pub fn score(&self, player: Player) -> u32 {
        self.triangles.captured(player)
    }

    /// `(X, O)` scores
    pub fn scores(&self) -> (u32, u32) {
        (self.score(Player::X), self.score(Player::O))
    }

    pub fn max_triangles(&self) -> u32 {
        self.max_triangles
    }

    pub fn max_sticks(&self) -> u32 {
        self.max_sticks
    }

    /// Every move `validate_move` accepts, in generation order
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    // ========================================================================
    // MOVE VALIDATION
    // ========================================================================

    /// Check a move and return the four pegs it passes through.
    ///
    /// The direction delta is re-derived at every peg, since a stick may
    /// cross the equator. Overlapping existing edges is allowed as long as
    /// at least one of the three is new.
    pub fn validate_move(&self, mv: Move) -> Result<[Vertex; 4]> {
        if !self.lattice.is_valid(mv.start) {
            return Err(TriggleError::OutOfBounds {
                step: 0,
                vertex: mv.start,
            });
        }

        let mut path = [mv.start; 4];
        for step in 1..path.len() {
            let current = path[step - 1];
            let next = current.offset(Lattice::delta(self.lattice.half(current), mv.direction));
            if !self.lattice.is_valid(next) {
                return Err(TriggleError::OutOfBounds { step, vertex: next });
            }
            path[step] = next;
        }

        if path.windows(2).all(|w| self.edges.contains(w[0], w[1])) {
            return Err(TriggleError::AlreadyFullyPlaced);
        }

        Ok(path)
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Draw a stick for the current player and pass the turn.
    ///
    /// Returns how many triangles the move captured. A rejected move leaves
    /// the state untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<u32> {
        let played = self.play(mv)?;
        Ok(played.captured() as u32)
    }

    /// Copy of this state with `mv` applied
    pub fn with_move(&self, mv: Move) -> Result<Self> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    pub(crate) fn play(&mut self, mv: Move) -> Result<Played> {
        let path = self.validate_move(mv)?;
        let mover = self.current_player;

        let mut added = [None; 3];
        for (slot, w) in added.iter_mut().zip(path.windows(2)) {
            if self.edges.add(w[0], w[1]) {
                *slot = Some((w[0], w[1]));
            }
        }

        let captured = self.triangles.capture_scan(&self.lattice, &self.edges, mover);
        self.current_player = mover.opponent();

        Ok(Played { added, captured, mover })
    }

    /// Revert a `play`. Must be called in reverse order of the plays.
    pub(crate) fn unplay(&mut self, played: Played) {
        for key in &played.captured {
            self.triangles.release(key);
        }
        for (a, b) in played.added.into_iter().flatten() {
            self.edges.remove(a, b);
        }
        self.current_player = played.mover;
    }

    // ========================================================================
    // TERMINATION
    // ========================================================================

    /// First satisfied end condition, if any
    pub fn termination(&self) -> Option<Termination> {
        let x = self.score(Player::X);
        let o = self.score(Player::O);
        let half = self.max_triangles / 2;

        if x + o == self.max_triangles {
            Some(Termination::BoardFull)
        } else if x > half {
            Some(Termination::Majority(Player::X))
        } else if o > half {
            Some(Termination::Majority(Player::O))
        } else if self.edges.len() as u32 == self.max_sticks {
            Some(Termination::SticksExhausted)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    pub fn result(&self) -> GameResult {
        match self.termination() {
            None => GameResult::Ongoing,
            Some(Termination::Majority(Player::X)) => GameResult::XWins,
            Some(Termination::Majority(Player::O)) => GameResult::OWins,
            Some(Termination::BoardFull | Termination::SticksExhausted) => {
                let (x, o) = self.scores();
                match x.cmp(&o) {
                    std::cmp::Ordering::Greater => GameResult::XWins,
                    std::cmp::Ordering::Less => GameResult::OWins,
                    std::cmp::Ordering::Equal => GameResult::Draw,
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
