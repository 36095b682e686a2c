//! GameConfig - table setup loaded from JSON

use crate::ai::DEFAULT_DEPTH;
use crate::error::{Result, TriggleError};
use crate::game::{GameState, Player};
use crate::lattice::{Lattice, MIN_SIDE_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest search the CLI will accept; each extra ply multiplies the work by
/// the move count
pub const MAX_DEPTH: u32 = 6;

/// Settings for starting a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pegs per side of the hexagon (4 to 8)
    pub side_length: u8,
    pub first_player: Player,
    /// Search depth for the engine
    pub depth: u32,
    /// Seat taken by the engine, if any
    pub ai_player: Option<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side_length: MIN_SIDE_LENGTH,
            first_player: Player::X,
            depth: DEFAULT_DEPTH,
            ai_player: None,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        Lattice::new(self.side_length)?;
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(TriggleError::Config(format!(
                "depth must be between 1 and {}, got {}",
                MAX_DEPTH, self.depth
            )));
        }
        Ok(())
    }

    /// Fresh game for these settings
    pub fn new_game(&self) -> Result<GameState> {
        self.validate()?;
        GameState::new(self.side_length, self.first_player)
    }
}
