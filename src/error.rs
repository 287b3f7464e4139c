use thiserror::Error;

use crate::game::Phase;
use crate::tile::TileId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
	#[error("You cannot select more than {max_select} tiles.")]
	SelectionOverflow { max_select: usize },
	#[error("Select all {required} tiles before starting ({selected} selected).")]
	SelectionIncomplete { selected: usize, required: usize },
	#[error("Cannot {action} during the {phase} phase")]
	WrongPhase { action: &'static str, phase: Phase },
	#[error("Tile {0} is not part of this round")]
	NotConfirmed(TileId),
	#[error("The round is not won yet")]
	NotWon,
	#[error("No tile at number {number}, row {row}")]
	InvalidTile { number: u8, row: u8 },
}

impl GameError {
	/// Errors the player can fix by changing their selection.
	pub fn is_user_correctable(&self) -> bool {
		matches!(self, GameError::SelectionOverflow { .. } | GameError::SelectionIncomplete { .. })
	}
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Cannot read config {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("Invalid config JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Invalid value for {field}: {reason}")]
	OutOfRange { field: &'static str, reason: String },
}
