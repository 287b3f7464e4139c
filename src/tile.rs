use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const MIN_NUMBER: u8 = 2;
pub const MAX_NUMBER: u8 = 12;
/// Duplicate tiles per number, so the same sum can be crossed out repeatedly.
pub const ROWS: u8 = 10;

/// One grid cell: a two-dice sum plus the row it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId {
	pub number: u8,
	pub row: u8,
}

impl TileId {
	pub fn new(number: u8, row: u8) -> Result<Self, GameError> {
		if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) || row >= ROWS {
			return Err(GameError::InvalidTile { number, row });
		}
		Ok(Self { number, row })
	}
}

impl fmt::Display for TileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}#{}", self.number, self.row)
	}
}
