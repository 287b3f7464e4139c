use serde::{Deserialize, Serialize};

use crate::game::{Game, Phase};
use crate::grid;
use crate::tile::TileId;

pub const TITLE: &str = "Dice Sum Crossing";
pub const INSTRUCTIONS: [&str; 5] = [
	"Pick `n` tiles from the numbers 2 to 12.",
	"Your picks are locked in once the game starts.",
	"Roll two dice and click a tile matching the sum to mark it with a red X.",
	"Mark every tile with an X to win!",
	"Clicked the wrong tile? Click it again to undo.",
];
pub const MAX_SELECT_LABEL: &str = "Tiles to pick (n)";
pub const START_LABEL: &str = "Start game!";
pub const ROLL_LABEL: &str = "Roll dice";
pub const RESET_LABEL: &str = "Play again";
pub const ROLL_MESSAGE: &str =
	"Cross out a blue tile matching the sum of the two dice! Lost? Time to rethink your strategy.";
pub const VICTORY_MESSAGE: &str = "All tiles crossed out. You win!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
	Unselected,
	Selected,
	Uncrossed,
	Crossed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
	pub tile: TileId,
	pub state: CellState,
	pub label: String,
}

/// `None` when the cell is hidden: during a round only confirmed tiles show.
pub fn cell_view(game: &Game, tile: TileId) -> Option<CellView> {
	if game.is_started() {
		if !game.confirmed().contains(&tile) {
			return None;
		}
		let (state, label) = if game.crossed().contains(&tile) {
			(CellState::Crossed, "X")
		} else {
			(CellState::Uncrossed, " ")
		};
		return Some(CellView { tile, state, label: label.to_string() });
	}
	let state = if game.selected().contains(&tile) {
		CellState::Selected
	} else {
		CellState::Unselected
	};
	Some(CellView { tile, state, label: tile.number.to_string() })
}

pub fn grid_rows(game: &Game) -> Vec<Vec<Option<CellView>>> {
	(0..crate::tile::ROWS)
		.map(|row| grid::row_tiles(row).map(|t| cell_view(game, t)).collect())
		.collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
	pub slider_enabled: bool,
	pub show_start: bool,
	pub show_roll: bool,
	pub show_reset: bool,
}

pub fn controls(game: &Game) -> Controls {
	let phase = game.phase();
	Controls {
		slider_enabled: phase == Phase::Selecting,
		show_start: phase == Phase::Selecting,
		show_roll: phase == Phase::Playing,
		show_reset: game.check_win(),
	}
}

/// Stays up for as long as the round is won.
pub fn victory_banner(game: &Game) -> Option<&'static str> {
	game.check_win().then_some(VICTORY_MESSAGE)
}

pub fn format_status(game: &Game) -> String {
	match game.phase() {
		Phase::Selecting => format!("Selected: {}/{}", game.selected().len(), game.max_select()),
		Phase::Playing | Phase::Won => format!("Remaining tiles: {}", game.remaining()),
	}
}

pub fn format_dice(game: &Game) -> Option<String> {
	game.dice().map(|d| format!("Dice: {} + {} = {}", d.first, d.second, d.sum()))
}
