use std::collections::BTreeSet;
use std::fmt;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{GameConfig, MAX_SELECT_LIMIT, MIN_SELECT};
use crate::dice::DiceRoll;
use crate::error::GameError;
use crate::hud::{ROLL_MESSAGE, VICTORY_MESSAGE};
use crate::tile::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
	Selecting,
	Playing,
	Won,
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Phase::Selecting => "selecting",
			Phase::Playing => "playing",
			Phase::Won => "won",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
	CapacityWarning,
	SelectionIncomplete,
	DiceRolled,
	Victory,
	Rejected,
}

/// Message for the player; the renderer shows it for `display_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	pub kind: NotificationKind,
	pub text: String,
	pub display_secs: f32,
}

/// Read-only view of a game for renderers and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
	pub phase: Phase,
	pub max_select: usize,
	pub selected: Vec<TileId>,
	pub confirmed: Vec<TileId>,
	pub crossed: Vec<TileId>,
	pub dice: Option<DiceRoll>,
	pub remaining: usize,
	pub revision: u64,
}

/// The whole session: selection before the round, confirmed and crossed
/// tiles during it.
#[derive(Debug)]
pub struct Game {
	config: GameConfig,
	selected: BTreeSet<TileId>,
	confirmed: BTreeSet<TileId>,
	crossed: BTreeSet<TileId>,
	started: bool,
	max_select: usize,
	dice: Option<DiceRoll>,
	rng: StdRng,
	notifications: Vec<Notification>,
	revision: u64,
}

impl Default for Game {
	fn default() -> Self {
		Self::new(GameConfig::default())
	}
}

impl Game {
	pub fn new(config: GameConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		Self::with_rng(config, rng)
	}

	pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
		let max_select = config.default_max_select.clamp(MIN_SELECT, MAX_SELECT_LIMIT);
		Self {
			config,
			selected: BTreeSet::new(),
			confirmed: BTreeSet::new(),
			crossed: BTreeSet::new(),
			started: false,
			max_select,
			dice: None,
			rng,
			notifications: Vec::new(),
			revision: 0,
		}
	}

	pub fn phase(&self) -> Phase {
		if !self.started {
			Phase::Selecting
		} else if self.check_win() {
			Phase::Won
		} else {
			Phase::Playing
		}
	}

	pub fn is_started(&self) -> bool {
		self.started
	}

	pub fn max_select(&self) -> usize {
		self.max_select
	}

	pub fn selected(&self) -> &BTreeSet<TileId> {
		&self.selected
	}

	pub fn confirmed(&self) -> &BTreeSet<TileId> {
		&self.confirmed
	}

	pub fn crossed(&self) -> &BTreeSet<TileId> {
		&self.crossed
	}

	pub fn dice(&self) -> Option<DiceRoll> {
		self.dice
	}

	/// Bumped on every successful mutation.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn remaining(&self) -> usize {
		self.confirmed.len() - self.crossed.len()
	}

	pub fn check_win(&self) -> bool {
		self.started && !self.confirmed.is_empty() && self.crossed == self.confirmed
	}

	pub fn take_notifications(&mut self) -> Vec<Notification> {
		std::mem::take(&mut self.notifications)
	}

	pub fn toggle_select(&mut self, tile: TileId) -> Result<bool, GameError> {
		self.require_selecting("select tiles")?;
		if self.selected.remove(&tile) {
			debug!(%tile, "deselected");
			self.touch();
			return Ok(false);
		}
		if self.selected.len() >= self.max_select {
			return Err(self.reject(GameError::SelectionOverflow { max_select: self.max_select }));
		}
		self.selected.insert(tile);
		debug!(%tile, selected = self.selected.len(), "selected");
		self.touch();
		Ok(true)
	}

	/// Clamps to 1..=30. An existing larger selection is left alone.
	pub fn set_max_select(&mut self, n: usize) -> Result<usize, GameError> {
		self.require_selecting("change the tile count")?;
		let clamped = n.clamp(MIN_SELECT, MAX_SELECT_LIMIT);
		if clamped != self.max_select {
			self.max_select = clamped;
			debug!(max_select = clamped, "max select changed");
			self.touch();
		}
		Ok(clamped)
	}

	pub fn start_game(&mut self) -> Result<DiceRoll, GameError> {
		self.require_selecting("start a game")?;
		if self.selected.len() != self.max_select {
			return Err(self.reject(GameError::SelectionIncomplete {
				selected: self.selected.len(),
				required: self.max_select,
			}));
		}
		self.confirmed = std::mem::take(&mut self.selected);
		self.crossed.clear();
		self.started = true;
		info!(tiles = self.confirmed.len(), "round started");
		self.touch();
		self.roll_dice()
	}

	pub fn roll_dice(&mut self) -> Result<DiceRoll, GameError> {
		if !self.started {
			return Err(self.reject(GameError::WrongPhase {
				action: "roll the dice",
				phase: self.phase(),
			}));
		}
		let roll = DiceRoll::roll(&mut self.rng);
		self.dice = Some(roll);
		info!(first = roll.first, second = roll.second, sum = roll.sum(), "dice rolled");
		self.push(NotificationKind::DiceRolled, ROLL_MESSAGE.to_string(), self.config.roll_notice_secs);
		self.touch();
		Ok(roll)
	}

	/// Returns whether the tile is crossed afterwards.
	pub fn toggle_cross(&mut self, tile: TileId) -> Result<bool, GameError> {
		if !self.started {
			return Err(self.reject(GameError::WrongPhase {
				action: "cross out tiles",
				phase: self.phase(),
			}));
		}
		if !self.confirmed.contains(&tile) {
			return Err(self.reject(GameError::NotConfirmed(tile)));
		}
		let crossed = if self.crossed.remove(&tile) {
			false
		} else {
			self.crossed.insert(tile);
			true
		};
		debug!(%tile, crossed, remaining = self.remaining(), "cross toggled");
		self.touch();
		if crossed && self.check_win() {
			info!("round won");
			self.push(NotificationKind::Victory, VICTORY_MESSAGE.to_string(), self.config.warning_secs);
		}
		Ok(crossed)
	}

	/// Single click handler for a grid cell, whatever the phase.
	pub fn click(&mut self, tile: TileId) -> Result<bool, GameError> {
		if self.started {
			self.toggle_cross(tile)
		} else {
			self.toggle_select(tile)
		}
	}

	/// Back to tile selection. Only allowed once the round is won.
	pub fn reset(&mut self) -> Result<(), GameError> {
		if !self.check_win() {
			return Err(self.reject(GameError::NotWon));
		}
		self.selected.clear();
		self.confirmed.clear();
		self.crossed.clear();
		self.dice = None;
		self.started = false;
		info!("game reset");
		self.touch();
		Ok(())
	}

	pub fn snapshot(&self) -> GameSnapshot {
		GameSnapshot {
			phase: self.phase(),
			max_select: self.max_select,
			selected: self.selected.iter().copied().collect(),
			confirmed: self.confirmed.iter().copied().collect(),
			crossed: self.crossed.iter().copied().collect(),
			dice: self.dice,
			remaining: self.remaining(),
			revision: self.revision,
		}
	}

	fn require_selecting(&mut self, action: &'static str) -> Result<(), GameError> {
		if self.started {
			return Err(self.reject(GameError::WrongPhase { action, phase: self.phase() }));
		}
		Ok(())
	}

	// Queues a warning for the player and hands the error back.
	fn reject(&mut self, err: GameError) -> GameError {
		if err.is_user_correctable() {
			info!(error = %err, "selection rejected");
		} else {
			warn!(error = %err, "action rejected");
		}
		let kind = match err {
			GameError::SelectionOverflow { .. } => NotificationKind::CapacityWarning,
			GameError::SelectionIncomplete { .. } => NotificationKind::SelectionIncomplete,
			_ => NotificationKind::Rejected,
		};
		self.push(kind, err.to_string(), self.config.warning_secs);
		err
	}

	fn push(&mut self, kind: NotificationKind, text: String, display_secs: f32) {
		self.notifications.push(Notification { kind, text, display_secs });
	}

	fn touch(&mut self) {
		self.revision += 1;
	}
}
