pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod grid;
pub mod hud;
pub mod tile;

// Re-exports for convenience in tests and integration users.
pub use config::GameConfig;
pub use dice::DiceRoll;
pub use error::{ConfigError, GameError};
pub use game::{Game, GameSnapshot, Notification, NotificationKind, Phase};
pub use hud::{CellState, CellView, cell_view, controls, format_dice, format_status, grid_rows, victory_banner};
pub use tile::TileId;
