use crate::tile::{MAX_NUMBER, MIN_NUMBER, ROWS, TileId};

/// Number of columns, one per possible two-dice sum.
pub const COLUMNS: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

pub fn column_headers() -> impl Iterator<Item = u8> {
    MIN_NUMBER..=MAX_NUMBER
}

pub fn row_tiles(row: u8) -> impl Iterator<Item = TileId> {
    column_headers().map(move |number| TileId { number, row })
}

/// Every cell, row by row, left to right.
pub fn iter_tiles() -> impl Iterator<Item = TileId> {
    (0..ROWS).flat_map(row_tiles)
}
