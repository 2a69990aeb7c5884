pub mod cell_state;
pub mod glyph_model;

pub use cell_state::{CellState, CellStates};
pub use glyph_model::{GlyphError, TimeGrid, GRID_COLS, GRID_ROWS};
