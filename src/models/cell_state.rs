// src/models/cell_state.rs
//
// Per-cube render state. Owned by the host, overwritten by the animator every frame.

use crate::effects::CubeVisual;
use crate::models::glyph_model::{GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    pub active: bool,
    pub progress: f32,
    pub visual: CubeVisual,
}

impl CellState {
    pub fn resting() -> Self {
        Self {
            active: false,
            progress: 0.0,
            visual: CubeVisual::resting(),
        }
    }

    pub fn active(progress: f32, visual: CubeVisual) -> Self {
        Self {
            active: true,
            progress,
            visual,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::resting()
    }
}

#[derive(Debug, Clone)]
pub struct CellStates {
    cells: [[CellState; GRID_COLS]; GRID_ROWS],
}

impl CellStates {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::resting(); GRID_COLS]; GRID_ROWS],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &CellState {
        &self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Iterates `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &CellState)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, state)| (row, col, state))
        })
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, _, state)| state.active).count()
    }
}

impl Default for CellStates {
    fn default() -> Self {
        Self::new()
    }
}
