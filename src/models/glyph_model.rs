// src/models/glyph_model.rs
//
// The 17×7 clock face: digit bitmaps and the HH:MM grid generator.
// Layout: d(0-2) gap(3) d(4-6) gap(7) colon(8) gap(9) d(10-12) gap(13) d(14-16)

use thiserror::Error;

pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 17;

pub const DIGIT_WIDTH: usize = 3;
pub const DIGIT_HEIGHT: usize = 7;

/// Start column of each of the four digits, left to right.
pub const DIGIT_COLUMNS: [usize; 4] = [0, 4, 10, 14];
pub const GAP_COLUMNS: [usize; 4] = [3, 7, 9, 13];
pub const COLON_COLUMN: usize = 8;
pub const COLON_ROWS: [usize; 2] = [2, 5];

pub type DigitPattern = [[u8; DIGIT_WIDTH]; DIGIT_HEIGHT];

// pattern[row][col]
#[rustfmt::skip]
pub const DIGITS: [DigitPattern; 10] = [
    [[1,1,1],[1,0,1],[1,0,1],[1,0,1],[1,0,1],[1,0,1],[1,1,1]], // 0
    [[0,1,0],[1,1,0],[0,1,0],[0,1,0],[0,1,0],[0,1,0],[1,1,1]], // 1
    [[1,1,1],[0,0,1],[0,0,1],[1,1,1],[1,0,0],[1,0,0],[1,1,1]], // 2
    [[1,1,1],[0,0,1],[0,0,1],[1,1,1],[0,0,1],[0,0,1],[1,1,1]], // 3
    [[1,0,1],[1,0,1],[1,0,1],[1,1,1],[0,0,1],[0,0,1],[0,0,1]], // 4
    [[1,1,1],[1,0,0],[1,0,0],[1,1,1],[0,0,1],[0,0,1],[1,1,1]], // 5
    [[1,1,1],[1,0,0],[1,0,0],[1,1,1],[1,0,1],[1,0,1],[1,1,1]], // 6
    [[1,1,1],[0,0,1],[0,0,1],[0,0,1],[0,0,1],[0,0,1],[0,0,1]], // 7
    [[1,1,1],[1,0,1],[1,0,1],[1,1,1],[1,0,1],[1,0,1],[1,1,1]], // 8
    [[1,1,1],[1,0,1],[1,0,1],[1,1,1],[0,0,1],[0,0,1],[1,1,1]], // 9
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("time {hour:02}:{minute:02} is outside 00:00-23:59")]
    OutOfRange { hour: u32, minute: u32 },
}

/// One on/off frame of the clock face, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    cells: [[u8; GRID_COLS]; GRID_ROWS],
}

impl TimeGrid {
    pub fn blank() -> Self {
        Self {
            cells: [[0; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Builds the grid showing `hour:minute`, zero-padded ("03:07").
    pub fn for_time(hour: u32, minute: u32) -> Result<Self, GlyphError> {
        if hour > 23 || minute > 59 {
            return Err(GlyphError::OutOfRange { hour, minute });
        }

        let digits = [hour / 10, hour % 10, minute / 10, minute % 10];
        let mut grid = Self::blank();
        for (start_col, digit) in DIGIT_COLUMNS.iter().zip(digits) {
            grid.draw_digit(*start_col, digit as usize);
        }
        grid.draw_colon(COLON_COLUMN);
        Ok(grid)
    }

    fn draw_digit(&mut self, start_col: usize, digit: usize) {
        let pattern = &DIGITS[digit];
        for (row, pattern_row) in pattern.iter().enumerate() {
            for (col, value) in pattern_row.iter().enumerate() {
                if *value == 1 {
                    self.cells[row][start_col + col] = 1;
                }
            }
        }
    }

    fn draw_colon(&mut self, col: usize) {
        for row in COLON_ROWS {
            self.cells[row][col] = 1;
        }
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == 1
    }

    /// The 3×7 block starting at `start_col`.
    pub fn digit_at(&self, start_col: usize) -> DigitPattern {
        let mut pattern = [[0; DIGIT_WIDTH]; DIGIT_HEIGHT];
        for (row, pattern_row) in pattern.iter_mut().enumerate() {
            for (col, value) in pattern_row.iter_mut().enumerate() {
                *value = self.cells[row][start_col + col];
            }
        }
        pattern
    }

    pub fn count_on(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|value| **value == 1)
            .count()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_and_colon_columns_for_every_time() {
        for hour in 0..24 {
            for minute in 0..60 {
                let grid = TimeGrid::for_time(hour, minute).unwrap();
                for col in GAP_COLUMNS {
                    for row in 0..GRID_ROWS {
                        assert!(!grid.is_on(row, col), "gap {} lit at {:02}:{:02}", col, hour, minute);
                    }
                }

                let colon: Vec<usize> = (0..GRID_ROWS)
                    .filter(|row| grid.is_on(*row, COLON_COLUMN))
                    .collect();
                assert_eq!(colon, COLON_ROWS.to_vec());
            }
        }
    }

    #[test]
    fn test_generation_is_pure() {
        let a = TimeGrid::for_time(12, 34).unwrap();
        let b = TimeGrid::for_time(12, 34).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nine_oh_five() {
        let grid = TimeGrid::for_time(9, 5).unwrap();
        assert_eq!(grid.digit_at(0), DIGITS[0]);
        assert_eq!(grid.digit_at(4), DIGITS[9]);
        assert_eq!(grid.digit_at(10), DIGITS[0]);
        assert_eq!(grid.digit_at(14), DIGITS[5]);
    }

    #[test]
    fn test_leading_zero_is_kept() {
        let grid = TimeGrid::for_time(3, 0).unwrap();
        assert_eq!(grid.digit_at(0), DIGITS[0]);
        assert_eq!(grid.digit_at(4), DIGITS[3]);
        // bottom-right corner of the trailing zero
        assert!(grid.is_on(GRID_ROWS - 1, GRID_COLS - 1));
    }

    #[test]
    fn test_digit_patterns_are_distinct() {
        for a in 0..DIGITS.len() {
            for b in (a + 1)..DIGITS.len() {
                assert_ne!(DIGITS[a], DIGITS[b], "digits {} and {} share a bitmap", a, b);
            }
        }
    }

    #[test]
    fn test_specific_minute_changes_differ() {
        let pairs = [((14, 59), (15, 0)), ((9, 5), (9, 6)), ((23, 59), (0, 0)), ((0, 1), (0, 7))];
        for ((h1, m1), (h2, m2)) in pairs {
            let a = TimeGrid::for_time(h1, m1).unwrap();
            let b = TimeGrid::for_time(h2, m2).unwrap();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            TimeGrid::for_time(24, 0),
            Err(GlyphError::OutOfRange { hour: 24, minute: 0 })
        );
        assert!(TimeGrid::for_time(0, 60).is_err());
        assert!(TimeGrid::for_time(23, 59).is_ok());
    }

    #[test]
    fn test_blank_grid_is_empty() {
        assert_eq!(TimeGrid::blank().count_on(), 0);
        // 08:08 plus the two colon dots
        let grid = TimeGrid::for_time(8, 8).unwrap();
        let eight = DIGITS[8].iter().flatten().filter(|v| **v == 1).count();
        let zero = DIGITS[0].iter().flatten().filter(|v| **v == 1).count();
        assert_eq!(grid.count_on(), 2 * zero + 2 * eight + 2);
    }
}
