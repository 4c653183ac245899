//! Attempt grid
//!
//! The board is a fixed grid of cells, one row per attempt and one column
//! per letter of the secret word. It is created once per session, mutated
//! in place, and replaced wholesale on replay.

use super::LetterStatus;

/// One cell of the attempt grid
///
/// `letter` is set and cleared while the player edits the row; `status` is
/// written exactly once, when the row is submitted, and never changes
/// afterwards. `None` in either field means empty/unrevealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub status: Option<LetterStatus>,
}

/// The grid of attempts
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create an empty board with `rows` attempts of `cols` letters each
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "board needs at least one attempt row");
        assert!(cols > 0, "board needs at least one letter column");

        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Number of attempt rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of letter columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Read a cell
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn cell(&self, attempt: usize, position: usize) -> Cell {
        self.cells[self.index(attempt, position)]
    }

    /// Write a letter into a cell
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set_letter(&mut self, attempt: usize, position: usize, letter: u8) {
        let idx = self.index(attempt, position);
        self.cells[idx].letter = Some(letter);
    }

    /// Clear a cell's letter
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn clear_letter(&mut self, attempt: usize, position: usize) {
        let idx = self.index(attempt, position);
        self.cells[idx].letter = None;
    }

    /// Apply the evaluated statuses to a whole row
    ///
    /// Each cell's status is written exactly once per session; re-submitting
    /// a row is a controller bug.
    ///
    /// # Panics
    /// Panics if `statuses.len() != self.cols()` or if any cell in the row
    /// already has a status.
    pub fn apply_statuses(&mut self, attempt: usize, statuses: &[LetterStatus]) {
        assert_eq!(statuses.len(), self.cols, "status row width mismatch");

        for (position, &status) in statuses.iter().enumerate() {
            let idx = self.index(attempt, position);
            assert!(
                self.cells[idx].status.is_none(),
                "cell ({attempt}, {position}) already revealed"
            );
            self.cells[idx].status = Some(status);
        }
    }

    /// Collect the letters of a row, in order, skipping empty cells
    #[must_use]
    pub fn row_letters(&self, attempt: usize) -> Vec<u8> {
        (0..self.cols)
            .filter_map(|position| self.cell(attempt, position).letter)
            .collect()
    }

    #[inline]
    fn index(&self, attempt: usize, position: usize) -> usize {
        assert!(attempt < self.rows, "attempt {attempt} out of bounds");
        assert!(position < self.cols, "position {position} out of bounds");
        attempt * self.cols + position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 5);

        for attempt in 0..6 {
            for position in 0..5 {
                assert_eq!(board.cell(attempt, position), Cell::default());
            }
        }
    }

    #[test]
    fn set_and_clear_letter() {
        let mut board = Board::new(6, 5);

        board.set_letter(0, 0, b'A');
        assert_eq!(board.cell(0, 0).letter, Some(b'A'));
        assert_eq!(board.cell(0, 0).status, None);

        board.clear_letter(0, 0);
        assert_eq!(board.cell(0, 0).letter, None);
    }

    #[test]
    fn apply_statuses_fills_row() {
        use LetterStatus::{Absent, Correct, Present};

        let mut board = Board::new(6, 3);
        board.apply_statuses(1, &[Correct, Present, Absent]);

        assert_eq!(board.cell(1, 0).status, Some(Correct));
        assert_eq!(board.cell(1, 1).status, Some(Present));
        assert_eq!(board.cell(1, 2).status, Some(Absent));
        // Other rows untouched
        assert_eq!(board.cell(0, 0).status, None);
    }

    #[test]
    #[should_panic(expected = "already revealed")]
    fn apply_statuses_twice_panics() {
        let mut board = Board::new(6, 2);
        board.apply_statuses(0, &[LetterStatus::Absent, LetterStatus::Absent]);
        board.apply_statuses(0, &[LetterStatus::Absent, LetterStatus::Absent]);
    }

    #[test]
    fn row_letters_skips_empty() {
        let mut board = Board::new(6, 5);
        board.set_letter(0, 0, b'H');
        board.set_letter(0, 1, b'I');

        assert_eq!(board.row_letters(0), vec![b'H', b'I']);
        assert_eq!(board.row_letters(1), Vec::<u8>::new());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn cell_out_of_bounds_panics() {
        let board = Board::new(6, 5);
        let _ = board.cell(6, 0);
    }
}
