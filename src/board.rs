use std::fmt;

use crate::config::BOARD_AREA;
use crate::config::BOARD_DIM;
use crate::config::BOARD_WORDS;
use crate::config::WORD_BITS;
use crate::config::Word;

/// A `BOARD_DIM x BOARD_DIM` grid of cells, one bit per cell.
///
/// # Layout
/// Cells are packed row-major, low bit first:
/// ```notrust
/// index = x + y * BOARD_DIM
/// word  = index / WORD_BITS
/// bit   = index % WORD_BITS
/// ```
///
/// The origin `(0, 0)` is the top left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    words: [Word; BOARD_WORDS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub const fn new() -> Self {
        Self {
            words: [0; BOARD_WORDS],
        }
    }

    /// Create a board where exactly the given cells are alive
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();

        for (x, y) in cells {
            board.set(x, y, true);
        }

        board
    }

    /// Side length of the board
    pub const fn dim(&self) -> usize {
        BOARD_DIM
    }

    /// Whether the cell at `(x, y)` is alive.
    ///
    /// Both coordinates must be in `0..BOARD_DIM`. Callers wrap their coordinates first.
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (word, mask) = Self::locate(x, y);

        self.words[word] & mask != 0
    }

    /// Set the cell at `(x, y)`. Same range requirements as [`Board::get`].
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let (word, mask) = Self::locate(x, y);

        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.words = [0; BOARD_WORDS];
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Coordinates of every live cell, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_AREA)
            .map(|n| (n % BOARD_DIM, n / BOARD_DIM))
            .filter(|&(x, y)| self.get(x, y))
    }

    /// The packed representation
    pub fn words(&self) -> &[Word; BOARD_WORDS] {
        &self.words
    }

    fn locate(x: usize, y: usize) -> (usize, Word) {
        debug_assert!(x < BOARD_DIM, "x is out of bounds");
        debug_assert!(y < BOARD_DIM, "y is out of bounds");

        let index = x + y * BOARD_DIM;
        let mask: Word = 1 << (index % WORD_BITS);

        (index / WORD_BITS, mask)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("population", &self.population())
            .field("alive", &self.alive_cells().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert!(board.is_empty());
        assert_eq!(board.population(), 0);
        assert_eq!(board.dim(), BOARD_DIM);
        assert_eq!(board.alive_cells().count(), 0);
    }

    #[test]
    fn bit_order_is_low_to_high() {
        let mut board = Board::new();

        board.set(0, 0, true);
        assert_eq!(board.words()[0], 0b1);

        board.set(1, 0, true);
        assert_eq!(board.words()[0], 0b11);

        // second row starts BOARD_DIM bits in
        board.set(0, 1, true);
        let expected: Word = 0b11 | 1 << BOARD_DIM;
        assert_eq!(board.words()[BOARD_DIM / WORD_BITS], expected);

        // last cell is the top bit of the last word
        board.set(BOARD_DIM - 1, BOARD_DIM - 1, true);
        let expected: Word = 1 << (WORD_BITS - 1);
        assert_eq!(board.words()[BOARD_WORDS - 1], expected);
    }

    #[test]
    fn set_then_clear() {
        let mut board = Board::new();

        board.set(7, 19, true);
        assert!(board.get(7, 19));
        assert_eq!(board.population(), 1);

        board.set(7, 19, false);
        assert!(!board.get(7, 19));
        assert!(board.is_empty());
    }

    #[test]
    fn alive_cells_row_major() {
        let board = Board::from_cells([(5, 3), (1, 0), (0, 3)]);

        let cells: Vec<_> = board.alive_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 3), (5, 3)]);

        let mut board = board;
        board.clear();
        assert!(board.is_empty());
    }
}
