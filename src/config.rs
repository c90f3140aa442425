use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// The word type cells are packed into. Also the width of the xorshift state.
pub type Word = u64;

/// Number of bits in a [`Word`]
pub const WORD_BITS: usize = Word::BITS as usize;

/// Side length of the (square) board.
pub const BOARD_DIM: usize = 32;

/// Number of cells on the board
pub const BOARD_AREA: usize = BOARD_DIM * BOARD_DIM;

/// Number of [`Word`]s needed to hold every cell of the board
pub const BOARD_WORDS: usize = BOARD_AREA / WORD_BITS;

const _: () = {
    assert!(BOARD_DIM != 0, "invalid board dimensions");
    assert!(BOARD_AREA % WORD_BITS == 0, "invalid board dimensions");
    assert!(BOARD_WORDS != 0, "invalid board dimensions");

    // a glider needs a 3x3 footprint plus a spare row and column
    assert!(BOARD_DIM >= 4, "board too small for a glider");
};

pub const DEFAULT_SEED: Word = 12_937_171;

pub const ALIVE_CELL_CHAR: u8 = b'#';
pub const DEAD_CELL_CHAR: u8 = b'.';

/// Runtime settings. Nothing here is read from the command line, [`Config::default`] is what the
/// binary runs with.
#[derive(Clone, Copy)]
pub struct Config {
    /// Initial xorshift state
    pub seed: Word,

    /// Glyph used for a live cell
    pub alive: u8,

    /// Glyph used for a dead cell
    pub dead: u8,

    pub rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            alive: ALIVE_CELL_CHAR,
            dead: DEAD_CELL_CHAR,
            rules: B3S23,
        }
    }
}
