use crate::board::Board;
use crate::config::BOARD_DIM;
use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::rng::XorShift;
use crate::rule_set::RuleSet;

/// Offsets of the cells of a glider heading south east, relative to its top left corner.
///
/// ```notrust
/// #..
/// .##
/// ##.
/// ```
pub const GLIDER: [(usize, usize); 5] = [(0, 0), (1, 1), (2, 1), (0, 2), (1, 2)];

/// Largest coordinate a glider can be placed at on either axis
pub const GLIDER_MAX: usize = BOARD_DIM - 4;

pub struct World {
    /// The current generation
    board: Board,

    /// Life rules
    rules: RuleSet,

    /// Source of bits for [`World::shuffle`]
    rng: XorShift,

    /// Number of calls to [`World::step`] so far
    generation: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl World {
    /// Create an empty world
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(),
            rules: config.rules,
            rng: XorShift::new(config.seed),
            generation: 0,
        }
    }

    /// Create a world starting from `board`
    pub fn with_board(config: &Config, board: Board) -> Self {
        Self {
            board,
            ..Self::new(config)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the world by one generation. The board wraps around on both axes.
    ///
    /// Every neighbor count is taken from the current board, and the results go to a separate
    /// buffer that replaces the board once all cells are computed.
    pub fn step(&mut self) {
        let mut buffer = Board::new();

        for y in 0..BOARD_DIM {
            for x in 0..BOARD_DIM {
                let neighbors = Self::neighbors(&self.board, x, y);
                let alive = self.board.get(x, y);

                buffer.set(x, y, self.rules.next_state(alive, neighbors));
            }
        }

        self.board = buffer;
        self.generation += 1;
    }

    /// Count the live neighbors of `(x, y)`, wrapping around the edges
    pub fn neighbors(board: &Board, x: usize, y: usize) -> u8 {
        let w = (x + BOARD_DIM - 1) % BOARD_DIM;
        let e = (x + 1) % BOARD_DIM;
        let n = (y + BOARD_DIM - 1) % BOARD_DIM;
        let s = (y + 1) % BOARD_DIM;

        [
            (w, n),
            (x, n),
            (e, n),
            (w, y),
            (e, y),
            (w, s),
            (x, s),
            (e, s),
        ]
        .into_iter()
        .filter(|&(x, y)| board.get(x, y))
        .count() as u8
    }

    /// Put a glider with its top left corner at `(x, y)`.
    ///
    /// The glider must fit without wrapping, with one spare row and column: both coordinates must
    /// be at most [`GLIDER_MAX`]. Otherwise the board is left untouched and an error is returned.
    pub fn put_glider(&mut self, x: usize, y: usize) -> Result<()> {
        if x > GLIDER_MAX || y > GLIDER_MAX {
            return Err(Error::GliderOutOfBounds { x, y });
        }

        for (dx, dy) in GLIDER {
            self.board.set(x + dx, y + dy, true);
        }

        Ok(())
    }

    /// Put a glider in the middle of the board
    pub fn put_glider_centered(&mut self) -> Result<()> {
        self.put_glider(BOARD_DIM / 2, BOARD_DIM / 2)
    }

    /// Give every cell a fresh random state, row by row
    pub fn shuffle(&mut self) {
        for y in 0..BOARD_DIM {
            for x in 0..BOARD_DIM {
                self.board.set(x, y, self.rng.next_bit());
            }
        }
    }
}
