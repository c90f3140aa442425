use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Glider at ({x}, {y}) does not fit on the board")]
    GliderOutOfBounds { x: usize, y: usize },

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
