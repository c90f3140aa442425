use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::terminal;

use crate::board::Board;
use crate::config::BOARD_AREA;
use crate::config::BOARD_DIM;
use crate::config::Config;

/// Shown under the board on every frame
pub const COMMANDS_INFO: &str = "\
r : shuffle board randomly
g : put glider at the center of the screen
q : quit
_ : step simulation
";

/// Assembles whole frames and writes each of them with a single call.
pub struct Renderer {
    /// The frame buffer. Reused from one frame to the next.
    fb: Vec<u8>,

    alive: u8,
    dead: u8,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        // The prelude is a handful of escape codes; 32 bytes is plenty. Each row of the board
        // takes `BOARD_DIM` glyphs plus a newline.
        let fb = Vec::with_capacity(32 + BOARD_AREA + BOARD_DIM + COMMANDS_INFO.len());

        Self {
            fb,
            alive: config.alive,
            dead: config.dead,
        }
    }

    /// Build the frame for `board`: the terminal prelude, the grid, then the list of commands.
    ///
    /// The prelude moves the cursor to the top left corner, clears the screen and hides the
    /// cursor.
    pub fn frame(&mut self, board: &Board) -> io::Result<&[u8]> {
        self.fb.clear();

        queue!(
            self.fb,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        write_grid(board, self.alive, self.dead, &mut self.fb);
        self.fb.extend_from_slice(COMMANDS_INFO.as_bytes());

        Ok(&self.fb)
    }

    /// Draw `board` to `out`. The frame goes out in one write so a partial frame is never shown.
    pub fn present<W: Write>(&mut self, board: &Board, out: &mut W) -> io::Result<()> {
        let frame = self.frame(board)?;

        out.write_all(frame)?;
        out.flush()
    }

    /// Give the terminal its cursor back
    pub fn restore<W: Write>(&self, out: &mut W) -> io::Result<()> {
        execute!(out, cursor::Show)
    }
}

/// Append one glyph per cell to `buf`, a row per line
pub fn write_grid(board: &Board, alive: u8, dead: u8, buf: &mut Vec<u8>) {
    for y in 0..BOARD_DIM {
        for x in 0..BOARD_DIM {
            buf.push(if board.get(x, y) { alive } else { dead });
        }

        buf.push(b'\n');
    }
}

/// The grid section of a frame on its own
pub fn grid_string(board: &Board, config: &Config) -> String {
    let mut buf = Vec::with_capacity(BOARD_AREA + BOARD_DIM);
    write_grid(board, config.alive, config.dead, &mut buf);

    String::from_utf8_lossy(&buf).into_owned()
}
