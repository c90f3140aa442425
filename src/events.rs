/// A command typed by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Randomize every cell
    Shuffle,

    /// Put a glider in the middle of the board
    Glider,

    /// Advance the world by one generation
    Step,

    /// Exit the application
    Quit,
}

impl Event {
    /// Decode one byte of input. `None` means nothing could be read.
    ///
    /// Anything that isn't a known command, including a failed read, advances the world.
    pub fn from_byte(byte: Option<u8>) -> Self {
        match byte {
            Some(b'r') => Event::Shuffle,
            Some(b'g') => Event::Glider,
            Some(b'q') => Event::Quit,
            _ => Event::Step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table() {
        assert_eq!(Event::from_byte(Some(b'r')), Event::Shuffle);
        assert_eq!(Event::from_byte(Some(b'g')), Event::Glider);
        assert_eq!(Event::from_byte(Some(b'q')), Event::Quit);

        assert_eq!(Event::from_byte(None), Event::Step);
        assert_eq!(Event::from_byte(Some(b'\n')), Event::Step);
        assert_eq!(Event::from_byte(Some(b' ')), Event::Step);
        assert_eq!(Event::from_byte(Some(b'R')), Event::Step);
        assert_eq!(Event::from_byte(Some(0)), Event::Step);
    }
}
