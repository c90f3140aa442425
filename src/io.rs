use std::io;
use std::io::Read;

use tracing::debug;
use tracing::trace;

use crate::events::Event;

/// Block until one byte is read from `input`.
///
/// Returns `None` if the read fails or doesn't yield exactly one byte. End of input counts as a
/// failed read.
pub fn read_byte<R: Read>(input: &mut R) -> Option<u8> {
    let mut buf = [0u8; 1];

    match input.read(&mut buf) {
        Ok(1) => Some(buf[0]),
        Ok(n) => {
            trace!("short read of {n} bytes");
            None
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            trace!("read interrupted");
            None
        }
        Err(e) => {
            debug!("failed to read input: {e}");
            None
        }
    }
}

/// Read the next command from `input`
pub fn read_event<R: Read>(input: &mut R) -> Event {
    let event = Event::from_byte(read_byte(input));
    trace!(?event, "read event");

    event
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn reads_one_byte_at_a_time() {
        let mut input = Cursor::new(b"rg".to_vec());

        assert_eq!(read_byte(&mut input), Some(b'r'));
        assert_eq!(read_byte(&mut input), Some(b'g'));
        assert_eq!(read_byte(&mut input), None);
    }

    #[test]
    fn failures_become_steps() {
        assert_eq!(read_event(&mut Broken), Event::Step);
        assert_eq!(read_event(&mut io::empty()), Event::Step);
    }

    #[test]
    fn commands() {
        let mut input = Cursor::new(b"rgq.".to_vec());

        assert_eq!(read_event(&mut input), Event::Shuffle);
        assert_eq!(read_event(&mut input), Event::Glider);
        assert_eq!(read_event(&mut input), Event::Quit);
        assert_eq!(read_event(&mut input), Event::Step);
    }
}
