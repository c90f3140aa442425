use crate::config::DEFAULT_SEED;
use crate::config::Word;

/// Xorshift pseudo random bit source.
///
/// The state is a single [`Word`]. Two generators built from the same seed produce the same
/// sequence forever; there is no way to reseed one.
///
/// See: https://en.wikipedia.org/wiki/Xorshift
#[derive(Clone, Debug)]
pub struct XorShift {
    state: Word,
}

impl Default for XorShift {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl XorShift {
    pub fn new(seed: Word) -> Self {
        // xorshift maps 0 to 0, which would make every draw false
        let state = if seed == 0 { DEFAULT_SEED } else { seed };

        Self { state }
    }

    /// Advance the state and return it
    pub fn next_word(&mut self) -> Word {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;

        self.state
    }

    /// Advance the state and return its lowest bit
    pub fn next_bit(&mut self) -> bool {
        self.next_word() & 0b1 == 0b1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_draw() {
        let mut rng = XorShift::new(1);

        // 1 ^ (1 << 13) = 0x2001, then ^ (0x2001 >> 17) = 0x2001, then ^ (0x2001 << 5)
        assert_eq!(rng.next_word(), 0x2001 ^ (0x2001 << 5));
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut zero = XorShift::new(0);
        let mut default = XorShift::default();

        for _ in 0..100 {
            assert_eq!(zero.next_word(), default.next_word());
        }
    }

    #[test]
    fn bits_are_mixed() {
        let mut rng = XorShift::default();
        let ones = (0..1_000).filter(|_| rng.next_bit()).count();

        assert!((300..700).contains(&ones), "{ones} ones out of 1000");
    }
}
