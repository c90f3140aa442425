/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    ///
    /// Big endian is used here (i.e. `b = 0b1` means b1, and `b = 0b1_0000_0000` means b8).
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given whether it is alive now and how many of its
    /// 8 neighbors are.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        debug_assert!(neighbors <= 8, "a cell has at most 8 neighbors");

        let bit = 1u16 << neighbors;

        if alive {
            self.survivals() & bit != 0
        } else {
            self.births() & bit != 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rules() {
        let rules = B3S23;

        for n in 0..=8 {
            assert_eq!(rules.next_state(false, n), n == 3, "dead cell, {n} neighbors");
            assert_eq!(
                rules.next_state(true, n),
                n == 2 || n == 3,
                "live cell, {n} neighbors"
            );
        }
    }

    #[test]
    fn extra_bits_ignored() {
        let rules = RuleSet::new(u16::MAX, u16::MAX);

        assert_eq!(rules.births(), 0x1FF);
        assert_eq!(rules.survivals(), 0x1FF);
        assert!(rules.next_state(false, 0));
        assert!(rules.next_state(true, 8));
    }

    #[test]
    fn empty_rules_kill_everything() {
        let rules = RuleSet::new(0, 0);

        for n in 0..=8 {
            assert!(!rules.next_state(false, n));
            assert!(!rules.next_state(true, n));
        }
    }
}
