use std::fmt;

use super::Cell;

/// An elementary automaton rule number (Wolfram code), 0..=255.
/// Stored as a `u8`, so every value is a valid rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Ruleset(pub u8);

impl Ruleset {
    /// Rule 30, the classic chaotic rule
    pub const DEFAULT: Ruleset = Ruleset(30);

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Next rule number, wrapping 255 -> 0
    pub const fn next(self) -> Self {
        Ruleset(self.0.wrapping_add(1))
    }

    /// Previous rule number, wrapping 0 -> 255
    pub const fn prev(self) -> Self {
        Ruleset(self.0.wrapping_sub(1))
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Ruleset {
    fn from(value: u8) -> Self {
        Ruleset(value)
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Neighborhood encoding: `4 * left + 2 * center + right`.
/// Maps the 8 possible (left, center, right) patterns onto 0..8.
#[inline]
pub const fn encode(left: Cell, center: Cell, right: Cell) -> usize {
    (left.state() as usize) << 2 | (center.state() as usize) << 1 | right.state() as usize
}

/// Lookup table from neighborhood encoding to next cell state.
/// Entry `k` holds bit `k` of the ruleset, so entry 7 (pattern 1,1,1)
/// comes from the most significant bit and entry 0 (pattern 0,0,0) from
/// the least significant one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleTable {
    ruleset: Ruleset,
    entries: [Cell; 8],
}

impl RuleTable {
    /// Decode a ruleset into its lookup table
    pub const fn decode(ruleset: Ruleset) -> Self {
        let mut entries = [Cell::Dead; 8];
        let mut k = 0;
        while k < 8 {
            entries[k] = Cell::from_bit((ruleset.0 >> k) & 1);
            k += 1;
        }
        Self { ruleset, entries }
    }

    /// The ruleset this table was decoded from
    pub const fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Next state for an already encoded neighborhood (0..8)
    #[inline]
    pub const fn lookup(&self, pattern: usize) -> Cell {
        self.entries[pattern & 7]
    }

    /// Next state for the given neighborhood
    #[inline]
    pub const fn next_state(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        self.entries[encode(left, center, right)]
    }

    /// Table as raw bits, index = neighborhood encoding
    pub fn bits(&self) -> [u8; 8] {
        self.entries.map(Cell::state)
    }

    /// Table in Wolfram's reading order: pattern 111 first, 000 last.
    /// This is the ruleset's binary representation, most significant bit first.
    pub fn msb_first(&self) -> [u8; 8] {
        let mut bits = self.bits();
        bits.reverse();
        bits
    }

    /// Patterns (0..8) that produce a live cell
    pub fn live_patterns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..8).filter(|&k| self.entries[k].is_alive())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::decode(Ruleset::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Alive as A, Dead as D};

    #[test]
    fn test_rule_30_table() {
        let table = RuleTable::decode(Ruleset(30));
        // 30 = 0b00011110
        assert_eq!(table.msb_first(), [0, 0, 0, 1, 1, 1, 1, 0]);
        assert_eq!(table.bits(), [0, 1, 1, 1, 1, 0, 0, 0]);
        assert_eq!(table.next_state(D, D, A), A);
        assert_eq!(table.next_state(A, D, D), A);
        assert_eq!(table.next_state(A, A, A), D);
    }

    #[test]
    fn test_rule_0_is_all_dead() {
        assert_eq!(RuleTable::decode(Ruleset(0)).bits(), [0; 8]);
    }

    #[test]
    fn test_rule_255_is_all_alive() {
        assert_eq!(RuleTable::decode(Ruleset(255)).bits(), [1; 8]);
    }

    #[test]
    fn test_every_table_matches_its_bits() {
        for r in 0..=255u8 {
            let table = RuleTable::decode(Ruleset(r));
            let rebuilt = table
                .bits()
                .iter()
                .enumerate()
                .fold(0u8, |acc, (k, &bit)| acc | (bit << k));
            assert_eq!(rebuilt, r);
        }
    }

    #[test]
    fn test_encode_is_bijection() {
        let mut seen = [false; 8];
        for l in [D, A] {
            for c in [D, A] {
                for r in [D, A] {
                    let k = encode(l, c, r);
                    assert!(k < 8);
                    assert!(!seen[k], "pattern {} produced twice", k);
                    seen[k] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(encode(A, A, A), 7);
        assert_eq!(encode(A, D, D), 4);
        assert_eq!(encode(D, D, A), 1);
    }

    #[test]
    fn test_next_state_rule_90_is_xor() {
        let table = RuleTable::decode(Ruleset(90));
        for l in [D, A] {
            for c in [D, A] {
                for r in [D, A] {
                    let expected = Cell::from_bit(l.state() ^ r.state());
                    assert_eq!(table.next_state(l, c, r), expected);
                }
            }
        }
    }

    #[test]
    fn test_decode_is_pure() {
        let first = RuleTable::decode(Ruleset(110));
        let second = RuleTable::decode(Ruleset(110));
        assert_eq!(first, second);
        assert_eq!(first.ruleset(), Ruleset(110));
    }

    #[test]
    fn test_ruleset_wraps() {
        assert_eq!(Ruleset(255).next(), Ruleset(0));
        assert_eq!(Ruleset(0).prev(), Ruleset(255));
        assert_eq!(Ruleset::default(), Ruleset(30));
    }

    #[test]
    fn test_live_patterns() {
        let table = RuleTable::decode(Ruleset(30));
        let live: Vec<_> = table.live_patterns().collect();
        assert_eq!(live, vec![1, 2, 3, 4]);
    }
}
