//! Bit-packed row for fast stepping.
//! Each cell is stored as a single bit, so one `u64` word holds 64 cells
//! and a whole word is advanced with a handful of bitwise operations.
//!
//! For every word we build three masks:
//! - `left`: bit j = state of the cell to the left of cell j
//! - `center`: the word itself
//! - `right`: bit j = state of the cell to the right of cell j
//!
//! and OR together one minterm per live pattern of the rule table.

use super::{Cell, RuleTable};

/// Bit-packed ring of cells. Bits past `len` in the last word are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitRow {
    len: usize,
    words: Vec<u64>,
}

impl BitRow {
    /// Create a row of `len` dead cells
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: vec![0; len.div_ceil(64)],
        }
    }

    /// Pack a slice of cells
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut row = Self::new(cells.len());
        row.pack(cells);
        row
    }

    /// Overwrite every word from `cells` (same length)
    pub fn pack(&mut self, cells: &[Cell]) {
        debug_assert_eq!(self.len, cells.len());
        for (word, chunk) in self.words.iter_mut().zip(cells.chunks(64)) {
            *word = chunk
                .iter()
                .enumerate()
                .fold(0u64, |acc, (j, cell)| acc | (u64::from(cell.state()) << j));
        }
    }

    /// Unpack into `out` (same length)
    pub fn unpack_into(&self, out: &mut [Cell]) {
        debug_assert_eq!(self.len, out.len());
        for (slot, cell) in out.iter_mut().zip(self.iter()) {
            *slot = cell;
        }
    }

    #[cfg(test)]
    pub(crate) fn words_ptr(&self) -> *const u64 {
        self.words.as_ptr()
    }

    /// Unpack into a vector of cells
    pub fn to_cells(&self) -> Vec<Cell> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get cell state at `i`
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Set cell state at `i`
    #[inline]
    pub fn set(&mut self, i: usize, alive: bool) {
        if i >= self.len {
            return;
        }
        let bit = 1u64 << (i % 64);
        if alive {
            self.words[i / 64] |= bit;
        } else {
            self.words[i / 64] &= !bit;
        }
    }

    /// Count alive cells
    pub fn count_alive(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Memory used by the packed words
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Iterate over cells in order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len).map(|i| Cell::from(self.get(i)))
    }

    /// Number of meaningful bits in word `w`
    #[inline]
    fn valid_bits(&self, w: usize) -> usize {
        (self.len - w * 64).min(64)
    }

    /// Word whose bit j holds the left neighbor of cell `64 * w + j`
    #[inline]
    fn left_word(&self, w: usize) -> u64 {
        let base = w * 64;
        let carry = self.get((base + self.len - 1) % self.len) as u64;
        (self.words[w] << 1) | carry
    }

    /// Word whose bit j holds the right neighbor of cell `64 * w + j`
    #[inline]
    fn right_word(&self, w: usize) -> u64 {
        let base = w * 64;
        let valid = self.valid_bits(w);
        let carry = self.get((base + valid) % self.len) as u64;
        (self.words[w] >> 1) | (carry << (valid - 1))
    }

    /// Evolve one generation with wrap-around edges
    pub fn evolve(&self, table: &RuleTable) -> BitRow {
        let mut next = BitRow::new(self.len);
        self.evolve_into(table, &mut next);
        next
    }

    /// Write the next generation into `next` (same length)
    pub fn evolve_into(&self, table: &RuleTable, next: &mut BitRow) {
        debug_assert_eq!(self.len, next.len);
        for w in 0..self.words.len() {
            next.words[w] = compute_next_word(
                self.left_word(w),
                self.words[w],
                self.right_word(w),
                table,
            ) & valid_mask(self.valid_bits(w));
        }
    }
}

/// Mask keeping the low `valid` bits
#[inline]
fn valid_mask(valid: usize) -> u64 {
    if valid >= 64 { u64::MAX } else { (1u64 << valid) - 1 }
}

/// Apply the rule table to 64 cells at once.
/// Pattern k = 4*l + 2*c + r is selected by the minterm of its three bits.
#[inline]
pub fn compute_next_word(left: u64, center: u64, right: u64, table: &RuleTable) -> u64 {
    let pick = |word: u64, set: bool| if set { word } else { !word };
    table.live_patterns().fold(0u64, |acc, k| {
        acc | (pick(left, k & 4 != 0) & pick(center, k & 2 != 0) & pick(right, k & 1 != 0))
    })
}
