use super::{BitRow, Cell, RuleTable, encode};
use rayon::prelude::*;

/// Compute the next state of cell `i` treating `current` as a ring.
/// With fewer than 3 cells the neighbors may be the cell itself.
#[inline]
fn next_cell(current: &[Cell], i: usize, table: &RuleTable) -> Cell {
    let n = current.len();
    let left = current[(i + n - 1) % n];
    let right = current[(i + 1) % n];
    table.lookup(encode(left, current[i], right))
}

/// Write the generation following `current` into `next`.
/// `next` must have the same length; it is fully overwritten.
pub fn step_into(current: &[Cell], table: &RuleTable, next: &mut [Cell]) {
    debug_assert_eq!(current.len(), next.len());
    let n = current.len();
    if n == 0 {
        return;
    }

    // Wrap-around edges
    next[0] = next_cell(current, 0, table);
    if n > 1 {
        next[n - 1] = next_cell(current, n - 1, table);
    }

    // Interior cells never wrap
    for i in 1..n.saturating_sub(1) {
        next[i] = table.lookup(encode(current[i - 1], current[i], current[i + 1]));
    }
}

/// Parallel version of [`step_into`] using rayon, for very wide rows
pub fn step_into_parallel(current: &[Cell], table: &RuleTable, next: &mut [Cell]) {
    debug_assert_eq!(current.len(), next.len());
    next.par_iter_mut()
        .enumerate()
        .with_min_len(4096)
        .for_each(|(i, cell)| *cell = next_cell(current, i, table));
}

/// Pure stepping - returns the next generation as a new vector
pub fn step(current: &[Cell], table: &RuleTable) -> Vec<Cell> {
    let mut next = vec![Cell::Dead; current.len()];
    step_into(current, table, &mut next);
    next
}

/// Row of cells with a ping-pong buffer for stepping.
/// `current` is the visible generation; `scratch` receives the next one
/// and the two are swapped, so stepping never allocates.
#[derive(Clone, Debug)]
pub struct Row {
    current: Vec<Cell>,
    scratch: Vec<Cell>,
    packed: Option<Packed>,
}

/// Bit-packed ping-pong pair, allocated on the first packed step
#[derive(Clone, Debug)]
struct Packed {
    current: BitRow,
    next: BitRow,
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Row {
    /// Create a row of `len` dead cells
    pub fn new(len: usize) -> Self {
        Self {
            current: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
            packed: None,
        }
    }

    /// Create a row from existing cells
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let scratch = vec![Cell::Dead; cells.len()];
        Self { current: cells, scratch, packed: None }
    }

    /// Create a row from 0/1 values
    pub fn from_bits(bits: &[u8]) -> Self {
        Self::from_cells(bits.iter().map(|&b| Cell::from_bit(b)).collect())
    }

    /// Row with a single live cell at the center (`len / 2`)
    pub fn single_center(len: usize) -> Self {
        let mut row = Self::new(len);
        row.set(len / 2, Cell::Alive);
        row
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current generation
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// Current generation as 0/1 values
    pub fn bits(&self) -> Vec<u8> {
        self.current.iter().map(|c| c.state()).collect()
    }

    /// Get cell at index (None when out of range)
    pub fn get(&self, i: usize) -> Option<Cell> {
        self.current.get(i).copied()
    }

    /// Set cell at index (ignored when out of range)
    pub fn set(&mut self, i: usize, cell: Cell) {
        if let Some(slot) = self.current.get_mut(i) {
            *slot = cell;
        }
    }

    /// Count live cells
    pub fn count_alive(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }

    /// Advance one generation in place (serial)
    pub fn advance(&mut self, table: &RuleTable) {
        step_into(&self.current, table, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Advance one generation in place (parallel)
    pub fn advance_parallel(&mut self, table: &RuleTable) {
        step_into_parallel(&self.current, table, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Pure functional evolution - returns the next generation as a new row
    pub fn evolve(&self, table: &RuleTable) -> Self {
        Self::from_cells(step(&self.current, table))
    }

    /// Advance one generation in place through the bit-packed buffers
    pub fn advance_packed(&mut self, table: &RuleTable) {
        let len = self.current.len();
        let packed = self.packed.get_or_insert_with(|| Packed {
            current: BitRow::new(len),
            next: BitRow::new(len),
        });
        packed.current.pack(&self.current);
        packed.current.evolve_into(table, &mut packed.next);
        std::mem::swap(&mut packed.current, &mut packed.next);
        packed.current.unpack_into(&mut self.current);
    }

    /// Overwrite the current generation with `other`'s.
    /// Buffers are reused when the lengths match.
    pub fn copy_from(&mut self, other: &Row) {
        if self.len() == other.len() {
            self.current.copy_from_slice(&other.current);
        } else {
            *self = other.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ruleset;

    fn table(r: u8) -> RuleTable {
        RuleTable::decode(Ruleset(r))
    }

    fn bits(cells: &[Cell]) -> Vec<u8> {
        cells.iter().map(|c| c.state()).collect()
    }

    #[test]
    fn test_rule_30_single_seed_first_step() {
        let row = Row::from_bits(&[0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
        let next = row.evolve(&table(30));
        assert_eq!(next.bits(), vec![0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rule_30_second_step() {
        let mut row = Row::single_center(11);
        row.advance(&table(30));
        row.advance(&table(30));
        assert_eq!(row.bits(), vec![0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_single_cell_row_is_its_own_neighbor() {
        // Pattern 111 -> bit 7, pattern 000 -> bit 0
        let t = table(0b1000_0000);
        assert_eq!(step(&[Cell::Alive], &t), vec![Cell::Alive]);
        assert_eq!(step(&[Cell::Dead], &t), vec![Cell::Dead]);

        let t = table(0b0000_0001);
        assert_eq!(step(&[Cell::Dead], &t), vec![Cell::Alive]);
        assert_eq!(step(&[Cell::Alive], &t), vec![Cell::Dead]);
    }

    #[test]
    fn test_two_cell_row_reads_other_cell_on_both_sides() {
        // [1, 0]: cell 0 sees (0, 1, 0) = 2, cell 1 sees (1, 0, 1) = 5
        let t = table(1 << 2);
        assert_eq!(bits(&step(Row::from_bits(&[1, 0]).cells(), &t)), vec![1, 0]);
        let t = table(1 << 5);
        assert_eq!(bits(&step(Row::from_bits(&[1, 0]).cells(), &t)), vec![0, 1]);
    }

    #[test]
    fn test_left_edge_wraps() {
        // Only the last cell is alive: cell 0 sees (1, 0, 0) = pattern 4
        let row = Row::from_bits(&[0, 0, 0, 0, 1]);
        let next = step(row.cells(), &table(1 << 4));
        assert_eq!(bits(&next), vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_right_edge_wraps() {
        // Only the first cell is alive: last cell sees (0, 0, 1) = pattern 1
        let row = Row::from_bits(&[1, 0, 0, 0, 0]);
        let next = step(row.cells(), &table(1 << 1));
        assert_eq!(bits(&next), vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_edges_depend_only_on_ring_neighbors() {
        let t = table(30);
        let base = Row::from_bits(&[1, 0, 1, 1, 0, 0, 1, 0]);
        let reference = step(base.cells(), &t);

        // Flipping cells 3..5 cannot change cell 0 or cell 7
        let mut changed = base.clone();
        for i in 3..=5 {
            changed.set(i, Cell::from(!changed.get(i).unwrap().is_alive()));
        }
        let result = step(changed.cells(), &t);
        assert_eq!(result[0], reference[0]);
        assert_eq!(result[7], reference[7]);
    }

    #[test]
    fn test_rule_0_kills_everything() {
        let row = Row::from_bits(&[1, 1, 0, 1, 0, 1, 1, 1]);
        let next = step(row.cells(), &table(0));
        assert!(next.iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_rule_204_is_identity() {
        // 204 = 0b11001100: next = center
        let row = Row::from_bits(&[1, 0, 0, 1, 1, 0, 1]);
        assert_eq!(row.evolve(&table(204)).bits(), row.bits());
    }

    #[test]
    fn test_step_is_deterministic() {
        let row = Row::from_bits(&[0, 1, 1, 0, 1, 0, 0, 1, 1, 1]);
        for r in [30u8, 90, 110, 184] {
            assert_eq!(step(row.cells(), &table(r)), step(row.cells(), &table(r)));
        }
    }

    #[test]
    fn test_advance_matches_evolve() {
        let t = table(110);
        let mut row = Row::single_center(64);
        let mut pure = row.clone();
        for _ in 0..20 {
            row.advance(&t);
            pure = pure.evolve(&t);
            assert_eq!(row.cells(), pure.cells());
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let t = table(30);
        let mut serial = Row::single_center(5001);
        let mut parallel = serial.clone();
        for _ in 0..50 {
            serial.advance(&t);
            parallel.advance_parallel(&t);
        }
        assert_eq!(serial.cells(), parallel.cells());
    }

    #[test]
    fn test_packed_matches_serial() {
        let t = table(110);
        let mut serial = Row::single_center(130);
        let mut packed = serial.clone();
        for _ in 0..60 {
            serial.advance(&t);
            packed.advance_packed(&t);
            assert_eq!(serial.cells(), packed.cells());
        }
    }

    #[test]
    fn test_packed_buffers_survive_steps() {
        let t = table(30);
        let mut row = Row::single_center(100);
        row.advance_packed(&t);
        let words = row.packed.as_ref().map(|p| (p.current.words_ptr(), p.next.words_ptr()));
        row.advance_packed(&t);
        row.advance_packed(&t);
        let after = row.packed.as_ref().map(|p| (p.current.words_ptr(), p.next.words_ptr()));
        // Still the same two word buffers
        assert_eq!(
            words.map(|(a, b)| { let mut v = [a, b]; v.sort(); v }),
            after.map(|(a, b)| { let mut v = [a, b]; v.sort(); v }),
        );
    }

    #[test]
    fn test_copy_from_restores_generation() {
        let t = table(30);
        let seed = Row::single_center(21);
        let mut row = seed.clone();
        row.advance(&t);
        row.advance_packed(&t);
        row.copy_from(&seed);
        assert_eq!(row, seed);

        row.copy_from(&Row::single_center(5));
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn test_single_center_seed() {
        let row = Row::single_center(81);
        assert_eq!(row.count_alive(), 1);
        assert_eq!(row.get(40), Some(Cell::Alive));

        let row = Row::single_center(1);
        assert_eq!(row.bits(), vec![1]);
    }
}
