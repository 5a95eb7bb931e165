/// Cell is the fundamental unit of an elementary automaton row.
/// Each cell is either Dead (state 0) or Alive (state 1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric state of the cell: 0 for dead, 1 for alive
    pub const fn state(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Build a cell from a bit (any non-zero value is alive)
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Grayscale value the renderer paints for this cell.
    /// `255 - 255 * state`: dead cells are white, live cells black.
    pub const fn brightness(self) -> u8 {
        255 - 255 * self.state()
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
