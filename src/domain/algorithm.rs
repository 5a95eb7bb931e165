//! Algorithm enum for selecting the stepping implementation.
//!
//! Every algorithm produces bit-identical generations; they only differ
//! in how the work is laid out.

use std::fmt;
use std::str::FromStr;

use super::{Row, RuleTable};

/// Available stepping algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell lookup, serial
    #[default]
    Naive,
    /// Cell-by-cell lookup, parallel rayon
    NaiveParallel,
    /// Bit-packed, 64 cells per word
    BitPacked,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Naive, Algorithm::NaiveParallel, Algorithm::BitPacked]
    }

    /// Display name for UI and command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::NaiveParallel => "parallel",
            Algorithm::BitPacked => "bitpacked",
        }
    }

    /// Short description for the panel
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Cell enum array, serial",
            Algorithm::NaiveParallel => "Cell enum array, parallel",
            Algorithm::BitPacked => "Bit-packed, 64 cells at once",
        }
    }

    /// Next algorithm in `all()` order, wrapping around
    pub fn cycle(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|a| *a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Advance `row` by one generation using this algorithm
    pub fn advance(self, row: &mut Row, table: &RuleTable) {
        match self {
            Algorithm::Naive => row.advance(table),
            Algorithm::NaiveParallel => row.advance_parallel(table),
            Algorithm::BitPacked => row.advance_packed(table),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown algorithm '{}'", s))
    }
}
