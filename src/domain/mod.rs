mod cell;
mod rules;
mod seed;
mod algorithm;
pub mod row;
pub mod bit_row;

pub use cell::Cell;
pub use rules::{Ruleset, RuleTable, encode};
pub use row::{Row, step, step_into};
pub use bit_row::BitRow;
pub use seed::Seed;
pub use algorithm::Algorithm;
