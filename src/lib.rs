// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Configuration and simulation driver
pub mod application;

// Infrastructure layer - UI, rendering, input, command line
pub mod ui;
pub mod rendering;
pub mod input;
pub mod cli;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Row, RuleTable, Ruleset, Seed, encode, step};
pub use application::{AppState, ConfigError, Simulation, SimulationConfig};
pub use rendering::{FrameBuffer, Renderer};
