mod app_state;
mod config;
mod simulation;

pub use app_state::{AppState, RANDOM_DENSITY};
pub use config::{
    ConfigError, SimulationConfig, parse_cell_size, parse_ruleset,
    DEFAULT_CELL_SIZE, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, RULESET_MAX_CHARS,
};
pub use simulation::Simulation;
