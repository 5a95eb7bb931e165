use log::{info, warn};

use super::config::{ConfigError, SimulationConfig, parse_cell_size, parse_ruleset};
use super::simulation::Simulation;
use crate::domain::{Ruleset, Seed};
use crate::rendering::Renderer;

/// Density used by the random seed action
pub const RANDOM_DENSITY: f64 = 0.5;

/// AppState orchestrates the simulation for the interactive window.
/// This is the application layer that coordinates domain logic and UI.
pub struct AppState {
    pub simulation: Simulation,
    pub is_animating: bool,
    pub rows_per_second: f32,
    /// Last rejected input, shown under the panel
    pub status: Option<String>,
    revealed: f32,
}

impl AppState {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            simulation: Simulation::new(config)?,
            is_animating: false,
            rows_per_second: 30.0,
            status: None,
            revealed: 0.0,
        })
    }

    pub fn config(&self) -> SimulationConfig {
        *self.simulation.config()
    }

    /// Rows currently visible: all of them unless animating
    pub fn revealed_rows(&self) -> usize {
        let total = self.simulation.config().generation_count();
        if self.is_animating {
            (self.revealed as usize).min(total)
        } else {
            total
        }
    }

    /// Apply a new configuration, recording the error if it is rejected
    pub fn apply(mut self, config: SimulationConfig) -> Self {
        match self.simulation.reconfigure(config) {
            Ok(()) => {
                self.status = None;
                self.revealed = 0.0;
            }
            Err(err) => self.reject(err),
        }
        self
    }

    /// Render trigger: parse the panel text and restart.
    /// Fields that fail to parse keep their previous value.
    pub fn apply_text(mut self, ruleset_text: &str, cell_size_text: &str) -> Self {
        let mut config = self.config();
        let mut error = None;

        match parse_ruleset(ruleset_text) {
            Ok(ruleset) => config.ruleset = ruleset,
            Err(err) => error = Some(err),
        }
        match parse_cell_size(cell_size_text, config.screen_width) {
            Ok(cell_size) => config.cell_size = cell_size,
            Err(err) => error = error.or(Some(err)),
        }

        self = self.apply(config);
        if let Some(err) = error {
            self.reject(err);
        }
        self
    }

    fn reject(&mut self, err: ConfigError) {
        warn!("Rejected input: {}", err);
        self.status = Some(err.to_string());
    }

    pub fn set_ruleset(self, ruleset: Ruleset) -> Self {
        let config = self.config().with_ruleset(ruleset);
        self.apply(config)
    }

    pub fn next_ruleset(self) -> Self {
        let ruleset = self.config().ruleset.next();
        self.set_ruleset(ruleset)
    }

    pub fn prev_ruleset(self) -> Self {
        let ruleset = self.config().ruleset.prev();
        self.set_ruleset(ruleset)
    }

    pub fn cycle_algorithm(self) -> Self {
        let config = self.config();
        let algorithm = config.algorithm.cycle();
        self.apply(config.with_algorithm(algorithm))
    }

    /// Start from a fresh random layout, kept until the next re-roll
    pub fn random_seed(self) -> Self {
        let config = self.config().with_seed(Seed::Random { density: RANDOM_DENSITY, rng_seed: None });
        self.apply(config)
    }

    pub fn single_seed(self) -> Self {
        let config = self.config().with_seed(Seed::SingleCenter);
        self.apply(config)
    }

    /// Toggle progressive reveal; restarting it from the first row
    pub fn toggle_animation(mut self) -> Self {
        self.is_animating = !self.is_animating;
        self.revealed = 0.0;
        info!("Animation {}", if self.is_animating { "on" } else { "off" });
        self
    }

    /// Adjust reveal speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.rows_per_second = (self.rows_per_second + delta).clamp(1.0, 240.0);
        self
    }

    /// Update by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_animating {
            let total = self.simulation.config().generation_count() as f32;
            self.revealed = (self.revealed + delta_time * self.rows_per_second).min(total);
        }
        self
    }

    /// Draw the visible generations through `renderer`
    pub fn draw(&mut self, renderer: &mut dyn Renderer) -> usize {
        let rows = self.revealed_rows();
        self.simulation.render_partial(renderer, rows)
    }
}
