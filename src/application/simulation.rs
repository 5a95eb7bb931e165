use log::{debug, info};

use super::config::{ConfigError, SimulationConfig};
use crate::domain::{Cell, Row, RuleTable};
use crate::rendering::Renderer;

/// Simulation drives an elementary automaton from its seed down the
/// drawing area, one generation per `cell_size` pixels.
///
/// It owns the configuration, the decoded rule table and the row buffers;
/// nothing else mutates the row while a step runs. The first generation is
/// built once per configuration and copied back on every restart.
pub struct Simulation {
    config: SimulationConfig,
    table: RuleTable,
    initial: Row,
    row: Row,
    generation: usize,
}

impl Simulation {
    /// Create a simulation, seeded and ready to draw
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.with_seed(config.seed.resolve());
        let initial = config.seed.build(config.row_len());
        Ok(Self {
            table: RuleTable::decode(config.ruleset),
            config,
            row: initial.clone(),
            initial,
            generation: 0,
        })
    }

    /// Apply a new configuration and restart from the seed.
    /// On error the previous configuration stays in effect.
    pub fn reconfigure(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let config = config.with_seed(config.seed.resolve());
        self.config = config;
        self.table = RuleTable::decode(config.ruleset);
        self.initial = config.seed.build(config.row_len());
        self.reset();
        info!(
            "Rule {} with {} cells per row, {} generations ({})",
            config.ruleset,
            config.row_len(),
            config.generation_count(),
            config.algorithm,
        );
        debug!("Seed {:?}", config.seed);
        Ok(())
    }

    /// Discard the current row and restart from the first generation
    pub fn reset(&mut self) {
        self.row.copy_from(&self.initial);
        self.generation = 0;
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Cells of the current generation
    pub fn current(&self) -> &[Cell] {
        self.row.cells()
    }

    /// Steps applied since the last seed
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Vertical pixel offset of the current generation
    pub fn offset(&self) -> u32 {
        u32::try_from(self.generation)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.config.cell_size)
    }

    /// True once the drawing area is filled
    pub fn is_complete(&self) -> bool {
        self.offset() >= self.config.screen_height
    }

    /// Step the current row once without drawing
    pub fn advance(&mut self) {
        self.config.algorithm.advance(&mut self.row, &self.table);
        self.generation += 1;
    }

    /// Draw the current generation at its offset, then step.
    /// Returns false (drawing nothing) once the area is full.
    pub fn draw_next(&mut self, renderer: &mut dyn Renderer) -> bool {
        if self.is_complete() {
            return false;
        }
        renderer.draw_generation(self.row.cells(), self.offset(), self.config.cell_size);
        self.advance();
        true
    }

    /// Re-seed and draw at most `limit` generations. Returns rows drawn.
    pub fn render_partial(&mut self, renderer: &mut dyn Renderer, limit: usize) -> usize {
        self.reset();
        let mut drawn = 0;
        while drawn < limit && self.draw_next(renderer) {
            drawn += 1;
        }
        debug!("Rendered {} generations of rule {}", drawn, self.config.ruleset);
        drawn
    }

    /// Re-seed and draw until the area is full. Returns rows drawn.
    pub fn render(&mut self, renderer: &mut dyn Renderer) -> usize {
        self.render_partial(renderer, usize::MAX)
    }
}
