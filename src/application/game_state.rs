use log::{debug, info};
use rand::Rng;

use crate::config::Config;
use crate::domain::{step, Coord, Pattern, SparseGrid};

/// GameState orchestrates the simulation.
/// Owns the live grid and everything that decides when it advances.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: SparseGrid,
    pub generation: u64,
    pub paused: bool,
    /// Seconds between automatic steps
    pub step_interval: f32,
    step_timer: f32,
    config: Config,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        Self {
            grid: SparseGrid::new(),
            generation: 0,
            paused: true,
            step_interval: config.step_interval,
            step_timer: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Toggle play/pause state
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
        self.step_timer = 0.0;
    }

    /// Advance exactly one generation, replacing the grid wholesale.
    /// Counts as a generation even when nothing changes, and restarts
    /// the automatic step timer.
    pub fn step(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
        self.step_timer = 0.0;
        debug!("generation {} population {}", self.generation, self.grid.population());
    }

    /// Frame update. Runs at most one step, once `step_interval` seconds
    /// have accumulated while running.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.paused {
            return false;
        }
        self.step_timer += delta_time;
        if self.step_timer < self.step_interval {
            return false;
        }
        self.step();
        true
    }

    /// Shorter interval, saturating at the configured minimum
    pub fn faster(&mut self) {
        self.step_interval = self.config.clamp_step_interval(self.step_interval - self.config.step_adjust);
    }

    /// Longer interval, saturating at the configured maximum
    pub fn slower(&mut self) {
        self.step_interval = self.config.clamp_step_interval(self.step_interval + self.config.step_adjust);
    }

    pub fn steps_per_second(&self) -> f32 {
        1.0 / self.step_interval
    }

    /// Clear the grid, zero the generation, pause, restore the default interval
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.paused = true;
        self.step_interval = self.config.step_interval;
        self.step_timer = 0.0;
        info!("simulation reset");
    }

    /// Fill a square region centered on `center` with random cells.
    /// Cells already alive inside the region are replaced; the rest of the
    /// plane is untouched.
    pub fn randomize_around<R: Rng + ?Sized>(&mut self, center: Coord, rng: &mut R) {
        let size = self.config.random_size;
        let origin = center.offset(-(size / 2), -(size / 2));
        for dy in 0..size {
            for dx in 0..size {
                let alive = rng.random_bool(self.config.random_density);
                self.grid.set(origin.offset(dx, dy), alive);
            }
        }
        self.paused = true;
        info!("randomized {size}x{size} around ({}, {})", center.x, center.y);
    }

    /// Stamp a preset centered on a cell
    pub fn stamp(&mut self, pattern: &Pattern, center: Coord) {
        pattern.stamp_centered(&mut self.grid, center);
        info!("placed {} ({}) at ({}, {})", pattern.name, pattern.description, center.x, center.y);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
