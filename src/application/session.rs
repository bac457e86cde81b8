use log::warn;
use macroquad::math::Vec2;
use rand::{rngs::StdRng, SeedableRng};

use super::{Camera, GameState, Intent, PaintStroke};
use crate::config::Config;
use crate::domain::{presets, Coord, Pattern, SparseGrid};

/// Session is the single owner of everything a frame touches:
/// simulation state, camera and the gesture in progress.
pub struct Session {
    pub state: GameState,
    pub camera: Camera,
    stroke: PaintStroke,
    panning: bool,
    patterns: Vec<Pattern>,
    last_stamp: Option<usize>,
    rng: StdRng,
}

/// Read-only view handed to the renderer once per frame
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub grid: &'a SparseGrid,
    pub generation: u64,
    pub population: usize,
    pub paused: bool,
    pub step_interval: f32,
    pub steps_per_second: f32,
    pub zoom: f32,
    /// Most recently stamped preset since the last reset
    pub last_pattern: Option<&'a Pattern>,
}

impl FrameSnapshot<'_> {
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter()
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Session with a reproducible randomize sequence
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            camera: Camera::from_config(&config),
            state: GameState::new(config),
            stroke: PaintStroke::new(),
            panning: false,
            patterns: presets::all_patterns(),
            last_stamp: None,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        self.state.config()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_active()
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Cell under a screen point
    pub fn cell_at(&self, screen: Vec2) -> Coord {
        self.camera.screen_to_cell(screen, self.config().cell_size)
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::TogglePause => self.state.toggle_paused(),
            Intent::StepOnce => self.state.step(),
            Intent::Faster => self.state.faster(),
            Intent::Slower => self.state.slower(),
            Intent::Reset => {
                self.state.reset();
                self.camera.reset();
                self.stroke.end();
                self.last_stamp = None;
            }
            Intent::PanStart => {
                self.panning = true;
                self.stroke.end();
            }
            Intent::PanMove(delta) => {
                if self.panning {
                    self.camera.pan(delta);
                }
            }
            Intent::PanEnd => self.panning = false,
            Intent::Zoom { anchor, wheel } => self.camera.zoom_at(anchor, wheel),
            Intent::PaintBegin(at) => {
                if !self.panning {
                    let coord = self.cell_at(at);
                    self.stroke.begin(coord, &mut self.state.grid);
                }
            }
            Intent::PaintMove(at) => {
                if self.stroke.is_active() {
                    let coord = self.cell_at(at);
                    self.stroke.extend(coord, &mut self.state.grid);
                }
            }
            Intent::PaintEnd => self.stroke.end(),
            Intent::Randomize => {
                let cell_size = self.config().cell_size;
                let center = Coord::new(
                    (self.camera.target.x / cell_size).floor() as i32,
                    (self.camera.target.y / cell_size).floor() as i32,
                );
                self.state.randomize_around(center, &mut self.rng);
            }
            Intent::StampPattern { index, at } => match self.patterns.get(index) {
                Some(pattern) => {
                    let center = self.camera.screen_to_cell(at, self.state.config().cell_size);
                    self.state.stamp(pattern, center);
                    self.last_stamp = Some(index);
                }
                None => warn!("no pattern in slot {index}"),
            },
        }
    }

    /// One frame: apply this frame's intents in order, then maybe step.
    /// A manual step counts as the frame's step, so the timer is skipped.
    /// Returns whether the simulation advanced on its timer.
    pub fn frame(&mut self, intents: impl IntoIterator<Item = Intent>, delta_time: f32) -> bool {
        let mut stepped = false;
        for intent in intents {
            stepped |= intent == Intent::StepOnce;
            self.apply(intent);
        }
        !stepped && self.state.tick(delta_time)
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            grid: &self.state.grid,
            generation: self.state.generation,
            population: self.state.grid.population(),
            paused: self.state.paused,
            step_interval: self.state.step_interval,
            steps_per_second: self.state.steps_per_second(),
            zoom: self.camera.zoom,
            last_pattern: self.last_stamp.and_then(|i| self.patterns.get(i)),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
