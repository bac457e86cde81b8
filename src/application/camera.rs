use macroquad::math::{vec2, Vec2};

use crate::config::Config;
use crate::domain::Coord;

/// Camera maps world space (cell size units) to screen pixels.
///
/// The world point `target` is drawn at the screen point `offset`, scaled
/// by `zoom` and rotated by `rotation` radians about that point:
/// `screen = rotate(world - target) * zoom + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
    pub rotation: f32,
    home_offset: Vec2,
    zoom_step: f32,
    zoom_max: f32,
}

/// Inclusive range of cell coordinates covered by the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub min: Coord,
    pub max: Coord,
}

impl CellRange {
    pub fn width(&self) -> i64 {
        self.max.x as i64 - self.min.x as i64
    }

    pub fn height(&self) -> i64 {
        self.max.y as i64 - self.min.y as i64
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }
}

fn rotate(v: Vec2, angle: f32) -> Vec2 {
    if angle == 0.0 {
        return v;
    }
    let (sin, cos) = angle.sin_cos();
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Floor division into cell indices, saturating at the i32 range
fn floor_cell(value: f32, cell_size: f32) -> i32 {
    (value / cell_size).floor() as i32
}

impl Camera {
    /// Camera centered on the world origin for a viewport of the given size
    pub fn new(viewport: Vec2, zoom_step: f32, zoom_max: f32) -> Self {
        let home_offset = viewport * 0.5;
        Self {
            target: Vec2::ZERO,
            offset: home_offset,
            zoom: 1.0,
            rotation: 0.0,
            home_offset,
            zoom_step,
            zoom_max,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let (w, h) = config.viewport();
        Self::new(vec2(w, h), config.zoom_increment, config.zoom_max)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        rotate(world - self.target, self.rotation) * self.zoom + self.offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        rotate((screen - self.offset) / self.zoom, -self.rotation) + self.target
    }

    /// Cell containing the screen point. Each axis is floored, so world
    /// x = -0.3 lands in cell -1, not 0.
    pub fn screen_to_cell(&self, screen: Vec2, cell_size: f32) -> Coord {
        let world = self.screen_to_world(screen);
        Coord::new(floor_cell(world.x, cell_size), floor_cell(world.y, cell_size))
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_to_screen(&self, cell: Coord, cell_size: f32) -> Vec2 {
        self.world_to_screen(vec2(cell.x as f32 * cell_size, cell.y as f32 * cell_size))
    }

    /// Drag the view by a screen-space delta; the world follows the pointer
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.target -= rotate(screen_delta, -self.rotation) / self.zoom;
    }

    /// Zoom about a screen point. The world point under `anchor` becomes the
    /// new target and stays under the pointer after the zoom changes.
    pub fn zoom_at(&mut self, anchor: Vec2, wheel: f32) {
        if wheel == 0.0 {
            return;
        }
        self.target = self.screen_to_world(anchor);
        self.offset = anchor;
        self.zoom = (self.zoom + wheel * self.zoom_step).clamp(self.zoom_step, self.zoom_max);
    }

    /// Cells touched by the screen rectangle (0,0)-(viewport)
    pub fn visible_cells(&self, viewport: Vec2, cell_size: f32) -> CellRange {
        let corners = [
            self.screen_to_world(Vec2::ZERO),
            self.screen_to_world(vec2(viewport.x, 0.0)),
            self.screen_to_world(vec2(0.0, viewport.y)),
            self.screen_to_world(viewport),
        ];
        let lo = corners.iter().fold(Vec2::splat(f32::INFINITY), |acc, c| acc.min(*c));
        let hi = corners.iter().fold(Vec2::splat(f32::NEG_INFINITY), |acc, c| acc.max(*c));
        CellRange {
            min: Coord::new(floor_cell(lo.x, cell_size), floor_cell(lo.y, cell_size)),
            max: Coord::new((hi.x / cell_size).ceil() as i32, (hi.y / cell_size).ceil() as i32),
        }
    }

    /// Restore identity zoom, zero rotation, origin target, viewport-centered offset
    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
        self.offset = self.home_offset;
        self.zoom = 1.0;
        self.rotation = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
