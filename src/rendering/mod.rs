use macroquad::prelude::*;

use crate::application::{Camera, CellRange, FrameSnapshot};
use crate::config::Config;
use crate::domain::Coord;

const BACKGROUND: Color = DARKGRAY;
const CELL_COLOR: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.7);

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Cell range to draw grid lines for, or None when lines would be too
/// dense (zoomed out, or more than the line limit per axis)
pub fn grid_line_range(camera: &Camera, config: &Config, viewport: Vec2) -> Option<CellRange> {
    if camera.zoom <= config.grid_line_min_zoom {
        return None;
    }
    let range = camera.visible_cells(viewport, config.cell_size);
    let limit = config.grid_line_limit as i64;
    (range.width() <= limit && range.height() <= limit).then_some(range)
}

/// Status panel contents, one entry per line
pub fn status_lines(snapshot: &FrameSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("Status: {} (Space)", if snapshot.paused { "Paused" } else { "Running" }),
        format!("Speed: {:.2} steps/sec (Up/Down)", snapshot.steps_per_second),
        "Step: S Key".to_string(),
        format!("Generation: {}", snapshot.generation),
        format!("Population: {}", format_number(snapshot.population)),
        format!("Scale: {:.3}x", snapshot.zoom),
        "Zoom: Wheel | Pan: R-Drag | Paint: L-Drag".to_string(),
        "Patterns: 1-0 | Random: N | Reset: R".to_string(),
    ];
    if let Some(pattern) = snapshot.last_pattern {
        lines.push(format!("Placed: {} - {}", pattern.name, pattern.description));
    }
    lines
}

pub fn clear() {
    clear_background(BACKGROUND);
}

pub fn draw_grid_lines(camera: &Camera, config: &Config, viewport: Vec2) {
    let Some(range) = grid_line_range(camera, config, viewport) else {
        return;
    };
    let top = camera.cell_to_screen(range.min, config.cell_size).y;
    let bottom = camera.cell_to_screen(range.max, config.cell_size).y;
    let left = camera.cell_to_screen(range.min, config.cell_size).x;
    let right = camera.cell_to_screen(range.max, config.cell_size).x;

    for x in range.min.x..=range.max.x {
        let sx = camera.cell_to_screen(Coord::new(x, range.min.y), config.cell_size).x;
        draw_line(sx, top, sx, bottom, 1.0, GRID_LINE_COLOR);
    }
    for y in range.min.y..=range.max.y {
        let sy = camera.cell_to_screen(Coord::new(range.min.x, y), config.cell_size).y;
        draw_line(left, sy, right, sy, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw live cells inside the viewport
pub fn draw_cells(snapshot: &FrameSnapshot, camera: &Camera, config: &Config, viewport: Vec2) {
    let visible = camera.visible_cells(viewport, config.cell_size);
    let size = config.cell_size * camera.zoom;
    for cell in snapshot.live_cells().filter(|c| visible.contains(*c)) {
        let corner = camera.cell_to_screen(cell, config.cell_size);
        draw_rectangle(corner.x, corner.y, size, size, CELL_COLOR);
    }
}

pub fn draw_status(snapshot: &FrameSnapshot) {
    let lines = status_lines(snapshot);
    let line_height = 17.0;
    draw_rectangle(5.0, 5.0, 320.0, 12.0 + line_height * lines.len() as f32, PANEL_COLOR);
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 22.0 + i as f32 * line_height, 18.0, LIGHTGRAY);
    }
}
