use std::collections::HashSet;

use crate::domain::{Coord, SparseGrid};

/// State of one paint gesture, from pointer-down to pointer-up.
///
/// The first cell decides the mode: pressing on a dead cell draws, pressing
/// on a live cell erases. Every cell entered afterwards gets the same
/// treatment, and no cell is touched twice within the gesture.
#[derive(Debug, Default)]
pub struct PaintStroke {
    active: bool,
    drawing: bool,
    visited: HashSet<Coord>,
}

impl PaintStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when the current gesture sets cells alive
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Start a gesture on `coord`, toggling it
    pub fn begin(&mut self, coord: Coord, grid: &mut SparseGrid) {
        self.visited.clear();
        self.active = true;
        self.drawing = grid.toggle(coord);
        self.visited.insert(coord);
    }

    /// Pointer entered `coord` during the gesture. Returns whether the
    /// cell was newly visited.
    pub fn extend(&mut self, coord: Coord, grid: &mut SparseGrid) -> bool {
        if !self.active || !self.visited.insert(coord) {
            return false;
        }
        grid.set(coord, self.drawing);
        true
    }

    /// Pointer released
    pub fn end(&mut self) {
        self.active = false;
        self.visited.clear();
    }
}
