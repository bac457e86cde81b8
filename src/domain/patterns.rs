use super::{Coord, SparseGrid};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<(i32, i32)>,  // Offsets of alive cells from the top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Absolute cells with the pattern's top-left corner at `origin`
    pub fn cells_at(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Standalone grid containing only this pattern
    pub fn to_grid(&self, origin: Coord) -> SparseGrid {
        self.cells_at(origin).collect()
    }

    /// Top-left corner that centers the pattern on `center`
    pub fn origin_centered_on(&self, center: Coord) -> Coord {
        center.offset(-(self.width / 2), -(self.height / 2))
    }

    /// Set the pattern's cells alive, centered on `center`.
    /// Existing live cells are kept.
    pub fn stamp_centered(&self, grid: &mut SparseGrid, center: Coord) {
        for coord in self.cells_at(self.origin_centered_on(center)) {
            grid.set_alive(coord);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0), (2, 0),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let quarter = [(2, 0), (3, 0), (4, 0), (0, 2), (0, 3), (0, 4), (5, 2), (5, 3), (5, 4), (2, 5), (3, 5), (4, 5)];
        // Mirror one quadrant across both axes of the 13×13 box
        let cells = quarter
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left block
                (0, 4), (0, 5),
                (1, 4), (1, 5),

                // Queen bee
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right block
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Get all available patterns, in number-key order (1..9, then 0)
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
