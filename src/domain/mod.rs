mod cell;
mod coord;
mod evolution;
mod grid;
mod neighbors;
mod patterns;

pub use cell::Cell;
pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use grid::SparseGrid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, presets};
pub use evolution::{candidates, step};
