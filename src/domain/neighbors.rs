use super::{Coord, SparseGrid};

/// Count live cells in the Moore neighborhood of `coord`.
/// Always in 0..=8; eight constant-time lookups, no side effects.
pub fn count_live_neighbors(grid: &SparseGrid, coord: Coord) -> u8 {
    coord
        .neighbors()
        .filter(|&n| grid.contains(n))
        .count() as u8
}
