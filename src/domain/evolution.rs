//! Sparse generation step.
//!
//! Only coordinates that can change state are evaluated: every live cell
//! and its eight neighbors. A dead cell with no live neighbor can never be
//! born, so the cost of a step grows with the live population rather than
//! with the area of the plane.

use std::collections::HashSet;

use super::{count_live_neighbors, Cell, Coord, SparseGrid};

/// Live cells plus their Moore neighbors, deduplicated.
/// At most 9 × population entries.
pub fn candidates(grid: &SparseGrid) -> HashSet<Coord> {
    let mut set = HashSet::with_capacity(grid.population() * 9);
    for coord in grid.iter() {
        set.insert(coord);
        set.extend(coord.neighbors());
    }
    set
}

/// Compute the next generation into a fresh grid.
/// The input is only read, so every count observes the pre-step state.
pub fn step(grid: &SparseGrid) -> SparseGrid {
    let mut next = SparseGrid::with_capacity(grid.population());
    for coord in candidates(grid) {
        let current = Cell::from_alive(grid.contains(coord));
        if current.evolve(count_live_neighbors(grid, coord)).is_alive() {
            next.set_alive(coord);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{presets, NEIGHBOR_OFFSETS};

    fn grid_of(cells: &[(i32, i32)]) -> SparseGrid {
        cells.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_empty_steps_to_empty() {
        assert!(step(&SparseGrid::new()).is_empty());
        assert!(candidates(&SparseGrid::new()).is_empty());
    }

    #[test]
    fn test_candidates_cover_neighborhoods() {
        let grid = grid_of(&[(0, 0), (10, 10)]);
        let set = candidates(&grid);
        assert_eq!(set.len(), 18);
        assert!(set.contains(&Coord::new(-1, -1)));
        assert!(set.contains(&Coord::new(11, 9)));
        assert!(!set.contains(&Coord::new(5, 5)));

        // Overlapping neighborhoods deduplicate
        let pair = grid_of(&[(0, 0), (1, 0)]);
        assert_eq!(candidates(&pair).len(), 12);
    }

    #[test]
    fn test_rule_table_for_center_cell() {
        let center = Coord::new(-20, 37);
        for alive in [false, true] {
            for n in 0..=8usize {
                let mut grid: SparseGrid = NEIGHBOR_OFFSETS[..n]
                    .iter()
                    .map(|&(dx, dy)| center.offset(dx, dy))
                    .collect();
                grid.set(center, alive);

                let expected = matches!((alive, n), (true, 2 | 3) | (false, 3));
                assert_eq!(
                    step(&grid).contains(center),
                    expected,
                    "alive={alive} neighbors={n}"
                );
            }
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let block = grid_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let horizontal = grid_of(&[(-1, 0), (0, 0), (1, 0)]);
        let vertical = grid_of(&[(0, -1), (0, 0), (0, 1)]);

        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let glider = presets::glider().to_grid(Coord::ORIGIN);
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(grid, glider.translated(1, 1));
    }

    #[test]
    fn test_step_far_from_origin() {
        let far = grid_of(&[(-1, 0), (0, 0), (1, 0)]).translated(-2_000_000_000, 1_999_999_999);
        let next = step(&far);
        assert_eq!(next.population(), 3);
        assert!(next.contains(Coord::new(-2_000_000_000, 2_000_000_000)));
    }

    #[test]
    fn test_input_grid_untouched() {
        let grid = grid_of(&[(0, 0)]);
        let next = step(&grid);
        assert!(next.is_empty());
        assert!(grid.contains(Coord::ORIGIN));
    }
}
