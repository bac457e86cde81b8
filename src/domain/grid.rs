use std::collections::HashSet;

use super::Coord;

/// SparseGrid holds the live cells of an unbounded plane.
/// Presence of a coordinate means alive; anything absent is dead,
/// so the stored length is exactly the live population.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    live: HashSet<Coord>,
}

impl SparseGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { live: HashSet::with_capacity(capacity) }
    }

    /// True iff the coordinate is alive
    pub fn contains(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// Mark alive. Idempotent.
    pub fn set_alive(&mut self, coord: Coord) {
        self.live.insert(coord);
    }

    /// Mark dead. Idempotent.
    pub fn set_dead(&mut self, coord: Coord) {
        self.live.remove(&coord);
    }

    pub fn set(&mut self, coord: Coord, alive: bool) {
        if alive {
            self.set_alive(coord);
        } else {
            self.set_dead(coord);
        }
    }

    /// Flip a cell, returning its new liveness
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.live.remove(&coord) {
            false
        } else {
            self.live.insert(coord);
            true
        }
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Iterate over live coordinates (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    /// Copy of this grid shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        self.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Inclusive (min, max) corners of the live region, None when empty
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        self.iter().fold(None, |acc, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((
                Coord::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coord::new(hi.x.max(c.x), hi.y.max(c.y)),
            )),
        })
    }
}

impl FromIterator<Coord> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self { live: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = &'a Coord;
    type IntoIter = std::collections::hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}
