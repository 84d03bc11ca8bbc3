//! Uniform grid used to narrow collision checks to nearby enemies.

use std::collections::HashMap;

use glam::Vec2;

/// Uniform-grid spatial hash keyed by integer cell coordinates.
///
/// The grid is rebuilt from scratch every tick. Bucket vectors are kept
/// between rebuilds so that a warmed-up grid performs no allocation.
#[derive(Debug)]
pub struct SpatialGrid<K> {
    cell_size: f32,
    cells: HashMap<(i32, i32), usize>,
    buckets: Vec<Vec<K>>,
    used: usize,
    len: usize,
}

impl<K: Copy> SpatialGrid<K> {
    /// Creates an empty grid with square cells of the provided edge length.
    #[must_use]
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
            buckets: Vec::new(),
            used: 0,
            len: 0,
        }
    }

    /// Edge length of each cell.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Empties the grid without releasing bucket capacity.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets[..self.used] {
            bucket.clear();
        }
        self.cells.clear();
        self.used = 0;
        self.len = 0;
    }

    /// Places a key in the cell containing `position`.
    pub fn insert(&mut self, key: K, position: Vec2) {
        let cell = self.cell_of(position);
        let index = match self.cells.get(&cell) {
            Some(index) => *index,
            None => {
                let index = self.used;
                if index == self.buckets.len() {
                    self.buckets.push(Vec::new());
                }
                self.used += 1;
                let _ = self.cells.insert(cell, index);
                index
            }
        };
        self.buckets[index].push(key);
        self.len += 1;
    }

    /// Writes every key in the 3×3 neighbourhood around `position` into
    /// `out`, clearing it first. Columns are visited left to right and each
    /// column top to bottom.
    pub fn query(&self, position: Vec2, out: &mut Vec<K>) {
        out.clear();
        let (column, row) = self.cell_of(position);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(index) = self.cells.get(&(column + dx, row + dy)) {
                    out.extend_from_slice(&self.buckets[*index]);
                }
            }
        }
    }

    /// Number of keys stored since the last clear.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Reports whether the grid holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn cell_of(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::SpatialGrid;

    #[test]
    fn query_has_no_false_negatives_within_cell_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut grid = SpatialGrid::new(64.0);
        let points: Vec<Vec2> = (0..400)
            .map(|_| Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
            .collect();
        for (index, point) in points.iter().enumerate() {
            grid.insert(index, *point);
        }

        let mut found = Vec::new();
        for _ in 0..200 {
            let probe = Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
            grid.query(probe, &mut found);
            for (index, point) in points.iter().enumerate() {
                if point.distance(probe) < 64.0 {
                    assert!(found.contains(&index), "missed key {index} near {probe:?}");
                }
            }
        }
    }

    #[test]
    fn negative_coordinates_floor_into_their_own_cell() {
        let mut grid = SpatialGrid::new(64.0);
        grid.insert(1u32, Vec2::new(-1.0, -1.0));
        grid.insert(2u32, Vec2::new(-200.0, -200.0));

        let mut found = Vec::new();
        grid.query(Vec2::new(10.0, 10.0), &mut found);
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn clear_keeps_bucket_capacity() {
        let mut grid = SpatialGrid::new(64.0);
        for index in 0..32u32 {
            grid.insert(index, Vec2::new(index as f32 * 70.0, 0.0));
        }
        let buckets = grid.buckets.len();

        grid.clear();
        assert!(grid.is_empty());
        for index in 0..32u32 {
            grid.insert(index, Vec2::new(index as f32 * 70.0, 0.0));
        }
        assert_eq!(grid.buckets.len(), buckets);
        assert_eq!(grid.len(), 32);
    }

    #[test]
    fn query_order_is_column_major() {
        let mut grid = SpatialGrid::new(64.0);
        grid.insert("right", Vec2::new(100.0, 32.0));
        grid.insert("below-left", Vec2::new(-32.0, 100.0));
        grid.insert("centre", Vec2::new(32.0, 32.0));

        let mut found = Vec::new();
        grid.query(Vec2::new(32.0, 32.0), &mut found);
        assert_eq!(found, vec!["below-left", "centre", "right"]);
    }
}
