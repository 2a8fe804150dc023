//! Uniform spatial grid for broad-phase neighbour and overlap queries.
//!
//! Rebuilt from scratch once per tick. Entities are bucketed by their centre;
//! box queries are widened by the largest half extent inserted so that no
//! overlapping entity in a neighbouring cell is missed. Results come back in
//! cell order then insertion order, which is deterministic for a given world.

use std::collections::HashMap;

use glam::Vec2;
use hecs::Entity;

/// A grid entry: the entity, its centre, and its collision half extents.
#[derive(Debug, Clone, Copy)]
pub struct GridEntry {
    pub entity: Entity,
    pub position: Vec2,
    pub half_extents: Vec2,
}

pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<GridEntry>>,
    max_half: Vec2,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
            max_half: Vec2::ZERO,
        }
    }

    pub fn insert(&mut self, entry: GridEntry) {
        let key = self.cell_of(entry.position);
        self.max_half = self.max_half.max(entry.half_extents);
        self.cells.entry(key).or_default().push(entry);
    }

    /// Build a fresh grid from an iterator of entries.
    pub fn build(cell_size: f32, entries: impl IntoIterator<Item = GridEntry>) -> Self {
        let mut grid = Self::new(cell_size);
        for entry in entries {
            grid.insert(entry);
        }
        grid
    }

    /// Positions of every entry whose centre lies within `radius` of `center`.
    pub fn positions_within(&self, center: Vec2, radius: f32) -> Vec<Vec2> {
        let radius_sq = radius * radius;
        let mut out = Vec::new();
        self.for_each_candidate(center, Vec2::splat(radius), |entry| {
            if entry.position.distance_squared(center) < radius_sq {
                out.push(entry.position);
            }
        });
        out
    }

    /// Entries whose box might overlap the given box. Callers run the exact test.
    pub fn candidates(&self, center: Vec2, half_extents: Vec2) -> Vec<GridEntry> {
        let reach = half_extents + self.max_half;
        let mut out = Vec::new();
        self.for_each_candidate(center, reach, |entry| out.push(*entry));
        out
    }

    fn for_each_candidate(&self, center: Vec2, reach: Vec2, mut f: impl FnMut(&GridEntry)) {
        let (min_x, min_y) = self.cell_of(center - reach);
        let (max_x, max_y) = self.cell_of(center + reach);
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                if let Some(bucket) = self.cells.get(&(cx, cy)) {
                    bucket.iter().for_each(&mut f);
                }
            }
        }
    }

    fn cell_of(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(world: &mut hecs::World, x: f32, y: f32, half: f32) -> GridEntry {
        GridEntry {
            entity: world.spawn(()),
            position: Vec2::new(x, y),
            half_extents: Vec2::splat(half),
        }
    }

    #[test]
    fn test_positions_within_radius() {
        let mut world = hecs::World::new();
        let entries = vec![
            entry(&mut world, 0.0, 0.0, 16.0),
            entry(&mut world, 30.0, 0.0, 16.0),
            entry(&mut world, 200.0, 0.0, 16.0),
            entry(&mut world, -39.0, 0.0, 16.0),
        ];
        let grid = SpatialGrid::build(64.0, entries);
        let near = grid.positions_within(Vec2::ZERO, 40.0);
        assert_eq!(near.len(), 3);
        assert!(!near.contains(&Vec2::new(200.0, 0.0)));
    }

    #[test]
    fn test_candidates_include_large_boxes_in_far_cells() {
        let mut world = hecs::World::new();
        // A wide hitbox centred two cells away still reaches the origin.
        let wide = entry(&mut world, 130.0, 0.0, 140.0);
        let grid = SpatialGrid::build(64.0, vec![wide]);
        let found = grid.candidates(Vec2::ZERO, Vec2::splat(4.0));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].entity, wide.entity);
    }

    #[test]
    fn test_negative_coordinates_bucket_correctly() {
        let mut world = hecs::World::new();
        let e = entry(&mut world, -1.0, -1.0, 2.0);
        let grid = SpatialGrid::build(64.0, vec![e]);
        assert_eq!(grid.candidates(Vec2::new(1.0, 1.0), Vec2::splat(2.0)).len(), 1);
    }
}
