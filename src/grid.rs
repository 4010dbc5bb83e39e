//! Grid line construction
//!
//! Turns plan dimensions, a mesh step, and pedestal center coordinates into
//! two sorted axis coordinate arrays. Pedestal centers act as hard cut
//! points: each interval between cut points is subdivided at whole mesh
//! steps, leaving the remainder (possibly zero) as the final sub-span.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::Pedestal;

/// Coordinates closer than this are considered the same grid line.
pub const COORD_EPS: f64 = 1e-6;

/// Guard band keeping subdivision points strictly inside their interval.
const SPAN_EPS: f64 = 1e-9;

/// Sorted, deduplicated grid-line coordinates for both plan axes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridLines {
    /// Strictly increasing X coordinates, always containing 0 and the plan length
    pub x_lines: Vec<f64>,
    /// Strictly increasing Z coordinates, always containing 0 and the plan width
    pub z_lines: Vec<f64>,
}

impl GridLines {
    /// Build the grid for a plan of `length` x `width` with the given mesh
    /// step, cutting each axis at every pedestal center.
    pub fn build(length: f64, width: f64, mesh_size: f64, pedestals: &[Pedestal]) -> Self {
        let x_lines = axis_lines(length, mesh_size, pedestals.iter().map(|p| p.x));
        let z_lines = axis_lines(width, mesh_size, pedestals.iter().map(|p| p.z));
        debug!(
            "grid built: {} x-lines, {} z-lines ({} pedestal cut points)",
            x_lines.len(),
            z_lines.len(),
            pedestals.len()
        );
        Self { x_lines, z_lines }
    }

    /// Number of plate cells along X
    pub fn x_cells(&self) -> usize {
        self.x_lines.len().saturating_sub(1)
    }

    /// Number of plate cells along Z
    pub fn z_cells(&self) -> usize {
        self.z_lines.len().saturating_sub(1)
    }
}

/// Round a coordinate to the nearest multiple of [`COORD_EPS`].
fn quantize(v: f64) -> i64 {
    (v * 1e6).round() as i64
}

/// Build the grid lines for one axis.
///
/// Seeds the axis with 0, the extent, and every pedestal coordinate clamped
/// into range, deduplicated within [`COORD_EPS`]. Then every adjacent seed
/// pair is subdivided at whole multiples of `step`, keeping only points
/// strictly inside the pair so boundary seeds are never duplicated.
fn axis_lines(extent: f64, step: f64, coords: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut seeds: BTreeSet<i64> = BTreeSet::new();
    seeds.insert(quantize(0.0));
    seeds.insert(quantize(extent));
    for c in coords {
        seeds.insert(quantize(c.clamp(0.0, extent)));
    }

    let seeds: Vec<f64> = seeds.into_iter().map(|k| k as f64 / 1e6).collect();

    let mut lines = Vec::new();
    for pair in seeds.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        lines.push(a);
        let span = b - a;
        if span <= 0.0 {
            continue;
        }
        let subdivisions = (span / step).floor() as u64;
        for j in 1..=subdivisions {
            let v = a + j as f64 * step;
            if v > a + SPAN_EPS && v < b - SPAN_EPS {
                lines.push(v);
            }
        }
    }
    if let Some(&last) = seeds.last() {
        if lines.last() != Some(&last) {
            lines.push(last);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedestal_at(id: u32, x: f64, z: f64) -> Pedestal {
        Pedestal::new(id, x, z, 0.5, 0.5)
    }

    #[test]
    fn test_plain_axis_subdivision() {
        let grid = GridLines::build(6.0, 4.0, 0.2, &[]);
        assert_eq!(grid.x_lines.len(), 31);
        assert_eq!(grid.z_lines.len(), 21);
        assert_eq!(grid.x_lines[0], 0.0);
        assert_eq!(*grid.x_lines.last().unwrap(), 6.0);
        assert_eq!(grid.z_lines[0], 0.0);
        assert_eq!(*grid.z_lines.last().unwrap(), 4.0);
    }

    #[test]
    fn test_lines_strictly_increasing() {
        let pedestals = vec![pedestal_at(1, 3.05, 2.0), pedestal_at(2, 0.1, 3.99)];
        let grid = GridLines::build(6.0, 4.0, 0.2, &pedestals);
        for lines in [&grid.x_lines, &grid.z_lines] {
            for pair in lines.windows(2) {
                assert!(pair[1] - pair[0] >= COORD_EPS);
            }
        }
    }

    #[test]
    fn test_pedestal_cut_point_present() {
        let pedestals = vec![pedestal_at(1, 3.05, 2.0)];
        let grid = GridLines::build(6.0, 4.0, 0.2, &pedestals);
        assert!(grid.x_lines.iter().any(|&x| (x - 3.05).abs() < COORD_EPS));
        // Interval after the cut point restarts at whole steps from it.
        assert!(grid.x_lines.iter().any(|&x| (x - 3.25).abs() < COORD_EPS));
    }

    #[test]
    fn test_remainder_span_not_force_divided() {
        // 0..0.5 with step 0.2 leaves a 0.1 remainder before the cut point.
        let pedestals = vec![pedestal_at(1, 0.5, 2.0)];
        let grid = GridLines::build(6.0, 4.0, 0.2, &pedestals);
        let prefix: Vec<f64> = grid.x_lines.iter().copied().take_while(|&x| x <= 0.5).collect();
        assert_eq!(prefix, vec![0.0, 0.2, 0.4, 0.5]);
    }

    #[test]
    fn test_order_invariance() {
        let a = vec![pedestal_at(1, 1.1, 0.7), pedestal_at(2, 4.3, 3.2)];
        let b = vec![pedestal_at(2, 4.3, 3.2), pedestal_at(1, 1.1, 0.7)];
        let grid_a = GridLines::build(6.0, 4.0, 0.2, &a);
        let grid_b = GridLines::build(6.0, 4.0, 0.2, &b);
        assert_eq!(grid_a.x_lines, grid_b.x_lines);
        assert_eq!(grid_a.z_lines, grid_b.z_lines);
    }

    #[test]
    fn test_out_of_range_center_clamped() {
        let pedestals = vec![pedestal_at(1, -2.0, 9.0)];
        let grid = GridLines::build(6.0, 4.0, 0.2, &pedestals);
        assert_eq!(grid.x_lines[0], 0.0);
        assert_eq!(*grid.z_lines.last().unwrap(), 4.0);
        // Clamped coordinates collapse onto the boundary seeds.
        assert_eq!(grid.x_lines.len(), 31);
        assert_eq!(grid.z_lines.len(), 21);
    }

    #[test]
    fn test_near_duplicate_centers_deduplicated() {
        let pedestals = vec![pedestal_at(1, 3.0, 2.0), pedestal_at(2, 3.0000001, 2.0)];
        let grid = GridLines::build(6.0, 4.0, 0.2, &pedestals);
        let hits = grid
            .x_lines
            .iter()
            .filter(|&&x| (x - 3.0).abs() < 10.0 * COORD_EPS)
            .count();
        assert_eq!(hits, 1);
    }
}
