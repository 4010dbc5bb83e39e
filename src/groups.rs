//! Design-group classification
//!
//! Assigns plates to three named design groups per pedestal: the moment
//! group directly under the footprint, and one-way / two-way shear bands
//! expanded outward from it by the plate thickness and half the plate
//! thickness respectively. Per-pedestal sets are unioned across all
//! pedestals for export.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::Pedestal;
use crate::grid::GridLines;
use crate::mesh::FoundationMesh;

/// The three design-group kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Moment,
    OneWayShear,
    TwoWayShear,
}

impl GroupKind {
    /// Group name as it appears in the export deck
    pub fn staad_name(self) -> &'static str {
        match self {
            GroupKind::Moment => "_MOMENT",
            GroupKind::OneWayShear => "_1_WAY_SHEAR",
            GroupKind::TwoWayShear => "_2_WAY_SHEAR",
        }
    }
}

/// Plate ids classified for a single pedestal, ascending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedestalGroups {
    pub pedestal_id: u32,
    pub moment: Vec<u32>,
    pub one_way_shear: Vec<u32>,
    pub two_way_shear: Vec<u32>,
}

/// Final groups: the union across all pedestals, ascending for export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignGroups {
    pub moment: Vec<u32>,
    pub one_way_shear: Vec<u32>,
    pub two_way_shear: Vec<u32>,
}

impl DesignGroups {
    pub fn is_empty(&self) -> bool {
        self.moment.is_empty() && self.one_way_shear.is_empty() && self.two_way_shear.is_empty()
    }

    /// Plate ids of one group, ascending
    pub fn plates(&self, kind: GroupKind) -> &[u32] {
        match kind {
            GroupKind::Moment => &self.moment,
            GroupKind::OneWayShear => &self.one_way_shear,
            GroupKind::TwoWayShear => &self.two_way_shear,
        }
    }
}

/// Index of the grid line nearest to `value`; first minimum wins on ties.
/// `None` only for an empty axis.
fn nearest_index(lines: &[f64], value: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &line) in lines.iter().enumerate() {
        let d = (line - value).abs();
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Unclipped half-open index range around `idx` spanning `n` plate cells,
/// widened symmetrically: `[floor(idx - n/2), ceil(idx + n/2))`.
fn centered_range(idx: usize, n: f64) -> (i64, i64) {
    let half = n / 2.0;
    let start = (idx as f64 - half).floor() as i64;
    let end = (idx as f64 + half).ceil() as i64;
    (start, end)
}

/// Clip an unclipped range to the valid cell indices of one axis.
fn clip(range: (i64, i64), cells: usize) -> std::ops::Range<usize> {
    let start = range.0.max(0) as usize;
    let end = range.1.clamp(0, cells as i64) as usize;
    start..end.max(start)
}

/// Collect plate ids over the cartesian product of two cell ranges.
fn collect_plates(
    mesh: &FoundationMesh,
    x_range: std::ops::Range<usize>,
    z_range: std::ops::Range<usize>,
) -> Vec<u32> {
    let mut ids = Vec::new();
    for zi in z_range {
        for xi in x_range.clone() {
            if let Some(id) = mesh.plate_at(xi, zi) {
                ids.push(id);
            }
        }
    }
    ids.sort_unstable();
    ids
}

/// Classify the plates around one pedestal.
///
/// An empty axis resolves to no ranges and an empty classification; this is
/// a defined no-op, never a panic.
pub fn classify_pedestal(
    pedestal: &Pedestal,
    grid: &GridLines,
    mesh: &FoundationMesh,
    mesh_size: f64,
    plate_thickness: f64,
) -> PedestalGroups {
    let empty = PedestalGroups {
        pedestal_id: pedestal.id,
        moment: Vec::new(),
        one_way_shear: Vec::new(),
        two_way_shear: Vec::new(),
    };

    let (x_idx, z_idx) = match (
        nearest_index(&grid.x_lines, pedestal.x),
        nearest_index(&grid.z_lines, pedestal.z),
    ) {
        (Some(x), Some(z)) => (x, z),
        _ => return empty,
    };

    let nx = (pedestal.length / mesh_size).round();
    let nz = (pedestal.width / mesh_size).round();
    let x_moment = centered_range(x_idx, nx);
    let z_moment = centered_range(z_idx, nz);

    let one_way_pad = (plate_thickness / mesh_size).round() as i64;
    let two_way_pad = (plate_thickness / (2.0 * mesh_size)).round() as i64;
    let expand = |(start, end): (i64, i64), pad: i64| (start - pad, end + pad);

    let x_cells = grid.x_cells();
    let z_cells = grid.z_cells();

    let moment = collect_plates(mesh, clip(x_moment, x_cells), clip(z_moment, z_cells));
    let one_way_shear = collect_plates(
        mesh,
        clip(expand(x_moment, one_way_pad), x_cells),
        clip(expand(z_moment, one_way_pad), z_cells),
    );
    let two_way_shear = collect_plates(
        mesh,
        clip(expand(x_moment, two_way_pad), x_cells),
        clip(expand(z_moment, two_way_pad), z_cells),
    );

    debug!(
        "pedestal {} classified: {} moment, {} one-way, {} two-way plates",
        pedestal.id,
        moment.len(),
        one_way_shear.len(),
        two_way_shear.len()
    );

    PedestalGroups {
        pedestal_id: pedestal.id,
        moment,
        one_way_shear,
        two_way_shear,
    }
}

/// Classify every pedestal and union the per-pedestal sets into the three
/// final design groups.
pub fn build_groups(
    pedestals: &[Pedestal],
    grid: &GridLines,
    mesh: &FoundationMesh,
    mesh_size: f64,
    plate_thickness: f64,
) -> (Vec<PedestalGroups>, DesignGroups) {
    let per_pedestal: Vec<PedestalGroups> = pedestals
        .iter()
        .map(|p| classify_pedestal(p, grid, mesh, mesh_size, plate_thickness))
        .collect();

    let union = |select: fn(&PedestalGroups) -> &Vec<u32>| -> Vec<u32> {
        let set: BTreeSet<u32> = per_pedestal
            .iter()
            .flat_map(|g| select(g).iter().copied())
            .collect();
        set.into_iter().collect()
    };

    let groups = DesignGroups {
        moment: union(|g| &g.moment),
        one_way_shear: union(|g| &g.one_way_shear),
        two_way_shear: union(|g| &g.two_way_shear),
    };

    (per_pedestal, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FaceOrientation;

    fn setup(pedestals: Vec<Pedestal>) -> (Vec<Pedestal>, GridLines, FoundationMesh) {
        let grid = GridLines::build(6.0, 4.0, 0.25, &pedestals);
        let mesh = FoundationMesh::synthesize(&grid, &pedestals, 0.5, FaceOrientation::Down);
        (pedestals, grid, mesh)
    }

    #[test]
    fn test_nearest_index_first_minimum_wins() {
        let lines = [0.0, 1.0, 2.0];
        assert_eq!(nearest_index(&lines, 0.5), Some(0));
        assert_eq!(nearest_index(&lines, 1.4), Some(1));
        assert_eq!(nearest_index(&lines, 99.0), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn test_even_span_moment_range() {
        // length/mesh = 0.5/0.25 = 2 exactly: two cells centered on the index.
        let (pedestals, grid, mesh) = setup(vec![Pedestal::new(1, 3.0, 2.0, 0.5, 0.5)]);
        let groups = classify_pedestal(&pedestals[0], &grid, &mesh, 0.25, 0.0);
        assert_eq!(groups.moment.len(), 4);
    }

    #[test]
    fn test_odd_span_widens_by_one() {
        // length/mesh = 0.75/0.25 = 3: floor/ceil widen the range to 4 cells.
        let (pedestals, grid, mesh) = setup(vec![Pedestal::new(1, 3.0, 2.0, 0.75, 0.5)]);
        let groups = classify_pedestal(&pedestals[0], &grid, &mesh, 0.25, 0.0);
        assert_eq!(groups.moment.len(), 4 * 2);
    }

    #[test]
    fn test_shear_bands_contain_moment_set() {
        let (pedestals, grid, mesh) = setup(vec![Pedestal::new(1, 3.0, 2.0, 0.5, 0.5)]);
        let groups = classify_pedestal(&pedestals[0], &grid, &mesh, 0.25, 0.25);
        for id in &groups.moment {
            assert!(groups.one_way_shear.contains(id));
            assert!(groups.two_way_shear.contains(id));
        }
        // pad = round(0.25/0.25) = 1 cell each way: (2+2)^2 cells.
        assert_eq!(groups.one_way_shear.len(), 16);
        // pad = round(0.25/0.5) = 1 as well (0.5 rounds away from zero).
        assert_eq!(groups.two_way_shear.len(), 16);
    }

    #[test]
    fn test_range_clipped_at_plan_edge() {
        // Pedestal in the corner: half the footprint falls outside the plan.
        let (pedestals, grid, mesh) = setup(vec![Pedestal::new(1, 0.0, 0.0, 0.5, 0.5)]);
        let groups = classify_pedestal(&pedestals[0], &grid, &mesh, 0.25, 0.0);
        assert_eq!(groups.moment.len(), 1);
    }

    #[test]
    fn test_union_across_pedestals_is_sorted_and_deduplicated() {
        let (pedestals, grid, mesh) = setup(vec![
            Pedestal::new(1, 3.0, 2.0, 0.5, 0.5),
            Pedestal::new(2, 3.25, 2.0, 0.5, 0.5),
        ]);
        let (per_pedestal, groups) = build_groups(&pedestals, &grid, &mesh, 0.25, 0.0);
        assert_eq!(per_pedestal.len(), 2);
        let total: usize = per_pedestal.iter().map(|g| g.moment.len()).sum();
        assert!(groups.moment.len() < total, "overlap must deduplicate");
        for pair in groups.moment.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_empty_grid_contributes_nothing() {
        let grid = GridLines {
            x_lines: Vec::new(),
            z_lines: Vec::new(),
        };
        let mesh = FoundationMesh::synthesize(&grid, &[], 0.0, FaceOrientation::Down);
        let pedestal = Pedestal::new(1, 3.0, 2.0, 0.5, 0.5);
        let groups = classify_pedestal(&pedestal, &grid, &mesh, 0.25, 0.25);
        assert!(groups.moment.is_empty());
        assert!(groups.one_way_shear.is_empty());
        assert!(groups.two_way_shear.is_empty());
    }
}
