//! Group bounding rectangles
//!
//! Derives an axis-aligned plan rectangle from a set of classified plates,
//! for the visualization layer. Read-only over the mesh.

use serde::{Deserialize, Serialize};

use crate::mesh::FoundationMesh;

/// An axis-aligned rectangle in plan coordinates.
///
/// `x`/`y` hold the minimum X and Z corner; the Y name follows the 2-D
/// screen convention of the consuming renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The three per-pedestal group rectangles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupBounds {
    pub moment: Option<Rect>,
    pub one_way_shear: Option<Rect>,
    pub two_way_shear: Option<Rect>,
}

/// Bounding rectangle of a plate set, spanning the min/max X and Z of all
/// corner nodes. `None` for an empty set.
pub fn bounding_box(plate_ids: &[u32], mesh: &FoundationMesh) -> Option<Rect> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    let mut any = false;

    for &plate_id in plate_ids {
        let Some(plate) = mesh.plate(plate_id) else {
            continue;
        };
        for &node_id in &plate.nodes {
            let Some(node) = mesh.node(node_id) else {
                continue;
            };
            min_x = min_x.min(node.x);
            max_x = max_x.max(node.x);
            min_z = min_z.min(node.z);
            max_z = max_z.max(node.z);
            any = true;
        }
    }

    any.then(|| Rect {
        x: min_x,
        y: min_z,
        width: max_x - min_x,
        height: max_z - min_z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridLines;
    use crate::mesh::FaceOrientation;

    fn mesh_6x4() -> FoundationMesh {
        let grid = GridLines::build(6.0, 4.0, 0.2, &[]);
        FoundationMesh::synthesize(&grid, &[], 0.0, FaceOrientation::Down)
    }

    #[test]
    fn test_empty_set_has_no_box() {
        let mesh = mesh_6x4();
        assert!(bounding_box(&[], &mesh).is_none());
    }

    #[test]
    fn test_single_plate_box_is_its_cell() {
        let mesh = mesh_6x4();
        let rect = bounding_box(&[1], &mesh).unwrap();
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert!((rect.width - 0.2).abs() < 1e-12);
        assert!((rect.height - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_box_spans_all_plates() {
        let mesh = mesh_6x4();
        // Plates 1 and 33: cells (0,0) and (2,1).
        let rect = bounding_box(&[1, 33], &mesh).unwrap();
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert!((rect.width - 0.6).abs() < 1e-12);
        assert!((rect.height - 0.4).abs() < 1e-12);
    }
}
