//! Plan snapshot and pipeline entry point
//!
//! [`PlanSnapshot`] is the immutable input bundle the presentation layer
//! hands over on every change; [`FoundationModel::generate`] runs the whole
//! grid → mesh → classification pipeline over it and returns a new immutable
//! result. The pipeline holds no state between calls.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::bounds::{bounding_box, GroupBounds};
use crate::elements::Pedestal;
use crate::error::{MeshError, MeshResult};
use crate::grid::GridLines;
use crate::groups::{build_groups, DesignGroups, PedestalGroups};
use crate::mesh::{FaceOrientation, FoundationMesh};
use crate::staad::StaadGenerator;

/// The full input state of one computation: plan, mesh controls, pedestals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// Plan extent along X
    pub length: f64,
    /// Plan extent along Z
    pub width: f64,
    /// Target mesh step
    pub mesh_size: f64,
    /// Pedestal height; at or below 1e-9 no pedestal nodes are generated
    pub pedestal_height: f64,
    /// Shell plate thickness
    pub plate_thickness: f64,
    /// Plate winding direction
    pub orientation: FaceOrientation,
    /// User-placed pedestals
    pub pedestals: Vec<Pedestal>,
}

impl PlanSnapshot {
    /// Create a snapshot for an empty plan. Dimensions and the mesh step
    /// must be positive.
    pub fn new(length: f64, width: f64, mesh_size: f64, plate_thickness: f64) -> MeshResult<Self> {
        for (field, value) in [
            ("length", length),
            ("width", width),
            ("mesh_size", mesh_size),
            ("plate_thickness", plate_thickness),
        ] {
            if value <= 0.0 {
                return Err(MeshError::InvalidDimension { field, value });
            }
        }
        Ok(Self {
            length,
            width,
            mesh_size,
            pedestal_height: 0.0,
            plate_thickness,
            orientation: FaceOrientation::Down,
            pedestals: Vec::new(),
        })
    }

    /// Set the pedestal height (non-negative).
    pub fn with_pedestal_height(mut self, height: f64) -> MeshResult<Self> {
        if height < 0.0 {
            return Err(MeshError::NegativeHeight(height));
        }
        self.pedestal_height = height;
        Ok(self)
    }

    /// Set the plate winding direction.
    pub fn with_orientation(mut self, orientation: FaceOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Add a pedestal. Ids must be unique, footprint dimensions positive,
    /// and the center inside the plan.
    pub fn add_pedestal(&mut self, pedestal: Pedestal) -> MeshResult<()> {
        if self.pedestals.iter().any(|p| p.id == pedestal.id) {
            return Err(MeshError::DuplicatePedestal(pedestal.id));
        }
        if pedestal.length <= 0.0 {
            return Err(MeshError::InvalidDimension {
                field: "pedestal.length",
                value: pedestal.length,
            });
        }
        if pedestal.width <= 0.0 {
            return Err(MeshError::InvalidDimension {
                field: "pedestal.width",
                value: pedestal.width,
            });
        }
        if pedestal.x < 0.0
            || pedestal.x > self.length
            || pedestal.z < 0.0
            || pedestal.z > self.width
        {
            return Err(MeshError::PedestalOutOfBounds {
                id: pedestal.id,
                x: pedestal.x,
                z: pedestal.z,
                length: self.length,
                width: self.width,
            });
        }
        self.pedestals.push(pedestal);
        Ok(())
    }

    /// Remove a pedestal by id.
    pub fn remove_pedestal(&mut self, id: u32) -> MeshResult<()> {
        let before = self.pedestals.len();
        self.pedestals.retain(|p| p.id != id);
        if self.pedestals.len() == before {
            return Err(MeshError::PedestalNotFound(id));
        }
        Ok(())
    }

    /// Remove all pedestals.
    pub fn clear_pedestals(&mut self) {
        self.pedestals.clear();
    }
}

/// The immutable result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundationModel {
    /// The input snapshot the model was generated from
    pub snapshot: PlanSnapshot,
    /// Axis grid lines
    pub grid: GridLines,
    /// Synthesized nodes, plates, and members
    pub mesh: FoundationMesh,
    /// Per-pedestal classification, in pedestal order
    pub pedestal_groups: Vec<PedestalGroups>,
    /// Unioned design groups for export
    pub groups: DesignGroups,
}

impl FoundationModel {
    /// Run the full pipeline over a snapshot.
    pub fn generate(snapshot: &PlanSnapshot) -> Self {
        let grid = GridLines::build(
            snapshot.length,
            snapshot.width,
            snapshot.mesh_size,
            &snapshot.pedestals,
        );
        let mesh = FoundationMesh::synthesize(
            &grid,
            &snapshot.pedestals,
            snapshot.pedestal_height,
            snapshot.orientation,
        );
        let (pedestal_groups, groups) = build_groups(
            &snapshot.pedestals,
            &grid,
            &mesh,
            snapshot.mesh_size,
            snapshot.plate_thickness,
        );
        info!(
            "model generated: {} nodes, {} plates, {} members, {} grouped plates",
            mesh.nodes.len(),
            mesh.plates.len(),
            mesh.members.len(),
            groups.moment.len() + groups.one_way_shear.len() + groups.two_way_shear.len()
        );
        Self {
            snapshot: snapshot.clone(),
            grid,
            mesh,
            pedestal_groups,
            groups,
        }
    }

    /// Render the STAAD input deck with the given header date.
    pub fn to_staad(&self, date: NaiveDate) -> String {
        StaadGenerator::new().generate(
            &self.mesh,
            &self.groups,
            self.snapshot.plate_thickness,
            &self.snapshot.pedestals,
            date,
        )
    }

    /// The three visualization rectangles for one pedestal, or `None` for an
    /// unknown id.
    pub fn group_bounds(&self, pedestal_id: u32) -> Option<GroupBounds> {
        let groups = self
            .pedestal_groups
            .iter()
            .find(|g| g.pedestal_id == pedestal_id)?;
        Some(GroupBounds {
            moment: bounding_box(&groups.moment, &self.mesh),
            one_way_shear: bounding_box(&groups.one_way_shear, &self.mesh),
            two_way_shear: bounding_box(&groups.two_way_shear, &self.mesh),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_validation() {
        assert!(PlanSnapshot::new(0.0, 4.0, 0.2, 0.25).is_err());
        assert!(PlanSnapshot::new(6.0, 4.0, -0.2, 0.25).is_err());
        assert!(PlanSnapshot::new(6.0, 4.0, 0.2, 0.25).is_ok());
        assert!(PlanSnapshot::new(6.0, 4.0, 0.2, 0.25)
            .unwrap()
            .with_pedestal_height(-1.0)
            .is_err());
    }

    #[test]
    fn test_pedestal_validation() {
        let mut plan = PlanSnapshot::new(6.0, 4.0, 0.2, 0.25).unwrap();
        plan.add_pedestal(Pedestal::new(1, 3.0, 2.0, 0.5, 0.3)).unwrap();
        assert!(matches!(
            plan.add_pedestal(Pedestal::new(1, 1.0, 1.0, 0.5, 0.3)),
            Err(MeshError::DuplicatePedestal(1))
        ));
        assert!(matches!(
            plan.add_pedestal(Pedestal::new(2, 7.0, 2.0, 0.5, 0.3)),
            Err(MeshError::PedestalOutOfBounds { id: 2, .. })
        ));
        assert!(plan
            .add_pedestal(Pedestal::new(3, 1.0, 1.0, 0.0, 0.3))
            .is_err());
        assert!(plan.remove_pedestal(1).is_ok());
        assert!(matches!(
            plan.remove_pedestal(1),
            Err(MeshError::PedestalNotFound(1))
        ));
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut plan = PlanSnapshot::new(6.0, 4.0, 0.2, 0.25).unwrap();
        plan.add_pedestal(Pedestal::new(1, 3.0, 2.0, 0.5, 0.3)).unwrap();
        let plan = plan.with_pedestal_height(0.5).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let restored: PlanSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.pedestals.len(), 1);
        assert_eq!(restored.pedestal_height, 0.5);
        assert_eq!(restored.orientation, FaceOrientation::Down);
    }

    #[test]
    fn test_group_bounds_per_pedestal() {
        let mut plan = PlanSnapshot::new(6.0, 4.0, 0.2, 0.3).unwrap();
        plan.add_pedestal(Pedestal::new(1, 3.0, 2.0, 0.5, 0.5)).unwrap();
        let plan = plan.with_pedestal_height(0.5).unwrap();
        let model = FoundationModel::generate(&plan);

        let bounds = model.group_bounds(1).unwrap();
        let moment = bounds.moment.unwrap();
        let one_way = bounds.one_way_shear.unwrap();
        assert!(one_way.width > moment.width);
        assert!(one_way.height > moment.height);
        assert!(model.group_bounds(99).is_none());
    }
}
