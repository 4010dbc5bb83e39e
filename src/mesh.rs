//! Mesh synthesis
//!
//! Consumes the grid arrays and pedestal list and produces the surface
//! nodes, the quad plates covering every grid cell, and one vertical member
//! per pedestal whose center lands on a grid intersection.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::{Member, Node, Pedestal, Plate};
use crate::grid::GridLines;

/// Pedestal heights at or below this generate no pedestal nodes or members.
pub const HEIGHT_EPS: f64 = 1e-9;

/// Winding direction of the plate node cycle, controlling the face normal
/// sign convention expected by the analysis tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceOrientation {
    Up,
    Down,
}

/// Fixed-point coordinate key: (x, z) rounded to 3 decimals.
///
/// Millimetre integers give exact equality where formatted-string keys
/// would be at the mercy of locale and float printing.
fn node_key(x: f64, z: f64) -> (i64, i64) {
    ((x * 1000.0).round() as i64, (z * 1000.0).round() as i64)
}

/// The synthesized finite-element mesh: nodes, shell plates, and pedestal
/// members. Geometry and topology only, no analysis quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundationMesh {
    /// All nodes, ordered by id (surface nodes first, pedestal nodes after)
    pub nodes: Vec<Node>,
    /// All plates, ordered by id (cell scan order: z outer, x inner)
    pub plates: Vec<Plate>,
    /// Pedestal members, in pedestal scan order
    pub members: Vec<Member>,

    /// Grid cell (xi, zi) to plate id, retained for the group classifier
    #[serde(skip)]
    plate_ids: HashMap<(usize, usize), u32>,
}

impl FoundationMesh {
    /// Synthesize the mesh for a grid, attaching a pedestal node and member
    /// for every pedestal whose center coincides with a surface node.
    pub fn synthesize(
        grid: &GridLines,
        pedestals: &[Pedestal],
        pedestal_height: f64,
        orientation: FaceOrientation,
    ) -> Self {
        let nx = grid.x_lines.len();
        let nz = grid.z_lines.len();

        let mut nodes = Vec::with_capacity(nx * nz + pedestals.len());
        let mut lookup = HashMap::with_capacity(nx * nz);
        for (zi, &z) in grid.z_lines.iter().enumerate() {
            for (xi, &x) in grid.x_lines.iter().enumerate() {
                let id = (zi * nx + xi + 1) as u32;
                nodes.push(Node::surface(id, x, z));
                lookup.insert(node_key(x, z), id);
            }
        }

        let mut members = Vec::new();
        if pedestal_height > HEIGHT_EPS {
            let mut next_id = (nx * nz) as u32 + 1;
            for pedestal in pedestals {
                match lookup.get(&node_key(pedestal.x, pedestal.z)) {
                    Some(&surface_id) => {
                        nodes.push(Node::pedestal(
                            next_id,
                            pedestal.x,
                            pedestal_height,
                            pedestal.z,
                        ));
                        let member_id = members.len() as u32 + 1;
                        members.push(Member::new(member_id, surface_id, next_id, pedestal.id));
                        next_id += 1;
                    }
                    None => {
                        // Defined no-op: the center missed every grid
                        // intersection after 3-decimal rounding.
                        debug!(
                            "pedestal {} center ({}, {}) is off-grid, no member generated",
                            pedestal.id, pedestal.x, pedestal.z
                        );
                    }
                }
            }
        }

        let x_cells = grid.x_cells();
        let z_cells = grid.z_cells();
        let mut plates = Vec::with_capacity(x_cells * z_cells);
        let mut plate_ids = HashMap::with_capacity(x_cells * z_cells);
        for zi in 0..z_cells {
            for xi in 0..x_cells {
                let tl = (zi * nx + xi + 1) as u32;
                let tr = tl + 1;
                let bl = tl + nx as u32;
                let br = bl + 1;
                let corners = match orientation {
                    FaceOrientation::Down => [tl, tr, br, bl],
                    FaceOrientation::Up => [bl, br, tr, tl],
                };
                let id = (zi * x_cells + xi + 1) as u32;
                plates.push(Plate::new(id, corners));
                plate_ids.insert((xi, zi), id);
            }
        }

        debug!(
            "mesh synthesized: {} nodes, {} plates, {} members",
            nodes.len(),
            plates.len(),
            members.len()
        );

        Self {
            nodes,
            plates,
            members,
            plate_ids,
        }
    }

    /// Plate id at grid cell (xi, zi), if the cell exists
    pub fn plate_at(&self, xi: usize, zi: usize) -> Option<u32> {
        self.plate_ids.get(&(xi, zi)).copied()
    }

    /// Node by 1-based id
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.get((id as usize).checked_sub(1)?)
    }

    /// Plate by 1-based id
    pub fn plate(&self, id: u32) -> Option<&Plate> {
        self.plates.get((id as usize).checked_sub(1)?)
    }
}
