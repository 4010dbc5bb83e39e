//! Plate element - a quadrilateral shell spanning one grid cell

use serde::{Deserialize, Serialize};

/// A 4-node shell element over a grid cell
///
/// The node order encodes the face orientation: reversing the cycle flips
/// the element normal for the analysis tool's sign convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plate {
    /// 1-based plate id, assigned in cell scan order
    pub id: u32,
    /// Corner node ids in winding order
    pub nodes: [u32; 4],
}

impl Plate {
    /// Create a new plate from its corner node ids
    pub fn new(id: u32, nodes: [u32; 4]) -> Self {
        Self { id, nodes }
    }
}
