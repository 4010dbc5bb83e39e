//! Node element - a mesh vertex in 3D space

use serde::{Deserialize, Serialize};

/// Where a node sits in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Vertex of the surface mesh at plan elevation (y = 0)
    Surface,
    /// Top of a pedestal, directly above a surface node
    Pedestal,
}

/// A node in the foundation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 1-based node id
    pub id: u32,
    /// X coordinate
    pub x: f64,
    /// Y coordinate (elevation)
    pub y: f64,
    /// Z coordinate
    pub z: f64,
    /// Surface or pedestal node
    pub kind: NodeKind,
}

impl Node {
    /// Create a surface node at plan elevation
    pub fn surface(id: u32, x: f64, z: f64) -> Self {
        Self {
            id,
            x,
            y: 0.0,
            z,
            kind: NodeKind::Surface,
        }
    }

    /// Create a pedestal node at the given height
    pub fn pedestal(id: u32, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            x,
            y,
            z,
            kind: NodeKind::Pedestal,
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
