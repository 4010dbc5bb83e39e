//! Pedestal - a rectangular footing footprint placed on the surface plan

use serde::{Deserialize, Serialize};

/// A rectangular pedestal (footing) centered at (x, z) on the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedestal {
    /// 1-based pedestal id, unique within a plan
    pub id: u32,
    /// Center X coordinate
    pub x: f64,
    /// Center Z coordinate
    pub z: f64,
    /// Footprint dimension along X
    pub length: f64,
    /// Footprint dimension along Z
    pub width: f64,
}

impl Pedestal {
    /// Create a new pedestal
    pub fn new(id: u32, x: f64, z: f64, length: f64, width: f64) -> Self {
        Self {
            id,
            x,
            z,
            length,
            width,
        }
    }

    /// Center coordinates as (x, z)
    pub fn center(&self) -> (f64, f64) {
        (self.x, self.z)
    }
}
