//! Member element - a vertical line element from a surface node to a pedestal node

use serde::{Deserialize, Serialize};

/// A vertical member linking a surface node to the pedestal node above it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// 1-based member id, assigned in creation order
    pub id: u32,
    /// Surface node id (start)
    pub start_node: u32,
    /// Pedestal node id (end)
    pub end_node: u32,
    /// Originating pedestal; resolved at export time to recover the
    /// prismatic section dimensions (YD/ZD)
    pub pedestal_id: u32,
}

impl Member {
    /// Create a new member
    pub fn new(id: u32, start_node: u32, end_node: u32, pedestal_id: u32) -> Self {
        Self {
            id,
            start_node,
            end_node,
            pedestal_id,
        }
    }
}
