//! Raft Mesher - foundation mesh synthesis with STAAD.Pro export
//!
//! This library turns a rectangular surface plan, a set of rectangular
//! pedestals, and a target mesh size into a structural finite-element model
//! (nodes, shell plates, vertical pedestal members) and serializes it into a
//! STAAD.Pro input deck. It supports:
//! - Grid construction respecting pedestal centers as hard cut points
//! - Quad shell meshing with selectable face orientation
//! - Moment / one-way shear / two-way shear design-group classification
//! - Per-group bounding rectangles for visualization
//! - Fixed-format STAAD text export with column-limited packing
//!
//! It produces geometry and topology only; it is not a solver.
//!
//! ## Example
//! ```rust
//! use raft_mesher::prelude::*;
//!
//! // Describe the plan
//! let mut plan = PlanSnapshot::new(6.0, 4.0, 0.2, 0.25).unwrap();
//! plan.add_pedestal(Pedestal::new(1, 3.0, 2.0, 0.5, 0.3)).unwrap();
//! let plan = plan.with_pedestal_height(0.5).unwrap();
//!
//! // Run the pipeline
//! let model = FoundationModel::generate(&plan);
//! assert_eq!(model.mesh.members.len(), 1);
//!
//! // Render the deck (the header date is injected, never read from the clock)
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let deck = model.to_staad(date);
//! assert!(deck.starts_with("STAAD SPACE"));
//! ```

pub mod bounds;
pub mod elements;
pub mod error;
pub mod grid;
pub mod groups;
pub mod mesh;
pub mod model;
pub mod staad;

// Re-export common types
pub mod prelude {
    pub use crate::bounds::{bounding_box, GroupBounds, Rect};
    pub use crate::elements::{Member, Node, NodeKind, Pedestal, Plate};
    pub use crate::error::{MeshError, MeshResult};
    pub use crate::grid::GridLines;
    pub use crate::groups::{DesignGroups, GroupKind, PedestalGroups};
    pub use crate::mesh::{FaceOrientation, FoundationMesh};
    pub use crate::model::{FoundationModel, PlanSnapshot};
    pub use crate::staad::StaadGenerator;
}
