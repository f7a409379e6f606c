#![warn(missing_docs)]

//! Revolved surface mesh and cutter engagement for ornlathe.
//!
//! This crate is the geometric heart of the lathe simulation: it
//! revolves a 2D outline into a discretized surface of revolution
//! (one grid column per degree of spindle rotation) and deforms that
//! surface as virtual cutters engage the spinning blank.
//!
//! # Example
//!
//! ```
//! use ornlathe_cutter::{Cutter, Frame};
//! use ornlathe_pattern::TipProfile;
//! use ornlathe_surface::{CutPoint, OutlineCurve, SurfaceManager};
//!
//! let mut manager = SurfaceManager::new();
//! manager.set_outline(
//!     OutlineCurve::from_pairs(&[(1.0, 0.0), (1.0, 1.0)]),
//!     false,
//! );
//!
//! let cutter = Cutter::new(Frame::Hcf, TipProfile::Round, 0.25, 0.1);
//! manager.set_cuts(vec![CutPoint::new(cutter, 1.0, 0.5)]);
//!
//! manager.with_mesh(|mesh| {
//!     assert_eq!(mesh.len(), 2);
//!     assert_eq!(mesh.num_sectors(), 360);
//! });
//! ```

mod engage;
mod manager;
mod mesh;
mod outline;

pub use manager::{CutPoint, RebuildEvent, SurfaceManager};
pub use mesh::{RevolvedMesh, SECTORS};
pub use outline::{OutlineCurve, OutlinePoint};
