#![warn(missing_docs)]

//! Ornamental-lathe surface simulation kernel.
//!
//! Facade over the kernel crates: math types, the periodic pattern and
//! profile library, cutter descriptors, and the revolved surface with
//! its engagement algorithms.
//!
//! # Example
//!
//! ```
//! use ornlathe::{Cutter, CutPoint, Frame, OutlineCurve, SurfaceManager, TipProfile};
//!
//! let mut manager = SurfaceManager::new();
//! manager.set_outline(
//!     OutlineCurve::from_pairs(&[(1.0, 0.0), (1.0, 1.0)]),
//!     false,
//! );
//! let cutter = Cutter::new(Frame::Hcf, TipProfile::Round, 0.25, 0.1);
//! manager.set_cuts(vec![CutPoint::new(cutter, 1.0, 0.5)]);
//! assert_eq!(manager.with_mesh(|mesh| mesh.len()), 2);
//! ```

pub use ornlathe_cutter;
pub use ornlathe_math;
pub use ornlathe_pattern;
pub use ornlathe_surface;

pub use ornlathe_cutter::{Cutter, Frame, Location};
pub use ornlathe_math::{Axis, Curve3D, Point3, RotationMatrix, Vec3};
pub use ornlathe_pattern::{
    Pattern, PatternError, PatternInstance, PatternRegistry, TipProfile, NO_MATERIAL,
};
pub use ornlathe_surface::{
    CutPoint, OutlineCurve, OutlinePoint, RebuildEvent, RevolvedMesh, SurfaceManager, SECTORS,
};
