//! The 2D outline a workpiece is revolved from.

use serde::{Deserialize, Serialize};

/// One point of the outline: `x` is the radial distance from the
/// spindle axis, `y` the axial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlinePoint {
    /// Radial distance from the spindle axis.
    pub x: f64,
    /// Axial position along the spindle.
    pub y: f64,
}

impl OutlinePoint {
    /// Create an outline point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered outline curve, monotonic in `y` by the owner's contract.
///
/// The outline itself belongs to the document layer; this type is the
/// numeric view the surface kernel revolves. An empty curve is valid
/// and produces an empty mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineCurve {
    points: Vec<OutlinePoint>,
}

impl OutlineCurve {
    /// Create a curve from ordered points.
    pub fn new(points: Vec<OutlinePoint>) -> Self {
        Self { points }
    }

    /// Create a curve from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| OutlinePoint::new(x, y)).collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points.
    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }
}
