#![warn(missing_docs)]

//! Math types for the ornlathe surface kernel.
//!
//! Thin wrappers around nalgebra providing the lathe-specific types:
//! 3D points, axis rotations in degrees, and mutable 3D polylines used
//! for toolpath display.
//!
//! Coordinate convention: `x` and `y` span the radial plane, `z` is the
//! spindle axis. A positive rotation angle turns clockwise as seen
//! looking along the positive axis toward the origin, which matches the
//! direction the spindle sectors advance.

use nalgebra::{Matrix3, Vector3};

/// A point in 3D lathe coordinates.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D lathe coordinates.
pub type Vec3 = Vector3<f64>;

/// A coordinate axis of the lathe frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Radial axis in the cutting plane.
    X,
    /// Radial axis perpendicular to the cutting plane.
    Y,
    /// The spindle axis.
    Z,
}

/// A rigid rotation about one of the lathe axes.
///
/// Constructed once and applied to many points; construction does the
/// trigonometry, application is a matrix multiply.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMatrix {
    matrix: Matrix3<f64>,
}

impl RotationMatrix {
    /// Rotation about `axis` by `degrees`.
    ///
    /// Positive angles rotate clockwise as seen looking along the
    /// positive axis toward the origin.
    pub fn about(axis: Axis, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let matrix = match axis {
            Axis::X => Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, c, s, //
                0.0, -s, c,
            ),
            Axis::Y => Matrix3::new(
                c, 0.0, -s, //
                0.0, 1.0, 0.0, //
                s, 0.0, c,
            ),
            Axis::Z => Matrix3::new(
                c, s, 0.0, //
                -s, c, 0.0, //
                0.0, 0.0, 1.0,
            ),
        };
        Self { matrix }
    }

    /// Rotate a point about the origin.
    pub fn apply(&self, p: &Point3) -> Point3 {
        Point3::from(self.matrix * p.coords)
    }

    /// Rotate a vector.
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.matrix * v
    }
}

/// An ordered, mutable sequence of 3D points.
///
/// Used for rendering toolpaths and construction curves; the revolved
/// surface mesh has its own grid type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve3D {
    points: Vec<Point3>,
}

impl Curve3D {
    /// Create a curve from an ordered list of points.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Append a point to the end of the curve.
    pub fn push(&mut self, p: Point3) {
        self.points.push(p);
    }

    /// Rotate every point in place.
    pub fn rotate(&mut self, rot: &RotationMatrix) {
        for p in &mut self.points {
            *p = rot.apply(p);
        }
    }

    /// Translate every point in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        let d = Vec3::new(dx, dy, dz);
        for p in &mut self.points {
            *p += d;
        }
    }

    /// Uniformly scale every point about the origin, in place.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.points {
            p.coords *= factor;
        }
    }
}
