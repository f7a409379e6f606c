//! The revolved surface mesh.

use std::f64::consts::PI;

use ornlathe_math::{Axis, Point3, RotationMatrix, Vec3};

use crate::outline::OutlineCurve;

/// Angular subdivisions of the revolved surface: one per degree.
pub const SECTORS: usize = 360;

/// The discretized surface of revolution.
///
/// A rectangular grid indexed by `[curve point][sector]`. Cell `(i, j)`
/// is constructed at sector angle `-j * 360 / SECTORS` degrees;
/// engagement displaces the stored coordinates but never re-indexes a
/// cell. The mesh is destroyed and rebuilt wholesale whenever the
/// outline changes, and mutated in place by each engagement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RevolvedMesh {
    pub(crate) grid: Vec<Vec<Point3>>,
    inside: bool,
}

impl RevolvedMesh {
    /// An empty mesh (no outline yet). A valid, renderable state.
    pub fn empty(inside: bool) -> Self {
        Self {
            grid: Vec::new(),
            inside,
        }
    }

    /// Revolve `outline` about the spindle axis into a clean
    /// (uncut) mesh.
    ///
    /// For outline point `i` at radial distance `r` and axial `y`,
    /// sector `j` lands at angle `theta = -2*pi*j/SECTORS` (negative to
    /// match the physical spindle direction):
    /// `(|r|*cos(theta), |r|*sin(theta), y)`. The absolute value keeps
    /// a consistent angular origin when the outline crosses the axis.
    pub fn build_clean(outline: &OutlineCurve, inside: bool) -> Self {
        let mut grid = Vec::with_capacity(outline.len());
        for op in outline.points() {
            let r = op.x.abs();
            let mut ring = Vec::with_capacity(SECTORS);
            for j in 0..SECTORS {
                let theta = -2.0 * PI * j as f64 / SECTORS as f64;
                ring.push(Point3::new(r * theta.cos(), r * theta.sin(), op.y));
            }
            grid.push(ring);
        }
        Self { grid, inside }
    }

    /// Number of curve points (grid rows).
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// True if the mesh has no points.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Number of angular sectors (grid columns).
    pub fn num_sectors(&self) -> usize {
        SECTORS
    }

    /// Whether this mesh was revolved from the inside outline.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// The point at curve index `i`, sector `j`.
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        self.grid[i][j]
    }

    /// Borrow the point grid, one row per curve point, for
    /// triangulation.
    pub fn points(&self) -> &[Vec<Point3>] {
        &self.grid
    }

    /// Distance of cell `(i, j)` from the spindle axis.
    pub fn distance_from_axis(&self, i: usize, j: usize) -> f64 {
        let p = &self.grid[i][j];
        p.x.hypot(p.y)
    }

    /// Rotate the whole mesh about the spindle axis, in place.
    /// Display helper; does not re-derive from the outline.
    pub fn rotate_z(&mut self, degrees: f64) {
        self.transform(&RotationMatrix::about(Axis::Z, degrees));
    }

    /// Rotate the whole mesh about the Y axis, in place.
    pub fn rotate_y(&mut self, degrees: f64) {
        self.transform(&RotationMatrix::about(Axis::Y, degrees));
    }

    /// Translate the whole mesh, in place.
    pub fn offset(&mut self, dx: f64, dy: f64, dz: f64) {
        let d = Vec3::new(dx, dy, dz);
        for row in &mut self.grid {
            for p in row {
                *p += d;
            }
        }
    }

    fn transform(&mut self, rot: &RotationMatrix) {
        for row in &mut self.grid {
            for p in row {
                *p = rot.apply(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder() -> OutlineCurve {
        OutlineCurve::from_pairs(&[(1.0, 0.0), (1.0, 1.0)])
    }

    #[test]
    fn test_empty_outline_empty_mesh() {
        let mesh = RevolvedMesh::build_clean(&OutlineCurve::default(), false);
        assert!(mesh.is_empty());
        assert_eq!(mesh.len(), 0);
    }

    #[test]
    fn test_cylinder_landmarks() {
        let mesh = RevolvedMesh::build_clean(&cylinder(), false);
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.num_sectors(), SECTORS);
        assert_eq!(mesh.points().len(), 2);
        assert_eq!(mesh.points()[0].len(), SECTORS);

        let p0 = mesh.point(0, 0);
        assert_relative_eq!(p0.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p0.z, 0.0, epsilon = 1e-9);

        // Sectors advance in the negative angular direction: a quarter
        // turn lands at (0, -1), three quarters at (0, 1).
        let p90 = mesh.point(0, 90);
        assert_relative_eq!(p90.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p90.y, -1.0, epsilon = 1e-9);
        assert_relative_eq!(p90.z, 0.0, epsilon = 1e-9);

        let p270 = mesh.point(0, 270);
        assert_relative_eq!(p270.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p270.y, 1.0, epsilon = 1e-9);

        let top = mesh.point(1, 45);
        assert_relative_eq!(top.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_revolution_symmetry() {
        let outline = OutlineCurve::from_pairs(&[(0.5, 0.0), (1.25, 0.5), (0.75, 1.0)]);
        let mesh = RevolvedMesh::build_clean(&outline, false);
        for (i, op) in outline.points().iter().enumerate() {
            for j in 0..SECTORS {
                assert_relative_eq!(
                    mesh.distance_from_axis(i, j),
                    op.x.abs(),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_negative_radius_folds_to_origin_angle() {
        let outline = OutlineCurve::from_pairs(&[(-0.5, 0.0)]);
        let mesh = RevolvedMesh::build_clean(&outline, false);
        let p = mesh.point(0, 0);
        assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_z_matches_sector_step() {
        // Rotating the mesh by one sector step maps each point onto the
        // constructed position of the next sector.
        let mut mesh = RevolvedMesh::build_clean(&cylinder(), false);
        let expected = mesh.point(0, 91);
        mesh.rotate_z(1.0);
        let got = mesh.point(0, 90);
        assert_relative_eq!((got - expected).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset() {
        let mut mesh = RevolvedMesh::build_clean(&cylinder(), false);
        mesh.offset(0.0, 0.0, -1.0);
        assert_relative_eq!(mesh.point(1, 0).z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.point(0, 0).z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inside_flag() {
        let mesh = RevolvedMesh::build_clean(&cylinder(), true);
        assert!(mesh.is_inside());
    }
}
