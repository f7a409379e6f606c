//! Cutter engagement: displacing mesh points to the cutter boundary.
//!
//! Both entry points mutate the mesh in place and are idempotent for a
//! fixed mesh and inputs: points are only ever pulled onto the cutter
//! boundary, never past it, so a second pass finds nothing left to
//! move. Engagement reads each point's current (possibly already
//! displaced) position, which makes overlapping cuts cumulative and
//! order-dependent.

use std::f64::consts::PI;

use ornlathe_cutter::{Cutter, Frame, Location};
use ornlathe_math::{Axis, Point3, RotationMatrix};

use crate::mesh::RevolvedMesh;

/// Planar distances below this count as "on the cutter axis": the
/// point is treated as already at the boundary and left alone, which
/// also keeps the scale factor finite.
const ZERO_DIST: f64 = 1e-12;

impl RevolvedMesh {
    /// Full engagement: run the cutter at `(cut_x, cut_z)` against
    /// every point of every sector.
    pub fn engage(&mut self, cutter: &Cutter, cut_x: f64, cut_z: f64) {
        match cutter.frame {
            Frame::Hcf => {
                for row in &mut self.grid {
                    for p in row {
                        hcf_displace(p, cutter, cut_x, cut_z);
                    }
                }
            }
            Frame::Ucf { angle, tilt } => {
                let fr = UcfFrame::new(angle, tilt);
                for row in &mut self.grid {
                    for p in row {
                        ucf_displace(p, cutter, &fr, cut_x, cut_z);
                    }
                }
            }
            Frame::Drill { angle } => {
                let fr = AxialFrame::new(angle);
                for row in &mut self.grid {
                    for p in row {
                        axial_displace(p, cutter, &fr, false, cut_x, cut_z);
                    }
                }
            }
            Frame::Ecf { angle } => {
                let fr = AxialFrame::new(angle);
                for row in &mut self.grid {
                    for p in row {
                        axial_displace(p, cutter, &fr, true, cut_x, cut_z);
                    }
                }
            }
        }
    }

    /// Preview engagement: cut only the angular column nearest the
    /// given spindle rotation.
    ///
    /// The column's points are swung onto the lathe ray where the
    /// cutter's engagement geometry sits (the y = 0 plane for HCF, the
    /// drill's deepest-engagement ray for Drill), run through the same
    /// point logic as the full pass, and projected back onto their
    /// constructed sector ray. One column per
    /// call keeps interactive edits responsive; it deliberately does
    /// not reproduce the full pass's cross-sector footprint, so it is
    /// never a substitute for [`engage`](Self::engage) on final output.
    /// UCF and ECF cutters have no preview path.
    pub fn engage_sector(
        &mut self,
        cutter: &Cutter,
        cut_x: f64,
        cut_z: f64,
        spindle_degrees: f64,
    ) {
        if self.is_empty() {
            return;
        }
        let sectors = self.num_sectors();
        let step = 360.0 / sectors as f64;
        let adjusted = match cutter.location {
            Location::Front => spindle_degrees,
            Location::Back => spindle_degrees + 180.0,
        };
        let j = ((adjusted / step).round() as i64).rem_euclid(sectors as i64) as usize;
        let theta = -2.0 * PI * j as f64 / sectors as f64;

        match cutter.frame {
            Frame::Hcf => {
                // The HCF rim circle lives in the y = 0 plane.
                for row in &mut self.grid {
                    fast_displace(&mut row[j], 0.0, theta, |q| {
                        hcf_displace(q, cutter, cut_x, cut_z);
                    });
                }
            }
            Frame::Drill { angle } => {
                // A drill oriented at `angle` engages deepest along the
                // lathe ray at -(90 + angle) degrees; the column must be
                // swung there, not into the HCF plane.
                let fr = AxialFrame::new(angle);
                let place = (-(90.0 + angle)).to_radians();
                for row in &mut self.grid {
                    fast_displace(&mut row[j], place, theta, |q| {
                        axial_displace(q, cutter, &fr, false, cut_x, cut_z);
                    });
                }
            }
            Frame::Ucf { .. } | Frame::Ecf { .. } => {}
        }
    }
}

/// HCF: the cutter swings in the radial/axial (x, z) plane, its tip
/// profile measured along the workpiece Y coordinate. A point within
/// the profile's rim circle is pulled onto that circle.
fn hcf_displace(p: &mut Point3, cutter: &Cutter, cut_x: f64, cut_z: f64) {
    let prof = cutter.profile.profile_at(p.y, cutter.rod_radius());
    if prof < 0.0 {
        return;
    }
    let rim = cutter.radius - prof;
    if rim < 0.0 {
        return;
    }
    let dx = p.x - cut_x;
    let dz = p.z - cut_z;
    let h = dx.hypot(dz);
    if h >= rim || h < ZERO_DIST {
        return;
    }
    let s = rim / h;
    p.x = cut_x + dx * s;
    p.z = cut_z + dz * s;
}

/// Precomputed rotations between lathe and UCF cutter coordinates.
///
/// Into the cutter frame: undo the tilt, then apply the orientation;
/// out of it, the exact inverse.
struct UcfFrame {
    to_y: RotationMatrix,
    to_z: RotationMatrix,
    from_z: RotationMatrix,
    from_y: RotationMatrix,
}

impl UcfFrame {
    fn new(angle: f64, tilt: f64) -> Self {
        Self {
            to_y: RotationMatrix::about(Axis::Y, -tilt),
            to_z: RotationMatrix::about(Axis::Z, angle),
            from_z: RotationMatrix::about(Axis::Z, -angle),
            from_y: RotationMatrix::about(Axis::Y, tilt),
        }
    }

    fn to_local(&self, p: &Point3) -> Point3 {
        self.to_z.apply(&self.to_y.apply(p))
    }

    fn from_local(&self, p: &Point3) -> Point3 {
        self.from_y.apply(&self.from_z.apply(p))
    }
}

/// UCF: same rim-circle pull as HCF, but in cutter-local coordinates.
/// The cutter axis maps to local Y, its swing plane to local (x, z).
fn ucf_displace(p: &mut Point3, cutter: &Cutter, fr: &UcfFrame, cut_x: f64, cut_z: f64) {
    let offset = Point3::new(p.x - cut_x, -p.y, p.z - cut_z);
    let local = fr.to_local(&offset);

    let prof = cutter.profile.profile_at(local.y, cutter.rod_radius());
    if prof < 0.0 {
        return;
    }
    let rim = cutter.radius - prof;
    if rim < 0.0 {
        return;
    }
    let h = local.x.hypot(local.z);
    if h >= rim || h < ZERO_DIST {
        return;
    }
    let s = rim / h;
    let moved = Point3::new(local.x * s, local.y, local.z * s);
    let back = fr.from_local(&moved);
    *p = Point3::new(cut_x + back.x, -back.y, cut_z + back.z);
}

/// Rotations for the axial frames (drill and edge cutter), oriented
/// about the spindle axis only.
struct AxialFrame {
    to: RotationMatrix,
    from: RotationMatrix,
}

impl AxialFrame {
    fn new(angle: f64) -> Self {
        Self {
            to: RotationMatrix::about(Axis::Z, angle),
            from: RotationMatrix::about(Axis::Z, -angle),
        }
    }
}

/// Drill and ECF: the cutter bores along its local Y axis. Points
/// inside the cutter body (above the tip plane, within its footprint)
/// are pulled down onto the tip surface. The drill cuts at the axis
/// (a hole of the rod width); the edge cutter at its swing radius
/// (a ring).
fn axial_displace(
    p: &mut Point3,
    cutter: &Cutter,
    fr: &AxialFrame,
    edge: bool,
    cut_x: f64,
    cut_z: f64,
) {
    let offset = Point3::new(p.x - cut_x, -p.y, p.z - cut_z);
    let local = fr.to.apply(&offset);
    if local.y <= 0.0 {
        // Below the tip plane: the cutter body never reaches it.
        return;
    }
    let rdist = local.x.hypot(local.z);
    let rod_r = cutter.rod_radius();
    let prof = if edge {
        if rdist < cutter.radius - rod_r || rdist > cutter.radius + rod_r {
            return;
        }
        cutter.profile.profile_at(rdist - cutter.radius, rod_r)
    } else {
        cutter.profile.profile_at(rdist, rod_r)
    };
    if prof < 0.0 || prof >= local.y {
        return;
    }
    let moved = Point3::new(local.x, prof, local.z);
    let back = fr.from.apply(&moved);
    *p = Point3::new(cut_x + back.x, -back.y, cut_z + back.z);
}

/// Swing a column point onto the lathe ray at angle `place` (at its
/// current radial distance), displace it there, and project the result
/// back onto the point's constructed sector ray at `theta`. `place` is
/// the ray where the frame's engagement geometry actually meets the
/// spinning blank, so the preview and the full pass agree on cutter
/// orientation.
fn fast_displace<F: FnOnce(&mut Point3)>(p: &mut Point3, place: f64, theta: f64, displace: F) {
    let r = p.x.hypot(p.y);
    let (ps, pc) = place.sin_cos();
    let mut q = Point3::new(r * pc, r * ps, p.z);
    displace(&mut q);
    let r_new = q.x.hypot(q.y);
    let (s, c) = theta.sin_cos();
    *p = Point3::new(r_new * c, r_new * s, q.z);
}
