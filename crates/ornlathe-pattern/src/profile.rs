//! Cutter-tip cross-section profiles.

use serde::{Deserialize, Serialize};

/// Sentinel depth meaning "no cutter material at this offset".
///
/// Engagement code must short-circuit on this value without further
/// arithmetic.
pub const NO_MATERIAL: f64 = -1.0;

/// The cross-section shape of a cutter tip.
///
/// [`profile_at`](Self::profile_at) answers: at a signed offset from
/// the tip center, how far above the tip plane does the cutter surface
/// sit? Zero at the deepest point of the tip, rising toward the rim,
/// [`NO_MATERIAL`] beyond the rod radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TipProfile {
    /// Square tip: full depth across the whole rod width.
    Flat,
    /// Hemispherical tip.
    Round,
    /// Ideal point: material only at the exact center. Used for
    /// degenerate scribing cutters.
    Point,
    /// V-shaped tip with the given half-angle in degrees, measured
    /// from the cutter axis.
    Vee {
        /// Half-angle of the vee in degrees, clamped into `[1, 89]`.
        half_angle: f64,
    },
}

impl TipProfile {
    /// Height of the cutter surface above the tip plane at signed
    /// offset `distance` from the tip center, for a rod of radius
    /// `rod_radius`. Returns [`NO_MATERIAL`] beyond the rod radius.
    pub fn profile_at(&self, distance: f64, rod_radius: f64) -> f64 {
        let d = distance.abs();
        if rod_radius <= 0.0 {
            // Degenerate rod: only the exact center has material.
            return if d == 0.0 { 0.0 } else { NO_MATERIAL };
        }
        if d > rod_radius {
            return NO_MATERIAL;
        }
        match self {
            TipProfile::Flat => 0.0,
            TipProfile::Round => rod_radius - (rod_radius * rod_radius - d * d).sqrt(),
            TipProfile::Point => {
                if d == 0.0 {
                    0.0
                } else {
                    NO_MATERIAL
                }
            }
            TipProfile::Vee { half_angle } => {
                let half_angle = half_angle.clamp(1.0, 89.0);
                d / half_angle.to_radians().tan()
            }
        }
    }
}
