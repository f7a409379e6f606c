#![warn(missing_docs)]

//! Cutter descriptors for the ornlathe surface kernel.
//!
//! A [`Cutter`] bundles everything the engagement algorithms need to
//! know about a tool: the geometric frame it is mounted in, which side
//! of the workpiece it cuts from, its swing radius, tip width, and the
//! tip cross-section profile. Cutters are immutable per use; the
//! document layer persists them as plain attributes.

use ornlathe_pattern::TipProfile;
use serde::{Deserialize, Serialize};

/// The geometric frame a cutter is mounted in.
///
/// A closed set: engagement dispatches over these variants with a
/// single match. Each variant carries only the angles its geometry
/// uses, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Frame {
    /// Horizontal cutting frame: the cutter axis is perpendicular to
    /// the spindle axis; the tip profile is measured along the
    /// workpiece Y coordinate.
    Hcf,
    /// Universal cutting frame: orientable about the spindle and
    /// tiltable out of the cutting plane.
    Ucf {
        /// Orientation about the spindle axis (Z), degrees.
        angle: f64,
        /// Tilt about Y, degrees.
        tilt: f64,
    },
    /// Drill: bores along its own axis, oriented about Z only.
    Drill {
        /// Orientation about the spindle axis (Z), degrees.
        angle: f64,
    },
    /// Edge cutting frame: cuts a ring at the cutter's swing radius
    /// rather than at a point.
    Ecf {
        /// Orientation about the spindle axis (Z), degrees.
        angle: f64,
    },
}

/// Which side of the workpiece the cutter is mounted on.
///
/// Back-mounted cutters meet the blank half a revolution later, which
/// shifts the single-sector preview engagement by 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Mounted on the front of the shape.
    Front,
    /// Mounted on the back of the shape.
    Back,
}

/// An immutable-per-use cutter descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutter {
    /// The mounting frame geometry.
    pub frame: Frame,
    /// Mount side.
    pub location: Location,
    /// Swing radius of the cutter, from its own axis to the tip.
    pub radius: f64,
    /// Width of the cutting rod (tip diameter).
    pub tip_width: f64,
    /// Tip cross-section.
    pub profile: TipProfile,
}

impl Cutter {
    /// A front-mounted cutter with the given geometry.
    pub fn new(frame: Frame, profile: TipProfile, radius: f64, tip_width: f64) -> Self {
        Self {
            frame,
            location: Location::Front,
            radius,
            tip_width,
            profile,
        }
    }

    /// Same cutter mounted on the given side.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Half the tip width: the rod radius the profile is evaluated
    /// against.
    pub fn rod_radius(&self) -> f64 {
        self.tip_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_radius() {
        let c = Cutter::new(Frame::Hcf, TipProfile::Round, 0.25, 0.1);
        assert!((c.rod_radius() - 0.05).abs() < 1e-12);
        assert_eq!(c.location, Location::Front);
    }

    #[test]
    fn test_cutter_serde_round_trip() {
        let c = Cutter::new(
            Frame::Ucf {
                angle: 30.0,
                tilt: -15.0,
            },
            TipProfile::Vee { half_angle: 45.0 },
            0.5,
            0.125,
        )
        .with_location(Location::Back);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("Ucf"));
        let parsed: Cutter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn test_frame_serde_tags() {
        let json = serde_json::to_string(&Frame::Drill { angle: 90.0 }).unwrap();
        assert!(json.contains("Drill"));
        let parsed: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Frame::Drill { angle: 90.0 });
    }
}
