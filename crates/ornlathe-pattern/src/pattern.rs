//! Built-in rosette patterns and the parameterized pattern instance.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::frac;

/// Default secondary-position knob when none is given.
const DEFAULT_N2: f64 = 1.0;
/// Default secondary-amplitude knob when none is given.
const DEFAULT_AMP2: f64 = 0.5;

/// A built-in rosette pattern shape.
///
/// Each variant is a pure function over the unit interval. `repeat`
/// matters only for the polygon-derived shapes, where it is the number
/// of polygon sides (clamped to the shape's minimum); the composite
/// shapes additionally read the `n2`/`amp2` knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// One full cosine wave, zero at the ends, peak at the midpoint.
    Sine,
    /// A single half-sine bump.
    Bump,
    /// One flat of an N-sided polygon rosette (sagitta closed form).
    Polygon,
    /// Heart shape from four sine quarter-segments with a center cleft.
    Heart,
    /// Polygon inverse: petals where the polygon has flats.
    Flower,
    /// Domain split at 1/2: a small bump (scaled by `amp2`) then a
    /// full-height bump.
    BigSmall,
    /// Polygon flat with `n2` bumps riding on top, weighted by `amp2`.
    PolyBump,
}

impl Pattern {
    /// All built-in patterns, in registry order.
    pub const ALL: [Pattern; 7] = [
        Pattern::Sine,
        Pattern::Bump,
        Pattern::Polygon,
        Pattern::Heart,
        Pattern::Flower,
        Pattern::BigSmall,
        Pattern::PolyBump,
    ];

    /// Registry name of this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Sine => "SINE",
            Pattern::Bump => "BUMP",
            Pattern::Polygon => "POLY",
            Pattern::Heart => "HEART",
            Pattern::Flower => "FLOWER",
            Pattern::BigSmall => "BIGSMALL",
            Pattern::PolyBump => "POLYBUMP",
        }
    }

    /// Smallest repeat count the shape is defined for.
    ///
    /// Polygon-derived shapes need at least three sides; everything
    /// else accepts any positive repeat. Callers passing less get the
    /// minimum, not an error.
    pub fn min_repeat(&self) -> u32 {
        match self {
            Pattern::Polygon | Pattern::Flower | Pattern::PolyBump => 3,
            _ => 1,
        }
    }

    /// Evaluate with default repeat and knobs.
    ///
    /// Equivalent to [`value_with`](Self::value_with) using
    /// `min_repeat()`, `n2 = 1`, `amp2 = 0.5`.
    pub fn value(&self, n: f64) -> f64 {
        self.value_with(n, self.min_repeat(), DEFAULT_N2, DEFAULT_AMP2)
    }

    /// Evaluate the pattern at `n`, wrapped into `[0, 1)`.
    ///
    /// The output is always in `[0, 1]`. `repeat` below the shape's
    /// minimum is clamped up.
    pub fn value_with(&self, n: f64, repeat: u32, n2: f64, amp2: f64) -> f64 {
        let n = frac(n);
        match self {
            Pattern::Sine => 0.5 - 0.5 * (2.0 * PI * n).cos(),
            Pattern::Bump => (PI * n).sin(),
            Pattern::Polygon => polygon(n, repeat.max(3)),
            Pattern::Heart => heart(n),
            Pattern::Flower => 1.0 - polygon(n, repeat.max(3)),
            Pattern::BigSmall => {
                let amp2 = amp2.clamp(0.0, 1.0);
                if n < 0.5 {
                    amp2 * (2.0 * PI * n).sin()
                } else {
                    (2.0 * PI * (n - 0.5)).sin()
                }
            }
            Pattern::PolyBump => {
                let amp2 = amp2.clamp(0.0, 1.0);
                // Integer ride count keeps the sum periodic over [0, 1).
                let rides = n2.round().max(1.0);
                let base = polygon(n, repeat.max(3));
                (base + amp2 * (PI * frac(n * rides)).sin()).min(1.0)
            }
        }
    }
}

/// One flat of a regular N-gon rosette, normalized to `[0, 1]`.
///
/// The radius of an N-gon at angle `phi` off a corner bisector is
/// `cos(pi/N) / cos(phi)`; mapping one flat onto the unit interval and
/// rescaling puts the corners at 1 and the mid-flat at 0.
fn polygon(n: f64, sides: u32) -> f64 {
    let half = PI / sides as f64;
    let flat = half.cos();
    let phi = (2.0 * n - 1.0) * half;
    let raw = flat / phi.cos();
    ((raw - flat) / (1.0 - flat)).clamp(0.0, 1.0)
}

/// Heart outline from four sine quarter-segments.
///
/// Zero at the ends (the point of the heart), lobes peaking at 1, and
/// a cleft dipping to 1/2 at the midpoint.
fn heart(n: f64) -> f64 {
    let q = 4.0 * PI;
    if n < 0.25 {
        0.5 - 0.5 * (q * n).cos()
    } else if n < 0.5 {
        0.75 + 0.25 * (q * (n - 0.25)).cos()
    } else if n < 0.75 {
        0.75 - 0.25 * (q * (n - 0.5)).cos()
    } else {
        0.5 + 0.5 * (q * (n - 0.75)).cos()
    }
}

/// A pattern with the per-instance knobs the document layer persists:
/// amplitude, repeat, phase in degrees, inversion, and the two optional
/// shape parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInstance {
    /// The underlying shape.
    pub pattern: Pattern,
    /// Output scale factor.
    pub amplitude: f64,
    /// Repeats per unit input (rosette bumps per revolution).
    pub repeat: u32,
    /// Phase shift in degrees of one repeat.
    pub phase: f64,
    /// Flip the shape output within `[0, 1]` before scaling.
    pub invert: bool,
    /// Optional secondary position knob.
    pub n2: Option<f64>,
    /// Optional secondary amplitude knob.
    pub amp2: Option<f64>,
}

impl PatternInstance {
    /// A plain instance of `pattern`: unit amplitude, given repeat, no
    /// phase, no inversion.
    pub fn new(pattern: Pattern, repeat: u32) -> Self {
        Self {
            pattern,
            amplitude: 1.0,
            repeat,
            phase: 0.0,
            invert: false,
            n2: None,
            amp2: None,
        }
    }

    /// Evaluate the modulation at normalized position `n`.
    ///
    /// Applies repeat, phase wrap, inversion, and amplitude in that
    /// order. `n` outside `[0, 1]` wraps.
    pub fn value_at(&self, n: f64) -> f64 {
        let repeat = self.repeat.max(self.pattern.min_repeat());
        let nn = frac(n * repeat as f64 + self.phase / 360.0);
        let v = self.pattern.value_with(
            nn,
            repeat,
            self.n2.unwrap_or(DEFAULT_N2),
            self.amp2.unwrap_or(DEFAULT_AMP2),
        );
        let v = if self.invert { 1.0 - v } else { v };
        self.amplitude * v
    }
}
