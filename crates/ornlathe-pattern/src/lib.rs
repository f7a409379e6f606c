#![warn(missing_docs)]

//! Periodic pattern and cutter-tip profile library for ornlathe.
//!
//! Rosette patterns are pure functions mapping a normalized position in
//! `[0, 1]` to a normalized amplitude in `[0, 1]`. Out-of-range input is
//! always wrapped by subtracting the floor, so every pattern is total
//! and periodic over the unit interval. Cutter-tip profiles share the
//! same normalization but answer a different question: the height of
//! the cutter surface above its tip plane at a given offset from the
//! tip center.
//!
//! Everything in this crate is stateless and safe to call from any
//! thread. The built-in shapes are collected in an explicit
//! [`PatternRegistry`]; there is no global registry.
//!
//! # Example
//!
//! ```
//! use ornlathe_pattern::{Pattern, PatternRegistry};
//!
//! let registry = PatternRegistry::builtin();
//! let pattern = registry.get("SINE").unwrap();
//! assert_eq!(pattern, Pattern::Sine);
//! assert!((pattern.value(0.25) - 0.5).abs() < 1e-12);
//! ```

mod pattern;
mod profile;
mod registry;

pub use pattern::{Pattern, PatternInstance};
pub use profile::{TipProfile, NO_MATERIAL};
pub use registry::PatternRegistry;

use thiserror::Error;

/// Errors from pattern lookup.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// The requested pattern name is not in the registry.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Wrap any real input into `[0, 1)` by subtracting the floor.
pub(crate) fn frac(n: f64) -> f64 {
    n - n.floor()
}
