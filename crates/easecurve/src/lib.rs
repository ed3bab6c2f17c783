//! Core library of normalized easing curves.
//!
//! Every curve maps a progress value `t` in `[0, 1]` to a normalized output
//! and is exposed through a single named [`registry::Catalog`], so callers can
//! list and evaluate curves by identifier without special-casing any of them.
//!
//! # Curve Families
//!
//! - SmoothStart (ease in), degrees 2–9
//! - SmoothStop (ease out), degrees 2–9
//! - SmoothStep (ease in and out), degrees 2–9
//! - Arch: Arch2, SmoothStartArch3, SmoothStopArch3, SmoothStepArch4
//! - Bell: BellCurve6
//!
//! # Domain
//!
//! Degrees below 2 are clamped to 2 when a [`Degree`] is built. Inputs are
//! never clamped: values outside `[0, 1]` follow the underlying polynomial and
//! non-finite inputs propagate (NaN in, NaN out).

/// Fixed arch and bell curves built from the base shapes.
pub mod arch;
/// Curve entries, families and evaluators.
mod curve;
/// Error types used across the crate.
pub mod error;
/// Degree-generalized SmoothStart/SmoothStop/SmoothStep formulas.
pub mod formula;
/// Scalar blending helpers shared by formulas and combinators.
pub mod scalar;

pub use crate::curve::{CurveFamily, Degree, EaseCurve, Evaluator};

/// Central catalog of named curves.
pub mod registry;

/// All curves of the default catalog, in registration order.
pub fn enumerate_curves() -> &'static [EaseCurve] {
    registry::catalog().enumerate()
}

/// Evaluate the default-catalog curve `identifier` at `t`.
///
/// Returns [`error::Error::CurveNotFound`] if the identifier is unknown.
pub fn evaluate(identifier: &str, t: f32) -> error::Result<f32> {
    registry::catalog().evaluate(identifier, t)
}

/// Look up a curve of the default catalog by identifier.
pub fn curve_from_name(identifier: &str) -> error::Result<&'static EaseCurve> {
    registry::catalog().lookup(identifier)
}
