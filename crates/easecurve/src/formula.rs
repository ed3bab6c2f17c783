//! Degree-generalized easing formulas.
//!
//! One function per family replaces a hand-written function per degree. The
//! degree is a value, so catalogs can generate entries by iterating a range.
//! Inputs are not clamped; see the crate docs for the domain policy.

use crate::{
    curve::Degree,
    scalar::{flip, lerp},
};

/// Ease in: `t^n`. Zero slope at `t = 0`.
#[inline]
pub fn smooth_start(degree: Degree, t: f32) -> f32 {
    t.powi(degree.exponent())
}

/// Ease out: `1 - (1 - t)^n`. Zero slope at `t = 1`.
///
/// The mirror image of [`smooth_start`] under `t ↦ 1 - t`, `y ↦ 1 - y`.
#[inline]
pub fn smooth_stop(degree: Degree, t: f32) -> f32 {
    flip(smooth_start(degree, flip(t)))
}

/// Ease in and out: crossfade from [`smooth_start`] to [`smooth_stop`] of the
/// same degree, weighted by `t`.
///
/// Zero slope at both ends and point-symmetric about `(0.5, 0.5)`.
#[inline]
pub fn smooth_step(degree: Degree, t: f32) -> f32 {
    lerp(smooth_start(degree, t), smooth_stop(degree, t), t)
}
