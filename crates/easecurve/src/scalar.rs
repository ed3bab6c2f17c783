//! Blending primitives for normalized values.
//!
//! None of these clamp their inputs unless the name says so, and NaN passes
//! through unchanged.

/// Mirror a normalized value: `1 - x`.
#[inline]
pub fn flip(x: f32) -> f32 {
    1.0 - x
}

/// Linear interpolation from `a` to `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `v` sits between `a` and `b`.
///
/// A zero-width range (`a == b`) yields 0.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span == 0.0 { 0.0 } else { (v - a) / span }
}

/// Clamp `x` into `[0, 1]`, keeping NaN.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// [`inverse_lerp`] clamped into `[0, 1]`.
#[inline]
pub fn inverse_lerp_clamped(a: f32, b: f32, v: f32) -> f32 {
    clamp01(inverse_lerp(a, b, v))
}

/// Time-reverse a shape: evaluate `f` at `1 - t`.
#[inline]
pub fn reflect(f: impl Fn(f32) -> f32, t: f32) -> f32 {
    f(flip(t))
}

/// Blend from `a(t)` to `b(t)` using `t` itself as the weight.
#[inline]
pub fn crossfade(a: impl Fn(f32) -> f32, b: impl Fn(f32) -> f32, t: f32) -> f32 {
    lerp(a(t), b(t), t)
}
