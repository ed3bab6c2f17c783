//! Arch and bell shapes composed from the base curves.
//!
//! These only promise sensible output for `t` in `[0, 1]`.

use crate::scalar::reflect;

/// Normalization for [`bell_curve6`].
///
/// The raw product `smooth_start_arch3(t) * smooth_stop_arch3(t)` equals
/// `45.5625 * t^3 * (1 - t)^3`, which peaks at `t = 0.5` with value
/// `45.5625 / 64`. Scaling by the reciprocal puts the peak at exactly 1.
pub const BELL_CURVE6_NORMALIZATION: f32 = 64.0 / 45.5625;

/// Symmetric parabola: 0 at both ends, 1 at `t = 0.5`.
#[inline]
pub fn arch2(t: f32) -> f32 {
    -4.0 * t * (t - 1.0)
}

/// Asymmetric arch with a fast rise, peaking at 1 when `t = 2/3`.
#[inline]
pub fn smooth_start_arch3(t: f32) -> f32 {
    -6.75 * t * t * (t - 1.0)
}

/// [`smooth_start_arch3`] reversed in time, peaking at `t = 1/3`.
#[inline]
pub fn smooth_stop_arch3(t: f32) -> f32 {
    reflect(smooth_start_arch3, t)
}

/// Flatter-topped arch; approximates half a sine wave.
#[inline]
pub fn smooth_step_arch4(t: f32) -> f32 {
    -4.0 * (t - 1.0) * t * arch2(t)
}

/// Approximates a bell curve, peak 1 at `t = 0.5`.
#[inline]
pub fn bell_curve6(t: f32) -> f32 {
    smooth_start_arch3(t) * smooth_stop_arch3(t) * BELL_CURVE6_NORMALIZATION
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for comparisons that go through rounding.
    const EPS: f32 = 1e-5;

    #[test]
    fn test_arch2() {
        assert_eq!(arch2(0.0), 0.0);
        assert_eq!(arch2(1.0), 0.0);
        assert_eq!(arch2(0.5), 1.0);
        assert_eq!(arch2(0.25), arch2(0.75));
    }

    #[test]
    fn test_arch3_peaks() {
        assert!((smooth_start_arch3(2.0 / 3.0) - 1.0).abs() < EPS);
        assert!((smooth_stop_arch3(1.0 / 3.0) - 1.0).abs() < EPS);
        assert_eq!(smooth_start_arch3(0.0), 0.0);
        assert_eq!(smooth_start_arch3(1.0), 0.0);
    }

    #[test]
    fn test_step_arch4_is_arch2_squared() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let a = arch2(t);
            assert!((smooth_step_arch4(t) - a * a).abs() < EPS);
        }
        assert_eq!(smooth_step_arch4(0.5), 1.0);
    }

    #[test]
    fn test_bell_normalization() {
        assert!((BELL_CURVE6_NORMALIZATION - 1.4046).abs() < 1e-3);
        assert!((bell_curve6(0.5) - 1.0).abs() < EPS);
        assert_eq!(bell_curve6(0.0), 0.0);
        assert_eq!(bell_curve6(1.0), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(arch2(f32::NAN).is_nan());
        assert!(smooth_stop_arch3(f32::NAN).is_nan());
        assert!(bell_curve6(f32::NAN).is_nan());
    }
}
