//! Integration tests checking endpoint, monotonicity and symmetry properties
//! of every registered curve.
#[cfg(test)]
mod tests {
    use easecurve::{CurveFamily, EaseCurve, curve_from_name, error};

    /// Samples per curve for sweep checks.
    const STEPS: u32 = 1000;
    /// Tolerance for floating point comparisons.
    const EPS: f32 = 1e-6;

    fn endpoints(curve: &EaseCurve, start: f32, end: f32) {
        let f0 = curve.eval(0.0);
        let f1 = curve.eval(1.0);
        assert!(
            (f0 - start).abs() < EPS && (f1 - end).abs() < EPS,
            "Curve {} has endpoints ({f0}, {f1}), expected ({start}, {end})",
            curve.id()
        );
    }

    fn monotonic(curve: &EaseCurve) {
        let mut prev = curve.eval(0.0);
        for (t, v) in curve.sample(STEPS).skip(1) {
            assert!(
                v >= prev,
                "Curve {} decreases at t={t}: {prev} -> {v}",
                curve.id()
            );
            prev = v;
        }
    }

    fn point_symmetric(curve: &EaseCurve) {
        for (t, v) in curve.sample(STEPS) {
            let mirrored = 1.0 - curve.eval(1.0 - t);
            assert!(
                (v - mirrored).abs() < EPS,
                "Curve {} is not symmetric at t={t}: {v} vs {mirrored}",
                curve.id()
            );
        }
    }

    fn stop_mirrors_start(stop: &EaseCurve, start: &EaseCurve) {
        for (t, v) in stop.sample(STEPS) {
            let mirrored = 1.0 - start.eval(1.0 - t);
            assert!(
                (v - mirrored).abs() < EPS,
                "{} does not mirror {} at t={t}: {v} vs {mirrored}",
                stop.id(),
                start.id()
            );
        }
    }

    macro_rules! degree_tests {
        ($($degree:literal),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<smooth_start_ $degree>]() -> error::Result<()> {
                        let curve = curve_from_name(concat!("SmoothStart", $degree))?;
                        assert_eq!(curve.family(), CurveFamily::SmoothStart);
                        assert_eq!(curve.degree().map(|d| d.get()), Some($degree));
                        endpoints(curve, 0.0, 1.0);
                        monotonic(curve);
                        Ok(())
                    }

                    #[test]
                    fn [<smooth_stop_ $degree>]() -> error::Result<()> {
                        let curve = curve_from_name(concat!("SmoothStop", $degree))?;
                        let start = curve_from_name(concat!("SmoothStart", $degree))?;
                        assert_eq!(curve.family(), CurveFamily::SmoothStop);
                        endpoints(curve, 0.0, 1.0);
                        monotonic(curve);
                        stop_mirrors_start(curve, start);
                        Ok(())
                    }

                    #[test]
                    fn [<smooth_step_ $degree>]() -> error::Result<()> {
                        let curve = curve_from_name(concat!("SmoothStep", $degree))?;
                        assert_eq!(curve.family(), CurveFamily::SmoothStep);
                        endpoints(curve, 0.0, 1.0);
                        point_symmetric(curve);
                        Ok(())
                    }
                }
            )*
        };
    }

    degree_tests!(2, 3, 4, 5, 6, 7, 8, 9);

    #[test]
    fn arch2_zeros_and_peak() -> error::Result<()> {
        let arch = curve_from_name("Arch2")?;
        assert_eq!(arch.eval(0.0), 0.0);
        assert_eq!(arch.eval(1.0), 0.0);
        assert_eq!(arch.eval(0.5), 1.0);
        Ok(())
    }

    #[test]
    fn stop_arch3_reverses_start_arch3() -> error::Result<()> {
        let start = curve_from_name("SmoothStartArch3")?;
        let stop = curve_from_name("SmoothStopArch3")?;
        for (t, v) in stop.sample(STEPS) {
            assert!(
                (v - start.eval(1.0 - t)).abs() < EPS,
                "SmoothStopArch3 is not reversed at t={t}"
            );
        }
        Ok(())
    }

    #[test]
    fn arches_return_to_zero() {
        for curve in easecurve::enumerate_curves()
            .iter()
            .filter(|c| matches!(c.family(), CurveFamily::Arch | CurveFamily::Bell))
        {
            endpoints(curve, 0.0, 0.0);
            let peak = curve.sample(STEPS).map(|(_, v)| v).fold(f32::MIN, f32::max);
            assert!(
                (peak - 1.0).abs() < 0.01,
                "Curve {} peaks at {peak}",
                curve.id()
            );
        }
    }

    #[test]
    fn bell_peak_is_normalized() -> error::Result<()> {
        let bell = curve_from_name("BellCurve6")?;
        let (peak_t, peak) = bell
            .sample(10_000)
            .fold((0.0, f32::MIN), |acc, s| if s.1 > acc.1 { s } else { acc });
        assert!((0.99..=1.01).contains(&peak), "bell peak {peak}");
        assert!((peak_t - 0.5).abs() < 1e-3, "bell peaks at t={peak_t}");
        Ok(())
    }

    #[test]
    fn step_arch4_is_symmetric() -> error::Result<()> {
        let arch = curve_from_name("SmoothStepArch4")?;
        for (t, v) in arch.sample(STEPS) {
            assert!((v - arch.eval(1.0 - t)).abs() < EPS);
        }
        Ok(())
    }
}
