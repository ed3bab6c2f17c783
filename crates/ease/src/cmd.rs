//! Command handlers for the `ease` CLI.
//!
//! Every handler goes through the default curve catalog: either by
//! enumerating it or by evaluating a curve by name.

use std::{fs::File, path::Path};

use anyhow::{Result, bail};
use easecurve::{CurveFamily, curve_from_name, enumerate_curves, error, evaluate, scalar};
use gif::{Encoder, Frame, Repeat};
use image::Rgba;
use log::{debug, info};

use crate::plot::{PlotArea, StrokeOptions, draw_curve, draw_marker, render_curve_image};

/// One line per registered curve, optionally limited to one family.
pub fn list_curves(family: Option<CurveFamily>) -> Vec<String> {
    enumerate_curves()
        .iter()
        .filter(|curve| family.is_none_or(|f| curve.family() == f))
        .map(|curve| {
            let degree = curve
                .degree()
                .map_or_else(|| "fixed".to_string(), |d| format!("degree {d}"));
            format!("- {} — {} — {}", curve.id(), curve.family(), degree)
        })
        .collect()
}

/// Evaluate `curve_name` at each value in `ts`.
pub fn eval(curve_name: &str, ts: &[f32]) -> Result<Vec<f32>> {
    let values = ts
        .iter()
        .map(|&t| evaluate(curve_name, t))
        .collect::<error::Result<Vec<f32>>>()?;
    debug!("evaluated {curve_name} at {} points", values.len());
    Ok(values)
}

/// Sample `curve_name` at `steps + 1` evenly spaced points on `[0, 1]`.
pub fn sample(curve_name: &str, steps: u32) -> Result<Vec<(f32, f32)>> {
    if steps == 0 {
        bail!("steps must be >= 1");
    }
    let curve = curve_from_name(curve_name)?;
    Ok(curve.sample(steps).collect())
}

/// Render `curve_name` into a square image of `size` pixels.
pub fn plot(curve_name: &str, size: u32, stroke: StrokeOptions) -> Result<image::RgbaImage> {
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    let curve = curve_from_name(curve_name)?;
    info!("plotting {} at {size}x{size}", curve.id());
    Ok(render_curve_image(size, stroke, curve))
}

/// Parameters controlling animation rendering.
pub struct AnimateOptions<'a> {
    /// Output image size in pixels.
    pub size: u32,
    /// Curve identifier.
    pub curve_name: &'a str,
    /// Number of frames spanning `t = 0..=1`.
    pub frames: u32,
    /// Frames per second for the GIF.
    pub fps: u16,
    /// Stroke styling for the plot and markers.
    pub stroke: StrokeOptions,
    /// Output GIF path.
    pub output: &'a Path,
}

/// Radius of the animated markers in pixels.
const MARKER_RADIUS: u32 = 3;
/// Color of the marker riding on the curve.
const MARKER_COLOR: Rgba<u8> = Rgba([0xe4, 0x1a, 0x1c, 0xff]);

/// Write a looping GIF of a marker eased along the curve.
///
/// Each frame shows the plotted curve, a marker at `(t, f(t))` on it, and a
/// marker on the bottom track at horizontal position `f(t)`.
pub fn animate(options: AnimateOptions<'_>) -> Result<()> {
    let AnimateOptions {
        size,
        curve_name,
        frames,
        fps,
        stroke,
        output,
    } = options;

    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    if size > u32::from(u16::MAX) {
        bail!("size {} exceeds GIF limits ({}).", size, u16::MAX);
    }
    if frames < 2 {
        bail!("animation needs at least two frames");
    }

    let curve = curve_from_name(curve_name)?;
    let area = PlotArea::new(size, stroke);
    let track_y = i64::from(size.saturating_sub(MARKER_RADIUS + 2));

    let mut base = image::RgbaImage::from_pixel(size, size, stroke.palette.background);
    draw_curve(&mut base, area, stroke, curve);

    let mut file = File::create(output)?;
    let mut encoder = Encoder::new(&mut file, size as u16, size as u16, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;
    let frame_delay = frame_delay_from_fps(fps);

    for i in 0..frames {
        let t = scalar::inverse_lerp_clamped(0.0, (frames - 1) as f32, i as f32);
        let v = curve.eval(t);

        let mut frame_image = base.clone();
        draw_marker(&mut frame_image, area.x(t), area.y(v), MARKER_RADIUS, MARKER_COLOR);
        draw_marker(
            &mut frame_image,
            area.x(v),
            track_y,
            MARKER_RADIUS,
            stroke.palette.foreground,
        );

        let mut raw = frame_image.into_raw();
        let mut frame = Frame::from_rgba_speed(size as u16, size as u16, &mut raw, 10);
        frame.delay = frame_delay;
        encoder.write_frame(&frame)?;
    }

    info!("wrote {frames} frames for {} to {}", curve.id(), output.display());
    Ok(())
}

/// Convert frames-per-second into a GIF frame delay (hundredths of a second).
fn frame_delay_from_fps(fps: u16) -> u16 {
    // GIF delays are centiseconds; clamp to at least 1cs.
    let fps = fps.max(1);
    ((100 + (fps / 2)) / fps).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::PlotPalette;

    fn stroke() -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            palette: PlotPalette {
                foreground: Rgba([0, 0, 0, 255]),
                background: Rgba([255, 255, 255, 255]),
            },
        }
    }

    #[test]
    fn lists_all_curves() {
        let lines = list_curves(None);
        assert_eq!(lines.len(), 29);
        assert_eq!(lines[0], "- SmoothStart2 — SmoothStart — degree 2");
        assert_eq!(lines[28], "- BellCurve6 — Bell — fixed");
    }

    #[test]
    fn lists_one_family() {
        let lines = list_curves(Some(CurveFamily::Arch));
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.contains("— Arch —")));
    }

    #[test]
    fn eval_reports_unknown_curve() {
        let err = eval("NoSuchCurve", &[0.3]).unwrap_err();
        assert_eq!(err.to_string(), "curve not found: NoSuchCurve");
        assert_eq!(eval("SmoothStop2", &[0.5, 1.0]).unwrap(), vec![0.75, 1.0]);
    }

    #[test]
    fn sample_includes_endpoints() {
        let rows = sample("SmoothStep3", 4).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], (0.0, 0.0));
        assert_eq!(rows[4], (1.0, 1.0));
        assert!(sample("SmoothStep3", 0).is_err());
    }

    #[test]
    fn plot_rejects_zero_width() {
        let zero = StrokeOptions {
            line_width: 0,
            ..stroke()
        };
        assert!(plot("Arch2", 64, zero).is_err());
        assert_eq!(plot("Arch2", 64, stroke()).unwrap().width(), 64);
    }

    #[test]
    fn frame_delay_rounds() {
        assert_eq!(frame_delay_from_fps(20), 5);
        assert_eq!(frame_delay_from_fps(30), 3);
        assert_eq!(frame_delay_from_fps(0), 100);
        assert_eq!(frame_delay_from_fps(120), 1);
    }
}
