//! Image rendering helpers used by the CLI.
//!
//! Curves are drawn over the unit square with `t` on the horizontal axis and
//! the output on the vertical axis, origin at the bottom left.

use easecurve::EaseCurve;
use image::{Rgba, RgbaImage};

/// Colors used when rendering a plot.
#[derive(Clone, Copy, Debug)]
pub struct PlotPalette {
    /// Color for the curve stroke and markers.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

/// Stroke styling for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for foreground/background.
    pub palette: PlotPalette,
}

/// Pixel frame of the unit square inside a `size×size` image.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea {
    /// Distance from the image edge to the unit square.
    margin: u32,
    /// Side length of the unit square in pixels.
    inner: f64,
}

impl PlotArea {
    /// Area for a square image of `size` pixels drawn with `stroke`.
    pub fn new(size: u32, stroke: StrokeOptions) -> Self {
        let margin = 10_u32.saturating_add(stroke.line_width.max(1) / 2);
        let inner = f64::from(size.saturating_sub(margin.saturating_mul(2))).max(1.0);
        Self { margin, inner }
    }

    /// Horizontal pixel for `t`.
    pub fn x(&self, t: f32) -> i64 {
        (f64::from(self.margin) + f64::from(t) * self.inner).round() as i64
    }

    /// Vertical pixel for output `v`; larger values sit higher.
    pub fn y(&self, v: f32) -> i64 {
        (f64::from(self.margin) + (1.0 - f64::from(v)) * self.inner).round() as i64
    }

    /// Number of samples giving roughly one per pixel column.
    fn steps(&self) -> u32 {
        (self.inner as u32).max(1)
    }
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = i64::from(size.is_multiple_of(2));
    for y in (cy - radius)..=(cy + radius + extra) {
        for x in (cx - radius)..=(cx + radius + extra) {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw an 8‑connected Bresenham line from `from` to `to`.
fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), stroke: StrokeOptions) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, stroke.line_width, stroke.palette.foreground);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a filled disc of `radius` pixels centered on `(cx, cy)`.
pub fn draw_marker(img: &mut RgbaImage, cx: i64, cy: i64, radius: u32, col: Rgba<u8>) {
    let r = i64::from(radius);
    for y in -r..=r {
        for x in -r..=r {
            if x * x + y * y <= r * r {
                put_pixel_safe(img, cx + x, cy + y, col);
            }
        }
    }
}

/// Draw `curve` sampled over `[0, 1]` onto an existing image.
pub fn draw_curve(img: &mut RgbaImage, area: PlotArea, stroke: StrokeOptions, curve: &EaseCurve) {
    let mut samples = curve.sample(area.steps());
    let Some((t0, v0)) = samples.next() else {
        return;
    };
    let mut prev = (area.x(t0), area.y(v0));
    for (t, v) in samples {
        if !v.is_finite() {
            continue;
        }
        let next = (area.x(t), area.y(v));
        draw_line(img, prev, next, stroke);
        prev = next;
    }
}

/// Render a square `size×size` image of `curve`.
pub fn render_curve_image(size: u32, stroke: StrokeOptions, curve: &EaseCurve) -> RgbaImage {
    let mut imgbuf = RgbaImage::from_pixel(size, size, stroke.palette.background);
    draw_curve(&mut imgbuf, PlotArea::new(size, stroke), stroke, curve);
    imgbuf
}

#[cfg(test)]
mod tests {
    use easecurve::{CurveFamily, Degree, Evaluator, arch};

    use super::*;

    fn stroke() -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            palette: PlotPalette {
                foreground: Rgba([1, 2, 3, 255]),
                background: Rgba([0, 0, 0, 0]),
            },
        }
    }

    #[test]
    fn area_maps_unit_square() {
        let area = PlotArea::new(64, stroke());
        assert_eq!(area.x(0.0), 10);
        assert_eq!(area.x(1.0), 54);
        assert_eq!(area.y(0.0), 54);
        assert_eq!(area.y(1.0), 10);
        assert_eq!(area.x(0.5), 32);
    }

    #[test]
    fn arch_peak_is_drawn_at_top_center() {
        let curve = EaseCurve::new("Arch2", CurveFamily::Arch, Evaluator::Fixed(arch::arch2));
        let stroke = stroke();
        let image = render_curve_image(64, stroke, &curve);

        assert_eq!(image.get_pixel(32, 10), &stroke.palette.foreground);
        assert_eq!(image.get_pixel(10, 54), &stroke.palette.foreground);
        assert_eq!(image.get_pixel(54, 54), &stroke.palette.foreground);
        // Nothing above the peak.
        assert_eq!(image.get_pixel(32, 5), &stroke.palette.background);
    }

    #[test]
    fn smooth_start_hugs_the_bottom_early() {
        let curve = EaseCurve::new(
            "SmoothStart9",
            CurveFamily::SmoothStart,
            Evaluator::SmoothStart(Degree::new(9)),
        );
        let stroke = stroke();
        let image = render_curve_image(64, stroke, &curve);

        // At t = 0.5 the output is ~0.002, so the stroke is on the baseline.
        assert_eq!(image.get_pixel(32, 54), &stroke.palette.foreground);
        assert_eq!(image.get_pixel(32, 32), &stroke.palette.background);
    }

    #[test]
    fn marker_is_a_disc() {
        let mut image = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        let col = Rgba([9, 9, 9, 255]);
        draw_marker(&mut image, 8, 8, 3, col);
        assert_eq!(image.get_pixel(8, 5), &col);
        assert_eq!(image.get_pixel(11, 8), &col);
        assert_eq!(image.get_pixel(11, 11), &Rgba([0, 0, 0, 0]));
        // Clipped at the edge without panicking.
        draw_marker(&mut image, 0, 0, 3, col);
        assert_eq!(image.get_pixel(0, 0), &col);
    }
}
