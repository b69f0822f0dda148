//! Mapping section geometry into a sheet viewport.

use draft_section::Section;
use draft_types::{Bounds2, Point2};

use crate::canvas::{Canvas, LineStyle, RectPx};

/// Fraction of the section's largest extent added as margin on every side.
const PADDING_FRACTION: f64 = 0.2;

/// Gap below which a contour counts as already closed, in model units.
const CLOSE_TOLERANCE: f64 = 1e-2;

/// Uniform scale and translation from section model coordinates (y up) into
/// a pixel viewport (y down), with the padded section bounds centered.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    scale: f64,
    model_cx: f64,
    model_cy: f64,
    px_cx: f64,
    px_cy: f64,
}

impl ViewTransform {
    /// Fit `bounds` into `viewport` with uniform scale and a margin of 20%
    /// of the largest extent on every side.
    #[must_use]
    pub fn fit(bounds: &Bounds2, viewport: RectPx) -> Self {
        if bounds.is_empty() {
            return Self {
                scale: 1.0,
                model_cx: 0.0,
                model_cy: 0.0,
                px_cx: f64::from(viewport.x) + f64::from(viewport.w) / 2.0,
                px_cy: f64::from(viewport.y) + f64::from(viewport.h) / 2.0,
            };
        }
        let padded = bounds.padded(PADDING_FRACTION * bounds.max_extent());
        let size = padded.size();
        let center = padded.center();

        let scale = if size.x > f64::EPSILON && size.y > f64::EPSILON {
            (f64::from(viewport.w) / size.x).min(f64::from(viewport.h) / size.y)
        } else {
            1.0
        };

        Self {
            scale,
            model_cx: center.x,
            model_cy: center.y,
            px_cx: f64::from(viewport.x) + f64::from(viewport.w) / 2.0,
            px_cy: f64::from(viewport.y) + f64::from(viewport.h) / 2.0,
        }
    }

    /// Pixels per model unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a model point to pixel coordinates. Model y points up the sheet.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_px(&self, p: &Point2<f64>) -> (f32, f32) {
        let x = self.px_cx + (p.x - self.model_cx) * self.scale;
        let y = self.px_cy - (p.y - self.model_cy) * self.scale;
        (x as f32, y as f32)
    }
}

/// Close a contour by appending its first point when the endpoints are more
/// than 0.01 model units apart. Contours already closed within that
/// tolerance are returned unchanged.
#[must_use]
pub fn closed_contour(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut points = contour.to_vec();
    if let (Some(first), Some(last)) = (contour.first(), contour.last()) {
        if contour.len() > 2 && (first - last).norm() > CLOSE_TOLERANCE {
            points.push(*first);
        }
    }
    points
}

/// Stroke every contour of `section` into `viewport` and return the
/// transform used, so dimension annotations can share it.
pub fn draw_section(
    canvas: &mut Canvas,
    section: &Section,
    viewport: RectPx,
    style: &LineStyle,
) -> ViewTransform {
    let transform = ViewTransform::fit(&section.bounds, viewport);
    for contour in &section.contours {
        let pixels: Vec<(f32, f32)> = closed_contour(contour)
            .iter()
            .map(|p| transform.to_px(p))
            .collect();
        canvas.polyline(&pixels, style);
    }
    transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_types::Bounds2;

    fn square_bounds(half: f64) -> Bounds2 {
        Bounds2 {
            min: Point2::new(-half, -half),
            max: Point2::new(half, half),
        }
    }

    #[test]
    fn fit_centers_the_bounds() {
        let viewport = RectPx {
            x: 100.0,
            y: 200.0,
            w: 400.0,
            h: 300.0,
        };
        let t = ViewTransform::fit(&square_bounds(5.0), viewport);

        let (cx, cy) = t.to_px(&Point2::new(0.0, 0.0));
        assert!((cx - 300.0).abs() < 1e-3);
        assert!((cy - 350.0).abs() < 1e-3);
    }

    #[test]
    fn fit_flips_y() {
        let viewport = RectPx {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0,
        };
        let t = ViewTransform::fit(&square_bounds(5.0), viewport);

        let (_, y_top) = t.to_px(&Point2::new(0.0, 5.0));
        let (_, y_bottom) = t.to_px(&Point2::new(0.0, -5.0));
        assert!(y_top < y_bottom);
    }

    #[test]
    fn padded_bounds_stay_inside_viewport() {
        let viewport = RectPx {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
        };
        let t = ViewTransform::fit(&square_bounds(10.0), viewport);

        // Padded extent is 20 + 2 * 0.2 * 20 = 28 model units into 100 px.
        for corner in [
            Point2::new(-10.0, -10.0),
            Point2::new(10.0, 10.0),
        ] {
            let (x, y) = t.to_px(&corner);
            assert!((0.0..=200.0).contains(&x));
            assert!((0.0..=100.0).contains(&y));
        }
        assert!((t.scale() - 100.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn open_contour_is_closed() {
        let contour = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let closed = closed_contour(&contour);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[3], contour[0]);
    }

    #[test]
    fn nearly_closed_contour_is_left_alone() {
        let contour = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.001, 0.001),
        ];
        assert_eq!(closed_contour(&contour).len(), 3);
    }
}
