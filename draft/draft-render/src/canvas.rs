//! Raster drawing surface.
//!
//! Thin wrapper over a [`tiny_skia::Pixmap`] that exposes the handful of
//! primitives a drawing sheet needs: polylines, rectangles, double-headed
//! arrows, and stroke-font text. All coordinates are pixels with the origin
//! at the top-left corner and y increasing downward.

use std::path::Path;

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::error::RenderError;
use crate::font;

/// Opaque black.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Line weight, color, and optional dash pattern.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Stroke width in pixels.
    pub width: f32,
    /// RGBA color.
    pub color: [u8; 4],
    /// On/off dash lengths in pixels, `None` for a solid line.
    pub dash: Option<Vec<f32>>,
}

impl LineStyle {
    /// Solid line.
    #[must_use]
    pub fn solid(width: f32, color: [u8; 4]) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    /// Dashed line.
    #[must_use]
    pub fn dashed(width: f32, color: [u8; 4], on: f32, off: f32) -> Self {
        Self {
            width,
            color,
            dash: Some(vec![on, off]),
        }
    }
}

/// Text placement and weight. The anchor is the left end of the baseline.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Capital letter height in pixels.
    pub size: f32,
    /// Heavier stroke for headings.
    pub bold: bool,
    /// RGBA color.
    pub color: [u8; 4],
}

impl TextStyle {
    /// Regular weight black text.
    #[must_use]
    pub fn plain(size: f32) -> Self {
        Self {
            size,
            bold: false,
            color: BLACK,
        }
    }

    /// Bold black text.
    #[must_use]
    pub fn bold(size: f32) -> Self {
        Self {
            size,
            bold: true,
            color: BLACK,
        }
    }

    fn stroke_width(&self) -> f32 {
        if self.bold {
            self.size / 5.0
        } else {
            self.size / 9.0
        }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy)]
pub struct RectPx {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// A white sheet to draw on.
#[derive(Debug)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a white canvas of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCanvas`] when either dimension is zero
    /// or the allocation is rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self { pixmap })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn stroke(&mut self, path: &tiny_skia::Path, style: &LineStyle) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(style.color[0], style.color[1], style.color[2], style.color[3]);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            dash: style
                .dash
                .as_ref()
                .and_then(|d| StrokeDash::new(d.clone(), 0.0)),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Stroke an open polyline through `points`.
    pub fn polyline(&mut self, points: &[(f32, f32)], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        if let Some(path) = pb.finish() {
            self.stroke(&path, style);
        }
    }

    /// Stroke a single segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, style: &LineStyle) {
        self.polyline(&[(x1, y1), (x2, y2)], style);
    }

    /// Stroke the outline of a rectangle.
    pub fn rect_outline(&mut self, rect: RectPx, style: &LineStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(rect.x, rect.y);
        pb.line_to(rect.x + rect.w, rect.y);
        pb.line_to(rect.x + rect.w, rect.y + rect.h);
        pb.line_to(rect.x, rect.y + rect.h);
        pb.close();
        if let Some(path) = pb.finish() {
            self.stroke(&path, style);
        }
    }

    /// Stroke a segment with arrowheads at both ends, as used for dimension
    /// lines. `head` is the arrowhead length in pixels.
    pub fn double_arrow(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, head: f32, style: &LineStyle) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        // Perpendicular for the barbs, half as wide as the head is long.
        let (px, py) = (-uy * head * 0.5, ux * head * 0.5);

        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        for (tx, ty, dirx, diry) in [(x1, y1, ux, uy), (x2, y2, -ux, -uy)] {
            let bx = tx + dirx * head;
            let by = ty + diry * head;
            pb.move_to(bx + px, by + py);
            pb.line_to(tx, ty);
            pb.line_to(bx - px, by - py);
        }
        if let Some(path) = pb.finish() {
            self.stroke(&path, style);
        }
    }

    /// Draw text with the built-in stroke font. `(x, y)` is the left end of
    /// the baseline.
    pub fn text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        self.draw_glyphs(x, y, text, style, false);
    }

    /// Draw text rotated 90 degrees counter-clockwise about the anchor, so
    /// it reads bottom-to-top.
    pub fn text_rotated(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        self.draw_glyphs(x, y, text, style, true);
    }

    /// Rendered width of `text` at the style's size, for centering.
    #[must_use]
    pub fn text_width(text: &str, size: f32) -> f32 {
        font::text_width(text, size)
    }

    fn draw_glyphs(&mut self, x: f32, y: f32, text: &str, style: &TextStyle, rotated: bool) {
        let scale = style.size / font::CAP_HEIGHT;
        let line = LineStyle::solid(style.stroke_width(), style.color);

        let mut pen = 0.0_f32;
        for c in text.chars() {
            if let Some(table) = font::strokes(c) {
                for stroke in table {
                    let points: Vec<(f32, f32)> = stroke
                        .iter()
                        .map(|&(gx, gy)| {
                            let gx = gx * scale + pen;
                            let gy = gy * scale;
                            if rotated {
                                // 90 degrees CCW: advance runs up the page.
                                (x - gy, y - gx)
                            } else {
                                (x + gx, y - gy)
                            }
                        })
                        .collect();
                    self.polyline(&points, &line);
                }
            }
            pen += font::ADVANCE * scale;
        }
    }

    /// Encode the canvas as PNG and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PngWrite`] when encoding or writing fails.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RenderError::PngWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Raw RGBA pixel data, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }
}
