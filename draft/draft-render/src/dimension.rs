//! Linear dimension annotations for a section view.
//!
//! Each view gets two dimensions: overall width below the geometry and
//! overall height to its right, drawn as blue double-headed arrows between
//! gray dashed extension lines with the value lettered beside the line.

use draft_section::Section;
use draft_types::Point2;

use crate::canvas::{Canvas, LineStyle, TextStyle};
use crate::sheet::PX_PER_PT;
use crate::view::ViewTransform;

/// Distance from the geometry to the dimension line, as a fraction of the
/// section's largest extent.
const OFFSET_FRACTION: f64 = 0.15;

const BLUE: [u8; 4] = [0, 0, 255, 255];
const GRAY: [u8; 4] = [128, 128, 128, 255];

const DIM_LINE_PT: f32 = 1.0;
const EXT_LINE_PT: f32 = 0.8;
const TEXT_PT: f32 = 8.0;
const ARROW_HEAD_PT: f32 = 4.0;

/// Format a measured value the way it is lettered on the sheet.
///
/// # Example
///
/// ```
/// assert_eq!(draft_render::dimension_label(10.0), "10.00 mm");
/// assert_eq!(draft_render::dimension_label(2.345), "2.35 mm");
/// ```
#[must_use]
pub fn dimension_label(value: f64) -> String {
    format!("{value:.2} mm")
}

/// Draw width and height dimensions for `section` using the same transform
/// its contours were drawn with. Empty sections get no annotations.
pub fn annotate_dimensions(canvas: &mut Canvas, section: &Section, transform: &ViewTransform) {
    if section.is_empty() {
        return;
    }

    let bounds = &section.bounds;
    let size = bounds.size();
    let offset = OFFSET_FRACTION * bounds.max_extent();

    let dim_style = LineStyle::solid(DIM_LINE_PT * PX_PER_PT, BLUE);
    let ext_style = LineStyle::dashed(
        EXT_LINE_PT * PX_PER_PT,
        GRAY,
        4.0 * PX_PER_PT,
        2.0 * PX_PER_PT,
    );
    let text_style = TextStyle {
        size: TEXT_PT * PX_PER_PT,
        bold: false,
        color: BLUE,
    };
    let head = ARROW_HEAD_PT * PX_PER_PT;

    // Width, below the view. Extension lines drop from the bottom-left and
    // top-right corners of the bounds to the dimension line.
    let y_dim = bounds.min.y - offset;
    let (x1, yd) = transform.to_px(&Point2::new(bounds.min.x, y_dim));
    let (x2, _) = transform.to_px(&Point2::new(bounds.max.x, y_dim));

    for (cx, cy) in [(bounds.min.x, bounds.min.y), (bounds.max.x, bounds.max.y)] {
        let (ex, ey) = transform.to_px(&Point2::new(cx, cy));
        canvas.line(ex, ey, ex, yd, &ext_style);
    }
    canvas.double_arrow(x1, yd, x2, yd, head, &dim_style);

    let label = dimension_label(size.x);
    let label_w = Canvas::text_width(&label, text_style.size);
    let (_, label_y) = transform.to_px(&Point2::new(0.0, y_dim - 0.1 * offset));
    canvas.text(
        (x1 + x2) / 2.0 - label_w / 2.0,
        label_y + text_style.size,
        &label,
        &text_style,
    );

    // Height, to the right of the view. Extension lines run from the
    // top-right and bottom-left corners out to the dimension line.
    let x_dim = bounds.max.x + offset;
    let (xd, vy1) = transform.to_px(&Point2::new(x_dim, bounds.min.y));
    let (_, vy2) = transform.to_px(&Point2::new(x_dim, bounds.max.y));

    for (cx, cy) in [(bounds.max.x, bounds.max.y), (bounds.min.x, bounds.min.y)] {
        let (ex, ey) = transform.to_px(&Point2::new(cx, cy));
        canvas.line(xd, ey, ex, ey, &ext_style);
    }
    canvas.double_arrow(xd, vy1, xd, vy2, head, &dim_style);

    let label = dimension_label(size.y);
    let label_w = Canvas::text_width(&label, text_style.size);
    let (label_x, _) = transform.to_px(&Point2::new(x_dim + 0.1 * offset, 0.0));
    canvas.text_rotated(
        label_x + text_style.size,
        (vy1 + vy2) / 2.0 + label_w / 2.0,
        &label,
        &text_style,
    );
}
