//! Title block panel at the bottom right of the sheet.

use crate::canvas::{Canvas, LineStyle, RectPx, TextStyle, BLACK};
use crate::info::DrawingInfo;
use crate::sheet::PX_PER_PT;

const BORDER_PT: f32 = 2.0;
const DIVIDER_PT: f32 = 1.0;

/// Map a point on the panel's 10x10 grid (y up) to pixels inside `rect`.
pub(crate) fn grid_to_px(rect: RectPx, gx: f32, gy: f32) -> (f32, f32) {
    (
        rect.x + rect.w * gx / 10.0,
        rect.y + rect.h * (1.0 - gy / 10.0),
    )
}

/// Place text on the panel grid. The grid point is the vertical center of
/// the lettering, matching how panel rows are laid out.
pub(crate) fn grid_text(
    canvas: &mut Canvas,
    rect: RectPx,
    gx: f32,
    gy: f32,
    text: &str,
    style: &TextStyle,
) {
    let (x, y) = grid_to_px(rect, gx, gy);
    canvas.text(x, y + style.size / 2.0, text, style);
}

/// Centered variant of [`grid_text`].
pub(crate) fn grid_text_centered(
    canvas: &mut Canvas,
    rect: RectPx,
    gx: f32,
    gy: f32,
    text: &str,
    style: &TextStyle,
) {
    let (x, y) = grid_to_px(rect, gx, gy);
    let w = Canvas::text_width(text, style.size);
    canvas.text(x - w / 2.0, y + style.size / 2.0, text, style);
}

/// Draw the bordered title block with its field grid into `rect`.
pub fn draw_title_block(canvas: &mut Canvas, info: &DrawingInfo, rect: RectPx) {
    let border = LineStyle::solid(BORDER_PT * PX_PER_PT, BLACK);
    let divider = LineStyle::solid(DIVIDER_PT * PX_PER_PT, BLACK);

    canvas.rect_outline(rect, &border);

    // Horizontal dividers split the panel into five rows.
    for gy in [2.0, 4.0, 6.0, 8.0] {
        let (x1, y) = grid_to_px(rect, 0.0, gy);
        let (x2, _) = grid_to_px(rect, 10.0, gy);
        canvas.line(x1, y, x2, y, &divider);
    }

    // Vertical dividers split the field rows (not the header) into columns.
    for gx in [3.0, 6.0] {
        let (x, y1) = grid_to_px(rect, gx, 0.0);
        let (_, y2) = grid_to_px(rect, gx, 6.0);
        canvas.line(x, y1, x, y2, &divider);
    }

    // (text, grid x, grid y, point size, bold)
    let fields: [(&str, f32, f32, f32, bool); 20] = [
        (&info.company, 5.0, 9.0, 12.0, true),
        (&info.title, 5.0, 8.3, 10.0, true),
        ("PART NAME:", 0.2, 7.3, 8.0, true),
        (&info.part_name, 3.2, 7.3, 8.0, false),
        ("PART NUMBER:", 6.2, 7.3, 8.0, true),
        (&info.part_number, 6.2, 6.7, 8.0, false),
        ("MATERIAL:", 0.2, 5.3, 8.0, true),
        (&info.material, 3.2, 5.3, 8.0, false),
        ("SCALE:", 6.2, 5.3, 8.0, true),
        (&info.scale, 6.2, 4.7, 8.0, false),
        ("PROJECTION:", 0.2, 3.3, 8.0, true),
        (&info.projection_method, 3.2, 3.3, 8.0, false),
        ("UNITS:", 6.2, 3.3, 8.0, true),
        (&info.units, 6.2, 2.7, 8.0, false),
        ("DRAWN BY:", 0.2, 1.3, 7.0, true),
        (&info.drawn_by, 0.2, 0.7, 7.0, false),
        ("DATE:", 3.2, 1.3, 7.0, true),
        (&info.date, 3.2, 0.7, 7.0, false),
        ("DWG NO:", 6.2, 1.3, 7.0, true),
        (&info.drawing_number, 6.2, 0.7, 7.0, false),
    ];

    for (text, gx, gy, pt, bold) in fields {
        let style = TextStyle {
            size: pt * PX_PER_PT,
            bold,
            color: BLACK,
        };
        grid_text(canvas, rect, gx, gy, text, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_origin_is_bottom_left() {
        let rect = RectPx {
            x: 100.0,
            y: 50.0,
            w: 200.0,
            h: 100.0,
        };
        let (x, y) = grid_to_px(rect, 0.0, 0.0);
        assert!((x - 100.0).abs() < 1e-6);
        assert!((y - 150.0).abs() < 1e-6);

        let (x, y) = grid_to_px(rect, 10.0, 10.0);
        assert!((x - 300.0).abs() < 1e-6);
        assert!((y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn title_block_draws_inside_rect() {
        let mut canvas = Canvas::new(400, 300).unwrap();
        let rect = RectPx {
            x: 40.0,
            y: 40.0,
            w: 320.0,
            h: 220.0,
        };
        draw_title_block(&mut canvas, &DrawingInfo::default(), rect);

        let data = canvas.data();
        assert!(data.iter().any(|&b| b < 255));

        // Nothing lands in the top-left margin outside the panel.
        let w = canvas.width() as usize;
        for y in 0..20 {
            for x in 0..20 {
                let i = (y * w + x) * 4;
                assert_eq!(data[i], 255);
            }
        }
    }
}
