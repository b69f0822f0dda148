//! General notes panel at the bottom left of the sheet.

use crate::canvas::{Canvas, LineStyle, RectPx, TextStyle, BLACK};
use crate::info::DrawingInfo;
use crate::sheet::PX_PER_PT;
use crate::titleblock::{grid_text, grid_text_centered, grid_to_px};

const BORDER_PT: f32 = 1.5;
const RULE_PT: f32 = 1.0;
const HEADING_PT: f32 = 10.0;
const NOTE_PT: f32 = 8.0;

/// The standard note lines for a drawing.
#[must_use]
pub fn note_lines(info: &DrawingInfo) -> Vec<String> {
    vec![
        format!("1. ALL DIMENSIONS IN {}", info.units.to_uppercase()),
        "2. UNLESS OTHERWISE SPECIFIED:".to_string(),
        format!("   LINEAR TOL: {}", info.tolerances.linear),
        format!("   ANGULAR TOL: {}", info.tolerances.angular),
        format!("3. SURFACE FINISH: {}", info.surface_finish),
        "4. REMOVE ALL BURRS AND SHARP EDGES".to_string(),
        format!("5. MATERIAL: {}", info.material),
    ]
}

/// Draw the bordered notes panel with heading rule and note lines.
pub fn draw_notes(canvas: &mut Canvas, info: &DrawingInfo, rect: RectPx) {
    let border = LineStyle::solid(BORDER_PT * PX_PER_PT, BLACK);
    let rule = LineStyle::solid(RULE_PT * PX_PER_PT, BLACK);

    canvas.rect_outline(rect, &border);

    grid_text_centered(
        canvas,
        rect,
        5.0,
        9.0,
        "GENERAL NOTES",
        &TextStyle::bold(HEADING_PT * PX_PER_PT),
    );
    let (x1, y) = grid_to_px(rect, 0.0, 8.5);
    let (x2, _) = grid_to_px(rect, 10.0, 8.5);
    canvas.line(x1, y, x2, y, &rule);

    let style = TextStyle::plain(NOTE_PT * PX_PER_PT);
    for (i, note) in note_lines(info).iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let gy = 7.5 - i as f32 * 0.7;
        grid_text(canvas, rect, 0.2, gy, note, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_quote_tolerances_and_material() {
        let info = DrawingInfo {
            material: "6061-T6".to_string(),
            tolerances: crate::Tolerances {
                linear: "±0.05".to_string(),
                angular: "±0.5°".to_string(),
            },
            ..DrawingInfo::default()
        };

        let lines = note_lines(&info);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "1. ALL DIMENSIONS IN MM");
        assert_eq!(lines[2], "   LINEAR TOL: ±0.05");
        assert_eq!(lines[6], "5. MATERIAL: 6061-T6");
    }

    #[test]
    fn notes_panel_leaves_ink() {
        let mut canvas = Canvas::new(400, 300).unwrap();
        let rect = RectPx {
            x: 20.0,
            y: 20.0,
            w: 360.0,
            h: 260.0,
        };
        draw_notes(&mut canvas, &DrawingInfo::default(), rect);
        assert!(canvas.data().iter().any(|&b| b < 255));
    }
}
