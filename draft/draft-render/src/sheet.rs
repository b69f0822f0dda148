//! Drawing sheet composition.
//!
//! Lays out section views, dimension annotations, the title block, the
//! notes panel, and the sheet border on a fixed-size canvas, then encodes
//! the result as PNG.

use std::path::Path;

use tracing::{debug, info};

use draft_section::Section;

use crate::canvas::{Canvas, LineStyle, RectPx, TextStyle, BLACK};
use crate::dimension::annotate_dimensions;
use crate::error::RenderError;
use crate::info::DrawingInfo;
use crate::notes::draw_notes;
use crate::titleblock::draw_title_block;
use crate::view::draw_section;

/// Sheet width in pixels (16 inches at 300 dpi, A3 landscape proportions).
pub const SHEET_WIDTH_PX: u32 = 4800;

/// Sheet height in pixels (11 inches at 300 dpi).
pub const SHEET_HEIGHT_PX: u32 = 3300;

/// Pixels per typographic point at the sheet's 300 dpi.
pub(crate) const PX_PER_PT: f32 = 300.0 / 72.0;

/// Section outline weight in points.
const OUTLINE_PT: f32 = 1.5;

/// Sheet border weight in points.
const SHEET_BORDER_PT: f32 = 3.0;

/// Placeholder title size in points.
const PLACEHOLDER_PT: f32 = 10.0;

/// Title block position as sheet fractions, bottom-left origin.
const TITLE_BLOCK_FRACTION: (f32, f32, f32, f32) = (0.60, 0.02, 0.35, 0.25);

/// Notes panel position as sheet fractions, bottom-left origin.
const NOTES_FRACTION: (f32, f32, f32, f32) = (0.05, 0.02, 0.40, 0.25);

/// A titled section view to place on the sheet.
#[derive(Debug, Clone)]
pub struct SheetView {
    /// View caption, e.g. `FRONT VIEW`.
    pub title: String,
    /// The section to draw. May be empty when the plane missed the part.
    pub section: Section,
}

/// Convert a bottom-left-origin fraction rectangle to pixels.
#[allow(clippy::cast_precision_loss)]
fn fraction_rect(fx: f32, fy: f32, fw: f32, fh: f32) -> RectPx {
    let w = SHEET_WIDTH_PX as f32;
    let h = SHEET_HEIGHT_PX as f32;
    RectPx {
        x: fx * w,
        y: (1.0 - fy - fh) * h,
        w: fw * w,
        h: fh * h,
    }
}

/// Viewport fractions for the given number of views.
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedViewCount`] for anything other than 1,
/// 2, or 3 views.
fn layout_positions(count: usize) -> Result<Vec<(f32, f32, f32, f32)>, RenderError> {
    match count {
        1 => Ok(vec![(0.15, 0.4, 0.3, 0.4)]),
        2 => Ok(vec![(0.1, 0.4, 0.25, 0.4), (0.4, 0.4, 0.25, 0.4)]),
        3 => Ok(vec![
            (0.05, 0.4, 0.25, 0.4),
            (0.35, 0.4, 0.25, 0.4),
            (0.65, 0.4, 0.25, 0.4),
        ]),
        n => Err(RenderError::UnsupportedViewCount(n)),
    }
}

/// Compose the full drawing sheet in memory.
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedViewCount`] when `views` does not hold
/// 1, 2, or 3 entries, or [`RenderError::InvalidCanvas`] if the sheet
/// cannot be allocated.
pub fn compose_drawing(
    views: &[SheetView],
    drawing_info: &DrawingInfo,
    show_dimensions: bool,
) -> Result<Canvas, RenderError> {
    let positions = layout_positions(views.len())?;
    let mut canvas = Canvas::new(SHEET_WIDTH_PX, SHEET_HEIGHT_PX)?;

    let outline = LineStyle::solid(OUTLINE_PT * PX_PER_PT, BLACK);

    for (view, &(fx, fy, fw, fh)) in views.iter().zip(&positions) {
        let viewport = fraction_rect(fx, fy, fw, fh);

        if view.section.is_empty() {
            debug!(title = %view.title, "view has no section");
            let caption = format!("{} (No section)", view.title);
            let style = TextStyle::bold(PLACEHOLDER_PT * PX_PER_PT);
            let w = Canvas::text_width(&caption, style.size);
            canvas.text(
                viewport.x + viewport.w / 2.0 - w / 2.0,
                viewport.y + style.size,
                &caption,
                &style,
            );
            continue;
        }

        debug!(
            title = %view.title,
            contours = view.section.contour_count(),
            "placing view"
        );
        let transform = draw_section(&mut canvas, &view.section, viewport, &outline);
        if show_dimensions {
            annotate_dimensions(&mut canvas, &view.section, &transform);
        }
    }

    let (tx, ty, tw, th) = TITLE_BLOCK_FRACTION;
    draw_title_block(&mut canvas, drawing_info, fraction_rect(tx, ty, tw, th));

    let (nx, ny, nw, nh) = NOTES_FRACTION;
    draw_notes(&mut canvas, drawing_info, fraction_rect(nx, ny, nw, nh));

    canvas.rect_outline(
        fraction_rect(0.02, 0.02, 0.96, 0.96),
        &LineStyle::solid(SHEET_BORDER_PT * PX_PER_PT, BLACK),
    );

    Ok(canvas)
}

/// Compose the drawing sheet and write it to `output` as PNG.
///
/// # Errors
///
/// Composition errors as for [`compose_drawing`], plus
/// [`RenderError::PngWrite`] when encoding or writing fails.
pub fn render_drawing(
    views: &[SheetView],
    drawing_info: &DrawingInfo,
    show_dimensions: bool,
    output: &Path,
) -> Result<(), RenderError> {
    let canvas = compose_drawing(views, drawing_info, show_dimensions)?;
    canvas.save_png(output)?;
    info!(path = %output.display(), views = views.len(), "drawing saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_section::{cross_section, SlicePlane};
    use draft_types::cuboid;

    fn cube_views() -> Vec<SheetView> {
        let mesh = cuboid(10.0, 10.0, 10.0);
        [
            ("FRONT VIEW", SlicePlane::front()),
            ("TOP VIEW", SlicePlane::top()),
            ("RIGHT VIEW", SlicePlane::right()),
        ]
        .into_iter()
        .map(|(title, plane)| SheetView {
            title: title.to_string(),
            section: cross_section(&mesh, &plane),
        })
        .collect()
    }

    #[test]
    fn layouts_exist_for_one_to_three_views() {
        for n in 1..=3 {
            assert_eq!(layout_positions(n).unwrap().len(), n);
        }
    }

    #[test]
    fn zero_and_four_views_are_rejected() {
        for n in [0, 4, 7] {
            match layout_positions(n) {
                Err(RenderError::UnsupportedViewCount(count)) => assert_eq!(count, n),
                other => panic!("expected UnsupportedViewCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn fraction_rect_flips_y() {
        let r = fraction_rect(0.0, 0.0, 1.0, 0.25);
        assert!((r.y - 0.75 * 3300.0).abs() < 1e-3);
        assert!((r.h - 0.25 * 3300.0).abs() < 1e-3);
    }

    #[test]
    fn three_view_sheet_composes() {
        let canvas = compose_drawing(&cube_views(), &DrawingInfo::default(), true).unwrap();
        assert_eq!(canvas.width(), SHEET_WIDTH_PX);
        assert_eq!(canvas.height(), SHEET_HEIGHT_PX);
        assert!(canvas.data().iter().any(|&b| b < 255));
    }

    #[test]
    fn wrong_view_count_fails_composition() {
        let views = vec![cube_views(); 2].concat();
        let err = compose_drawing(&views, &DrawingInfo::default(), true).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedViewCount(6)));
    }

    #[test]
    fn empty_section_gets_placeholder_caption() {
        let views = vec![SheetView {
            title: "FRONT VIEW".to_string(),
            section: Section::default(),
        }];
        let canvas = compose_drawing(&views, &DrawingInfo::default(), true).unwrap();
        assert!(canvas.data().iter().any(|&b| b < 255));
    }

    #[test]
    fn render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        render_drawing(&cube_views(), &DrawingInfo::default(), false, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
