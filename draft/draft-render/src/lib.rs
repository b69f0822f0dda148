//! Engineering drawing sheet rendering.
//!
//! Takes cross-sections produced by `draft-section` and composes a
//! stylized 2D drawing: orthographic views with dimension annotations, a
//! title block, a general notes panel, and a sheet border, written out as
//! a PNG raster.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod canvas;
mod dimension;
mod error;
mod font;
mod info;
mod notes;
mod sheet;
mod titleblock;
mod view;

pub use canvas::{Canvas, LineStyle, RectPx, TextStyle};
pub use dimension::{annotate_dimensions, dimension_label};
pub use error::RenderError;
pub use info::{DrawingInfo, Tolerances};
pub use notes::{draw_notes, note_lines};
pub use sheet::{
    compose_drawing, render_drawing, SheetView, SHEET_HEIGHT_PX, SHEET_WIDTH_PX,
};
pub use titleblock::draw_title_block;
pub use view::{closed_contour, draw_section, ViewTransform};
