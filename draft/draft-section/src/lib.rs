//! Planar cross-sections and dimension extraction for DraftForge.
//!
//! This crate turns a 3D [`TriMesh`](draft_types::TriMesh) into the 2D data
//! an engineering drawing needs:
//!
//! - [`SlicePlane`] - a named cutting plane with orthographic presets
//! - [`cross_section`] - plane/mesh intersection, chained into contours and
//!   projected into the plane's 2D basis
//! - [`dimensions`] - overall part extents from the bounding box
//!
//! # Example
//!
//! ```
//! use draft_types::cuboid;
//! use draft_section::{cross_section, SlicePlane};
//!
//! let cube = cuboid(10.0, 10.0, 10.0);
//! let section = cross_section(&cube, &SlicePlane::top());
//!
//! assert!(!section.is_empty());
//! assert!((section.bounds.width() - 10.0).abs() < 1e-6);
//! assert!((section.bounds.height() - 10.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod dimensions;
mod plane;
mod section;

pub use dimensions::{dimensions, Dimensions};
pub use plane::SlicePlane;
pub use section::{cross_section, Section};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
