//! Core geometry types for DraftForge.
//!
//! This crate provides the foundational types shared by the drawing
//! pipeline:
//!
//! - [`TriMesh`] - A triangle-soup surface mesh
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - 3D axis-aligned bounding box
//! - [`Bounds2`] - 2D axis-aligned bounding box for section outlines
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Downstream crates (draft-section, draft-render) assume millimeters.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: length (left/right)
//! - Y: width (front/back)
//! - Z: height (up/down)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use draft_types::{TriMesh, Point3};
//!
//! let mut mesh = TriMesh::new();
//! mesh.push_triangle(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! );
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod mesh;
mod triangle;

pub use bounds::{Aabb, Bounds2};
pub use mesh::{cuboid, TriMesh};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
