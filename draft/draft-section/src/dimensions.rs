//! Overall part dimensions from the mesh bounding box.

use draft_types::{Point3, TriMesh};

/// Axis-aligned extents of a mesh, in the axis naming engineering drawings
/// use: length along X, width along Y, height along Z.
///
/// # Example
///
/// ```
/// use draft_types::cuboid;
/// use draft_section::dimensions;
///
/// let part = cuboid(20.0, 10.0, 5.0);
/// let dims = dimensions(&part);
/// assert!((dims.length - 20.0).abs() < 1e-10);
/// assert!((dims.width - 10.0).abs() < 1e-10);
/// assert!((dims.height - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Dimensions {
    /// Bounding box minimum.
    pub min: Point3<f64>,
    /// Bounding box maximum.
    pub max: Point3<f64>,
    /// Extent along X.
    pub length: f64,
    /// Extent along Y.
    pub width: f64,
    /// Extent along Z.
    pub height: f64,
    /// Bounding box diagonal.
    pub diagonal: f64,
    /// Bounding box center.
    pub center: Point3<f64>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
            length: 0.0,
            width: 0.0,
            height: 0.0,
            diagonal: 0.0,
            center: Point3::origin(),
        }
    }
}

impl Dimensions {
    /// The longest of the three extents.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.length.max(self.width).max(self.height)
    }
}

/// Measure the overall dimensions of a mesh.
///
/// Returns all-zero [`Dimensions`] for an empty mesh.
#[must_use]
pub fn dimensions(mesh: &TriMesh) -> Dimensions {
    if mesh.vertices.is_empty() {
        return Dimensions::default();
    }

    let bounds = mesh.bounds();
    let size = bounds.size();

    Dimensions {
        min: bounds.min,
        max: bounds.max,
        length: size.x,
        width: size.y,
        height: size.z,
        diagonal: size.norm(),
        center: bounds.center(),
    }
}
