//! A concrete triangle with vertex positions.

use nalgebra::Point3;

/// A triangle defined by three vertex positions.
///
/// Produced by [`TriMesh::triangles`](crate::TriMesh::triangles) when the
/// slicing code needs per-face geometry rather than indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3<f64>,
    /// Second vertex.
    pub b: Point3<f64>,
    /// Third vertex.
    pub c: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Area of the triangle.
    ///
    /// # Example
    ///
    /// ```
    /// use draft_types::{Triangle, Point3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    /// );
    /// assert!((tri.area() - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        e1.cross(&e2).norm() * 0.5
    }

    /// Centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The three directed edges `(a,b)`, `(b,c)`, `(c,a)`.
    #[must_use]
    pub const fn edges(&self) -> [(Point3<f64>, Point3<f64>); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}
