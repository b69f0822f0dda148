//! Axis-aligned bounding boxes in 3D and 2D.

use nalgebra::{Point2, Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box.
///
/// # Example
///
/// ```
/// use draft_types::{Aabb, Point3};
///
/// let aabb = Aabb::from_points(
///     [
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(10.0, 5.0, 3.0),
///     ]
///     .iter(),
/// );
/// assert_eq!(aabb.size(), Point3::new(10.0, 5.0, 3.0).coords);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// An empty (inverted) box, useful as a fold seed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Build the box enclosing an iterator of points.
    ///
    /// Returns an empty box for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand_to_include(p);
        }
        aabb
    }

    /// True if min exceeds max on any axis.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extents per axis (`max - min`).
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Length of the longest edge.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

/// A 2D axis-aligned bounding box for section outlines.
///
/// # Example
///
/// ```
/// use draft_types::{Bounds2, Point2};
///
/// let b = Bounds2::from_points(
///     [Point2::new(-5.0, -5.0), Point2::new(5.0, 5.0)].iter(),
/// );
/// assert!((b.width() - 10.0).abs() < 1e-12);
/// assert!((b.height() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Bounds2 {
    /// An empty (inverted) box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Build the box enclosing an iterator of points.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point2<f64>>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.expand_to_include(p);
        }
        b
    }

    /// True if min exceeds max on either axis.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Horizontal extent.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extents per axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Length of the longer edge.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point2<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// A copy grown by `margin` on all sides.
    ///
    /// # Example
    ///
    /// ```
    /// use draft_types::{Bounds2, Point2};
    ///
    /// let b = Bounds2 {
    ///     min: Point2::new(0.0, 0.0),
    ///     max: Point2::new(10.0, 10.0),
    /// };
    /// let p = b.padded(2.0);
    /// assert_eq!(p.min, Point2::new(-2.0, -2.0));
    /// assert_eq!(p.max, Point2::new(12.0, 12.0));
    /// ```
    #[must_use]
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::empty()
    }
}
