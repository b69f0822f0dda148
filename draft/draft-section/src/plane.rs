//! Slicing planes for orthographic views.

use nalgebra::{Point3, Vector3};

/// A cutting plane defined by an origin point and a unit normal.
///
/// The plane equation is `normal · (p - origin) = 0`. The three named
/// constructors give the standard orthographic views through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlane {
    /// A point on the plane.
    pub origin: Point3<f64>,
    /// Unit normal.
    pub normal: Vector3<f64>,
}

impl SlicePlane {
    /// Create a plane from an origin and a normal.
    ///
    /// The normal is normalized; a zero-length normal yields `None`.
    #[must_use]
    pub fn new(origin: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let len = normal.norm();
        if len < f64::EPSILON {
            return None;
        }
        Some(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Front view: plane through the origin, normal +Y.
    #[must_use]
    pub fn front() -> Self {
        Self {
            origin: Point3::origin(),
            normal: Vector3::y(),
        }
    }

    /// Top view: plane through the origin, normal +Z.
    #[must_use]
    pub fn top() -> Self {
        Self {
            origin: Point3::origin(),
            normal: Vector3::z(),
        }
    }

    /// Right view: plane through the origin, normal +X.
    #[must_use]
    pub fn right() -> Self {
        Self {
            origin: Point3::origin(),
            normal: Vector3::x(),
        }
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the side the normal points to.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.origin))
    }

    /// Orthonormal in-plane basis `(u, v)`.
    ///
    /// Section contours are expressed as `(d·u, d·v)` with `d` the offset
    /// from the plane origin. The basis choice is deterministic: `u` is the
    /// world X axis crossed with the normal unless the normal is nearly
    /// parallel to X, in which case world Y is used.
    #[must_use]
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let u = if self.normal.x.abs() < 0.9 {
            Vector3::x().cross(&self.normal).normalize()
        } else {
            Vector3::y().cross(&self.normal).normalize()
        };
        let v = self.normal.cross(&u);
        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_normalizes() {
        let plane = SlicePlane::new(Point3::origin(), Vector3::new(0.0, 0.0, 10.0)).unwrap();
        assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_normal_rejected() {
        assert!(SlicePlane::new(Point3::origin(), Vector3::zeros()).is_none());
    }

    #[test]
    fn presets_match_axes() {
        assert_eq!(SlicePlane::front().normal, Vector3::y());
        assert_eq!(SlicePlane::top().normal, Vector3::z());
        assert_eq!(SlicePlane::right().normal, Vector3::x());
    }

    #[test]
    fn signed_distance_signs() {
        let plane = SlicePlane::top();
        assert!(plane.signed_distance(&Point3::new(0.0, 0.0, 2.0)) > 0.0);
        assert!(plane.signed_distance(&Point3::new(0.0, 0.0, -2.0)) < 0.0);
        assert_relative_eq!(
            plane.signed_distance(&Point3::new(5.0, -5.0, 0.0)),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn basis_is_orthonormal() {
        for plane in [
            SlicePlane::front(),
            SlicePlane::top(),
            SlicePlane::right(),
            SlicePlane::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0)).unwrap(),
        ] {
            let (u, v) = plane.basis();
            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(u.dot(&v), 0.0, epsilon = 1e-12);
            assert_relative_eq!(u.dot(&plane.normal), 0.0, epsilon = 1e-12);
        }
    }
}
