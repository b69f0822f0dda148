//! Cross-section extraction from meshes.
//!
//! Computes plane/mesh intersections and projects the resulting contours
//! into the plane's 2D basis.

use draft_types::{Bounds2, TriMesh};
use nalgebra::{Point2, Point3};
use tracing::debug;

use crate::plane::SlicePlane;

/// Endpoint matching tolerance when chaining segments into contours.
const CHAIN_EPS: f64 = 1e-6;

/// The 2D outline produced by slicing a mesh with a plane.
///
/// Contours are polylines in the plane's `(u, v)` basis (see
/// [`SlicePlane::basis`]). A plane that misses the mesh yields an
/// explicitly empty section.
///
/// # Example
///
/// ```
/// use draft_types::cuboid;
/// use draft_section::{cross_section, SlicePlane};
///
/// let cube = cuboid(10.0, 10.0, 10.0);
/// let section = cross_section(&cube, &SlicePlane::front());
/// assert_eq!(section.contour_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Closed or near-closed loops, one polyline per loop.
    pub contours: Vec<Vec<Point2<f64>>>,
    /// Bounding box of all contour points.
    pub bounds: Bounds2,
    /// Total length of all intersection segments.
    pub perimeter: f64,
}

impl Section {
    /// True when the plane did not intersect the mesh.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Number of separate contours.
    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }
}

/// Extract the cross-section of `mesh` at `plane`.
///
/// Every triangle edge crossing the plane contributes an intersection
/// point; triangles cut cleanly produce one segment each. Segments are
/// chained into contours by endpoint proximity and projected into the
/// plane's 2D basis.
///
/// # Example
///
/// ```
/// use draft_types::cuboid;
/// use draft_section::{cross_section, SlicePlane, Point3, Vector3};
///
/// let cube = cuboid(10.0, 10.0, 10.0);
///
/// // A plane above the cube misses it entirely.
/// let plane = SlicePlane::new(Point3::new(0.0, 0.0, 50.0), Vector3::z()).unwrap();
/// assert!(cross_section(&cube, &plane).is_empty());
/// ```
#[must_use]
pub fn cross_section(mesh: &TriMesh, plane: &SlicePlane) -> Section {
    let mut segments: Vec<(Point3<f64>, Point3<f64>)> = Vec::new();

    for tri in mesh.triangles() {
        let mut hits: Vec<Point3<f64>> = Vec::with_capacity(2);
        for (a, b) in tri.edges() {
            if let Some(p) = edge_intersection(plane, &a, &b) {
                hits.push(p);
            }
        }
        if hits.len() == 2 {
            segments.push((hits[0], hits[1]));
        }
    }

    if segments.is_empty() {
        debug!("plane misses mesh, empty section");
        return Section::default();
    }

    let perimeter = segments.iter().map(|(a, b)| (b - a).norm()).sum();
    let contours_3d = chain_segments(segments);

    let (u, v) = plane.basis();
    let contours: Vec<Vec<Point2<f64>>> = contours_3d
        .into_iter()
        .map(|loop3d| {
            loop3d
                .into_iter()
                .map(|p| {
                    let d = p - plane.origin;
                    Point2::new(d.dot(&u), d.dot(&v))
                })
                .collect()
        })
        .collect();

    let bounds = Bounds2::from_points(contours.iter().flatten());

    debug!(
        contours = contours.len(),
        perimeter = format!("{perimeter:.2}"),
        "section extracted"
    );

    Section {
        contours,
        bounds,
        perimeter,
    }
}

/// Intersection of edge `(a, b)` with the plane, if the edge crosses it.
fn edge_intersection(
    plane: &SlicePlane,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> Option<Point3<f64>> {
    let d_a = plane.signed_distance(a);
    let d_b = plane.signed_distance(b);

    if d_a * d_b > 0.0 {
        return None; // both endpoints on the same side
    }
    if (d_a - d_b).abs() < 1e-10 {
        return None; // edge lies in the plane
    }

    let t = d_a / (d_a - d_b);
    Some(a + (b - a) * t)
}

/// Chain unordered segments into contours by greedy endpoint matching.
fn chain_segments(segments: Vec<(Point3<f64>, Point3<f64>)>) -> Vec<Vec<Point3<f64>>> {
    let mut remaining = segments;
    let mut contours = Vec::new();

    while let Some((start, end)) = remaining.pop() {
        let mut contour = vec![start, end];

        let mut grew = true;
        while grew {
            grew = false;
            let head = contour[0];
            let tail = contour[contour.len() - 1];

            for i in (0..remaining.len()).rev() {
                let (a, b) = remaining[i];
                if (a - tail).norm() < CHAIN_EPS {
                    contour.push(b);
                } else if (b - tail).norm() < CHAIN_EPS {
                    contour.push(a);
                } else if (a - head).norm() < CHAIN_EPS {
                    contour.insert(0, b);
                } else if (b - head).norm() < CHAIN_EPS {
                    contour.insert(0, a);
                } else {
                    continue;
                }
                remaining.remove(i);
                grew = true;
                break;
            }
        }

        contours.push(contour);
    }

    contours
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_types::cuboid;
    use nalgebra::Vector3;

    #[test]
    fn cube_middle_section_is_square() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let section = cross_section(&cube, &SlicePlane::top());

        assert!(!section.is_empty());
        assert!((section.bounds.width() - 10.0).abs() < 1e-6);
        assert!((section.bounds.height() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn each_axis_plane_cuts_the_cube() {
        let cube = cuboid(10.0, 10.0, 10.0);
        for plane in [SlicePlane::front(), SlicePlane::top(), SlicePlane::right()] {
            let section = cross_section(&cube, &plane);
            assert!(!section.is_empty());
            assert!((section.bounds.width() - 10.0).abs() < 1e-6);
            assert!((section.bounds.height() - 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn plane_outside_mesh_yields_empty() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let plane = SlicePlane::new(Point3::new(0.0, 0.0, 50.0), Vector3::z()).unwrap();
        let section = cross_section(&cube, &plane);

        assert!(section.is_empty());
        assert_eq!(section.contour_count(), 0);
        assert!(section.perimeter.abs() < f64::EPSILON);
    }

    #[test]
    fn cube_section_perimeter() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let section = cross_section(&cube, &SlicePlane::top());
        // 10x10 square boundary.
        assert!((section.perimeter - 40.0).abs() < 1e-6);
    }

    #[test]
    fn chained_contour_closes_on_itself() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let section = cross_section(&cube, &SlicePlane::top());

        for contour in &section.contours {
            assert!(contour.len() >= 4);
            let first = contour[0];
            let last = contour[contour.len() - 1];
            assert!((first - last).norm() < 1e-6);
        }
    }

    #[test]
    fn diagonal_plane_cuts() {
        let cube = cuboid(10.0, 10.0, 10.0);
        let plane =
            SlicePlane::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0)).unwrap();
        let section = cross_section(&cube, &plane);
        assert!(!section.is_empty());
        assert!(section.bounds.width() > 0.0);
    }

    #[test]
    fn tetrahedron_section_is_triangle() {
        let mut mesh = TriMesh::new();
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(10.0, 0.0, 0.0);
        let p2 = Point3::new(5.0, 10.0, 0.0);
        let p3 = Point3::new(5.0, 5.0, 10.0);
        mesh.push_triangle(p0, p1, p3);
        mesh.push_triangle(p1, p2, p3);
        mesh.push_triangle(p2, p0, p3);
        mesh.push_triangle(p0, p2, p1);

        let plane = SlicePlane::new(Point3::new(0.0, 0.0, 5.0), Vector3::z()).unwrap();
        let section = cross_section(&mesh, &plane);

        assert_eq!(section.contour_count(), 1);
        assert!(section.bounds.width() > 0.0);
        assert!(section.bounds.height() > 0.0);
    }
}
