//! Triangle-soup surface mesh.

use crate::{Aabb, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulated surface mesh.
///
/// Vertices are stored as raw positions with faces referencing them by
/// index. STL loading produces three fresh vertices per facet, which is
/// all the drawing pipeline needs; no adjacency is maintained.
///
/// # Example
///
/// ```
/// use draft_types::{TriMesh, Point3};
///
/// let mut mesh = TriMesh::new();
/// mesh.push_triangle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Triangle faces as indices into `vertices`, CCW winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertex and face arrays.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Append a triangle as three fresh vertices plus one face.
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32; meshes beyond 4B vertices are unsupported.
    pub fn push_triangle(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        let base = self.vertices.len() as u32;
        self.vertices.push(a);
        self.vertices.push(b);
        self.vertices.push(c);
        self.faces.push([base, base + 1, base + 2]);
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over faces as concrete triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| {
            Triangle::new(
                self.vertices[i0 as usize],
                self.vertices[i1 as usize],
                self.vertices[i2 as usize],
            )
        })
    }

    /// Axis-aligned bounding box of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Translate all vertices by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Signed volume via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward CCW winding; near zero for
    /// open or inconsistently wound meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;
        for tri in self.triangles() {
            let cross = tri.b.coords.cross(&tri.c.coords);
            volume += tri.a.coords.dot(&cross);
        }
        volume / 6.0
    }

    /// Total surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Center of mass of the enclosed solid.
    ///
    /// Uses the volume-weighted centroid of the signed tetrahedra formed by
    /// each face and the origin. Falls back to the area-weighted surface
    /// centroid when the enclosed volume is degenerate (open mesh), and to
    /// the vertex mean when the surface is degenerate too. An empty mesh
    /// reports the origin.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center_of_mass(&self) -> Point3<f64> {
        if self.vertices.is_empty() {
            return Point3::origin();
        }

        let mut volume = 0.0;
        let mut weighted = Vector3::zeros();
        for tri in self.triangles() {
            let v = tri.a.coords.dot(&tri.b.coords.cross(&tri.c.coords)) / 6.0;
            // Tetrahedron centroid including the origin vertex.
            let c = (tri.a.coords + tri.b.coords + tri.c.coords) / 4.0;
            volume += v;
            weighted += c * v;
        }
        if volume.abs() > 1e-12 {
            return Point3::from(weighted / volume);
        }

        let mut area = 0.0;
        let mut surface = Vector3::zeros();
        for tri in self.triangles() {
            let a = tri.area();
            area += a;
            surface += tri.centroid().coords * a;
        }
        if area > 1e-12 {
            return Point3::from(surface / area);
        }

        let sum: Vector3<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f64)
    }
}

/// Build an axis-aligned box mesh centered at the origin.
///
/// `sx`, `sy`, `sz` are the full extents along each axis. Faces are wound
/// CCW when viewed from outside.
///
/// # Example
///
/// ```
/// use draft_types::cuboid;
///
/// let cube = cuboid(10.0, 10.0, 10.0);
/// assert_eq!(cube.face_count(), 12);
/// assert!((cube.signed_volume() - 1000.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn cuboid(sx: f64, sy: f64, sz: f64) -> TriMesh {
    let (hx, hy, hz) = (sx * 0.5, sy * 0.5, sz * 0.5);

    let corners = [
        Point3::new(-hx, -hy, -hz), // 0
        Point3::new(hx, -hy, -hz),  // 1
        Point3::new(hx, hy, -hz),   // 2
        Point3::new(-hx, hy, -hz),  // 3
        Point3::new(-hx, -hy, hz),  // 4
        Point3::new(hx, -hy, hz),   // 5
        Point3::new(hx, hy, hz),    // 6
        Point3::new(-hx, hy, hz),   // 7
    ];

    // Two CCW triangles per face, normals outward.
    let faces: [[u32; 3]; 12] = [
        [0, 2, 1], // bottom (-Z)
        [0, 3, 2],
        [4, 5, 6], // top (+Z)
        [4, 6, 7],
        [0, 1, 5], // front (-Y)
        [0, 5, 4],
        [3, 7, 6], // back (+Y)
        [3, 6, 2],
        [0, 4, 7], // left (-X)
        [0, 7, 3],
        [1, 2, 6], // right (+X)
        [1, 6, 5],
    ];

    TriMesh::from_parts(corners.to_vec(), faces.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_volume_and_area() {
        let cube = cuboid(10.0, 10.0, 10.0);
        assert!((cube.signed_volume() - 1000.0).abs() < 1e-9);
        assert!((cube.surface_area() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn cuboid_is_centered() {
        let cube = cuboid(4.0, 6.0, 8.0);
        let c = cube.bounds().center();
        assert!(c.x.abs() < 1e-12);
        assert!(c.y.abs() < 1e-12);
        assert!(c.z.abs() < 1e-12);
    }

    #[test]
    fn center_of_mass_of_closed_box() {
        let mut cube = cuboid(10.0, 10.0, 10.0);
        cube.translate(Vector3::new(3.0, -2.0, 5.0));

        let com = cube.center_of_mass();
        assert!((com.x - 3.0).abs() < 1e-9);
        assert!((com.y - (-2.0)).abs() < 1e-9);
        assert!((com.z - 5.0).abs() < 1e-9);
    }

    #[test]
    fn center_of_mass_open_mesh_uses_surface() {
        // A single triangle has no volume; expect its area centroid.
        let mut mesh = TriMesh::new();
        mesh.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        );
        let com = mesh.center_of_mass();
        assert!((com.x - 1.0).abs() < 1e-9);
        assert!((com.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_mesh_center_of_mass_is_origin() {
        let mesh = TriMesh::new();
        assert_eq!(mesh.center_of_mass(), Point3::origin());
    }

    #[test]
    fn translate_moves_bounds() {
        let mut cube = cuboid(2.0, 2.0, 2.0);
        cube.translate(Vector3::new(10.0, 0.0, 0.0));
        let b = cube.bounds();
        assert!((b.min.x - 9.0).abs() < 1e-12);
        assert!((b.max.x - 11.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_match_extents() {
        let cube = cuboid(10.0, 20.0, 30.0);
        let size = cube.bounds().size();
        assert!((size.x - 10.0).abs() < 1e-12);
        assert!((size.y - 20.0).abs() < 1e-12);
        assert!((size.z - 30.0).abs() < 1e-12);
    }
}
