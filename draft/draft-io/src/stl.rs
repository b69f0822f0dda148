//! STL (stereolithography) loading and saving.
//!
//! Binary layout:
//!
//! ```text
//! UINT8[80]    – header (ignored)
//! UINT32       – facet count
//! per facet:
//!     REAL32[3] – normal (ignored; recomputed on save)
//!     REAL32[3] – vertex 1
//!     REAL32[3] – vertex 2
//!     REAL32[3] – vertex 3
//!     UINT16    – attribute byte count
//! ```
//!
//! ASCII files start with `solid`; binary files that happen to start with
//! `solid` are detected by null bytes in the 80-byte header.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use draft_types::{Point3, TriMesh};
use tracing::debug;

use crate::error::{IoError, IoResult};

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// Load a mesh from an STL file, auto-detecting binary vs ASCII.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when the path does not exist, and
/// [`IoError::InvalidContent`] / [`IoError::TruncatedFacets`] for malformed
/// files.
///
/// # Example
///
/// ```no_run
/// use draft_io::load_stl;
///
/// let mesh = load_stl("part.stl").unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    let mut preamble = [0u8; HEADER_LEN + 4];
    let got = read_up_to(&mut reader, &mut preamble)?;
    if got < 6 {
        return Err(IoError::invalid_content("file too small to be STL"));
    }

    let head = String::from_utf8_lossy(&preamble[..got.min(HEADER_LEN)]);
    let looks_ascii =
        head.trim_start().starts_with("solid") && !preamble[..got.min(HEADER_LEN)].contains(&0);

    if looks_ascii {
        debug!(path = %path.display(), "loading ASCII STL");
        // Re-open so the line reader sees the whole file.
        let reader = BufReader::new(File::open(path)?);
        load_ascii(reader)
    } else {
        debug!(path = %path.display(), "loading binary STL");
        load_binary(&preamble[..got], reader)
    }
}

/// Load an STL file and translate the mesh so its center of mass sits at
/// the origin.
///
/// # Errors
///
/// Same failure modes as [`load_stl`].
pub fn load_centered_stl<P: AsRef<Path>>(path: P) -> IoResult<TriMesh> {
    let mut mesh = load_stl(path)?;
    let com = mesh.center_of_mass();
    mesh.translate(-com.coords);
    Ok(mesh)
}

/// Save a mesh to an STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_stl<P: AsRef<Path>>(mesh: &TriMesh, path: P, binary: bool) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    if binary {
        save_binary(mesh, writer)
    } else {
        save_ascii(mesh, writer)
    }
}

// Read as many bytes as available, tolerating files shorter than the buffer.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

fn load_binary<R: Read>(preamble: &[u8], mut reader: R) -> IoResult<TriMesh> {
    if preamble.len() < HEADER_LEN + 4 {
        return Err(IoError::invalid_content("binary STL header truncated"));
    }

    let declared = u32::from_le_bytes([
        preamble[HEADER_LEN],
        preamble[HEADER_LEN + 1],
        preamble[HEADER_LEN + 2],
        preamble[HEADER_LEN + 3],
    ]);

    let mut mesh = TriMesh::with_capacity(declared as usize * 3, declared as usize);
    let mut facet = [0u8; FACET_LEN];

    for read in 0..declared {
        if let Err(e) = reader.read_exact(&mut facet) {
            if e.kind() == ErrorKind::UnexpectedEof {
                return Err(IoError::TruncatedFacets { declared, read });
            }
            return Err(IoError::Io(e));
        }
        // Skip the 12-byte normal; take the three vertices.
        mesh.push_triangle(
            point_at(&facet, 12),
            point_at(&facet, 24),
            point_at(&facet, 36),
        );
    }

    Ok(mesh)
}

fn point_at(buf: &[u8], offset: usize) -> Point3<f64> {
    let f = |i: usize| {
        f64::from(f32::from_le_bytes([
            buf[offset + i],
            buf[offset + i + 1],
            buf[offset + i + 2],
            buf[offset + i + 3],
        ]))
    };
    Point3::new(f(0), f(4), f(8))
}

fn load_ascii<R: BufRead>(reader: R) -> IoResult<TriMesh> {
    let mut mesh = TriMesh::new();
    let mut corners: Vec<Point3<f64>> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("vertex") => {
                let mut coord = || -> IoResult<f64> {
                    let tok = tokens
                        .next()
                        .ok_or_else(|| IoError::invalid_content("vertex with fewer than 3 coordinates"))?;
                    Ok(tok.parse()?)
                };
                corners.push(Point3::new(coord()?, coord()?, coord()?));
            }
            Some("endfacet") => {
                if corners.len() == 3 {
                    mesh.push_triangle(corners[0], corners[1], corners[2]);
                } else if !corners.is_empty() {
                    return Err(IoError::invalid_content(format!(
                        "facet with {} vertices",
                        corners.len()
                    )));
                }
                corners.clear();
            }
            Some("endsolid") => break,
            // facet / outer / endloop / solid keywords carry no geometry.
            _ => {}
        }
    }

    Ok(mesh)
}

fn save_binary<W: Write>(mesh: &TriMesh, mut writer: W) -> IoResult<()> {
    let mut header = [b' '; HEADER_LEN];
    let tag = b"Binary STL written by draft-io";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Face counts are bounded by u32 mesh indices.
    let count = mesh.face_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh.triangles() {
        let n = facet_normal(&tri.a, &tri.b, &tri.c);
        write_f32_triple(&mut writer, n.0, n.1, n.2)?;
        write_f32_triple(&mut writer, tri.a.x, tri.a.y, tri.a.z)?;
        write_f32_triple(&mut writer, tri.b.x, tri.b.y, tri.b.z)?;
        write_f32_triple(&mut writer, tri.c.x, tri.c.y, tri.c.z)?;
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn save_ascii<W: Write>(mesh: &TriMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid part")?;
    for tri in mesh.triangles() {
        let (nx, ny, nz) = facet_normal(&tri.a, &tri.b, &tri.c);
        writeln!(writer, "  facet normal {nx:.6e} {ny:.6e} {nz:.6e}")?;
        writeln!(writer, "    outer loop")?;
        for v in [&tri.a, &tri.b, &tri.c] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid part")?;
    Ok(())
}

fn facet_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> (f64, f64, f64) {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len > f64::EPSILON {
        (n.x / len, n.y / len, n.z / len)
    } else {
        (0.0, 0.0, 0.0)
    }
}

#[allow(clippy::cast_possible_truncation)]
// f64 -> f32 narrowing is inherent to the STL format.
fn write_f32_triple<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    writer.write_all(&(x as f32).to_le_bytes())?;
    writer.write_all(&(y as f32).to_le_bytes())?;
    writer.write_all(&(z as f32).to_le_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_types::cuboid;

    #[test]
    fn binary_roundtrip() {
        let original = cuboid(10.0, 10.0, 10.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.stl");

        save_stl(&original, &path, true).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.face_count(), original.face_count());
        assert!((loaded.signed_volume() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn ascii_roundtrip() {
        let original = cuboid(2.0, 4.0, 6.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box_ascii.stl");

        save_stl(&original, &path, false).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.face_count(), 12);
        let size = loaded.bounds().size();
        assert!((size.x - 2.0).abs() < 1e-5);
        assert!((size.y - 4.0).abs() < 1e-5);
        assert!((size.z - 6.0).abs() < 1e-5);
    }

    #[test]
    fn missing_file_is_distinguished() {
        let result = load_stl("no_such_part_42.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn ascii_parse_from_text() {
        let text = b"solid tri
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid tri
" as &[u8];

        let mesh = load_ascii(BufReader::new(text)).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn ascii_bad_float_is_error() {
        let text = b"solid bad
  facet normal 0 0 1
    outer loop
      vertex 0 0 zero
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid bad
" as &[u8];

        assert!(load_ascii(BufReader::new(text)).is_err());
    }

    #[test]
    fn truncated_binary_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trunc.stl");

        // Header declares 5 facets but the body carries none.
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes.extend_from_slice(&5u32.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        match load_stl(&path) {
            Err(IoError::TruncatedFacets { declared, read }) => {
                assert_eq!(declared, 5);
                assert_eq!(read, 0);
            }
            other => panic!("expected TruncatedFacets, got {other:?}"),
        }
    }

    #[test]
    fn centered_load_moves_center_of_mass_to_origin() {
        let mut cube = cuboid(10.0, 10.0, 10.0);
        cube.translate(draft_types::Vector3::new(25.0, -3.0, 7.0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.stl");
        save_stl(&cube, &path, true).unwrap();

        let centered = load_centered_stl(&path).unwrap();
        let com = centered.center_of_mass();
        assert!(com.x.abs() < 1e-3);
        assert!(com.y.abs() < 1e-3);
        assert!(com.z.abs() < 1e-3);
    }
}
