//! End-to-end drawing generation from an STL file on disk.

use draft_io::{load_centered_stl, save_stl};
use draft_render::{compose_drawing, render_drawing, DrawingInfo, RenderError, SheetView};
use draft_section::{cross_section, SlicePlane};
use draft_types::{cuboid, Vector3};

fn views_for(mesh: &draft_types::TriMesh) -> Vec<SheetView> {
    [
        ("FRONT VIEW", SlicePlane::front()),
        ("TOP VIEW", SlicePlane::top()),
        ("RIGHT VIEW", SlicePlane::right()),
    ]
    .into_iter()
    .map(|(title, plane)| SheetView {
        title: title.to_string(),
        section: cross_section(mesh, &plane),
    })
    .collect()
}

#[test]
fn stl_to_drawing_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let stl_path = dir.path().join("part.stl");
    let png_path = dir.path().join("drawing.png");

    // An off-center part exercises the centering step; the slicing planes
    // pass through the origin and would miss it otherwise.
    let mut part = cuboid(20.0, 12.0, 8.0);
    part.translate(Vector3::new(100.0, 100.0, 100.0));
    save_stl(&part, &stl_path, true).unwrap();

    let mesh = load_centered_stl(&stl_path).unwrap();
    let views = views_for(&mesh);
    assert!(views.iter().all(|v| !v.section.is_empty()));

    let info = DrawingInfo {
        part_name: "TEST BLOCK".to_string(),
        ..DrawingInfo::default()
    };
    render_drawing(&views, &info, true, &png_path).unwrap();

    assert!(png_path.exists());
    assert!(std::fs::metadata(&png_path).unwrap().len() > 0);
}

#[test]
fn one_and_two_view_sheets_compose() {
    let mesh = cuboid(10.0, 10.0, 10.0);
    let views = views_for(&mesh);

    for n in 1..=2 {
        let canvas = compose_drawing(&views[..n], &DrawingInfo::default(), true).unwrap();
        assert!(canvas.data().iter().any(|&b| b < 255));
    }
}

#[test]
fn too_many_views_are_rejected() {
    let mesh = cuboid(10.0, 10.0, 10.0);
    let mut views = views_for(&mesh);
    views.extend(views_for(&mesh));

    let err = compose_drawing(&views, &DrawingInfo::default(), true).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedViewCount(6)));
}

#[test]
fn missing_plane_still_produces_a_sheet() {
    let mesh = cuboid(10.0, 10.0, 10.0);
    let plane = SlicePlane::new(
        draft_types::Point3::new(0.0, 0.0, 50.0),
        Vector3::z(),
    )
    .unwrap();

    let views = vec![SheetView {
        title: "TOP VIEW".to_string(),
        section: cross_section(&mesh, &plane),
    }];
    assert!(views[0].section.is_empty());

    let canvas = compose_drawing(&views, &DrawingInfo::default(), true).unwrap();
    assert!(canvas.data().iter().any(|&b| b < 255));
}
