use gasket_core::demo::view_rotation;
use gasket_core::*;
use glam::Vec3;

#[test]
fn test_all_demos_generate() {
    for demo in Demo::ALL {
        let request = demo.request();
        let buf = Generator::default()
            .generate(&request)
            .unwrap_or_else(|e| panic!("demo '{demo}' failed: {e}"));
        assert!(!buf.is_empty(), "demo '{demo}' produced no vertices");
        assert!(
            buf.points().iter().all(|p| p.is_finite() && p.abs().max_element() <= 1.5),
            "demo '{demo}' has out-of-range vertices"
        );
    }
}

#[test]
fn test_demo_vertex_counts() {
    let count = |d: Demo| Generator::default().generate(&d.request()).unwrap().vertex_count();
    assert_eq!(count(Demo::GasketTriangles), 3 * 3usize.pow(10));
    assert_eq!(count(Demo::Gasket3d), 12 * 4usize.pow(5));
    assert_eq!(count(Demo::TriangleLines), 6 * 3usize.pow(4));
    assert_eq!(count(Demo::RotatingLines), 6 * 3usize.pow(4));
    assert_eq!(count(Demo::Tessella), 6 * 4usize.pow(5));
}

#[test]
fn test_demo_primitives_and_colors() {
    let gasket = Generator::default().generate(&Demo::GasketTriangles.request()).unwrap();
    assert_eq!(Demo::GasketTriangles.request().primitive(), Primitive::Triangles);
    assert!(!gasket.has_colors());

    let lines = Generator::default().generate(&Demo::TriangleLines.request()).unwrap();
    assert_eq!(Demo::TriangleLines.request().primitive(), Primitive::Lines);
    assert_eq!(lines.vertex_colors().unwrap()[0], [0.0, 0.0, 1.0, 1.0]);

    let tessella = Generator::default().generate(&Demo::Tessella.request()).unwrap();
    assert!(!tessella.has_colors());
    assert!(tessella.points().iter().all(|p| p.z == 0.0));
}

#[test]
fn test_tessella_base_on_unit_circle() {
    let base = Demo::Tessella.request().base_vertices;
    assert!((base[0] - Vec3::Y).length() < 1e-6, "first vertex at 90 deg: {:?}", base[0]);
    for p in &base {
        assert!((p.length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_demo_names_round_trip() {
    for demo in Demo::ALL {
        assert_eq!(demo.name().parse::<Demo>(), Ok(demo));
    }
    assert_eq!(
        "solar-system".parse::<Demo>(),
        Err(GeometryError::UnknownDemo("solar-system".to_string()))
    );
}

#[test]
fn test_rotation() {
    assert_eq!(Demo::Gasket3d.initial_rotation(), 0.0);
    let rot = view_rotation(Demo::RotatingLines.initial_rotation());
    // 3*pi about Z flips x and y.
    let p = rot.transform_point3(Vec3::new(1.0, 0.0, 0.0));
    assert!((p - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5, "{p:?}");
}
