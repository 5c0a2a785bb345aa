use crate::common;
use polycollide2d::query::gjk::GjkOptions;
use polycollide2d::query::{CollisionDetector, DetectorKind, GjkDetector, SatDetector};
use polycollide2d::shape::Polygon;

fn disjoint_triangles() -> (Polygon, Polygon) {
    (
        common::completed(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]),
        common::completed(&[(5.0, 0.0), (7.0, 0.0), (6.0, 2.0)]),
    )
}

fn overlapping_triangles() -> (Polygon, Polygon) {
    (
        common::completed(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]),
        common::completed(&[(1.0, 1.0), (5.0, 1.0), (3.0, 5.0)]),
    )
}

#[test]
fn disjoint_reference_triangles() {
    let (a, b) = disjoint_triangles();

    for kind in DetectorKind::ALL {
        assert!(!kind.is_colliding(&a, &b), "{} reported a collision", kind);
    }
}

#[test]
fn overlapping_reference_triangles() {
    let (a, b) = overlapping_triangles();

    for kind in DetectorKind::ALL {
        assert!(kind.is_colliding(&a, &b), "{} missed a collision", kind);
    }
}

#[test]
fn contained_polygon() {
    let outer = common::completed(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inner = common::completed(&[(4.0, 4.0), (6.0, 4.0), (5.0, 6.0)]);

    assert!(SatDetector.is_colliding(&outer, &inner));
    assert!(GjkDetector::default().is_colliding(&outer, &inner));
    assert!(GjkDetector::default().is_colliding(&inner, &outer));
}

#[test]
fn axis_aligned_contact_is_an_overlap() {
    let a = common::completed(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    let b = common::completed(&[(2.0, 1.0), (4.0, 1.0), (4.0, 3.0), (2.0, 3.0)]);
    let corner = common::completed(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]);

    for kind in DetectorKind::ALL {
        assert!(kind.is_colliding(&a, &b), "{} missed an edge contact", kind);
        assert!(kind.is_colliding(&b, &a), "{} missed an edge contact", kind);
        assert!(kind.is_colliding(&a, &corner), "{} missed a corner contact", kind);
    }
}

#[test]
fn slanted_contact_is_exact_with_gjk() {
    // Touching at (6, 4), a vertex of `a` lying on the slanted edge of `b`.
    let a = common::completed(&[(0.0, 3.0), (1.0, 1.0), (6.0, 4.0), (2.0, 5.0)]);
    let b = common::completed(&[(5.0, 2.0), (7.0, 2.0), (7.0, 6.0)]);
    let gjk = GjkDetector::default();

    assert!(gjk.is_colliding(&a, &b));
    assert!(gjk.is_colliding(&b, &a));

    // SAT only sees the contact up to rounding.
    assert!(common::signed_separation(&a, &b).abs() < 1.0e-4);
}

#[test]
fn gjk_options_are_honored() {
    let (a, b) = overlapping_triangles();
    let exhausted = GjkDetector::new(GjkOptions {
        max_iterations: 0,
        ..GjkOptions::default()
    });

    assert!(GjkDetector::default().is_colliding(&a, &b));
    assert!(!exhausted.is_colliding(&a, &b));
}

#[test]
fn degenerate_input_does_not_panic() {
    let (tri, _) = overlapping_triangles();
    let point = common::polygon(&[(1.0, 1.0)]);
    let segment = common::polygon(&[(-1.0, 1.0), (5.0, 1.0)]);
    let duplicates = common::polygon(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);

    for kind in DetectorKind::ALL {
        for other in [&point, &segment, &duplicates] {
            let _ = kind.is_colliding(&tri, other);
            let _ = kind.is_colliding(other, &tri);
            assert!(kind.try_is_colliding(&tri, other).is_err() || other.len() >= 3);
        }
    }

    // Neither polygon has an edge: SAT cannot test anything.
    assert!(!SatDetector.is_colliding(&point, &point));
}
