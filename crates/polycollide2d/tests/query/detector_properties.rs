use crate::common;
use polycollide2d::query::{
    AabbDetector, CollisionDetector, DetectorKind, GjkDetector, SatDetector,
};

#[test]
fn detectors_are_symmetric() {
    for (a, b) in common::random_pairs(1, 300) {
        for kind in DetectorKind::ALL {
            assert_eq!(
                kind.is_colliding(&a, &b),
                kind.is_colliding(&b, &a),
                "{} is not symmetric for {:?} and {:?}",
                kind,
                a,
                b
            );
        }
    }
}

#[test]
fn aabb_is_conservative() {
    for (a, b) in common::random_pairs(2, 300) {
        let aabb = AabbDetector.is_colliding(&a, &b);

        if SatDetector.is_colliding(&a, &b) {
            assert!(aabb);
        }
        if GjkDetector::default().is_colliding(&a, &b) {
            assert!(aabb);
        }
    }
}

#[test]
fn sat_and_gjk_agree() {
    let mut num_colliding = 0;

    for (a, b) in common::random_pairs(3, 500) {
        let sat = SatDetector.is_colliding(&a, &b);
        let gjk = GjkDetector::default().is_colliding(&a, &b);
        assert_eq!(sat, gjk, "SAT and GJK disagree on {:?} and {:?}", a, b);

        // Separation given by the edge normals is exact for convex polygons.
        assert_eq!(sat, common::signed_separation(&a, &b) < 0.0);
        num_colliding += sat as usize;
    }

    // Make sure both outcomes are exercised.
    assert!(num_colliding > 0 && num_colliding < 500);
}

#[test]
fn polygons_collide_with_themselves() {
    for (a, _) in common::random_pairs(4, 50) {
        for kind in DetectorKind::ALL {
            assert!(kind.is_colliding(&a, &a));
        }
    }
}

#[test]
fn gjk_handles_coincident_centroids() {
    // Same centroid: the initial search direction falls back to +X.
    let square = common::completed(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]);
    let diamond = common::completed(&[(0.0, -1.5), (1.5, 0.0), (0.0, 1.5), (-1.5, 0.0)]);
    let small = common::completed(&[(-0.1, -0.1), (0.1, -0.1), (0.1, 0.1), (-0.1, 0.1)]);

    for (a, b) in [(&square, &diamond), (&square, &small), (&diamond, &small)] {
        assert_eq!(a.centroid(), b.centroid());
        assert!(GjkDetector::default().is_colliding(a, b));
        assert!(GjkDetector::default().is_colliding(b, a));
        assert!(SatDetector.is_colliding(a, b));
    }
}
