use crate::common;
use polycollide2d::bounding_volume::{Aabb, BoundingVolume};
use polycollide2d::math::{Point, Vector};
use polycollide2d::query::{AabbDetector, CollisionDetector, SatDetector};

#[test]
fn touching_squares_overlap() {
    let left = common::completed(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let right = common::completed(&[(10.0, 0.0), (20.0, 0.0), (20.0, 10.0), (10.0, 10.0)]);
    let corner = common::completed(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);

    assert!(AabbDetector.is_colliding(&left, &right));
    assert!(AabbDetector.is_colliding(&left, &corner));
    assert!(SatDetector.is_colliding(&left, &right));
}

#[test]
fn separated_boxes_do_not_overlap() {
    let a = common::completed(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let b = common::completed(&[(10.5, 0.0), (20.0, 0.0), (20.0, 10.0), (10.5, 10.0)]);
    let c = common::completed(&[(0.0, 11.0), (10.0, 11.0), (10.0, 20.0), (0.0, 20.0)]);

    assert!(!AabbDetector.is_colliding(&a, &b));
    assert!(!AabbDetector.is_colliding(&a, &c));
}

#[test]
fn aabb_is_conservative_for_diagonal_triangles() {
    // Both triangles hug the same diagonal from opposite sides.
    let lower = common::completed(&[(0.0, 0.0), (10.0, 0.0), (10.0, 9.0)]);
    let upper = common::completed(&[(0.0, 1.0), (0.0, 10.0), (9.0, 10.0)]);

    assert!(AabbDetector.is_colliding(&lower, &upper));
    assert!(!SatDetector.is_colliding(&lower, &upper));
}

#[test]
fn polygon_aabb() {
    let tri = common::polygon(&[(1.0, -2.0), (4.0, 3.0), (-1.0, 0.0)]);
    let aabb = tri.aabb();

    assert_eq!(aabb, Aabb::new(Point::new(-1.0, -2.0), Point::new(4.0, 3.0)));
    assert_eq!(aabb.extents(), Vector::new(5.0, 5.0));
    assert!(aabb.contains(&Aabb::from_half_extents(
        Point::new(1.0, 0.0),
        Vector::new(1.0, 1.0)
    )));
}
