use crate::common;
use oorandom::Rand32;
use polycollide2d::math::{Point, Real};
use polycollide2d::shape::Polygon;

#[test]
fn sort_by_angle_is_idempotent() {
    let mut rng = Rand32::new(42);

    for _ in 0..50 {
        let mut poly = Polygon::new();
        for _ in 0..rng.rand_range(3..12) {
            let x = rng.rand_float() as Real * 100.0 - 50.0;
            let y = rng.rand_float() as Real * 100.0 - 50.0;
            poly.add_vertex(Point::new(x, y));
        }

        poly.sort_by_angle();
        let once = poly.clone();
        poly.sort_by_angle();

        assert_eq!(poly, once);
    }
}

#[test]
fn sorted_vertices_have_increasing_angles() {
    let poly = common::completed(&[
        (1.0, 1.0),
        (-1.0, -1.0),
        (1.0, -1.0),
        (-1.0, 1.0),
        (0.0, 2.0),
    ]);
    let center = poly.centroid();
    let angles: Vec<Real> = poly
        .vertices()
        .iter()
        .map(|v| (v.y - center.y).atan2(v.x - center.x))
        .collect();

    assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    assert_relative_eq!(center, Point::new(0.0, 0.4), epsilon = 1.0e-6);
}

#[test]
fn collinear_vertices_keep_insertion_order() {
    // The centroid is the origin: (2, 0) and (1, 0) share the same angle.
    let mut poly = common::polygon(&[(2.0, 0.0), (1.0, 0.0), (-3.0, 0.0), (0.0, 3.0), (0.0, -3.0)]);
    poly.sort_by_angle();

    let pos_2 = poly.vertices().iter().position(|v| *v == Point::new(2.0, 0.0));
    let pos_1 = poly.vertices().iter().position(|v| *v == Point::new(1.0, 0.0));
    assert!(pos_2 < pos_1);
}
