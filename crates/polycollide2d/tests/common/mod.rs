use oorandom::Rand32;
use polycollide2d::math::{Point, Real};
use polycollide2d::query::sat::{self, Projection};
use polycollide2d::shape::Polygon;

/// Distance under which a pair is considered too close to touching for the exact detectors to
/// be compared.
pub const TOUCHING_MARGIN: Real = 1.0e-3;

pub fn polygon(pts: &[(Real, Real)]) -> Polygon {
    Polygon::from_vertices(pts.iter().map(|p| Point::new(p.0, p.1)).collect())
}

pub fn completed(pts: &[(Real, Real)]) -> Polygon {
    let mut poly = polygon(pts);
    poly.complete();
    poly
}

fn random_in(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

/// A completed regular polygon with 3 to 8 vertices, a random radius, center and rotation.
pub fn random_convex_polygon(rng: &mut Rand32) -> Polygon {
    let num_vertices = rng.rand_range(3..9);
    let radius = random_in(rng, 0.5, 5.0);
    let center = Point::new(random_in(rng, -8.0, 8.0), random_in(rng, -8.0, 8.0));
    let rotation = random_in(rng, 0.0, core::f32::consts::TAU as Real);

    let mut poly = Polygon::new();
    for i in 0..num_vertices {
        let angle = rotation + i as Real * (2.0 * core::f32::consts::PI as Real) / num_vertices as Real;
        poly.add_vertex(center + na::Vector2::new(angle.cos(), angle.sin()) * radius);
    }
    poly.complete();
    poly
}

/// The largest gap between the projections of the polygons over their edge normals.
///
/// Positive when the polygons are separated, negative when they overlap.
pub fn signed_separation(poly1: &Polygon, poly2: &Polygon) -> Real {
    sat::polygon_polygon_candidate_axes(poly1, poly2)
        .iter()
        .map(|axis| {
            let proj1 = Projection::new(poly1.vertices(), axis);
            let proj2 = Projection::new(poly2.vertices(), axis);
            (proj2.min - proj1.max).max(proj1.min - proj2.max)
        })
        .fold(-Real::MAX, Real::max)
}

/// `count` pairs of random convex polygons, excluding pairs that nearly touch.
pub fn random_pairs(seed: u64, count: usize) -> Vec<(Polygon, Polygon)> {
    let mut rng = Rand32::new(seed);
    let mut result = Vec::with_capacity(count);

    while result.len() < count {
        let poly1 = random_convex_polygon(&mut rng);
        let poly2 = random_convex_polygon(&mut rng);

        if signed_separation(&poly1, &poly2).abs() > TOUCHING_MARGIN {
            result.push((poly1, poly2));
        }
    }

    result
}
