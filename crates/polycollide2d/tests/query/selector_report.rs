use crate::common;
use polycollide2d::math::{Point, Real};
use polycollide2d::query::{self, DetectorKind, QueryError};
use polycollide2d::sketch::{ClickOutcome, Sketch};

fn draw_closed(sketch: &mut Sketch, pts: &[(Real, Real)]) {
    for pt in pts {
        assert_eq!(
            sketch.process_click(Point::new(pt.0, pt.1)),
            ClickOutcome::VertexAdded
        );
    }

    let first = Point::new(pts[0].0 + 1.0, pts[0].1 + 1.0);
    assert_eq!(sketch.process_click(first), ClickOutcome::PolygonCompleted);
}

#[test]
fn report_lines_follow_pair_order() {
    let mut sketch = Sketch::new();
    draw_closed(&mut sketch, &[(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)]);
    draw_closed(&mut sketch, &[(300.0, 0.0), (400.0, 0.0), (350.0, 100.0)]);
    draw_closed(&mut sketch, &[(50.0, 50.0), (350.0, 50.0), (200.0, 150.0)]);

    // The last polygon is the empty current one.
    assert_eq!(sketch.len(), 4);

    let expected = "Polygon 0 and Polygon 1 colliding: false\n\
                    Polygon 0 and Polygon 2 colliding: true\n\
                    Polygon 1 and Polygon 2 colliding: true\n";

    for kind in DetectorKind::ALL {
        let report = sketch.check_collisions(kind, None);
        assert_eq!(report.detector, Some(kind));
        assert_eq!(report.to_string(), expected, "with {}", kind);
    }
}

#[test]
fn detector_selection_by_code() {
    let polygons = [
        common::completed(&[(0.0, 0.0), (10.0, 0.0), (10.0, 9.0)]),
        common::completed(&[(0.0, 1.0), (0.0, 10.0), (9.0, 10.0)]),
    ];
    let slots = || polygons.iter().map(Some);

    let aabb = query::check_all_pairs_with_code(1, slots(), None);
    let sat = query::check_all_pairs_with_code(2, slots(), None);
    let gjk = query::check_all_pairs_with_code(3, slots(), None);

    assert_eq!(aabb.map(|r| r.is_colliding(0, 1)), Ok(Some(true)));
    assert_eq!(sat.map(|r| r.is_colliding(0, 1)), Ok(Some(false)));
    assert_eq!(gjk.map(|r| r.is_colliding(0, 1)), Ok(Some(false)));

    for code in [0, 4, -1] {
        assert_eq!(
            query::check_all_pairs_with_code(code, slots(), None),
            Err(QueryError::UnknownDetector(code))
        );
    }
}

#[test]
fn unfinished_and_tiny_polygons_are_left_out() {
    let mut sketch = Sketch::new();
    draw_closed(&mut sketch, &[(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)]);
    draw_closed(&mut sketch, &[(20.0, 20.0), (120.0, 20.0), (70.0, 120.0)]);

    // A completed polygon with two vertices cannot come from clicks.
    let mut segment = common::polygon(&[(0.0, 0.0), (10.0, 10.0)]);
    segment.complete();

    let mut polygons = sketch.polygons().to_vec();
    polygons.insert(1, segment);
    let report = query::check_polygons(DetectorKind::Sat, &polygons, None);

    assert_eq!(report.skipped, [1]);
    assert_eq!(report.to_string(), "Polygon 0 and Polygon 2 colliding: true\n");
}
