use super::*;
use nalgebra::point;
use proptest::prelude::*;

fn t(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
    Triangle::new(point![a.0, a.1], point![b.0, b.1], point![c.0, c.1])
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| point![x, y]).collect()
}

#[test]
fn three_points_give_the_seed_triangle() {
    let out = triangulate(&pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)])).unwrap();
    assert_eq!(out, vec![t((0.0, 0.0), (0.0, 1.0), (1.0, 0.0))]);
}

#[test]
fn unit_square_gives_two_triangles() {
    let out = triangulate(&pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)])).unwrap();
    assert_eq!(
        out,
        vec![
            t((0.0, 0.0), (0.0, 1.0), (1.0, 0.0)),
            t((0.0, 1.0), (1.0, 0.0), (1.0, 1.0)),
        ]
    );
}

#[test]
fn repeated_points_are_dropped() {
    let out = triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0)])).unwrap();
    assert_eq!(out, vec![t((0.0, 0.0), (1.0, 1.0), (2.0, 0.0))]);
}

#[test]
fn collinear_seed_fans_first_off_line_point() {
    let tri = Triangulation::new(&pts(&[
        (0.0, 0.0),
        (0.0, 1.0),
        (0.0, 2.0),
        (0.0, 3.0),
        (1.0, 0.0),
    ]))
    .unwrap();
    assert!(tri.is_degenerate());
    assert_eq!(
        tri.hull().boundary(),
        pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (1.0, 0.0)]).as_slice()
    );
    assert_eq!(
        tri.triangles(),
        &[
            t((0.0, 0.0), (0.0, 1.0), (1.0, 0.0)),
            t((0.0, 1.0), (0.0, 2.0), (1.0, 0.0)),
            t((0.0, 2.0), (0.0, 3.0), (1.0, 0.0)),
        ]
    );
}

#[test]
fn all_collinear_is_degenerate_input() {
    let err = triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap_err();
    assert_eq!(err, Error::DegenerateInput { count: 3 });
    let err = triangulate(&pts(&[(3.0, 3.0), (0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap_err();
    assert_eq!(err, Error::DegenerateInput { count: 4 });
}

#[test]
fn insufficient_points_checked_first() {
    assert_eq!(
        triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0)])),
        Err(Error::InsufficientPoints { got: 2 })
    );
    assert_eq!(
        triangulate(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)])),
        Err(Error::InsufficientPoints { got: 2 })
    );
}

#[test]
fn non_finite_input_rejected() {
    assert_eq!(
        triangulate(&pts(&[(0.0, 0.0), (1.0, f64::INFINITY), (1.0, 0.0)])),
        Err(Error::NonFinite { index: 1 })
    );
}

#[test]
fn interior_point_is_displaced_and_connected() {
    let tri = Triangulation::new(&pts(&[
        (0.0, 0.0),
        (0.0, 2.0),
        (0.75, 1.75),
        (2.0, 0.0),
        (2.0, 2.0),
    ]))
    .unwrap();
    assert!(!tri.is_degenerate());
    assert_eq!(tri.triangles().len(), 4);
    assert_eq!(tri.hull().len(), 4);
    assert_eq!(tri.area(), tri.hull().area());
    let inner = point![0.75, 1.75];
    let cfg = GeomCfg::default();
    assert!(tri.triangles().iter().all(|t| t.has_vertex(&inner, &cfg)));
}

#[test]
fn convex_position_gives_n_minus_two() {
    let hexagon = pts(&[
        (0.0, 1.0),
        (1.0, 0.0),
        (1.0, 2.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (3.0, 1.0),
    ]);
    let tri = Triangulation::new(&hexagon).unwrap();
    assert_eq!(tri.hull().len(), 6);
    assert_eq!(tri.triangles().len(), 4);
    assert_eq!(tri.area(), 4.0);
    assert_eq!(tri.hull().area(), 4.0);

    let pentagon = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 4.0), (3.0, 3.0), (4.0, 0.0)]);
    let tri = Triangulation::new(&pentagon).unwrap();
    assert_eq!(tri.triangles().len(), 3);
    assert_eq!(tri.area(), 10.0);
}

#[test]
fn new_triangles_pivot_on_inserted_point() {
    let cloud = pts(&[
        (0.0, 0.0),
        (0.0, 2.0),
        (1.0, 1.0),
        (2.0, 0.0),
        (2.0, 2.0),
    ]);
    let (triangles, hull) = Triangulation::new(&cloud).unwrap().into_parts();
    // Seed triangle, then one triangle for (2, 0) and two for (2, 2).
    assert_eq!(triangles[1].vertices()[0], point![2.0, 0.0]);
    assert_eq!(triangles[2].vertices()[0], point![2.0, 2.0]);
    assert_eq!(triangles[3].vertices()[0], point![2.0, 2.0]);
    assert_eq!(triangles[3], t((2.0, 2.0), (1.0, 1.0), (2.0, 0.0)));
    assert_eq!(hull.boundary().len(), 4);
}

#[test]
fn tolerance_policy_changes_seeding() {
    let cloud = pts(&[(0.0, 0.0), (1.0, 1e-12), (2.0, 0.0), (3.0, 5.0)]);
    let exact = Triangulation::new(&cloud).unwrap();
    assert!(!exact.is_degenerate());
    let tolerant = Triangulation::with_cfg(&cloud, GeomCfg::tolerant(1e-9)).unwrap();
    assert!(tolerant.is_degenerate());
    assert_eq!(tolerant.triangles().len(), 2);
}

#[test]
fn tolerant_twin_of_earlier_point_adds_no_triangles() {
    let cfg = GeomCfg::tolerant(1e-9);
    let base = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, 3.0)]);
    // Sorts after (2, 3), so dedup of neighbours does not catch it.
    let twin = point![2.0 + 1e-12, 1e-12];
    let mut with_twin = base.clone();
    with_twin.push(twin);

    let plain = Triangulation::with_cfg(&base, cfg).unwrap();
    let tri = Triangulation::with_cfg(&with_twin, cfg).unwrap();
    assert_eq!(tri.triangles(), plain.triangles());
    assert!(tri.triangles().iter().all(|t| !t.vertices().contains(&twin)));
    assert_eq!(tri.hull().boundary(), plain.hull().boundary());
}

#[test]
fn helpers_fan_and_displace() {
    let p = point![5.0, 0.0];
    let seq = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    let fan = fan_triangulate(p, &seq);
    assert_eq!(fan.len(), 2);
    assert_eq!(fan[1], t((5.0, 0.0), (1.0, 1.0), (2.0, 0.0)));
    assert!(fan_triangulate(p, &seq[..1]).is_empty());

    let before = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    let after = pts(&[(0.0, 0.0), (3.0, 0.0), (2.0, 0.0)]);
    assert_eq!(
        displaced_points(&before, &after, &GeomCfg::default()),
        vec![point![1.0, 1.0]]
    );
}

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 3..30)
        .prop_map(|v| v.into_iter().map(|(x, y)| point![x, y]).collect())
}

proptest! {
    #[test]
    fn rerun_is_identical(cloud in cloud()) {
        let a = Triangulation::new(&cloud).unwrap();
        let b = Triangulation::new(&cloud).unwrap();
        prop_assert_eq!(a.triangles().len(), b.triangles().len());
        for (x, y) in a.triangles().iter().zip(b.triangles()) {
            prop_assert_eq!(x.vertices(), y.vertices());
        }
        prop_assert_eq!(a.hull().boundary(), b.hull().boundary());
    }

    #[test]
    fn triangles_use_input_points_and_final_hull_matches_batch(cloud in cloud()) {
        let tri = Triangulation::new(&cloud).unwrap();
        prop_assert!(!tri.triangles().is_empty());
        for t in tri.triangles() {
            for v in t.vertices() {
                prop_assert!(cloud.contains(v));
            }
        }
        let batch = crate::build_convex_hull(&cloud).unwrap();
        prop_assert_eq!(tri.hull().boundary(), batch.as_slice());
    }
}
