use super::*;
use super::types::cross;
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn crossing_segments_meet_in_the_middle() {
    let p = segment_intersection(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
    )
    .unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn endpoints_count_as_hits() {
    let p = segment_intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, -1.0],
        vector![1.0, 1.0],
    );
    assert!(p.is_some());
    let q = segment_intersection(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 1.0],
        vector![2.0, 0.0],
    )
    .unwrap();
    assert!((q - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn parallel_and_collinear_segments_do_not_intersect() {
    // parallel
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0]
    )
    .is_none());
    // collinear overlap
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![3.0, 0.0]
    )
    .is_none());
    // disjoint but non-parallel
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, -1.0],
        vector![2.0, 1.0]
    )
    .is_none());
}

#[test]
fn line_hits_follow_polyline_edge_order() {
    // zig-zag crossed by a horizontal line; edges run right to left
    let zigzag = vec![
        vector![10.0, 0.0],
        vector![8.0, 2.0],
        vector![6.0, 0.0],
        vector![4.0, 2.0],
    ];
    let hits = line_polyline_intersections(vector![0.0, 1.0], vector![12.0, 1.0], &zigzag);
    assert_eq!(hits.len(), 3);
    assert!((hits[0].x - 9.0).abs() < 1e-12);
    assert!((hits[1].x - 7.0).abs() < 1e-12);
    assert!((hits[2].x - 5.0).abs() < 1e-12);
    assert!(line_polyline_intersections(vector![0.0, 5.0], vector![12.0, 5.0], &zigzag).is_empty());
}

#[test]
fn shared_vertex_is_reported_per_edge() {
    let surface = vec![vector![0.0, 0.0], vector![5.0, 5.0], vector![10.0, 0.0]];
    let hits = line_polyline_intersections(vector![0.0, 5.0], vector![10.0, 5.0], &surface);
    assert_eq!(hits.len(), 2);
    assert!(same_rounded(hits[0], hits[1]));
}

#[test]
fn polyline_pairs_are_ordered_by_first_polyline() {
    let a = vec![vector![0.0, 1.0], vector![4.0, 1.0], vector![4.0, -3.0]];
    let b = vec![vector![1.0, 0.0], vector![1.0, 2.0], vector![5.0, -2.0]];
    let hits = polyline_polyline_intersections(&a, &b);
    // edge a0 crosses b0 (x=1) and b1 (x=2); edge a1 crosses b1 at x=4
    assert_eq!(hits.len(), 3);
    assert!((hits[0] - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((hits[1] - vector![2.0, 1.0]).norm() < 1e-12);
    assert!((hits[2] - vector![4.0, -1.0]).norm() < 1e-12);
}

#[test]
fn rounding_membership_uses_three_decimals() {
    let pts = vec![round_point(vector![1.23449, 2.0]), vector![3.0, 4.0]];
    assert!(contains_rounded(&pts, vector![1.2341, 2.0004]));
    assert!(!contains_rounded(&pts, vector![1.2356, 2.0]));
    assert!((round3(-0.0004) - 0.0).abs() < 1e-15);
}

#[test]
fn random_crossings_lie_on_both_segments() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut pt = || vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let (p1, p2, q1, q2) = (pt(), pt(), pt(), pt());
        if let Some(x) = segment_intersection(p1, p2, q1, q2) {
            // distance of x to each supporting line is tiny
            let d1 = cross(p2 - p1, x - p1).abs() / (p2 - p1).norm();
            let d2 = cross(q2 - q1, x - q1).abs() / (q2 - q1).norm();
            assert!(d1 < 1e-9 && d2 < 1e-9);
        }
    }
}

#[test]
fn interpolation_is_linear() {
    let z = interpolate_z(vector![0.0, 2.0], vector![10.0, 0.0], 2.5);
    assert!((z - 1.5).abs() < 1e-12);
}

#[test]
fn snapping_rounds_and_drops_repeats() {
    let ring = vec![
        vector![0.0, 0.0],
        vector![1.00004, 0.0],
        vector![1.0, 0.0001],
        vector![1.0, 1.0],
        vector![0.0002, 0.0],
    ];
    assert_eq!(
        snap_ring(&ring),
        vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]]
    );
}

#[test]
fn points_near_an_edge_split_it_in_order() {
    let square = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    let at = [
        vector![3.0, 0.0004],
        vector![1.0, -0.0003],
        vector![0.0, 2.0],   // on the closing edge
        vector![4.0, 0.0005], // too close to a corner
        vector![2.0, 2.0],   // interior
        vector![2.0, 0.01],  // too far off the edge
    ];
    assert_eq!(
        split_ring_edges(&square, &at, cfg::SNAP_TOL),
        vec![
            vector![0.0, 0.0],
            vector![1.0, -0.0003],
            vector![3.0, 0.0004],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![0.0, 2.0],
        ]
    );
}
