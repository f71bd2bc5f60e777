//! Randomized checks over generated skyline and column loops.

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::cast_precision_loss)]

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::OrthoOutline2D;
use crate::math::polygon_2d::{is_axis_aligned, is_simple};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::operations::query::{BoundingBox2D, Encloses};
use crate::operations::transform::Translate2D;

const CASES: usize = 500;

/// Builds a counter-clockwise skyline: a flat base with 2 to 7 columns of
/// random height, traced from the bottom-left corner.
fn skyline(rng: &mut StdRng) -> Vec<Point2> {
    let columns = rng.gen_range(2..=7);
    let mut xs: Vec<f64> = sample(rng, 29, columns + 1)
        .into_iter()
        .map(|i| (i + 1) as f64)
        .collect();
    xs.sort_by(f64::total_cmp);
    let heights: Vec<f64> = (0..columns)
        .map(|_| f64::from(rng.gen_range(1..=15_u8)))
        .collect();

    let mut raw = vec![Point2::new(xs[0], 0.0), Point2::new(xs[columns], 0.0)];
    for i in (0..columns).rev() {
        raw.push(Point2::new(xs[i + 1], heights[i]));
        raw.push(Point2::new(xs[i], heights[i]));
    }

    let mut points: Vec<Point2> = Vec::with_capacity(raw.len() + 1);
    for p in raw {
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if rng.gen_bool(0.5) {
        points.push(points[0]);
    }
    points
}

/// Builds a counter-clockwise loop of 2 to 7 adjacent columns whose floors
/// and roofs both step, so the bottom and both sides are staircases too.
/// Neighbouring columns overlap vertically; the start vertex is random.
fn column_loop(rng: &mut StdRng) -> Vec<Point2> {
    let columns = rng.gen_range(2..=7);
    let mut xs: Vec<f64> = sample(rng, 29, columns + 1)
        .into_iter()
        .map(|i| (i + 1) as f64)
        .collect();
    xs.sort_by(f64::total_cmp);

    let mut spans: Vec<(f64, f64)> = Vec::with_capacity(columns);
    while spans.len() < columns {
        let lo = rng.gen_range(0..=10_u8);
        let hi = rng.gen_range(lo + 1..=20_u8);
        let (lo, hi) = (f64::from(lo), f64::from(hi));
        if spans.last().is_none_or(|&(plo, phi)| lo < phi && hi > plo) {
            spans.push((lo, hi));
        }
    }

    let mut raw = Vec::with_capacity(4 * columns);
    for (i, &(lo, _)) in spans.iter().enumerate() {
        raw.push(Point2::new(xs[i], lo));
        raw.push(Point2::new(xs[i + 1], lo));
    }
    for (i, &(_, hi)) in spans.iter().enumerate().rev() {
        raw.push(Point2::new(xs[i + 1], hi));
        raw.push(Point2::new(xs[i], hi));
    }

    let mut points: Vec<Point2> = Vec::with_capacity(raw.len());
    for p in raw {
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    let start = rng.gen_range(0..points.len());
    points.rotate_left(start);
    points
}

/// Inserts edge midpoints at random, adding collinear noise to the loop.
fn with_midpoints(rng: &mut StdRng, points: &[Point2]) -> Vec<Point2> {
    let mut points = points.to_vec();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    let n = points.len();
    let mut noisy = Vec::with_capacity(2 * n);
    for i in 0..n {
        let (p, q) = (points[i], points[(i + 1) % n]);
        noisy.push(p);
        if rng.gen_bool(0.4) {
            noisy.push(nalgebra::center(&p, &q));
        }
    }
    noisy
}

fn outline(points: &[Point2]) -> Vec<Point2> {
    OrthoOutline2D::new(points.to_vec()).execute().unwrap()
}

#[test]
fn outline_encloses_every_input_point() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..CASES {
        let points = skyline(&mut rng);
        let out = outline(&points);
        let outside = Encloses::new(&out, &points).outside();
        assert!(outside.is_empty(), "{points:?} -> {out:?} misses {outside:?}");
    }
}

#[test]
fn outline_encloses_loops_with_collinear_noise() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let points = skyline(&mut rng);
        let noisy = with_midpoints(&mut rng, &points);
        let out = outline(&noisy);
        assert!(Encloses::new(&out, &noisy).execute(), "{noisy:?} -> {out:?}");
    }
}

#[test]
fn column_loop_outline_is_simple_and_encloses() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..CASES {
        let points = column_loop(&mut rng);
        let out = outline(&points);
        assert!(is_simple(&out, TOLERANCE), "{points:?} -> {out:?}");
        assert!(is_axis_aligned(&out, TOLERANCE), "{points:?} -> {out:?}");
        let outside = Encloses::new(&out, &points).outside();
        assert!(outside.is_empty(), "{points:?} -> {out:?} misses {outside:?}");
    }
}

#[test]
fn skyline_outline_is_simple() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..CASES {
        let out = outline(&skyline(&mut rng));
        assert!(is_simple(&out, TOLERANCE), "{out:?}");
    }
}

#[test]
fn outline_is_axis_aligned_and_touches_every_box_side() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let points = skyline(&mut rng);
        let out = outline(&points);
        let bbox = BoundingBox2D::new(&points).execute().unwrap();

        assert!(is_axis_aligned(&out, TOLERANCE), "{out:?}");
        assert_eq!(out[0], bbox.min);
        assert!(out.iter().any(|p| p.x == bbox.max.x));
        assert!(out.iter().any(|p| p.y == bbox.max.y));
        assert!(out.iter().any(|p| p.x == bbox.min.x && p.y == bbox.max.y));
    }
}

#[test]
fn outline_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let out = outline(&skyline(&mut rng));
        assert_eq!(outline(&out), out);
    }
}

#[test]
fn outline_commutes_with_translation() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let points = skyline(&mut rng);
        let offset = Vector2::new(
            f64::from(rng.gen_range(-50..=50_i32)),
            f64::from(rng.gen_range(-50..=50_i32)),
        );
        let moved = outline(&Translate2D::new(&points, offset).execute());
        assert_eq!(moved, Translate2D::new(&outline(&points), offset).execute());
    }
}
