//! Adaptive quadratic-Bézier flattening: canonical outline → polylines
//! in font units.

use crate::outline::Outline;

/// Maximum de Casteljau bisection depth per curve segment; bounds a
/// single degenerate Bézier to at most 4096 chords.
const MAX_SUBDIVISION_DEPTH: u32 = 12;

/// Default flattening tolerance in font units, suitable for wireframe
/// rendering at typical glyph sizes.
pub const DEFAULT_TOLERANCE: f32 = 0.75;

#[derive(Debug, Clone, Default)]
pub struct FlattenedContour {
    pub points: Vec<(f32, f32)>,
}

/// Flattens every contour of `outline` into an ordered, implicitly
/// closed polyline, each within perpendicular deviation `tolerance` of
/// the underlying quadratic Bézier path.
pub fn flatten(outline: &Outline, tolerance: f32) -> Vec<FlattenedContour> {
    outline
        .contour_slices()
        .map(|(points, on_curve)| flatten_contour(points, on_curve, tolerance))
        .collect()
}

fn flatten_contour(points: &[(f32, f32)], on_curve: &[bool], tolerance: f32) -> FlattenedContour {
    if points.is_empty() {
        return FlattenedContour::default();
    }
    if points.len() == 1 {
        return FlattenedContour { points: vec![points[0]] };
    }

    // Expand the cyclic point list so no two consecutive points are
    // both off-curve, inserting the implicit on-curve midpoint between
    // them.
    let n = points.len();
    let mut expanded: Vec<((f32, f32), bool)> = Vec::with_capacity(n + 1);
    for i in 0..n {
        let next = (i + 1) % n;
        expanded.push((points[i], on_curve[i]));
        if !on_curve[i] && !on_curve[next] {
            expanded.push((midpoint(points[i], points[next]), true));
        }
    }

    // Rotate so the walk starts at an on-curve vertex. The expansion
    // above guarantees one exists (two off-curve points are never
    // cyclically adjacent after insertion).
    let start = expanded.iter().position(|&(_, oc)| oc).expect("expanded contour has an on-curve point");
    expanded.rotate_left(start);

    let m = expanded.len();
    let mut out = Vec::with_capacity(m);
    let (start_point, _) = expanded[0];
    out.push(start_point);
    let mut prev = start_point;

    let mut j = 1;
    while j <= m {
        let (p, oc) = expanded[j % m];
        if oc {
            out.push(p);
            prev = p;
            j += 1;
        } else {
            let (end, _) = expanded[(j + 1) % m];
            subdivide(prev, p, end, tolerance, 0, &mut out);
            prev = end;
            j += 2;
        }
    }
    // The walk closes back to `start_point`; the index builder treats
    // contours as implicitly closed, so drop that duplicate.
    out.pop();

    FlattenedContour { points: out }
}

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5)
}

/// Recursively bisects the quadratic Bézier `(p0, ctrl, p1)` at `t =
/// 0.5` until the control point's perpendicular distance from the
/// chord is within `tolerance`, or `depth` reaches the subdivision cap.
/// Pushes every terminal endpoint except `p0` (already emitted).
fn subdivide(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32), tolerance: f32, depth: u32, out: &mut Vec<(f32, f32)>) {
    if depth >= MAX_SUBDIVISION_DEPTH || chord_deviation(p0, ctrl, p1) <= tolerance {
        out.push(p1);
        return;
    }
    let p01 = midpoint(p0, ctrl);
    let p12 = midpoint(ctrl, p1);
    let mid_on_curve = midpoint(p01, p12);
    subdivide(p0, p01, mid_on_curve, tolerance, depth + 1, out);
    subdivide(mid_on_curve, p12, p1, tolerance, depth + 1, out);
}

/// Perpendicular distance from `ctrl` to the line `p0`-`p1`.
fn chord_deviation(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32)) -> f32 {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        let (cx, cy) = (ctrl.0 - p0.0, ctrl.1 - p0.1);
        return (cx * cx + cy * cy).sqrt();
    }
    ((ctrl.0 - p0.0) * dy - (ctrl.1 - p0.1) * dx).abs() / len
}
