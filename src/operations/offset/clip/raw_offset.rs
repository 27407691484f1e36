use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{right_normal, segment_direction};
use crate::math::{Point2, Vector2};

/// Maximum miter distance as a multiple of `|delta|`.
const MITER_LIMIT: f64 = 4.0;

/// Threshold for flat cap: `cos(angle) < this` means a near-180° reversal.
const FLAT_CAP_COS: f64 = -0.98;

/// An offset edge with its unit direction.
struct OffsetSeg {
    start: Point2,
    end: Point2,
    dir: Vector2,
}

/// Builds the raw (untrimmed) offset ring by displacing every edge along its
/// perpendicular and connecting consecutive edges at the corners.
///
/// Positive `delta` displaces to the right of each edge's direction, which
/// is outward for counter-clockwise rings.
///
/// Returns `None` when the ring has a degenerate edge or fewer than 3
/// vertices survive corner joining.
pub(super) fn build(ring: &[Point2], delta: f64) -> Option<Vec<Point2>> {
    let n = ring.len();
    let mut segs = Vec::with_capacity(n);
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let dir = segment_direction(&a, &b).ok()?;
        let normal = right_normal(&dir);
        segs.push(OffsetSeg {
            start: a + normal * delta,
            end: b + normal * delta,
            dir,
        });
    }

    let mut verts: Vec<Point2> = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = &segs[(i + n - 1) % n];
        let next = &segs[i];
        push_corner(&mut verts, prev, next, &ring[i], delta);
    }

    verts.dedup();
    while verts.len() > 1 && verts.first() == verts.last() {
        verts.pop();
    }
    (verts.len() >= 3).then_some(verts)
}

/// Pushes the join vertex/vertices between two consecutive offset edges.
///
/// Handles three cases:
/// 1. Near-antiparallel (hairpin): flat cap (two vertices)
/// 2. Miter beyond the limit: bevel (two vertices)
/// 3. Normal corner: single miter intersection point
fn push_corner(
    verts: &mut Vec<Point2>,
    prev: &OffsetSeg,
    next: &OffsetSeg,
    corner: &Point2,
    delta: f64,
) {
    let cos_angle = prev.dir.dot(&next.dir);
    if cos_angle < FLAT_CAP_COS {
        verts.push(prev.end);
        verts.push(next.start);
        return;
    }

    if let Some((t, _)) = line_line_intersect_2d(&prev.end, &prev.dir, &next.start, &next.dir) {
        let miter = prev.end + prev.dir * t;
        let limit = MITER_LIMIT * delta.abs();
        if (miter - corner).norm_squared() > limit * limit {
            // Miter too long: bevel.
            verts.push(prev.end);
            verts.push(next.start);
        } else {
            verts.push(miter);
        }
    } else {
        // Parallel edges share an offset line; continue from the next
        // segment's start.
        verts.push(next.start);
    }
}
