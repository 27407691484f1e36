use super::slice::RingSlice;
use crate::math::distance_2d::point_to_ring_dist;
use crate::math::Point2;

/// Fraction of `|delta|` a slice must keep clear of the source ring.
const KEEP_FRACTION: f64 = 0.5;

/// Filters slices, keeping those whose sample point stays at least
/// `KEEP_FRACTION * |delta|` away from the source ring.
///
/// Crossing loops hug the source ring closer than the offset distance;
/// culling by distance removes them while keeping genuine offset pieces.
pub(super) fn apply<'a>(
    slices: &'a [RingSlice],
    source: &[Point2],
    delta: f64,
) -> Vec<&'a RingSlice> {
    let threshold = delta.abs() * KEEP_FRACTION;
    slices
        .iter()
        .filter(|s| {
            if s.vertices.len() < 2 {
                return false;
            }
            point_to_ring_dist(&sample_point(&s.vertices), source) >= threshold
        })
        .collect()
}

/// Midpoint of the slice's middle segment.
fn sample_point(verts: &[Point2]) -> Point2 {
    let m = (verts.len() - 1) / 2;
    let a = &verts[m];
    let b = &verts[m + 1];
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}
