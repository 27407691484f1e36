use super::self_intersect::Crossing;
use crate::math::Point2;

/// A sub-path of the raw offset ring between two crossing points.
#[derive(Debug, Clone)]
pub(super) struct RingSlice {
    pub vertices: Vec<Point2>,
}

/// Slices a closed ring at every crossing point, producing sub-paths.
///
/// Every crossing contributes a split point on each of its two segments; the
/// ring is walked once, emitting a slice between each pair of consecutive
/// split points (wrapping around the seam).
pub(super) fn build(ring: &[Point2], crossings: &[Crossing]) -> Vec<RingSlice> {
    if crossings.is_empty() || ring.is_empty() {
        return Vec::new();
    }
    let n = ring.len();

    // Split points per segment: (segment_index, t).
    let mut splits: Vec<(usize, f64)> = Vec::with_capacity(crossings.len() * 2);
    for c in crossings {
        splits.push((c.seg_i, c.t_i));
        splits.push((c.seg_j, c.t_j));
    }
    splits.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    let total = splits.len();
    let mut slices = Vec::with_capacity(total);
    for idx in 0..total {
        let (seg_a, t_a) = splits[idx];
        let (seg_b, t_b) = splits[(idx + 1) % total];
        let verts = slice_vertices(ring, n, seg_a, t_a, seg_b, t_b);
        if verts.len() >= 2 {
            slices.push(RingSlice { vertices: verts });
        }
    }
    slices
}

/// Builds the vertices for a single slice from `(seg_a, t_a)` forward to
/// `(seg_b, t_b)`.
fn slice_vertices(
    ring: &[Point2],
    n: usize,
    seg_a: usize,
    t_a: f64,
    seg_b: usize,
    t_b: f64,
) -> Vec<Point2> {
    let mut verts = vec![point_on_segment(ring, n, seg_a, t_a)];

    if seg_a == seg_b && t_b >= t_a {
        // Both split points on the same segment: a single sub-segment.
        verts.push(point_on_segment(ring, n, seg_b, t_b));
        return verts;
    }

    // Walk full vertices forward from the end of seg_a through the start of
    // seg_b, then close with the end split point.
    let mut seg = (seg_a + 1) % n;
    loop {
        verts.push(ring[seg]);
        if seg == seg_b {
            break;
        }
        seg = (seg + 1) % n;
    }
    verts.push(point_on_segment(ring, n, seg_b, t_b));
    verts
}

/// Position at parameter `t` on segment `seg` of the closed ring.
fn point_on_segment(ring: &[Point2], n: usize, seg: usize, t: f64) -> Point2 {
    let a = &ring[seg];
    let b = &ring[(seg + 1) % n];
    Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
}
