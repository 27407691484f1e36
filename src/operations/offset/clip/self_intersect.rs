use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, TOLERANCE};

/// A crossing between two non-adjacent segments of a closed ring.
#[derive(Debug, Clone)]
pub(super) struct Crossing {
    /// Index of the first segment.
    pub seg_i: usize,
    /// Index of the second segment (always > `seg_i`).
    pub seg_j: usize,
    /// Parameter on segment `seg_i` (0..1).
    pub t_i: f64,
    /// Parameter on segment `seg_j` (0..1).
    pub t_j: f64,
}

/// Finds all crossings between non-adjacent segments of a closed ring.
///
/// Endpoint touches (either parameter at a segment end) are vertex-on-segment
/// contacts rather than genuine crossings and are skipped.
pub(super) fn find_all(ring: &[Point2]) -> Vec<Crossing> {
    let n = ring.len();
    if n < 4 {
        return Vec::new();
    }

    let eps = TOLERANCE * 100.0;
    let mut results = Vec::new();

    for i in 0..n {
        for j in (i + 2)..n {
            // Skip the seam pair: segment n-1 is adjacent to segment 0.
            if i == 0 && j == n - 1 {
                continue;
            }

            let hit = segment_segment_intersect_2d(
                &ring[i],
                &ring[(i + 1) % n],
                &ring[j],
                &ring[(j + 1) % n],
            );
            if let Some((_, t, u)) = hit {
                let t_at_end = t < eps || t > 1.0 - eps;
                let u_at_end = u < eps || u > 1.0 - eps;
                if t_at_end || u_at_end {
                    continue;
                }
                results.push(Crossing {
                    seg_i: i,
                    seg_j: j,
                    t_i: t,
                    t_j: u,
                });
            }
        }
    }

    // Sort by segment index, then by parameter.
    results.sort_by(|a, b| {
        a.seg_i.cmp(&b.seg_i).then(
            a.t_i
                .partial_cmp(&b.t_i)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    results
}
