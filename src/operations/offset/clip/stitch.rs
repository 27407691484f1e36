use super::slice::RingSlice;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Squared endpoint distance below which two slices are considered joined.
const STITCH_TOL_SQ: f64 = 1e-6;

/// Stitches valid slices into closed contours by matching endpoints.
///
/// Greedy: each chain is extended with the nearest unused slice whose start
/// point lies at the chain's end. Chains with fewer than 3 vertices, or
/// whose winding flipped relative to `source_area`, are dropped.
pub(super) fn connect(slices: &[&RingSlice], source_area: f64) -> Vec<Vec<Point2>> {
    if slices.is_empty() {
        return Vec::new();
    }

    let n = slices.len();
    let mut used = vec![false; n];
    let mut results = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }

        used[start] = true;
        let mut chain: Vec<Point2> = slices[start].vertices.clone();

        // Extend the chain with slices whose start matches our end.
        loop {
            let Some(end_pt) = chain.last().copied() else {
                break;
            };

            let mut best: Option<usize> = None;
            let mut best_dist_sq = STITCH_TOL_SQ;
            for candidate in 0..n {
                if used[candidate] {
                    continue;
                }
                let cand_start = &slices[candidate].vertices[0];
                let dist_sq = (cand_start - end_pt).norm_squared();
                if dist_sq < best_dist_sq {
                    best_dist_sq = dist_sq;
                    best = Some(candidate);
                }
            }

            if let Some(next) = best {
                used[next] = true;
                // The first vertex duplicates our end point.
                chain.extend_from_slice(&slices[next].vertices[1..]);
            } else {
                break;
            }
        }

        // Remove the duplicate closing vertex if the chain looped.
        if chain.len() > 1 {
            let first = chain[0];
            let last = chain[chain.len() - 1];
            if (last - first).norm_squared() < STITCH_TOL_SQ {
                chain.pop();
            }
        }

        if chain.len() < 3 {
            continue;
        }
        // A flipped winding marks an inverted remnant, not offset geometry.
        if signed_area_2d(&chain) * source_area <= 0.0 {
            continue;
        }

        results.push(chain);
    }

    results
}
