use crate::error::{PolybufferError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;

/// Reduces the vertex count of a closed ring within a tolerance.
///
/// Recursive point-to-chord-deviation simplification (Ramer-Douglas-Peucker),
/// adapted for closed rings. The classical algorithm runs over an open
/// polyline and never tests the ring's closing edge, so a vertex adjacent to
/// it survives even when it lies within tolerance of the closing chord,
/// leaving a near-duplicate next to the start vertex. The ring is therefore
/// extended with a sentinel copy of its first vertex, making the closing edge
/// an ordinary chord, then simplified as an open polyline and the sentinel
/// dropped from the result.
///
/// A tolerance of `0` keeps every point that is not exactly collinear with
/// its neighbours; larger tolerances discard more. Raising the tolerance
/// never increases the output length.
#[derive(Debug)]
pub struct RingSimplify2D {
    ring: Vec<Point2>,
    tolerance: f64,
}

impl RingSimplify2D {
    /// Creates a new ring simplification operation.
    ///
    /// Negative tolerances are treated as `0`.
    #[must_use]
    pub fn new(ring: Vec<Point2>, tolerance: f64) -> Self {
        Self {
            ring,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Executes the simplification, returning a newly allocated ring.
    ///
    /// The result holds between 2 and `ring.len()` vertices, in input order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the ring has fewer than 3 vertices.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.ring.len();
        if n < 3 {
            return Err(PolybufferError::InvalidGeometry(format!(
                "ring simplification requires at least 3 vertices, got {n}"
            )));
        }

        // Sentinel copy of the first vertex makes the ring's closing edge an
        // ordinary segment for the open-polyline recursion.
        let mut sentinelled = Vec::with_capacity(n + 1);
        sentinelled.extend_from_slice(&self.ring);
        sentinelled.push(self.ring[0]);

        let mut keep = vec![false; n + 1];
        keep[0] = true;
        keep[n] = true;

        // The top-level chord is degenerate (both endpoints are the first
        // vertex), so the farthest vertex is retained unconditionally as the
        // ring's second anchor; the tolerance test applies from there down.
        let far = farthest_from_chord(&sentinelled, 0, n);
        keep[far] = true;
        simplify_segment(&sentinelled, 0, far, self.tolerance, &mut keep);
        simplify_segment(&sentinelled, far, n, self.tolerance, &mut keep);

        // Drop the sentinel (always kept as an endpoint) and collect the
        // surviving vertices in order.
        Ok(sentinelled[..n]
            .iter()
            .zip(&keep)
            .filter_map(|(p, &k)| k.then_some(*p))
            .collect())
    }
}

/// Index of the interior point with maximum deviation from the chord
/// `points[start]`-`points[end]`.
fn farthest_from_chord(points: &[Point2], start: usize, end: usize) -> usize {
    let mut max_dist = -1.0;
    let mut max_idx = start + 1;
    for i in (start + 1)..end {
        let d = point_to_segment_dist(&points[i], &points[start], &points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }
    max_idx
}

/// Recursive simplification over `points[start..=end]`.
///
/// Keeps the interior point with maximum chord deviation when that deviation
/// exceeds the tolerance, then recurses on the two sub-chords it creates;
/// otherwise discards every interior point of the segment.
fn simplify_segment(
    points: &[Point2],
    start: usize,
    end: usize,
    tolerance: f64,
    keep: &mut [bool],
) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0;
    let mut max_idx = start;
    for i in (start + 1)..end {
        let d = point_to_segment_dist(&points[i], &points[start], &points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        keep[max_idx] = true;
        simplify_segment(points, start, max_idx, tolerance, keep);
        simplify_segment(points, max_idx, end, tolerance, keep);
    }
}
