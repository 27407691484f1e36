use super::OffsetStrategy;
use crate::error::{PolybufferError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Per-vertex outward-normal displacement offset.
///
/// Estimates each vertex's outward direction from the segment between the
/// midpoints of its two adjacent edges and displaces the vertex along that
/// normal. Cheap and geometry-unaware: it needs no clipping backend and
/// always returns one point per input point.
///
/// The estimate diverges from the true angle bisector at sharp convex
/// corners, where offset points crowd together or cross, and in tight
/// concave regions the estimated direction may point into the interior,
/// producing a self-intersecting result. Neither case is detected or
/// corrected here; callers that need a guaranteed simple ring should use
/// [`ExactOffset`](super::ExactOffset). Pre-simplifying a noisy ring reduces
/// the number of such outliers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproximateOffset;

impl OffsetStrategy for ApproximateOffset {
    fn offset(&self, ring: &[Point2], distance: f64) -> Result<Vec<Point2>> {
        let n = ring.len();
        if n < 3 {
            return Err(PolybufferError::InvalidGeometry(format!(
                "approximate offset requires at least 3 vertices, got {n}"
            )));
        }

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let prev = &ring[(i + n - 1) % n];
            let curr = &ring[i];
            let next = &ring[(i + 1) % n];

            let mid_a = Point2::new((prev.x + curr.x) * 0.5, (prev.y + curr.y) * 0.5);
            let mid_b = Point2::new((curr.x + next.x) * 0.5, (curr.y + next.y) * 0.5);

            // Outward-facing normal of the line between the midpoints.
            // Coincident neighbours leave no direction to estimate; the
            // vertex then stays in place.
            let d = mid_b - mid_a;
            let normal = Vector2::new(d.y, -d.x)
                .try_normalize(TOLERANCE)
                .unwrap_or_else(Vector2::zeros);

            out.push(curr + normal * distance);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn preserves_vertex_count_and_order() {
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let result = ApproximateOffset.offset(&ring, 0.25).unwrap();
        assert_eq!(result.len(), ring.len());
    }

    #[test]
    fn straight_edge_midpoint_moves_perpendicular() {
        // A vertex in the middle of a straight run: both midpoints are on the
        // edge, so the displacement is the exact perpendicular.
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let result = ApproximateOffset.offset(&ring, 2.0).unwrap();
        assert_relative_eq!(result[1].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(result[1].y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_distance_moves_inward() {
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let result = ApproximateOffset.offset(&ring, -1.0).unwrap();
        // The first corner moves toward the square's interior.
        assert!(result[0].x > 0.0 && result[0].y > 0.0);
    }

    #[test]
    fn coincident_neighbours_leave_vertex_in_place() {
        // The spike tip at (10,0) has identical neighbours, so its two edge
        // midpoints coincide and no direction can be estimated; the call must
        // still succeed and keep the tip where it was.
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 8.0),
        ];
        let result = ApproximateOffset.offset(&ring, 1.0).unwrap();
        assert_eq!(result.len(), 4);
        assert_relative_eq!(result[1].x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(result[1].y, 0.0, epsilon = 1e-12);
        for p in &result {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}
