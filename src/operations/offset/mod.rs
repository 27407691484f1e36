mod approximate;
mod exact;

pub mod clip;

pub use approximate::ApproximateOffset;
pub use exact::{ExactOffset, DEFAULT_SCALE};

use crate::error::{PolybufferError, Result};
use crate::math::Point2;

/// A polygon offset strategy.
///
/// Maps a closed ring and a signed distance to a newly allocated ring whose
/// boundary lies `|distance|` from the original. Positive distances move the
/// boundary outward relative to the ring's winding (outward for
/// counter-clockwise rings), negative distances inward.
pub trait OffsetStrategy {
    /// Offsets the closed ring by `distance`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the ring has fewer than 3 vertices or the
    /// offset annihilates the polygon's area, and `PrecisionOverflow` if a
    /// scaled-integer strategy cannot represent the input.
    fn offset(&self, ring: &[Point2], distance: f64) -> Result<Vec<Point2>>;
}

impl<'a, S: OffsetStrategy + ?Sized> OffsetStrategy for &'a S {
    fn offset(&self, ring: &[Point2], distance: f64) -> Result<Vec<Point2>> {
        (**self).offset(ring, distance)
    }
}

/// Offsets a closed polygon by dispatching to a single offset strategy.
///
/// The engine itself is pure dispatch: it validates the ring, delegates to
/// the strategy, and returns the strategy's result untouched. The input ring
/// is never mutated or aliased by the result.
#[derive(Debug)]
pub struct PolygonOffset2D<S: OffsetStrategy> {
    ring: Vec<Point2>,
    distance: f64,
    strategy: S,
}

impl PolygonOffset2D<ExactOffset> {
    /// Creates an offset operation backed by the exact clipping strategy.
    #[must_use]
    pub fn exact(ring: Vec<Point2>, distance: f64) -> Self {
        Self::with_strategy(ring, distance, ExactOffset::new())
    }
}

impl PolygonOffset2D<ApproximateOffset> {
    /// Creates an offset operation backed by the approximate normal-estimation
    /// strategy.
    #[must_use]
    pub fn approximate(ring: Vec<Point2>, distance: f64) -> Self {
        Self::with_strategy(ring, distance, ApproximateOffset)
    }
}

impl<S: OffsetStrategy> PolygonOffset2D<S> {
    /// Creates an offset operation with a caller-supplied strategy.
    #[must_use]
    pub fn with_strategy(ring: Vec<Point2>, distance: f64, strategy: S) -> Self {
        Self {
            ring,
            distance,
            strategy,
        }
    }

    /// Executes the offset, returning a newly allocated ring.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the ring has fewer than 3 vertices or the
    /// offset annihilates the polygon's area, and `PrecisionOverflow` if the
    /// exact strategy's scaled coordinates leave the integer domain.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.ring.len() < 3 {
            return Err(PolybufferError::InvalidGeometry(format!(
                "polygon offset requires at least 3 vertices, got {}",
                self.ring.len()
            )));
        }
        self.strategy.offset(&self.ring, self.distance)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::clip::{ClipBackend, IntPoint, JoinStyle};
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn rejects_degenerate_ring() {
        let ring = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let result = PolygonOffset2D::exact(ring.clone(), 1.0).execute();
        assert!(matches!(result, Err(PolybufferError::InvalidGeometry(_))));
        let result = PolygonOffset2D::approximate(ring, 1.0).execute();
        assert!(matches!(result, Err(PolybufferError::InvalidGeometry(_))));
    }

    #[test]
    fn exact_square_outward() {
        let result = PolygonOffset2D::exact(square(), 1.0).execute().unwrap();
        assert_eq!(result.len(), 4);
        let expected = [
            Point2::new(-1.0, -1.0),
            Point2::new(11.0, -1.0),
            Point2::new(11.0, 11.0),
            Point2::new(-1.0, 11.0),
        ];
        for (got, want) in result.iter().zip(expected.iter()) {
            assert_relative_eq!(got.x, want.x, epsilon = 1e-9);
            assert_relative_eq!(got.y, want.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn approximate_square_corner_displacement() {
        let result = PolygonOffset2D::approximate(square(), 1.0)
            .execute()
            .unwrap();
        assert_eq!(result.len(), 4);
        for (got, orig) in result.iter().zip(square().iter()) {
            // Right-angle corners displace by exactly the offset distance
            // along the outward diagonal.
            assert_relative_eq!((got - orig).norm(), 1.0, epsilon = 1e-9);
        }
        // Spot-check the first corner's direction.
        let d = result[0] - Point2::new(0.0, 0.0);
        assert!(d.x < 0.0 && d.y < 0.0, "corner should move out diagonally");
    }

    /// A backend stub that reports a fixed pair of contours.
    struct TwoContours;

    impl ClipBackend for TwoContours {
        fn offset_closed_path(
            &self,
            _path: &[IntPoint],
            _delta: i64,
            _join: JoinStyle,
        ) -> Vec<Vec<IntPoint>> {
            vec![
                vec![
                    IntPoint::new(0, 0),
                    IntPoint::new(100, 0),
                    IntPoint::new(100, 100),
                ],
                vec![
                    IntPoint::new(500, 500),
                    IntPoint::new(600, 500),
                    IntPoint::new(600, 600),
                ],
            ]
        }
    }

    #[test]
    fn exact_keeps_only_first_contour() {
        let strategy = ExactOffset::with_backend(TwoContours);
        let result = PolygonOffset2D::with_strategy(square(), 1.0, strategy)
            .execute()
            .unwrap();
        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[1].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result[1].y, 0.0, epsilon = 1e-12);
    }

    /// A backend stub that reports no contours at all.
    struct NoContours;

    impl ClipBackend for NoContours {
        fn offset_closed_path(
            &self,
            _path: &[IntPoint],
            _delta: i64,
            _join: JoinStyle,
        ) -> Vec<Vec<IntPoint>> {
            Vec::new()
        }
    }

    #[test]
    fn exact_maps_empty_solution_to_error() {
        let strategy = ExactOffset::with_backend(NoContours);
        let result = PolygonOffset2D::with_strategy(square(), -100.0, strategy).execute();
        assert!(matches!(result, Err(PolybufferError::InvalidGeometry(_))));
    }
}
