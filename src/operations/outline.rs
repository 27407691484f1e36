use tracing::debug;

use super::offset::{ApproximateOffset, ExactOffset, OffsetStrategy, PolygonOffset2D};
use super::simplify::RingSimplify2D;
use crate::error::Result;
use crate::math::Point2;

/// Computes a simplified buffer outline of a closed ring.
///
/// The pipeline behind it: optionally pre-simplify the input, offset it by
/// the buffer distance, then simplify the offset result. Pre-simplification
/// is applied for the approximate strategy, where it thins out the noise
/// that throws off per-vertex normal estimation; the exact strategy receives
/// the ring untouched since its clipping backend is robust to noise.
#[derive(Debug)]
pub struct BufferedOutline2D<S: OffsetStrategy> {
    ring: Vec<Point2>,
    distance: f64,
    tolerance: f64,
    strategy: S,
    presimplify: bool,
}

impl BufferedOutline2D<ExactOffset> {
    /// Buffers with the exact clipping strategy.
    #[must_use]
    pub fn exact(ring: Vec<Point2>, distance: f64, tolerance: f64) -> Self {
        Self {
            ring,
            distance,
            tolerance,
            strategy: ExactOffset::new(),
            presimplify: false,
        }
    }
}

impl BufferedOutline2D<ApproximateOffset> {
    /// Buffers with the approximate normal-estimation strategy.
    ///
    /// The input ring is pre-simplified with `tolerance` before offsetting.
    #[must_use]
    pub fn approximate(ring: Vec<Point2>, distance: f64, tolerance: f64) -> Self {
        Self {
            ring,
            distance,
            tolerance,
            strategy: ApproximateOffset,
            presimplify: true,
        }
    }
}

impl<S: OffsetStrategy> BufferedOutline2D<S> {
    /// Buffers with a caller-supplied strategy.
    #[must_use]
    pub fn with_strategy(
        ring: Vec<Point2>,
        distance: f64,
        tolerance: f64,
        strategy: S,
        presimplify: bool,
    ) -> Self {
        Self {
            ring,
            distance,
            tolerance,
            strategy,
            presimplify,
        }
    }

    /// Executes the pipeline, returning the simplified buffer ring.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the input ring (or, with aggressive
    /// tolerances, the pre-simplified ring) has fewer than 3 vertices, or if
    /// the offset annihilates the polygon's area; `PrecisionOverflow` if the
    /// exact strategy's scaled coordinates leave the integer domain.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let candidate = if self.presimplify {
            RingSimplify2D::new(self.ring.clone(), self.tolerance).execute()?
        } else {
            self.ring.clone()
        };

        let offset =
            PolygonOffset2D::with_strategy(candidate, self.distance, &self.strategy).execute()?;
        let result = RingSimplify2D::new(offset, self.tolerance).execute()?;
        debug!(
            input = self.ring.len(),
            output = result.len(),
            "buffered outline computed"
        );
        Ok(result)
    }
}
