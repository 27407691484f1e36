use tracing::{debug, warn};

use super::clip::{ClipBackend, IntPoint, JoinStyle, MiterClip, INT_DOMAIN_LIMIT};
use super::OffsetStrategy;
use crate::error::{PolybufferError, Result};
use crate::math::Point2;

/// Default scale between the floating-point and scaled-integer domains.
///
/// Trades coordinate range for sub-unit precision: at 100, the integer grid
/// resolves 1/100th of an input unit.
pub const DEFAULT_SCALE: f64 = 100.0;

/// Clipping-based polygon offset with miter joins.
///
/// Scales the ring onto an integer grid, hands it to a [`ClipBackend`] as a
/// single closed loop, and maps the backend's first result contour back to
/// floating point. Robust for simple (possibly non-convex) rings, at the
/// cost of a scaling pass and the backend's clipping work.
///
/// When the backend reports more than one contour (an offset that splits the
/// ring into disjoint pieces), only the first contour is returned and the
/// rest are discarded with a warning. Callers that need every piece must go
/// to the backend directly.
#[derive(Debug, Clone)]
pub struct ExactOffset<B: ClipBackend = MiterClip> {
    scale: f64,
    backend: B,
}

impl ExactOffset {
    /// Creates an exact offset strategy with the default backend and scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            backend: MiterClip,
        }
    }
}

impl Default for ExactOffset {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ClipBackend> ExactOffset<B> {
    /// Creates an exact offset strategy with a caller-supplied backend.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            backend,
        }
    }

    /// Overrides the coordinate scale factor.
    ///
    /// Larger scales resolve finer detail but shrink the representable
    /// coordinate range; the product of scale and coordinate magnitude is
    /// validated against the backend's integer domain on every call.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not positive.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        assert!(scale > 0.0, "scale factor must be positive");
        self.scale = scale;
        self
    }

    /// Scales a value onto the integer grid, validating the integer domain.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn to_scaled(&self, value: f64) -> Result<i64> {
        let scaled = value * self.scale;
        let limit_f = INT_DOMAIN_LIMIT as f64;
        if !scaled.is_finite() || scaled.abs() > limit_f {
            return Err(PolybufferError::PrecisionOverflow {
                value: scaled,
                limit: INT_DOMAIN_LIMIT,
            });
        }
        Ok(scaled.round() as i64)
    }
}

impl<B: ClipBackend> OffsetStrategy for ExactOffset<B> {
    #[allow(clippy::cast_precision_loss)]
    fn offset(&self, ring: &[Point2], distance: f64) -> Result<Vec<Point2>> {
        if ring.len() < 3 {
            return Err(PolybufferError::InvalidGeometry(format!(
                "exact offset requires at least 3 vertices, got {}",
                ring.len()
            )));
        }

        let delta = self.to_scaled(distance)?;
        let mut path = Vec::with_capacity(ring.len());
        for p in ring {
            path.push(IntPoint::new(self.to_scaled(p.x)?, self.to_scaled(p.y)?));
        }

        let contours = self
            .backend
            .offset_closed_path(&path, delta, JoinStyle::Miter);
        debug!(contours = contours.len(), "clip backend finished");

        let Some(first) = contours.first() else {
            return Err(PolybufferError::InvalidGeometry(
                "offset annihilated the polygon's area".to_owned(),
            ));
        };
        if contours.len() > 1 {
            warn!(
                discarded = contours.len() - 1,
                "offset split into multiple contours; keeping only the first"
            );
        }

        Ok(first
            .iter()
            .map(|p| Point2::new(p.x as f64 / self.scale, p.y as f64 / self.scale))
            .collect())
    }
}
