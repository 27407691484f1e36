//! Integer-domain closed-path offsetting.
//!
//! The exact offset strategy reaches this module only through the narrow
//! [`ClipBackend`] capability, so the backend can be swapped or mocked
//! without touching the scaling logic. The default implementation,
//! [`MiterClip`], builds a raw miter-join offset of the path and resolves
//! self-intersections with a slice-and-filter pass: crossings are found, the
//! raw ring is sliced at them, slices that dip too close to the source ring
//! are culled, and the survivors are stitched back into output contours.

mod filter;
mod raw_offset;
mod self_intersect;
mod slice;
mod stitch;

use tracing::debug;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A vertex on the scaled integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Creates a new integer grid point.
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Corner join style for offset paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// Extend adjacent offset edges to a sharp intersection point, beveling
    /// where the miter would spike too far.
    Miter,
}

/// Largest coordinate magnitude the integer domain supports (signed 62-bit
/// range).
pub const INT_DOMAIN_LIMIT: i64 = 0x3FFF_FFFF_FFFF_FFFF;

/// Narrow capability interface for integer-domain path offsetting.
///
/// One operation: offset a closed integer path by a signed delta with a
/// given join style, returning zero or more result contours. Zero contours
/// means the offset annihilated the path's area.
pub trait ClipBackend {
    /// Offsets the closed path by `delta` grid units.
    fn offset_closed_path(
        &self,
        path: &[IntPoint],
        delta: i64,
        join: JoinStyle,
    ) -> Vec<Vec<IntPoint>>;
}

/// Default clipping backend: raw miter offset plus slice-and-filter
/// self-intersection culling.
///
/// Intersection and distance math runs in `f64` over the integer
/// coordinates; result vertices are rounded back onto the grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiterClip;

impl ClipBackend for MiterClip {
    fn offset_closed_path(
        &self,
        path: &[IntPoint],
        delta: i64,
        join: JoinStyle,
    ) -> Vec<Vec<IntPoint>> {
        let JoinStyle::Miter = join;

        let ring = dedupe(path);
        if ring.len() < 3 {
            return Vec::new();
        }
        if delta == 0 {
            return vec![round_contour(&ring)];
        }

        #[allow(clippy::cast_precision_loss)]
        let delta_f = delta as f64;
        let Some(raw) = raw_offset::build(&ring, delta_f) else {
            return Vec::new();
        };
        let source_area = signed_area_2d(&ring);

        let crossings = self_intersect::find_all(&raw);
        if crossings.is_empty() {
            // Untangled result. A winding flip means the offset consumed the
            // ring's entire area.
            if signed_area_2d(&raw) * source_area <= 0.0 {
                return Vec::new();
            }
            let contour = round_contour(&raw);
            return if contour.len() >= 3 {
                vec![contour]
            } else {
                Vec::new()
            };
        }
        debug!(crossings = crossings.len(), "raw offset self-intersects");

        let slices = slice::build(&raw, &crossings);
        let valid = filter::apply(&slices, &ring, delta_f);
        stitch::connect(&valid, source_area)
            .iter()
            .map(|c| round_contour(c))
            .filter(|c| c.len() >= 3)
            .collect()
    }
}

/// Converts the integer path to `f64`, dropping consecutive duplicate points
/// and an explicit closing point.
#[allow(clippy::cast_precision_loss)]
fn dedupe(path: &[IntPoint]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(path.len());
    for p in path {
        let fp = Point2::new(p.x as f64, p.y as f64);
        if out.last() != Some(&fp) {
            out.push(fp);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Rounds a ring back onto the integer grid, merging vertices that collapse
/// onto the same grid point.
fn round_contour(ring: &[Point2]) -> Vec<IntPoint> {
    let mut out: Vec<IntPoint> = Vec::with_capacity(ring.len());
    for p in ring {
        #[allow(clippy::cast_possible_truncation)]
        let ip = IntPoint::new(p.x.round() as i64, p.y.round() as i64);
        if out.last() != Some(&ip) {
            out.push(ip);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square_100() -> Vec<IntPoint> {
        vec![
            IntPoint::new(0, 0),
            IntPoint::new(1000, 0),
            IntPoint::new(1000, 1000),
            IntPoint::new(0, 1000),
        ]
    }

    #[test]
    fn square_outward_miter_corners() {
        let contours = MiterClip.offset_closed_path(&square_100(), 100, JoinStyle::Miter);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.len(), 4);
        assert_eq!(c[0], IntPoint::new(-100, -100));
        assert_eq!(c[1], IntPoint::new(1100, -100));
        assert_eq!(c[2], IntPoint::new(1100, 1100));
        assert_eq!(c[3], IntPoint::new(-100, 1100));
    }

    #[test]
    fn square_inward_shrinks() {
        let contours = MiterClip.offset_closed_path(&square_100(), -200, JoinStyle::Miter);
        assert_eq!(contours.len(), 1);
        for p in &contours[0] {
            assert!(p.x >= 200 && p.x <= 800);
            assert!(p.y >= 200 && p.y <= 800);
        }
    }

    #[test]
    fn inward_collapse_yields_no_contours() {
        // Inward by more than the inradius inverts the raw ring's winding.
        let contours = MiterClip.offset_closed_path(&square_100(), -600, JoinStyle::Miter);
        assert!(contours.is_empty());
    }

    #[test]
    fn zero_delta_passes_through() {
        let contours = MiterClip.offset_closed_path(&square_100(), 0, JoinStyle::Miter);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0], square_100());
    }

    #[test]
    fn reflex_corner_gets_inner_miter() {
        // An L-shape offset outward: the reflex corner's join is the
        // intersection of the two neighbouring offset edges.
        let l_shape = vec![
            IntPoint::new(0, 0),
            IntPoint::new(400, 0),
            IntPoint::new(400, 100),
            IntPoint::new(100, 100),
            IntPoint::new(100, 400),
            IntPoint::new(0, 400),
        ];
        let contours = MiterClip.offset_closed_path(&l_shape, 50, JoinStyle::Miter);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.len(), 6);
        assert!(c.contains(&IntPoint::new(150, 150)));
        assert!(c.contains(&IntPoint::new(-50, -50)));
        assert!(c.contains(&IntPoint::new(450, 150)));
    }

    #[test]
    fn pinched_waist_splits_into_two_contours() {
        // Two lobes joined by a 2-unit-wide waist; an inward offset of 3
        // pinches the waist off and leaves one contour per lobe.
        let dumbbell = vec![
            IntPoint::new(0, 0),
            IntPoint::new(20, 0),
            IntPoint::new(25, 9),
            IntPoint::new(30, 0),
            IntPoint::new(50, 0),
            IntPoint::new(50, 20),
            IntPoint::new(30, 20),
            IntPoint::new(25, 11),
            IntPoint::new(20, 20),
            IntPoint::new(0, 20),
        ];
        let contours = MiterClip.offset_closed_path(&dumbbell, -3, JoinStyle::Miter);
        assert_eq!(contours.len(), 2, "waist should pinch into two lobes");
        for c in &contours {
            assert!(c.len() >= 3);
        }
    }

    #[test]
    fn duplicate_input_points_are_tolerated() {
        let mut path = square_100();
        path.insert(1, IntPoint::new(0, 0));
        path.push(IntPoint::new(0, 0));
        let contours = MiterClip.offset_closed_path(&path, 100, JoinStyle::Miter);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
    }
}
