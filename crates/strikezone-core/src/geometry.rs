//! Point-in-area tests for action effect shapes.
//!
//! These are the only collision primitives the resolver uses. They take raw
//! coordinates and know nothing about actors.
//!
//! # Boundary semantics
//!
//! The two tests treat their edges differently and callers must not paper
//! over it:
//!
//! - [`radius_contains`] is inclusive: a point exactly `radius` away is hit.
//! - [`box_contains`] is exclusive on all four edges.
//!
//! The radial test measures full 3D distance. The box test only looks at the
//! x/y footprint and ignores z.

use glam::Vec3;

/// Returns `true` if `point` is within `radius` of `origin` (3D, inclusive).
///
/// # Example
///
/// ```
/// use strikezone_core::geometry::radius_contains;
/// use glam::Vec3;
///
/// assert!(radius_contains(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 5.0));
/// assert!(!radius_contains(Vec3::new(5.01, 0.0, 0.0), Vec3::ZERO, 5.0));
/// ```
#[inline]
#[must_use]
pub fn radius_contains(point: Vec3, origin: Vec3, radius: f32) -> bool {
    point.distance(origin) <= radius
}

/// Returns `true` if `point` lies strictly inside the box anchored at `origin`.
///
/// The box spans `width` along +x and `length` along +y from the origin
/// corner. Points on any edge are outside.
///
/// # Example
///
/// ```
/// use strikezone_core::geometry::box_contains;
/// use glam::Vec3;
///
/// assert!(box_contains(Vec3::new(2.0, 2.0, 0.0), Vec3::ZERO, 4.0, 10.0));
/// // x == origin.x sits on the edge
/// assert!(!box_contains(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, 4.0, 10.0));
/// ```
#[inline]
#[must_use]
pub fn box_contains(point: Vec3, origin: Vec3, width: f32, length: f32) -> bool {
    point.x > origin.x
        && point.x < origin.x + width
        && point.y > origin.y
        && point.y < origin.y + length
}
