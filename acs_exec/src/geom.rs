//! Geometry primitives for field navigation
//!
//! All field geometry lives on a 2D plane measured in inches, with headings
//! in radians anticlockwise from the map's reference direction.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::{Point2, Rotation2, Vector2};

// Standard
use std::fmt;

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// A direction or displacement on the field plane.
pub type Vec2 = Vector2<f64>;

/// A location on the field plane.
pub type MapPoint = Point2<f64>;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An oriented point on the field: a location plus a heading.
///
/// Used both as the robot's tracked pose and as a named waypoint in a field
/// map. Headings are not wrapped to a canonical range; callers computing
/// deltas must reconcile wrap-around themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Location on the field.
    ///
    /// Units: inches
    pub location_in: MapPoint,

    /// Heading, anticlockwise from the map's reference direction.
    ///
    /// Units: radians
    pub heading_rad: f64,
}

/// A closed polygon on the field plane.
///
/// The vertex ring is stored closed: the final vertex equals the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    verts: Vec<MapPoint>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    pub fn new(x_in: f64, y_in: f64, heading_rad: f64) -> Self {
        Self {
            location_in: MapPoint::new(x_in, y_in),
            heading_rad,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) in, {:.3} rad",
            self.location_in.x, self.location_in.y, self.heading_rad
        )
    }
}

impl Polygon {
    /// Build a polygon from a vertex ring, closing the ring if the input is
    /// open.
    pub fn new(mut verts: Vec<MapPoint>) -> Self {
        if let (Some(first), Some(last)) = (verts.first().copied(), verts.last().copied()) {
            if first != last {
                verts.push(first);
            }
        }

        Self { verts }
    }

    /// The closed vertex ring.
    pub fn verts(&self) -> &[MapPoint] {
        &self.verts
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// The displacement vector taking `from` to `to`.
pub fn displacement(from: MapPoint, to: MapPoint) -> Vec2 {
    to - from
}

/// Rotate a vector anticlockwise by the given angle in radians.
pub fn rotate(v: Vec2, angle_rad: f64) -> Vec2 {
    Rotation2::new(angle_rad) * v
}

/// Map each component of a vector to its sign (-1, 0 or +1).
///
/// This takes any uniform scale of an octant direction back to the unit
/// octant vector itself. A zero component stays zero rather than dividing by
/// zero, so the zero vector maps to itself. Idempotent.
pub fn octant_normalize(v: Vec2) -> Vec2 {
    Vec2::new(component_sign(v.x), component_sign(v.y))
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// The sign of a component, with zero mapping to zero.
///
/// `f64::signum` maps 0.0 to 1.0, which is not what the octant vocabulary
/// needs.
fn component_sign(c: f64) -> f64 {
    if c > 0.0 {
        1.0
    } else if c < 0.0 {
        -1.0
    } else {
        0.0
    }
}
