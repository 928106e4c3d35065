//! # ACS library
//!
//! Autonomous control core for a four-wheel mecanum robot: field geometry,
//! the octant wheel decomposition, the move-and-wait drivetrain controller
//! and the waypoint navigator. The binary in this crate wires the controller
//! to a simulated wheel rig and drives a demonstration route.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// Geometry primitives - vectors, poses and polygons on the field plane
pub mod geom;

/// Field map data model - waypoints, boundaries and the startup map catalog
pub mod map;

/// Drivetrain control module - converts direction vectors into individual wheel commands
pub mod drive_ctrl;

/// Navigation module - moves the robot between named waypoints on the active map
pub mod nav;

/// Telemetry module - buffered status reporting sinks
pub mod tm;

/// Operator input mapping - derives drive commands from polled input snapshots
pub mod teleop;
