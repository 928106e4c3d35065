//! The compiled-in catalog of quadrant field maps
//!
//! One map per quadrant/alliance configuration of the arena. Coordinates are
//! in inches on a field of 24-inch tiles; each map's origin and axis
//! directions are noted on the map itself.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use super::{FieldMap, MapCatalog};
use crate::geom::{MapPoint, Polygon, Pose};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Side length of one field tile.
///
/// Units: inches
const TILE_IN: f64 = 24.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The alliance the robot is competing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alliance {
    Red,
    Blue,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Which catalog map to use for the given alliance and start side, as seen
/// from the drivers' perspective.
pub fn map_name_for_start(alliance: Alliance, is_left: bool) -> &'static str {
    match alliance {
        Alliance::Red => {
            if is_left {
                "TopLeft"
            } else {
                "BottomLeft"
            }
        }
        Alliance::Blue => {
            if is_left {
                "BottomRight"
            } else {
                "TopRight"
            }
        }
    }
}

/// Build the standard four-quadrant map catalog.
pub fn standard_catalog() -> MapCatalog {
    let mut catalog = MapCatalog::new();

    // Top-left quadrant, RED alliance. The positive y direction points down
    // the arena drawing; the origin is at the top in the middle, where the
    // red and blue lines meet.
    catalog.insert(FieldMap::new(
        "TopLeft",
        Polygon::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, TILE_IN * 3.0),
            MapPoint::new(TILE_IN, TILE_IN * 3.0),
            MapPoint::new(TILE_IN, TILE_IN * 2.0),
            MapPoint::new(0.0, TILE_IN),
        ]),
        HashMap::new(),
        waypoints(&[
            // On the balancing stone
            ("start", Pose::new(TILE_IN * 2.0, TILE_IN, 0.0)),
            // On the balancing stone, ready to read/knock the jewels
            ("jewel-knock", Pose::new(TILE_IN * 2.0, TILE_IN, deg(90.0))),
            // (Parked) in the safe zone
            ("safe-zone", Pose::new(TILE_IN * 2.4, TILE_IN * 2.5, deg(270.0))),
            // Loading the pre-loaded glyph into each crypto-box column
            ("load-column1", Pose::new(TILE_IN * 2.1, TILE_IN * 2.8, deg(90.0))),
            ("load-column2", Pose::new(TILE_IN * 2.1, TILE_IN * 2.5, deg(90.0))),
            ("load-column3", Pose::new(TILE_IN * 2.1, TILE_IN * 2.2, deg(90.0))),
        ]),
    ));

    // Top-right quadrant, BLUE alliance. Positive y points down the arena
    // drawing; the origin is at the top right corner.
    catalog.insert(FieldMap::new(
        "TopRight",
        Polygon::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, TILE_IN),
            MapPoint::new(TILE_IN * 2.0, TILE_IN * 2.0),
            MapPoint::new(TILE_IN * 2.0, TILE_IN * 3.0),
            MapPoint::new(0.0, TILE_IN * 3.0),
        ]),
        HashMap::new(),
        waypoints(&[
            ("start", Pose::new(TILE_IN, TILE_IN, 0.0)),
            ("jewel-knock", Pose::new(TILE_IN, TILE_IN, deg(270.0))),
            ("safe-zone", Pose::new(TILE_IN * 0.6, TILE_IN * 2.5, deg(90.0))),
            ("load-column1", Pose::new(TILE_IN * 0.9, TILE_IN * 2.2, deg(270.0))),
            ("load-column2", Pose::new(TILE_IN * 0.9, TILE_IN * 2.5, deg(270.0))),
            ("load-column3", Pose::new(TILE_IN * 0.9, TILE_IN * 2.8, deg(270.0))),
        ]),
    ));

    // Bottom-left quadrant, RED alliance. Positive y points up the arena
    // drawing; the origin is at the bottom left corner.
    catalog.insert(FieldMap::new(
        "BottomLeft",
        Polygon::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, TILE_IN * 2.0),
            MapPoint::new(TILE_IN * 2.0, TILE_IN * 3.0),
            MapPoint::new(0.0, TILE_IN * 3.0),
        ]),
        HashMap::new(),
        waypoints(&[
            ("start", Pose::new(TILE_IN, TILE_IN * 2.0, 0.0)),
            ("jewel-knock", Pose::new(TILE_IN, TILE_IN * 2.0, deg(270.0))),
            ("safe-zone", Pose::new(TILE_IN * 1.5, TILE_IN * 0.6, 0.0)),
            ("load-column1", Pose::new(TILE_IN * 1.8, TILE_IN * 0.9, deg(180.0))),
            ("load-column2", Pose::new(TILE_IN * 1.5, TILE_IN * 0.9, deg(180.0))),
            ("load-column3", Pose::new(TILE_IN * 0.2, TILE_IN * 0.9, deg(180.0))),
        ]),
    ));

    // Bottom-right quadrant, BLUE alliance. Positive y points up the arena
    // drawing; the origin is at the bottom in the middle, between the blue
    // and red lines.
    catalog.insert(FieldMap::new(
        "BottomRight",
        Polygon::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, 0.0),
            MapPoint::new(TILE_IN * 3.0, TILE_IN * 3.0),
            MapPoint::new(TILE_IN, TILE_IN * 3.0),
            MapPoint::new(0.0, TILE_IN * 2.0),
        ]),
        HashMap::new(),
        waypoints(&[
            ("start", Pose::new(TILE_IN * 2.0, TILE_IN * 2.0, 0.0)),
            ("jewel-knock", Pose::new(TILE_IN * 2.0, TILE_IN * 2.0, deg(90.0))),
            ("safe-zone", Pose::new(TILE_IN * 1.5, TILE_IN * 0.6, 0.0)),
            ("load-column1", Pose::new(TILE_IN * 1.8, TILE_IN * 0.9, deg(180.0))),
            ("load-column2", Pose::new(TILE_IN * 1.5, TILE_IN * 0.9, deg(180.0))),
            ("load-column3", Pose::new(TILE_IN * 0.2, TILE_IN * 0.9, deg(180.0))),
        ]),
    ));

    catalog
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn deg(angle_deg: f64) -> f64 {
    angle_deg.to_radians()
}

fn waypoints(entries: &[(&str, Pose)]) -> HashMap<String, Pose> {
    entries
        .iter()
        .map(|(name, pose)| ((*name).to_owned(), *pose))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_catalog_has_all_quadrants() {
        let catalog = standard_catalog();

        for name in &["TopLeft", "TopRight", "BottomLeft", "BottomRight"] {
            let map = catalog.select(name).unwrap();
            assert_eq!(map.name(), *name);

            // Every map must provide the waypoints the autonomous routes use
            for wp in &[
                "start",
                "jewel-knock",
                "safe-zone",
                "load-column1",
                "load-column2",
                "load-column3",
            ] {
                assert!(map.waypoint(wp).is_ok(), "{} missing {}", name, wp);
            }

            // Boundary rings are closed
            assert_eq!(map.boundary().verts().first(), map.boundary().verts().last());
        }
    }

    #[test]
    fn test_top_left_waypoints() {
        let map = standard_catalog().select("TopLeft").unwrap();

        let start = map.waypoint("start").unwrap();
        assert_eq!(start.location_in, MapPoint::new(48.0, 24.0));
        assert_eq!(start.heading_rad, 0.0);

        let jewel = map.waypoint("jewel-knock").unwrap();
        assert_eq!(jewel.location_in, MapPoint::new(48.0, 24.0));
        assert_eq!(jewel.heading_rad, FRAC_PI_2);
    }

    #[test]
    fn test_map_name_for_start() {
        assert_eq!(map_name_for_start(Alliance::Red, true), "TopLeft");
        assert_eq!(map_name_for_start(Alliance::Red, false), "BottomLeft");
        assert_eq!(map_name_for_start(Alliance::Blue, true), "BottomRight");
        assert_eq!(map_name_for_start(Alliance::Blue, false), "TopRight");
    }
}
