//! Field map data model
//!
//! A field map is read-only reference data: a named boundary polygon, named
//! obstacle polygons and named waypoints for one quadrant/alliance
//! configuration of the playing surface. Maps are built once at startup and
//! never mutated.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod catalog;

pub use catalog::{standard_catalog, map_name_for_start, Alliance};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use thiserror::Error;

// Internal
use crate::geom::{Polygon, Pose};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors when looking up map data.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("No field map named {0:?} in the catalog")]
    UnknownMap(String),

    #[error("No waypoint named {0:?} in map {1:?}")]
    WaypointNotFound(String, String),

    #[error("No obstacle named {0:?} in map {1:?}")]
    ObstacleNotFound(String, String),
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One quadrant of the playing surface: a boundary, obstacles and waypoints.
#[derive(Debug, Clone)]
pub struct FieldMap {
    name: String,
    boundary: Polygon,
    obstacles: HashMap<String, Polygon>,
    waypoints: HashMap<String, Pose>,
}

/// The set of field maps available to select from at startup.
///
/// The catalog is an explicit value passed to whoever selects a map, not a
/// process-wide static.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    maps: HashMap<String, FieldMap>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl FieldMap {
    pub fn new(
        name: &str,
        boundary: Polygon,
        obstacles: HashMap<String, Polygon>,
        waypoints: HashMap<String, Pose>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            boundary,
            obstacles,
            waypoints,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The map boundary. Always defined.
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// Look up a waypoint by name.
    pub fn waypoint(&self, name: &str) -> Result<Pose, MapError> {
        self.waypoints
            .get(name)
            .copied()
            .ok_or_else(|| MapError::WaypointNotFound(name.to_owned(), self.name.clone()))
    }

    /// Look up an obstacle by name.
    pub fn obstacle(&self, name: &str) -> Result<&Polygon, MapError> {
        self.obstacles
            .get(name)
            .ok_or_else(|| MapError::ObstacleNotFound(name.to_owned(), self.name.clone()))
    }
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a map to the catalog, keyed by its own name.
    pub fn insert(&mut self, map: FieldMap) {
        self.maps.insert(map.name().to_owned(), map);
    }

    /// Select a map by name, cloning it out of the catalog.
    pub fn select(&self, name: &str) -> Result<FieldMap, MapError> {
        self.maps
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::UnknownMap(name.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::MapPoint;

    fn test_map() -> FieldMap {
        let mut waypoints = HashMap::new();
        waypoints.insert("start".to_owned(), Pose::new(24.0, 24.0, 0.0));

        let mut obstacles = HashMap::new();
        obstacles.insert(
            "stone".to_owned(),
            Polygon::new(vec![
                MapPoint::new(20.0, 20.0),
                MapPoint::new(28.0, 20.0),
                MapPoint::new(28.0, 28.0),
            ]),
        );

        FieldMap::new(
            "test",
            Polygon::new(vec![
                MapPoint::new(0.0, 0.0),
                MapPoint::new(72.0, 0.0),
                MapPoint::new(72.0, 72.0),
                MapPoint::new(0.0, 72.0),
            ]),
            obstacles,
            waypoints,
        )
    }

    #[test]
    fn test_waypoint_lookup() {
        let map = test_map();
        assert_eq!(map.waypoint("start").unwrap(), Pose::new(24.0, 24.0, 0.0));

        match map.waypoint("nowhere") {
            Err(MapError::WaypointNotFound(name, map_name)) => {
                assert_eq!(name, "nowhere");
                assert_eq!(map_name, "test");
            }
            other => panic!("expected WaypointNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_obstacle_lookup() {
        let map = test_map();
        assert!(map.obstacle("stone").is_ok());
        assert!(matches!(
            map.obstacle("boulder"),
            Err(MapError::ObstacleNotFound(_, _))
        ));
    }

    #[test]
    fn test_catalog_select() {
        let mut catalog = MapCatalog::new();
        catalog.insert(test_map());

        assert_eq!(catalog.select("test").unwrap().name(), "test");
        assert!(matches!(
            catalog.select("missing"),
            Err(MapError::UnknownMap(_))
        ));
    }
}
