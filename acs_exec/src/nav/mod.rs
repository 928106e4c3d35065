//! Navigation module
//!
//! Moves the robot between named waypoints on the active field map, keeping
//! an open-loop record of the current pose: pose updates are assumed after a
//! commanded move completes, never measured.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};
use thiserror::Error;

// Internal
use crate::drive_ctrl::{DriveError, Drivetrain};
use crate::geom::{displacement, Pose};
use crate::map::{FieldMap, MapCatalog, MapError};
use crate::tm::TmSink;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The waypoint every map must define for the navigator to start from.
pub const START_WAYPOINT: &str = "start";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors during navigation.
#[derive(Debug, Error)]
pub enum NavError {
    /// The configuration named an unknown map, or the selected map has no
    /// start waypoint. Initialisation must not proceed.
    #[error("Navigator configuration is invalid: {0}")]
    ConfigFatal(#[source] MapError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Drive(#[from] DriveError),
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Waypoint navigator over one field map.
///
/// The navigator owns the drivetrain handle while autonomous navigation is
/// active, so nothing else can issue drive commands that would desynchronise
/// the tracked pose from the physical robot. Use `into_drivetrain` to hand
/// the drivetrain back for operator control.
pub struct Navigator<D: Drivetrain, T: TmSink> {
    map: FieldMap,
    drivetrain: D,
    tm: T,
    current: Pose,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D: Drivetrain, T: TmSink> Navigator<D, T> {
    /// Select the named map from the catalog and start at its start
    /// waypoint.
    ///
    /// An unknown map name or a map without a start waypoint is a
    /// configuration error: it is reported as fatal on the telemetry sink
    /// and initialisation fails.
    pub fn from_catalog(
        catalog: &MapCatalog,
        map_name: &str,
        drivetrain: D,
        mut tm: T,
    ) -> Result<Self, NavError> {
        let map = match catalog.select(map_name) {
            Ok(m) => m,
            Err(e) => {
                tm.fatal(&format!("No field map named {:?}", map_name));
                tm.flush();
                return Err(NavError::ConfigFatal(e));
            }
        };

        let start = match map.waypoint(START_WAYPOINT) {
            Ok(p) => p,
            Err(e) => {
                tm.fatal(&format!(
                    "Map {:?} has no {:?} waypoint",
                    map_name, START_WAYPOINT
                ));
                tm.flush();
                return Err(NavError::ConfigFatal(e));
            }
        };

        info!("Navigator initialised on map {:?}", map.name());

        Ok(Self {
            map,
            drivetrain,
            tm,
            current: start,
        })
    }

    /// The pose the navigator believes the robot is at.
    pub fn current_pose(&self) -> Pose {
        self.current
    }

    pub fn map(&self) -> &FieldMap {
        &self.map
    }

    pub fn tm_mut(&mut self) -> &mut T {
        &mut self.tm
    }

    /// Release the drivetrain handle, ending autonomous navigation.
    pub fn into_drivetrain(self) -> D {
        self.drivetrain
    }

    /// Drive to the named waypoint, then face its heading.
    ///
    /// The displacement move completes (blocking) before the turn begins.
    /// On success the current pose becomes the target pose; on any failure
    /// the tracked pose is left at its previous value.
    pub fn go_to_waypoint(&mut self, name: &str, power: Option<f64>) -> Result<(), NavError> {
        let target = match self.map.waypoint(name) {
            Ok(t) => t,
            Err(e) => {
                self.tm.error(&format!("No waypoint named {:?}", name));
                self.tm.flush();
                return Err(e.into());
            }
        };

        let drive_vector = displacement(self.current.location_in, target.location_in);

        // Raw heading delta, deliberately not wrapped to a canonical range:
        // shortest-path turning must not be assumed here. Catalog headings
        // stay within a half turn of each other, which keeps the delta
        // inside the drivetrain's valid turn domain.
        let turn_rad = target.heading_rad - self.current.heading_rad;

        debug!(
            "Navigating to {:?}: move ({:.2}, {:.2}) in, turn {:.3} rad",
            name, drive_vector.x, drive_vector.y, turn_rad
        );
        self.tm.data("nav/target", &name);

        self.drivetrain.move_by(drive_vector, power)?;
        self.drivetrain.turn(turn_rad, power)?;

        // Open-loop update: the target pose is assumed reached, not measured
        self.current = target;
        self.tm.data("nav/at", &name);

        Ok(())
    }
}
