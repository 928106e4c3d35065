//! Main ACS executable entry point.
//!
//! Wires the mecanum drivetrain controller to a simulated wheel rig and
//! drives the demonstration autonomous route on the selected field map:
//!
//!     - Initialise logging and load drivetrain parameters
//!     - Select the field map (CLI argument, or the default start position)
//!     - Initialise the navigator at the map's start waypoint
//!     - Drive the route, logging the tracked pose at each waypoint
//!     - Flush telemetry and stop

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{info, warn};
use std::env;
use std::path::Path;

// Internal
use acs_lib::drive_ctrl::{MecanumDrive, Params, SimMotor};
use acs_lib::map::{map_name_for_start, standard_catalog, Alliance};
use acs_lib::nav::Navigator;
use acs_lib::tm::{LogTm, TmSink};
use util::logger::{logger_init, LevelFilter};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Path to the drivetrain parameter file.
const DRIVE_CTRL_PARAMS_PATH: &str = "params/drive_ctrl.toml";

/// Waypoints of the demonstration route, driven in order from the start.
const DEMO_ROUTE: [&str; 3] = ["jewel-knock", "safe-zone", "load-column2"];

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    color_eyre::install()?;

    logger_init(LevelFilter::Debug, None).wrap_err("Failed to initialise logging")?;

    info!("ACS Executable\n");

    // ---- MAP SELECTION ----

    // A single argument names the field map directly, no arguments selects
    // the default start position.
    let args: Vec<String> = env::args().collect();

    let map_name = match args.len() {
        1 => map_name_for_start(Alliance::Red, true).to_string(),
        2 => args[1].clone(),
        _ => {
            return Err(eyre!(
                "Expected either zero or one argument, found {}",
                args.len() - 1
            ))
        }
    };

    info!("Selected field map: {:?}", map_name);

    // ---- LOAD PARAMETERS ----

    let params: Params = match util::params::load(Path::new(DRIVE_CTRL_PARAMS_PATH)) {
        Ok(p) => p,
        Err(e) => {
            warn!(
                "Could not load {:?} ({}), using default drivetrain parameters",
                DRIVE_CTRL_PARAMS_PATH, e
            );
            Params::default()
        }
    };

    info!("Drivetrain parameters loaded");

    // ---- INITIALISE MODULES ----

    let motors = [
        SimMotor::new(2),
        SimMotor::new(2),
        SimMotor::new(2),
        SimMotor::new(2),
    ];
    let drive = MecanumDrive::new(params, motors);

    let catalog = standard_catalog();

    let mut nav = Navigator::from_catalog(&catalog, &map_name, drive, LogTm::new())
        .wrap_err("Failed to initialise the navigator")?;

    info!("Start pose: {}", nav.current_pose());

    // ---- DRIVE ROUTE ----

    for waypoint in DEMO_ROUTE.iter() {
        nav.go_to_waypoint(waypoint, None)
            .wrap_err_with(|| format!("Failed to reach waypoint {:?}", waypoint))?;

        info!("Reached {:?}, pose: {}", waypoint, nav.current_pose());
    }

    // ---- SHUTDOWN ----

    nav.tm_mut().flush();

    info!("End of execution");

    Ok(())
}
