//! Parameters structure for the drivetrain controller

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// How motion completion is counted during blocking moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CountMode {
    /// Closed-loop to encoder targets, polling the busy flags.
    Encoder,

    /// Open-loop power for a calibrated duration. Fallback for chassis
    /// without working encoders.
    Time,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the drivetrain controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Params {
    // ---- CALIBRATION ----

    /// Encoder ticks per inch of wheel travel.
    ///
    /// Units: ticks/inch
    pub ticks_per_in: f64,

    /// Encoder ticks, per side with opposite signs, for one full spin in
    /// place.
    ///
    /// Units: ticks
    pub ticks_per_spin: f64,

    /// Time-based counting: how long one inch of travel takes at full power.
    ///
    /// Units: milliseconds/inch
    pub ms_per_in: f64,

    /// Time-based counting: how long one full spin takes at full power.
    ///
    /// Units: milliseconds
    pub ms_per_spin: f64,

    // ---- BEHAVIOUR ----

    /// How motion completion is counted.
    pub count_mode: CountMode,

    /// The power used when a command omits one.
    ///
    /// Range: (0, 1]
    pub default_power: f64,

    /// Velocity-mode output multiplier while precise power is engaged.
    ///
    /// Range: (0, 1]
    pub precise_power_mult: f64,

    /// Period between busy polls while waiting on motion completion.
    ///
    /// Units: milliseconds
    pub poll_period_ms: u64,

    /// Bound on any one motion-completion wait. `None` waits indefinitely,
    /// matching a chassis with no stall detection.
    ///
    /// Units: seconds
    pub motion_timeout_s: Option<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Params {
            ticks_per_in: 400.0,
            ticks_per_spin: 4800.0,
            ms_per_in: 70.0,
            ms_per_spin: 4000.0,
            count_mode: CountMode::Encoder,
            default_power: 0.7,
            precise_power_mult: 0.4,
            poll_period_ms: 10,
            motion_timeout_s: None,
        }
    }
}
