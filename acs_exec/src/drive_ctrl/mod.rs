//! Drivetrain control module
//!
//! Converts direction vectors into commands for the four mecanum wheel
//! motors, and owns the move-and-wait motion protocol used by autonomous
//! navigation.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod decomp;
mod motor;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use decomp::*;
pub use motor::*;
pub use params::*;
pub use state::*;

use crate::geom::Vec2;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of wheels on the chassis.
pub const NUM_WHEELS: usize = 4;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during drivetrain operation.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("Drive power {0} is outside the valid range (0, 1]")]
    InvalidPower(f64),

    #[error("Direction vector ({0}, {1}) is not a unit-scale octant vector")]
    OutOfDomain(f64, f64),

    #[error("Turn angle {0} rad is outside the valid range [-2pi, 2pi]")]
    TurnOutOfRange(f64),

    #[error("Drivetrain still busy after waiting {0} s")]
    MotionTimeout(f64),
}

/// The four wheel positions on the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelPos {
    FrontLeft,
    FrontRight,
    //  │              │
    //  ├── ROBOT! ────┤
    //  │              │
    RearLeft,
    RearRight,
}

/// A diagonal pair of wheels sharing a drive axis under the octant
/// decomposition.
///
/// The pairing is structural for a mecanum chassis and never changes at
/// runtime. Names follow the direction the robot strafes when the pair is
/// driven with positive power on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagPair {
    /// Front-left and rear-right.
    Right,
    /// Front-right and rear-left.
    Left,
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Capability contract of a drivetrain controller.
///
/// `MecanumDrive` is the real implementation; tests can substitute fakes.
/// All commanded powers are fractions in (0, 1]; a `None` power means the
/// controller's stored default.
pub trait Drivetrain {
    /// The power used when a command omits one.
    fn default_power(&self) -> f64;

    /// Move the robot along the given displacement vector, blocking until
    /// the motion completes.
    ///
    /// Non-octant vectors are split into octant-aligned sub-moves whose sum
    /// equals the request; the execution order of the parts is unspecified,
    /// so callers that must avoid obstacles should not issue them.
    fn move_by(&mut self, vector: Vec2, power: Option<f64>) -> Result<(), DriveError>;

    /// Start moving continuously in the given octant direction, without
    /// blocking. Overrides any previously commanded powers.
    fn start_move(&mut self, direction: Vec2, power: Option<f64>) -> Result<(), DriveError>;

    /// Turn in place by the given signed angle in radians, blocking until
    /// the motion completes. Positive angles turn anticlockwise. Valid
    /// domain: [-2pi, 2pi].
    fn turn(&mut self, radians: f64, power: Option<f64>) -> Result<(), DriveError>;

    /// Start turning in place continuously. Positive power turns
    /// anticlockwise; input is clamped to [-1, 1].
    fn start_turn(&mut self, power: f64);

    /// Blend a translation with an in-place turn for one operator control
    /// cycle. Positive `turn_power` turns clockwise.
    fn actuate(&mut self, movement: Vec2, power: f64, turn_power: f64)
        -> Result<(), DriveError>;

    /// Set all wheel outputs to zero. Always succeeds, idempotent.
    fn stop(&mut self);

    /// True iff at least one wheel reports an in-progress position-mode
    /// move.
    fn is_busy(&self) -> bool;

    /// Engage or disengage the precise-power multiplier applied to
    /// velocity-mode outputs.
    fn set_precise_power(&mut self, on: bool);
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WheelPos {
    pub const ALL: [WheelPos; NUM_WHEELS] = [
        WheelPos::FrontLeft,
        WheelPos::FrontRight,
        WheelPos::RearLeft,
        WheelPos::RearRight,
    ];

    /// Index of this wheel in a motor array.
    pub fn index(self) -> usize {
        match self {
            WheelPos::FrontLeft => 0,
            WheelPos::FrontRight => 1,
            WheelPos::RearLeft => 2,
            WheelPos::RearRight => 3,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, WheelPos::FrontLeft | WheelPos::RearLeft)
    }

    pub fn is_front(self) -> bool {
        matches!(self, WheelPos::FrontLeft | WheelPos::FrontRight)
    }

    /// The diagonal pair this wheel belongs to.
    pub fn pair(self) -> DiagPair {
        match self {
            WheelPos::FrontLeft | WheelPos::RearRight => DiagPair::Right,
            WheelPos::FrontRight | WheelPos::RearLeft => DiagPair::Left,
        }
    }
}

impl DiagPair {
    /// The two wheels in this pair.
    pub fn wheels(self) -> [WheelPos; 2] {
        match self {
            DiagPair::Right => [WheelPos::FrontLeft, WheelPos::RearRight],
            DiagPair::Left => [WheelPos::FrontRight, WheelPos::RearLeft],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pair_membership() {
        for pair in &[DiagPair::Right, DiagPair::Left] {
            for wheel in pair.wheels().iter() {
                assert_eq!(wheel.pair(), *pair);
            }
        }
    }

    #[test]
    fn test_wheel_indices_unique() {
        let mut seen = [false; NUM_WHEELS];
        for wheel in WheelPos::ALL.iter() {
            assert!(!seen[wheel.index()]);
            seen[wheel.index()] = true;
        }
    }
}
