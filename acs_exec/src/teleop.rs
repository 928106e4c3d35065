//! Operator input mapping
//!
//! The operator path polls input devices each control cycle and re-issues
//! continuous drive commands; nothing here blocks. Only the drivetrain's
//! velocity-mode surface is used, so this path never fights the navigator's
//! position-mode moves - the two are not active at the same time.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use crate::drive_ctrl::{DriveError, Drivetrain};
use crate::geom::Vec2;
use util::maths::{clamp, lin_map};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Lowest drive power commanded while any direction input is held.
const MIN_DRIVE_POWER: f64 = 0.2;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One polled snapshot of operator input.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorInput {
    // Direction buttons
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,

    /// Clockwise turn demand in [-1, 1], typically a stick axis.
    pub turn: f64,

    /// Drive power demand in [0, 1], typically a trigger axis.
    pub throttle: f64,

    /// Engage the precise-power multiplier for fine positioning.
    pub precise: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl OperatorInput {
    /// The octant direction encoded by the held direction buttons.
    ///
    /// Opposing buttons cancel, so mashing all four reads as no direction.
    pub fn octant_vector(&self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f64;
        let y = (self.forward as i8 - self.backward as i8) as f64;

        Vec2::new(x, y)
    }

    /// Drive power for this cycle: the throttle axis mapped between the
    /// minimum drive power and full power.
    pub fn power(&self) -> f64 {
        lin_map(
            (0.0, 1.0),
            (MIN_DRIVE_POWER, 1.0),
            clamp(&self.throttle, &0.0, &1.0),
        )
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Apply one input snapshot to the drivetrain.
///
/// Neutral input (no direction held, no turn demand) stops the drivetrain,
/// so releasing everything always brings the robot to rest.
pub fn apply<D: Drivetrain>(input: &OperatorInput, drive: &mut D) -> Result<(), DriveError> {
    drive.set_precise_power(input.precise);

    let vector = input.octant_vector();
    let power = if vector.x == 0.0 && vector.y == 0.0 {
        0.0
    } else {
        input.power()
    };

    drive.actuate(vector, power, input.turn)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::drive_ctrl::{MecanumDrive, Params, SimMotor, WheelPos};

    fn rig() -> MecanumDrive<SimMotor> {
        MecanumDrive::new(
            Params {
                poll_period_ms: 0,
                ..Params::default()
            },
            [
                SimMotor::new(2),
                SimMotor::new(2),
                SimMotor::new(2),
                SimMotor::new(2),
            ],
        )
    }

    #[test]
    fn test_octant_vector_from_buttons() {
        let mut input = OperatorInput::default();
        assert_eq!(input.octant_vector(), Vec2::new(0.0, 0.0));

        input.forward = true;
        assert_eq!(input.octant_vector(), Vec2::new(0.0, 1.0));

        input.right = true;
        assert_eq!(input.octant_vector(), Vec2::new(1.0, 1.0));

        // Opposing buttons cancel
        input.backward = true;
        assert_eq!(input.octant_vector(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_power_maps_throttle() {
        let mut input = OperatorInput::default();

        input.throttle = 0.0;
        assert_eq!(input.power(), MIN_DRIVE_POWER);

        input.throttle = 1.0;
        assert_eq!(input.power(), 1.0);

        // Out-of-range axis values are clamped before mapping
        input.throttle = 1.7;
        assert_eq!(input.power(), 1.0);
    }

    #[test]
    fn test_neutral_input_stops() {
        let mut drive = rig();
        drive.start_turn(0.6);
        assert!(drive.motor(WheelPos::FrontLeft).power() != 0.0);

        apply(&OperatorInput::default(), &mut drive).unwrap();

        for pos in WheelPos::ALL.iter().copied() {
            assert_eq!(drive.motor(pos).power(), 0.0);
        }
    }

    #[test]
    fn test_forward_input_drives_forward() {
        let mut drive = rig();
        let input = OperatorInput {
            forward: true,
            throttle: 1.0,
            ..OperatorInput::default()
        };

        apply(&input, &mut drive).unwrap();

        for pos in WheelPos::ALL.iter().copied() {
            assert_eq!(drive.motor(pos).power(), 1.0);
        }
    }
}
