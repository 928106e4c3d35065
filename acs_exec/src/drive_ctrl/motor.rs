//! Wheel motor capability interface and the simulated implementation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::cell::Cell;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Run mode of a wheel motor controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Closed-loop drive to an encoder target position.
    Position,

    /// Open velocity control at the commanded power.
    Velocity,
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A single wheel actuator addressed in integer encoder ticks.
///
/// Positive power must drive the robot forward for the wheel's mounting;
/// direction reversal for left-side motors is the driver's responsibility,
/// not the controller's.
pub trait Motor {
    /// Set the output power as a signed fraction in [-1, 1].
    fn set_power(&mut self, power: f64);

    /// Select the run mode for subsequent commands.
    fn set_mode(&mut self, mode: RunMode);

    /// Set the absolute encoder target for position-mode motion.
    fn set_target(&mut self, ticks: i32);

    /// Current encoder position in ticks.
    fn current_position(&self) -> i32;

    /// True while a position-mode move to target is in progress.
    fn is_busy(&self) -> bool;
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// In-memory motor for tests and the simulated rig.
///
/// A position-mode move reports busy for a fixed number of `is_busy` polls,
/// after which the encoder snaps to the target. Velocity mode never reports
/// busy, matching real position-controller behaviour.
#[derive(Debug)]
pub struct SimMotor {
    mode: RunMode,
    power: f64,
    target: i32,
    position: Cell<i32>,
    busy_polls: u32,
    polls_left: Cell<u32>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimMotor {
    /// Create an idle motor whose moves take `busy_polls` polls to complete.
    pub fn new(busy_polls: u32) -> Self {
        Self {
            mode: RunMode::Velocity,
            power: 0.0,
            target: 0,
            position: Cell::new(0),
            busy_polls,
            polls_left: Cell::new(0),
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

impl Motor for SimMotor {
    fn set_power(&mut self, power: f64) {
        self.power = power;

        // A powered position-mode command with an unreached target starts a
        // move
        if self.mode == RunMode::Position
            && self.power != 0.0
            && self.target != self.position.get()
        {
            self.polls_left.set(self.busy_polls);
        }
    }

    fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
    }

    fn set_target(&mut self, ticks: i32) {
        self.target = ticks;
    }

    fn current_position(&self) -> i32 {
        self.position.get()
    }

    fn is_busy(&self) -> bool {
        let left = self.polls_left.get();
        if left == 0 {
            return false;
        }

        self.polls_left.set(left - 1);
        if left == 1 {
            self.position.set(self.target);
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sim_motor_busy_for_n_polls() {
        let mut motor = SimMotor::new(3);
        motor.set_mode(RunMode::Position);
        motor.set_target(1000);
        motor.set_power(0.5);

        assert!(motor.is_busy());
        assert!(motor.is_busy());
        assert!(motor.is_busy());
        assert!(!motor.is_busy());
        assert_eq!(motor.current_position(), 1000);
    }

    #[test]
    fn test_sim_motor_velocity_never_busy() {
        let mut motor = SimMotor::new(3);
        motor.set_mode(RunMode::Velocity);
        motor.set_power(1.0);
        assert!(!motor.is_busy());
    }

    #[test]
    fn test_sim_motor_reached_target_not_busy() {
        let mut motor = SimMotor::new(3);
        motor.set_mode(RunMode::Position);
        motor.set_target(0);
        motor.set_power(0.5);
        assert!(!motor.is_busy());
    }
}
