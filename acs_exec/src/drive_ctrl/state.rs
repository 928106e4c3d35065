//! Implementations for the mecanum drivetrain controller

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};

// Internal
use super::decomp::{decompose, sub_moves, PairPowers};
use super::motor::{Motor, RunMode};
use super::params::{CountMode, Params};
use super::{DriveError, Drivetrain, WheelPos, NUM_WHEELS};
use crate::geom::{octant_normalize, Vec2};
use std::f64::consts::TAU;
use std::thread;
use std::time::{Duration, Instant};
use util::maths::{clamp, wrap_signed_circle};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Four-wheel mecanum drivetrain controller.
///
/// Owns the wheel motors outright: it is the only component with actuation
/// authority over them. Blocking motion (`move_by`, `turn`) is a
/// move-and-wait protocol which drains any in-progress position targets
/// before issuing new ones, then blocks until its own motion completes.
pub struct MecanumDrive<M: Motor> {
    params: Params,

    /// Wheel motors, indexed by `WheelPos::index`.
    motors: [M; NUM_WHEELS],

    precise_power: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<M: Motor> MecanumDrive<M> {
    /// Create a controller over the given motors, front-left first (see
    /// `WheelPos::index`).
    pub fn new(params: Params, motors: [M; NUM_WHEELS]) -> Self {
        Self {
            params,
            motors,
            precise_power: false,
        }
    }

    /// The motor at the given wheel position, for diagnostics.
    pub fn motor(&self, pos: WheelPos) -> &M {
        &self.motors[pos.index()]
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Resolve an optional commanded power against the stored default and
    /// check it lies in (0, 1].
    fn resolve_power(&self, power: Option<f64>) -> Result<f64, DriveError> {
        let power = power.unwrap_or(self.params.default_power);

        if power <= 0.0 || power > 1.0 {
            return Err(DriveError::InvalidPower(power));
        }

        Ok(power)
    }

    fn precise_mult(&self) -> f64 {
        if self.precise_power {
            self.params.precise_power_mult
        } else {
            1.0
        }
    }

    fn set_all_mode(&mut self, mode: RunMode) {
        for motor in self.motors.iter_mut() {
            motor.set_mode(mode);
        }
    }

    /// Set each wheel's power to its diagonal-pair multiplier times `scale`.
    fn set_pair_powers(&mut self, powers: PairPowers, scale: f64) {
        for pos in WheelPos::ALL.iter().copied() {
            self.motors[pos.index()].set_power(powers.for_wheel(pos) * scale);
        }
    }

    /// Block until no wheel reports a position-mode move in progress.
    ///
    /// Sleeps between polls rather than spinning. If a motion timeout is
    /// configured the wait is bounded by it.
    fn wait_idle(&self) -> Result<(), DriveError> {
        let start = Instant::now();
        let period = Duration::from_millis(self.params.poll_period_ms);

        while self.is_busy() {
            if let Some(limit_s) = self.params.motion_timeout_s {
                if start.elapsed().as_secs_f64() > limit_s {
                    return Err(DriveError::MotionTimeout(limit_s));
                }
            }

            thread::sleep(period);
        }

        Ok(())
    }

    /// Execute one blocking move along an octant-scale vector.
    fn exec_octant_move(&mut self, vector: Vec2, power: f64) -> Result<(), DriveError> {
        let direction = octant_normalize(vector);
        let powers = decompose(direction)?;
        let magnitude_in = vector.norm();

        match self.params.count_mode {
            CountMode::Time => {
                self.set_all_mode(RunMode::Velocity);
                self.set_pair_powers(powers, power);

                let wait_ms = self.params.ms_per_in * magnitude_in / power;
                thread::sleep(Duration::from_millis(wait_ms as u64));

                self.stop();
            }
            CountMode::Encoder => {
                // Drain any previous position targets before issuing new
                // ones - overlapping targets would corrupt the move
                self.wait_idle()?;

                let travel_ticks = magnitude_in * self.params.ticks_per_in;

                for pos in WheelPos::ALL.iter().copied() {
                    let offset = (powers.for_wheel(pos) * travel_ticks).round() as i32;
                    let motor = &mut self.motors[pos.index()];
                    let target = motor.current_position() + offset;

                    motor.set_mode(RunMode::Position);
                    motor.set_target(target);

                    trace!("{:?}: target {} (offset {})", pos, target, offset);
                }

                self.set_pair_powers(powers, power);

                self.wait_idle()?;
                self.stop();
            }
        }

        Ok(())
    }
}

impl<M: Motor> Drivetrain for MecanumDrive<M> {
    fn default_power(&self) -> f64 {
        self.params.default_power
    }

    fn move_by(&mut self, vector: Vec2, power: Option<f64>) -> Result<(), DriveError> {
        let power = self.resolve_power(power)?;

        // A zero displacement is a successful no-op
        if vector.x == 0.0 && vector.y == 0.0 {
            return Ok(());
        }

        debug!(
            "Moving by ({:.2}, {:.2}) in at power {:.2}",
            vector.x, vector.y, power
        );

        // Non-octant requests run as octant parts in no promised order
        for part in sub_moves(vector) {
            self.exec_octant_move(part, power)?;
        }

        Ok(())
    }

    fn start_move(&mut self, direction: Vec2, power: Option<f64>) -> Result<(), DriveError> {
        let power = self.resolve_power(power)?;
        let powers = decompose(direction)?;

        // Drain pending position-mode motion before switching to velocity
        self.wait_idle()?;

        self.set_all_mode(RunMode::Velocity);
        self.set_pair_powers(powers, power * self.precise_mult());

        Ok(())
    }

    fn turn(&mut self, radians: f64, power: Option<f64>) -> Result<(), DriveError> {
        let power = self.resolve_power(power)?;

        if radians.abs() > TAU {
            return Err(DriveError::TurnOutOfRange(radians));
        }
        if radians == 0.0 {
            return Ok(());
        }

        debug!("Turning by {:.3} rad at power {:.2}", radians, power);

        // Positive radians turn anticlockwise: right side forward, left side
        // reversed. A full-circle request wraps to zero ticks.
        let wrapped = wrap_signed_circle(radians);

        match self.params.count_mode {
            CountMode::Time => {
                self.set_all_mode(RunMode::Velocity);

                let side_power = power * radians.signum();
                for pos in WheelPos::ALL.iter().copied() {
                    let wheel_power = if pos.is_left() { -side_power } else { side_power };
                    self.motors[pos.index()].set_power(wheel_power);
                }

                let wait_ms = self.params.ms_per_spin * (wrapped.abs() / TAU) / power;
                thread::sleep(Duration::from_millis(wait_ms as u64));

                self.stop();
            }
            CountMode::Encoder => {
                let spin_ticks = (wrapped / TAU * self.params.ticks_per_spin).round() as i32;

                self.wait_idle()?;

                for pos in WheelPos::ALL.iter().copied() {
                    let offset = if pos.is_left() { -spin_ticks } else { spin_ticks };
                    let motor = &mut self.motors[pos.index()];
                    let target = motor.current_position() + offset;

                    motor.set_mode(RunMode::Position);
                    motor.set_target(target);
                    motor.set_power(power);
                }

                self.wait_idle()?;
                self.stop();
            }
        }

        Ok(())
    }

    fn start_turn(&mut self, power: f64) {
        let valid_power = clamp(&power, &-1.0, &1.0) * self.precise_mult();

        self.set_all_mode(RunMode::Velocity);

        if power == 0.0 {
            return;
        }

        for pos in WheelPos::ALL.iter().copied() {
            let wheel_power = if pos.is_left() { -valid_power } else { valid_power };
            self.motors[pos.index()].set_power(wheel_power);
        }
    }

    fn actuate(&mut self, movement: Vec2, power: f64, turn_power: f64)
        -> Result<(), DriveError>
    {
        if power == 0.0 && turn_power == 0.0 {
            self.stop();
            return Ok(());
        }

        let powers = decompose(octant_normalize(movement))?;

        // Blend translation and turn per wheel. Positive turn power is
        // clockwise: left side forward, right side reversed.
        let mut wheel_powers = [0.0; NUM_WHEELS];
        for pos in WheelPos::ALL.iter().copied() {
            let turn = if pos.is_left() { turn_power } else { -turn_power };
            wheel_powers[pos.index()] = powers.for_wheel(pos) * power + turn;
        }

        // Rescale into [-1, 1] if the blend exceeds it
        let peak = wheel_powers.iter().fold(0.0f64, |acc, p| acc.max(p.abs()));
        if peak > 1.0 {
            for wheel_power in wheel_powers.iter_mut() {
                *wheel_power /= peak;
            }
        }

        self.set_all_mode(RunMode::Velocity);

        let mult = self.precise_mult();
        for pos in WheelPos::ALL.iter().copied() {
            self.motors[pos.index()].set_power(wheel_powers[pos.index()] * mult);
        }

        Ok(())
    }

    fn stop(&mut self) {
        for motor in self.motors.iter_mut() {
            motor.set_power(0.0);
        }
    }

    fn is_busy(&self) -> bool {
        self.motors.iter().any(|m| m.is_busy())
    }

    fn set_precise_power(&mut self, on: bool) {
        self.precise_power = on;
    }
}
