//! Octant vector decomposition for the mecanum chassis
//!
//! Rotating a direction vector 45 degrees clockwise maps the octant ring
//! onto the diagonal-pair axes:
//!
//! ```text
//! (0, 1)  -> (1, 1)    FWD
//! (1, 1)  -> (1, 0)    RIGHT-FWD
//! (1, 0)  -> (1, -1)   RIGHT
//! (1, -1) -> (0, -1)   RIGHT-BWD
//! (0, -1) -> (-1, -1)  BWD
//! (-1, -1) -> (-1, 0)  LEFT-BWD
//! (-1, 0) -> (-1, 1)   LEFT
//! (-1, 1) -> (0, 1)    LEFT-FWD
//! ```
//!
//! The rotated X component is the power multiplier for the front-left/
//! rear-right pair and the rotated Y component the multiplier for the
//! front-right/rear-left pair.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use super::{DiagPair, DriveError, WheelPos};
use crate::geom::{rotate, Vec2};
use std::f64::consts::FRAC_PI_4;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Signed power multipliers for the two diagonal wheel pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairPowers {
    /// Multiplier for the front-left/rear-right pair.
    pub right: f64,

    /// Multiplier for the front-right/rear-left pair.
    pub left: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PairPowers {
    pub fn for_pair(&self, pair: DiagPair) -> f64 {
        match pair {
            DiagPair::Right => self.right,
            DiagPair::Left => self.left,
        }
    }

    /// The multiplier of whichever pair the wheel belongs to.
    pub fn for_wheel(&self, wheel: WheelPos) -> f64 {
        self.for_pair(wheel.pair())
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Decompose an octant direction vector into diagonal-pair multipliers.
///
/// Only unit-scale octant vectors are valid input: any component with
/// magnitude above 1 is rejected before any actuation can happen. Rounding
/// the rotated components to the nearest integer puts every multiplier in
/// {-1, 0, 1}.
pub fn decompose(direction: Vec2) -> Result<PairPowers, DriveError> {
    if direction.x.abs() > 1.0 || direction.y.abs() > 1.0 {
        return Err(DriveError::OutOfDomain(direction.x, direction.y));
    }

    let rotated = rotate(direction, -FRAC_PI_4);

    Ok(PairPowers {
        right: rotated.x.round(),
        left: rotated.y.round(),
    })
}

/// True if the vector is a uniform scale of one of the eight octant
/// directions: axis-aligned, exactly diagonal, or zero.
pub fn is_octant_scale(v: Vec2) -> bool {
    v.x == 0.0 || v.y == 0.0 || v.x.abs() == v.y.abs()
}

/// Split an arbitrary displacement into octant-scale sub-moves whose vector
/// sum equals the input exactly.
///
/// A non-octant request becomes the shared diagonal component plus the
/// cardinal remainder. No execution order is promised among the parts.
pub fn sub_moves(v: Vec2) -> Vec<Vec2> {
    if v.x == 0.0 && v.y == 0.0 {
        return vec![];
    }

    if is_octant_scale(v) {
        return vec![v];
    }

    // Both components are non-zero and unequal in magnitude here
    let reach = v.x.abs().min(v.y.abs());
    let diagonal = Vec2::new(reach * v.x.signum(), reach * v.y.signum());

    // One component of the remainder cancels exactly, leaving a cardinal
    let remainder = v - diagonal;

    vec![diagonal, remainder]
}

#[cfg(test)]
mod test {
    use super::*;

    /// The eight octant directions and their expected pair multipliers.
    const OCTANTS: [([f64; 2], [f64; 2]); 8] = [
        ([0.0, 1.0], [1.0, 1.0]),    // forward
        ([1.0, 1.0], [1.0, 0.0]),    // forward-right
        ([1.0, 0.0], [1.0, -1.0]),   // right
        ([1.0, -1.0], [0.0, -1.0]),  // backward-right
        ([0.0, -1.0], [-1.0, -1.0]), // backward
        ([-1.0, -1.0], [-1.0, 0.0]), // backward-left
        ([-1.0, 0.0], [-1.0, 1.0]),  // left
        ([-1.0, 1.0], [0.0, 1.0]),   // forward-left
    ];

    #[test]
    fn test_decompose_octants() {
        for (input, expected) in OCTANTS.iter() {
            let powers = decompose(Vec2::new(input[0], input[1])).unwrap();
            assert_eq!(powers.right, expected[0], "input {:?}", input);
            assert_eq!(powers.left, expected[1], "input {:?}", input);
        }
    }

    #[test]
    fn test_cardinals_drive_both_pairs() {
        for cardinal in &[[0.0, 1.0], [1.0, 0.0], [0.0, -1.0], [-1.0, 0.0]] {
            let powers = decompose(Vec2::new(cardinal[0], cardinal[1])).unwrap();
            assert_eq!(powers.right.abs(), 1.0);
            assert_eq!(powers.left.abs(), 1.0);
        }
    }

    #[test]
    fn test_diagonals_drive_one_pair() {
        for diagonal in &[[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]] {
            let powers = decompose(Vec2::new(diagonal[0], diagonal[1])).unwrap();
            let driven = [powers.right, powers.left]
                .iter()
                .filter(|p| p.abs() == 1.0)
                .count();
            assert_eq!(driven, 1, "input {:?}", diagonal);
        }
    }

    #[test]
    fn test_decompose_zero() {
        let powers = decompose(Vec2::new(0.0, 0.0)).unwrap();
        assert_eq!(powers, PairPowers { right: 0.0, left: 0.0 });
    }

    #[test]
    fn test_decompose_rejects_out_of_domain() {
        assert!(matches!(
            decompose(Vec2::new(2.0, 1.0)),
            Err(DriveError::OutOfDomain(_, _))
        ));
        assert!(matches!(
            decompose(Vec2::new(0.0, -1.5)),
            Err(DriveError::OutOfDomain(_, _))
        ));
    }

    #[test]
    fn test_sub_moves_octant_passthrough() {
        // Uniform scales of octant vectors stay in one piece
        assert_eq!(sub_moves(Vec2::new(0.0, 3.0)), vec![Vec2::new(0.0, 3.0)]);
        assert_eq!(sub_moves(Vec2::new(-2.0, 2.0)), vec![Vec2::new(-2.0, 2.0)]);
    }

    #[test]
    fn test_sub_moves_zero() {
        assert!(sub_moves(Vec2::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_sub_moves_sum_invariant() {
        for v in &[
            Vec2::new(2.0, 1.0),
            Vec2::new(-3.5, 1.25),
            Vec2::new(9.6, 36.0),
            Vec2::new(0.5, -4.0),
        ] {
            let parts = sub_moves(*v);
            assert_eq!(parts.len(), 2);

            // The parts sum back to the request and each is octant-scale;
            // their order is not part of the contract
            let sum: Vec2 = parts.iter().sum();
            assert_eq!(sum, *v);
            for part in parts {
                assert!(is_octant_scale(part), "{:?} not octant-scale", part);
            }
        }
    }
}
