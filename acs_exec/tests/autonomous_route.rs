//! End-to-end autonomous route over a simulated wheel rig.
//!
//! Drives the full demonstration route on the top-left quadrant map and
//! checks both the tracked pose and the accumulated encoder positions of
//! every wheel.

use acs_lib::drive_ctrl::{MecanumDrive, Motor, Params, SimMotor, WheelPos};
use acs_lib::map::standard_catalog;
use acs_lib::nav::Navigator;
use acs_lib::tm::MemTm;
use std::f64::consts::FRAC_PI_2;

fn sim_drive() -> MecanumDrive<SimMotor> {
    let params = Params {
        poll_period_ms: 0,
        ..Params::default()
    };
    MecanumDrive::new(
        params,
        [
            SimMotor::new(2),
            SimMotor::new(2),
            SimMotor::new(2),
            SimMotor::new(2),
        ],
    )
}

#[test]
fn test_full_route_on_top_left() {
    let catalog = standard_catalog();
    let mut nav = Navigator::from_catalog(&catalog, "TopLeft", sim_drive(), MemTm::new())
        .expect("navigator init failed");

    assert_eq!(nav.current_pose().location_in.x, 48.0);
    assert_eq!(nav.current_pose().location_in.y, 24.0);
    assert_eq!(nav.current_pose().heading_rad, 0.0);

    for waypoint in &["jewel-knock", "safe-zone", "load-column2"] {
        nav.go_to_waypoint(waypoint, Some(0.5)).expect("route leg failed");
    }

    // Pose tracking ends at the final waypoint's pose
    let pose = nav.current_pose();
    let target = nav.map().waypoint("load-column2").unwrap();
    assert_eq!(pose.location_in, target.location_in);
    assert_eq!(pose.heading_rad, FRAC_PI_2);

    // Accumulated encoder ticks over the whole route:
    //   quarter turn anticlockwise      -> right +1200, left -1200
    //   (9.6, 36) in as (9.6, 9.6) diag -> FL/RR +5431
    //          then (0, 26.4) cardinal  -> all   +10560
    //   half turn anticlockwise         -> right +2400, left -2400
    //   (-7.2, 0) in cardinal           -> FR/RL +2880, FL/RR -2880
    //   half turn clockwise             -> right -2400, left +2400
    let drive = nav.into_drivetrain();
    assert_eq!(drive.motor(WheelPos::FrontLeft).current_position(), 11911);
    assert_eq!(drive.motor(WheelPos::FrontRight).current_position(), 14640);
    assert_eq!(drive.motor(WheelPos::RearLeft).current_position(), 12240);
    assert_eq!(drive.motor(WheelPos::RearRight).current_position(), 14311);

    // Route complete: every wheel left stopped
    for pos in WheelPos::ALL.iter().copied() {
        assert_eq!(drive.motor(pos).power(), 0.0);
    }
}

#[test]
fn test_unknown_map_fails_init() {
    let catalog = standard_catalog();
    let result = Navigator::from_catalog(&catalog, "MiddleEarth", sim_drive(), MemTm::new());

    assert!(result.is_err());
}
