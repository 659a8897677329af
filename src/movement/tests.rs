//! Movement domain: unit tests for locomotion state and tuning.

use bevy::prelude::*;

use super::components::{GROUNDED_STICK_VELOCITY, TERMINAL_VELOCITY};
use super::systems::locomotion::grounded_probe_point;
use super::{CameraRig, LocomotionState, LocomotionTuning, MoveInput};

fn tuning() -> LocomotionTuning {
    LocomotionTuning::default()
}

fn state() -> LocomotionState {
    LocomotionState::from_tuning(&tuning())
}

#[test]
fn test_grounded_jump_velocity() {
    // jump_height=1.2, gravity=-15 => v = sqrt(1.2 * 2 * 15) = 6.0
    let tuning = tuning();
    let mut state = state();
    state.grounded = true;
    state.jump_timeout_remaining = 0.0;
    let mut jump = true;

    state.advance_jump_and_gravity(&mut jump, &tuning, 0.0);

    assert!((state.vertical_velocity - 6.0).abs() < 1e-4);
    assert!(state.jumping);
}

#[test]
fn test_jump_blocked_by_timeout() {
    let tuning = tuning();
    let mut state = state();
    state.grounded = true;
    state.jump_timeout_remaining = 0.2;
    let mut jump = true;

    state.advance_jump_and_gravity(&mut jump, &tuning, 0.01);

    assert!(!state.jumping);
    assert!(state.vertical_velocity < 1.0);
}

#[test]
fn test_jump_blocked_while_airborne_and_intent_cleared() {
    let tuning = tuning();
    let mut state = state();
    state.grounded = false;
    state.jump_timeout_remaining = 0.0;
    let mut jump = true;

    state.advance_jump_and_gravity(&mut jump, &tuning, 0.01);

    assert!(!state.jumping);
    // Intent is consumed so jumps cannot be buffered mid-fall
    assert!(!jump);
    assert_eq!(state.jump_timeout_remaining, tuning.jump_timeout);
}

#[test]
fn test_grounded_clamps_residual_negative_velocity() {
    let tuning = tuning();
    let mut state = state();
    state.grounded = true;
    state.vertical_velocity = -20.0;
    let mut jump = false;

    state.advance_jump_and_gravity(&mut jump, &tuning, 0.0);

    assert_eq!(state.vertical_velocity, GROUNDED_STICK_VELOCITY);
}

#[test]
fn test_vertical_velocity_respects_terminal_floor() {
    let tuning = tuning();
    let mut state = state();
    state.grounded = false;

    let mut jump = false;
    // Fall long enough to hit the floor many times over
    for _ in 0..1000 {
        state.advance_jump_and_gravity(&mut jump, &tuning, 0.1);
    }

    assert!(state.vertical_velocity >= -TERMINAL_VELOCITY);
}

#[test]
fn test_free_fall_signaled_after_fall_timeout() {
    let tuning = tuning();
    let mut state = state();
    state.grounded = false;
    let mut jump = false;

    // fall_timeout = 0.15; two ticks of 0.1 exhaust it
    state.advance_jump_and_gravity(&mut jump, &tuning, 0.1);
    assert!(!state.free_falling);
    state.advance_jump_and_gravity(&mut jump, &tuning, 0.1);
    state.advance_jump_and_gravity(&mut jump, &tuning, 0.1);
    assert!(state.free_falling);

    // Touching ground clears it again
    state.grounded = true;
    state.advance_jump_and_gravity(&mut jump, &tuning, 0.1);
    assert!(!state.free_falling);
}

#[test]
fn test_target_speed_precedence() {
    let tuning = tuning();
    let mut input = MoveInput {
        axis: Vec2::Y,
        ..default()
    };

    assert_eq!(tuning.target_speed(&input, 1.0), tuning.base_speed);

    input.walk = true;
    assert_eq!(tuning.target_speed(&input, 1.0), tuning.walk_speed);

    input.sprint = true;
    assert_eq!(tuning.target_speed(&input, 1.0), tuning.sprint_speed);

    input.aim = true;
    assert_eq!(tuning.target_speed(&input, 1.0), tuning.aim_speed);
}

#[test]
fn test_target_speed_zero_without_intent() {
    let tuning = tuning();
    let input = MoveInput {
        axis: Vec2::ZERO,
        sprint: true,
        ..default()
    };

    assert_eq!(tuning.target_speed(&input, 1.0), 0.0);
}

#[test]
fn test_target_speed_applies_multiplier() {
    let tuning = tuning();
    let input = MoveInput {
        axis: Vec2::Y,
        ..default()
    };

    assert_eq!(tuning.target_speed(&input, 2.5), tuning.base_speed * 2.5);
}

#[test]
fn test_speed_snaps_inside_dead_band() {
    let mut state = state();

    state.advance_speed(2.65, 2.7, 10.0, 1.0 / 60.0);
    assert_eq!(state.speed, 2.7);
}

#[test]
fn test_speed_eases_outside_dead_band() {
    let mut state = state();

    state.advance_speed(0.0, 2.7, 10.0, 1.0 / 60.0);
    assert!(state.speed > 0.0);
    assert!(state.speed < 2.7);
}

#[test]
fn test_animation_blend_decays_and_snaps_to_zero() {
    let mut state = state();
    state.animation_blend = 2.7;

    let mut ticks = 0;
    while state.animation_blend > 0.0 && ticks < 600 {
        state.advance_blend(0.0, 10.0, 1.0 / 60.0);
        ticks += 1;
    }

    // Decays toward zero and snaps exactly once below the epsilon
    assert_eq!(state.animation_blend, 0.0);
    assert!(ticks > 1);
}

#[test]
fn test_aim_round_trip_restores_sensitivity() {
    let tuning = tuning();
    let mut state = state();
    let before = state.sensitivity;

    assert!(state.set_aim(true, &tuning));
    assert_eq!(state.sensitivity, tuning.aim_sensitivity);
    assert!(state.aiming);

    assert!(state.set_aim(false, &tuning));
    assert_eq!(state.sensitivity, before);
    assert!(!state.aiming);
}

#[test]
fn test_set_aim_is_idempotent() {
    let tuning = tuning();
    let mut state = state();

    assert!(state.set_aim(true, &tuning));
    assert!(!state.set_aim(true, &tuning));
}

#[test]
fn test_grounded_probe_sits_below_feet() {
    let probe = grounded_probe_point(Vec3::new(1.0, 2.0, 3.0), -0.14);
    assert_eq!(probe, Vec3::new(1.0, 1.86, 3.0));
}

#[test]
fn test_camera_forward_level_and_pitched() {
    let mut rig = CameraRig::new(1.6);
    assert!((rig.forward() - Vec3::Z).length() < 1e-5);

    // Positive pitch looks down
    rig.pitch = 45.0;
    assert!(rig.forward().y < 0.0);

    rig.pitch = -30.0;
    assert!(rig.forward().y > 0.0);
}
