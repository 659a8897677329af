//! Movement domain: camera yaw/pitch target accumulation.
//!
//! Runs after the rest of the tick's movement so it consumes this tick's
//! facing and feeds the next tick's rendering.

use bevy::prelude::*;

use crate::core::LocallyControlled;
use crate::movement::math;
use crate::movement::{CameraRig, LocomotionState, LocomotionTuning, MoveInput, Player};

/// Look deltas below this squared magnitude are treated as stick noise.
const LOOK_THRESHOLD: f32 = 0.01;

pub(crate) fn update_camera_rotation(
    tuning: Res<LocomotionTuning>,
    input: Res<MoveInput>,
    mut query: Query<(&LocomotionState, &mut CameraRig), (With<Player>, With<LocallyControlled>)>,
) {
    for (state, mut rig) in &mut query {
        if input.look.length_squared() >= LOOK_THRESHOLD && !rig.lock {
            rig.yaw += input.look.x * state.sensitivity;
            rig.pitch += input.look.y * state.sensitivity;

            rig.yaw = math::clamp_angle(rig.yaw, f32::MIN, f32::MAX);
            rig.pitch = math::clamp_angle(rig.pitch, tuning.bottom_clamp, tuning.top_clamp);
        }
    }
}
