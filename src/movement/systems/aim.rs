//! Movement domain: aim mode entry/exit and the aim ray target point.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::anim::AnimatorParams;
use crate::core::LocallyControlled;
use crate::movement::events::AimStateChanged;
use crate::movement::math;
use crate::movement::{CameraRig, GameLayer, LocomotionState, LocomotionTuning, MoveInput, Player};

/// Ray length for the aim target probe.
const MAX_AIM_DISTANCE: f32 = 1.0e4;

pub(crate) fn update_aim(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<MoveInput>,
    spatial_query: SpatialQuery,
    mut aim_events: MessageWriter<AimStateChanged>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LocomotionState,
            &mut CameraRig,
            &mut AnimatorParams,
        ),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    let dt = time.delta_secs();
    let aim_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Target]);

    for (entity, transform, mut state, mut rig, mut anim) in &mut query {
        if input.aim {
            if state.set_aim(true, &tuning) {
                rig.aim_rig_active = true;
                anim.aim = true;
                aim_events.write(AimStateChanged {
                    entity,
                    aiming: true,
                });
                debug!("Aim entered: sensitivity={}", state.sensitivity);
            }

            // Probe what the camera is looking at; a miss keeps the previous
            // target point so targeted spells still have something to aim for
            let origin = transform.translation + Vec3::Y * rig.eye_height;
            if let Ok(direction) = Dir3::new(rig.forward()) {
                if let Some(hit) =
                    spatial_query.cast_ray(origin, direction, MAX_AIM_DISTANCE, true, &aim_filter)
                {
                    state.target_point = origin + direction * hit.distance;
                }
            }

            anim.aim_layer_weight =
                math::lerp(anim.aim_layer_weight, 1.0, dt * tuning.speed_change_rate);
            anim.speed_x = math::lerp(anim.speed_x, input.axis.x, dt * tuning.speed_change_rate);
            anim.speed_y = math::lerp(anim.speed_y, input.axis.y, dt * tuning.speed_change_rate);
        } else {
            if state.set_aim(false, &tuning) {
                rig.aim_rig_active = false;
                anim.aim = false;
                aim_events.write(AimStateChanged {
                    entity,
                    aiming: false,
                });
                debug!("Aim left: sensitivity={}", state.sensitivity);
            }

            anim.aim_layer_weight =
                math::lerp(anim.aim_layer_weight, 0.0, dt * tuning.speed_change_rate);
        }
    }
}
