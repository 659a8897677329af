//! Movement domain: jump/gravity, grounded detection, and movement systems.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::LocallyControlled;
use crate::movement::events::Landed;
use crate::movement::math;
use crate::movement::{CameraRig, GameLayer, LocomotionState, LocomotionTuning, MoveInput, Player};

pub(crate) fn apply_jump_and_gravity(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut input: ResMut<MoveInput>,
    mut query: Query<&mut LocomotionState, (With<Player>, With<LocallyControlled>)>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.advance_jump_and_gravity(&mut input.jump, &tuning, dt);
    }
}

/// Where the grounded probe sphere sits for a character at `translation`.
pub(crate) fn grounded_probe_point(translation: Vec3, offset: f32) -> Vec3 {
    translation + Vec3::Y * offset
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut landed_events: MessageWriter<Landed>,
    mut query: Query<
        (Entity, &Transform, &mut LocomotionState),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    // Only ground-layer geometry counts; targets and projectiles do not
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::sphere(tuning.grounded_radius);

    for (entity, transform, mut state) in &mut query {
        let was_grounded = state.grounded;
        let position = grounded_probe_point(transform.translation, tuning.grounded_offset);

        let hits =
            spatial_query.shape_intersections(&probe, position, Quat::IDENTITY, &ground_filter);
        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            landed_events.write(Landed {
                entity,
                impact_speed: state.vertical_velocity.abs(),
            });
            debug!("Landed: impact_speed={:.2}", state.vertical_velocity.abs());
        }
    }
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<MoveInput>,
    mut query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut LocomotionState,
            &CameraRig,
        ),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    let dt = time.delta_secs();

    for (mut transform, mut velocity, mut state, rig) in &mut query {
        let target_speed = tuning.target_speed(&input, state.speed_multiplier);
        let current_horizontal = Vec3::new(velocity.x, 0.0, velocity.z).length();

        state.advance_speed(current_horizontal, target_speed, tuning.speed_change_rate, dt);
        state.advance_blend(target_speed, tuning.speed_change_rate, dt);

        let current_yaw = transform
            .rotation
            .to_euler(EulerRot::YXZ)
            .0
            .to_degrees();

        if input.axis != Vec2::ZERO {
            // Face where the stick points, relative to the camera
            state.target_rotation =
                input.axis.x.atan2(input.axis.y).to_degrees() + rig.yaw;

            if !state.aiming {
                let yaw = math::smooth_damp_angle(
                    current_yaw,
                    state.target_rotation,
                    &mut state.rotation_velocity,
                    tuning.rotation_smooth_time,
                    dt,
                );
                transform.rotation = Quat::from_rotation_y(yaw.to_radians());
            }
        }

        if state.aiming {
            // Aiming characters always face the camera yaw
            let yaw = math::smooth_damp_angle(
                current_yaw,
                rig.yaw,
                &mut state.rotation_velocity,
                tuning.rotation_smooth_time,
                dt,
            );
            transform.rotation = Quat::from_rotation_y(yaw.to_radians());
        }

        let direction = Quat::from_rotation_y(state.target_rotation.to_radians()) * Vec3::Z;
        velocity.0 = direction.normalize() * state.speed + Vec3::Y * state.vertical_velocity;
    }
}
