//! Anim domain: animation parameter channels written by the simulation and
//! consumed by an external animation player.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{LocallyControlled, SimSet, SimState};
use crate::movement::LocomotionState;

/// Named animation channels for one character. The simulation writes these
/// every tick; playback is an external collaborator's job.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimatorParams {
    /// Smoothed locomotion blend speed, decoupled from physical speed.
    pub speed: f32,
    /// Strafe blend while aiming.
    pub speed_x: f32,
    pub speed_y: f32,
    pub aim: bool,
    pub grounded: bool,
    pub jump: bool,
    pub free_fall: bool,
    pub free_fall_speed: f32,
    /// Upper-body aim layer weight, ramped toward 1 while aiming.
    pub aim_layer_weight: f32,
}

/// One-shot reaction animation triggers, keyed by spell classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimTriggerKind {
    LightAttackSpell,
    HeavyAttackSpell,
    BuffSpell,
}

#[derive(Debug)]
pub struct AnimTrigger {
    pub entity: Entity,
    pub kind: AnimTriggerKind,
}

impl Message for AnimTrigger {}

pub struct AnimPlugin;

impl Plugin for AnimPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimTrigger>().add_systems(
            Update,
            sync_locomotion_channels
                .in_set(SimSet::Effects)
                .run_if(in_state(SimState::Run)),
        );
    }
}

/// Mirror locomotion state into the animation channels after the tick's
/// movement has resolved. Aim-specific channels (speed_x/speed_y, layer
/// weight) are smoothed by the aim system itself.
fn sync_locomotion_channels(
    mut query: Query<(&LocomotionState, &mut AnimatorParams), With<LocallyControlled>>,
) {
    for (state, mut anim) in &mut query {
        anim.speed = state.animation_blend;
        anim.grounded = state.grounded;
        anim.jump = state.jumping;
        anim.free_fall = state.free_falling;
        if !state.grounded {
            anim.free_fall_speed = state.vertical_velocity;
        }
    }
}
