//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
pub(crate) mod math;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CameraRig, GameLayer, LocomotionState, Player};
pub use events::{AimStateChanged, Landed};
pub use resources::{LocomotionTuning, MoveInput};

use bevy::prelude::*;

use crate::core::{SimSet, SimState};
use crate::movement::bootstrap::bootstrap_caster_from_data;
use crate::movement::systems::{
    apply_jump_and_gravity, apply_movement, detect_ground, read_move_input, update_aim,
    update_camera_rotation,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<MoveInput>()
            .add_message::<AimStateChanged>()
            .add_message::<Landed>()
            .add_systems(OnEnter(SimState::Run), bootstrap_caster_from_data)
            .add_systems(Update, read_move_input.in_set(SimSet::Input))
            .add_systems(
                Update,
                (
                    apply_jump_and_gravity,
                    detect_ground,
                    apply_movement,
                    update_aim,
                )
                    .chain()
                    .in_set(SimSet::Locomotion)
                    .run_if(in_state(SimState::Run)),
            )
            .add_systems(
                Update,
                update_camera_rotation
                    .in_set(SimSet::Camera)
                    .run_if(in_state(SimState::Run)),
            );
    }
}
