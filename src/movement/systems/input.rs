//! Movement domain: input sampling for locomotion.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::MoveInput;

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut input: ResMut<MoveInput>,
) {
    // Strafe axis (arrows are reserved for spell slot selection)
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.look = mouse_motion.delta;

    // Jump is latched on press; locomotion clears it while airborne, so a
    // held key does not re-queue a jump until re-pressed.
    if keyboard.just_pressed(KeyCode::Space) {
        input.jump = true;
    }
    if keyboard.just_released(KeyCode::Space) {
        input.jump = false;
    }

    input.sprint = keyboard.pressed(KeyCode::ShiftLeft);
    if keyboard.just_pressed(KeyCode::KeyC) {
        input.walk = !input.walk;
    }
    input.aim = mouse_buttons.pressed(MouseButton::Right);
}
