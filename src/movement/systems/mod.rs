//! Movement domain: system modules for locomotion updates.

pub(crate) mod aim;
pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use aim::update_aim;
pub(crate) use camera::update_camera_rotation;
pub(crate) use input::read_move_input;
pub(crate) use locomotion::{apply_jump_and_gravity, apply_movement, detect_ground};
