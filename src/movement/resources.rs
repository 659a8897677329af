//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::LocomotionDef;

#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning {
    pub base_speed: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub aim_speed: f32,
    pub rotation_smooth_time: f32,
    pub speed_change_rate: f32,
    pub jump_height: f32,
    /// Negative, meters per second squared.
    pub gravity: f32,
    /// Seconds between consecutive grounded jumps.
    pub jump_timeout: f32,
    /// Grace period after leaving ground before free-fall is signaled.
    pub fall_timeout: f32,
    /// Vertical offset of the grounded probe below the character origin.
    pub grounded_offset: f32,
    pub grounded_radius: f32,
    /// Camera pitch limits, degrees.
    pub top_clamp: f32,
    pub bottom_clamp: f32,
    pub normal_sensitivity: f32,
    pub aim_sensitivity: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 2.7,
            walk_speed: 1.6,
            sprint_speed: 5.0,
            aim_speed: 2.4,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            gravity: -15.0,
            jump_timeout: 0.5,
            fall_timeout: 0.15,
            grounded_offset: -0.14,
            grounded_radius: 0.28,
            top_clamp: 70.0,
            bottom_clamp: -30.0,
            normal_sensitivity: 1.0,
            aim_sensitivity: 0.5,
        }
    }
}

impl LocomotionTuning {
    /// Overwrite tuning from a caster definition.
    pub fn apply_def(&mut self, def: &LocomotionDef) {
        self.base_speed = def.base_speed;
        self.walk_speed = def.walk_speed;
        self.sprint_speed = def.sprint_speed;
        self.aim_speed = def.aim_speed;
        self.rotation_smooth_time = def.rotation_smooth_time;
        self.speed_change_rate = def.speed_change_rate;
        self.jump_height = def.jump_height;
        self.gravity = def.gravity;
        self.jump_timeout = def.jump_timeout;
        self.fall_timeout = def.fall_timeout;
        self.grounded_offset = def.grounded_offset;
        self.grounded_radius = def.grounded_radius;
        self.top_clamp = def.top_clamp;
        self.bottom_clamp = def.bottom_clamp;
        self.normal_sensitivity = def.normal_sensitivity;
        self.aim_sensitivity = def.aim_sensitivity;
    }

    /// Takeoff speed that reaches `jump_height` under this gravity.
    /// v = sqrt(h * 2 * |g|)
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * 2.0 * self.gravity.abs()).sqrt()
    }

    /// Target horizontal speed for the current intents. Aim overrides sprint,
    /// sprint overrides walk, walk overrides the base gait; no movement intent
    /// resolves to zero regardless of gait.
    pub fn target_speed(&self, input: &MoveInput, speed_multiplier: f32) -> f32 {
        if input.axis == Vec2::ZERO {
            return 0.0;
        }
        let gait = if input.aim {
            self.aim_speed
        } else if input.sprint {
            self.sprint_speed
        } else if input.walk {
            self.walk_speed
        } else {
            self.base_speed
        };
        gait * speed_multiplier
    }
}

/// Per-tick locomotion intents. Refreshed by the input sampler; simulation
/// systems only ever read this resource (except for the airborne jump-intent
/// clear).
#[derive(Resource, Debug, Default)]
pub struct MoveInput {
    /// Camera-relative movement, x strafe / y forward.
    pub axis: Vec2,
    /// Look delta for this tick.
    pub look: Vec2,
    pub jump: bool,
    pub sprint: bool,
    /// Toggled, not held.
    pub walk: bool,
    pub aim: bool,
}
