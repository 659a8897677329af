//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::math;
use crate::movement::resources::LocomotionTuning;

/// Physics layers for collision and query filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, terrain)
    Ground,
    /// Player-controlled casters
    Caster,
    /// Targetable obstacles and dummies
    Target,
    /// Spell projectiles
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character locomotion state, advanced every tick while locally
/// authoritative.
#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    /// Physically applied horizontal speed.
    pub speed: f32,
    /// Smoothed animation-only speed, decoupled from `speed`.
    pub animation_blend: f32,
    pub vertical_velocity: f32,
    /// Yaw the character is easing toward, degrees.
    pub target_rotation: f32,
    /// SmoothDamp state for yaw easing, degrees per second.
    pub rotation_velocity: f32,
    pub grounded: bool,
    pub jump_timeout_remaining: f32,
    pub fall_timeout_remaining: f32,
    /// Externally settable (spell effects). 1.0 when nothing is boosting.
    pub speed_multiplier: f32,
    /// Current look sensitivity; switched atomically with aim entry/exit.
    pub sensitivity: f32,
    pub aiming: bool,
    pub jumping: bool,
    pub free_falling: bool,
    /// World point of the latest successful aim ray cast. A miss leaves the
    /// previous point unchanged.
    pub target_point: Vec3,
}

impl LocomotionState {
    pub fn from_tuning(tuning: &LocomotionTuning) -> Self {
        Self {
            speed: 0.0,
            animation_blend: 0.0,
            vertical_velocity: 0.0,
            target_rotation: 0.0,
            rotation_velocity: 0.0,
            grounded: true,
            jump_timeout_remaining: tuning.jump_timeout,
            fall_timeout_remaining: tuning.fall_timeout,
            speed_multiplier: 1.0,
            sensitivity: tuning.normal_sensitivity,
            aiming: false,
            jumping: false,
            free_falling: false,
            target_point: Vec3::ZERO,
        }
    }

    /// Enter or leave aim mode. Sensitivity switches in the same call so the
    /// two can never be observed out of sync. Returns true on a transition.
    pub fn set_aim(&mut self, aiming: bool, tuning: &LocomotionTuning) -> bool {
        if self.aiming == aiming {
            return false;
        }
        self.aiming = aiming;
        self.sensitivity = if aiming {
            tuning.aim_sensitivity
        } else {
            tuning.normal_sensitivity
        };
        true
    }

    /// Jump/gravity branch for one tick. `jump_intent` is cleared while
    /// airborne so jumps cannot be buffered mid-fall.
    pub fn advance_jump_and_gravity(
        &mut self,
        jump_intent: &mut bool,
        tuning: &LocomotionTuning,
        dt: f32,
    ) {
        if self.grounded {
            self.fall_timeout_remaining = tuning.fall_timeout;
            self.jumping = false;
            self.free_falling = false;

            // Remove residual penetration velocity from the last landing
            if self.vertical_velocity < 0.0 {
                self.vertical_velocity = GROUNDED_STICK_VELOCITY;
            }

            if *jump_intent && self.jump_timeout_remaining <= 0.0 {
                self.vertical_velocity = tuning.jump_velocity();
                self.jumping = true;
            }

            if self.jump_timeout_remaining >= 0.0 {
                self.jump_timeout_remaining -= dt;
            }
        } else {
            self.jump_timeout_remaining = tuning.jump_timeout;

            if self.fall_timeout_remaining >= 0.0 {
                self.fall_timeout_remaining -= dt;
            } else {
                self.free_falling = true;
            }

            *jump_intent = false;
        }

        if self.vertical_velocity < TERMINAL_VELOCITY {
            self.vertical_velocity += tuning.gravity * dt;
        }
        self.vertical_velocity = self.vertical_velocity.max(-TERMINAL_VELOCITY);
    }

    /// Ease the physical speed toward `target`. Snaps inside a small dead-band
    /// so steady state does not oscillate.
    pub fn advance_speed(&mut self, current_horizontal: f32, target: f32, rate: f32, dt: f32) {
        if current_horizontal < target - SPEED_DEAD_BAND || current_horizontal > target + SPEED_DEAD_BAND
        {
            let eased = math::lerp(current_horizontal, target, dt * rate);
            self.speed = (eased * 1000.0).round() / 1000.0;
        } else {
            self.speed = target;
        }
    }

    /// Ease the animation blend toward `target`, snapping to zero below the
    /// blend epsilon.
    pub fn advance_blend(&mut self, target: f32, rate: f32, dt: f32) {
        self.animation_blend = math::lerp(self.animation_blend, target, dt * rate);
        if self.animation_blend < BLEND_EPSILON {
            self.animation_blend = 0.0;
        }
    }
}

/// Vertical speed is never allowed past this magnitude.
pub const TERMINAL_VELOCITY: f32 = 53.0;
/// Small downward push while grounded, keeps the body seated on the floor.
pub const GROUNDED_STICK_VELOCITY: f32 = -2.0;
/// Half-width of the snap band around the target speed.
pub const SPEED_DEAD_BAND: f32 = 0.1;
/// Animation blend below this snaps to zero.
pub const BLEND_EPSILON: f32 = 0.01;

/// Camera pivot targets for one character. Rotation accumulates here; an
/// external camera rig consumes the angles.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    /// Degrees, wraps at +-360.
    pub yaw: f32,
    /// Degrees, clamped to the tuning's [bottom_clamp, top_clamp].
    pub pitch: f32,
    pub angle_override: f32,
    pub lock: bool,
    /// Whether the aim-specific rig is engaged.
    pub aim_rig_active: bool,
    /// Height above the character origin the aim ray starts from.
    pub eye_height: f32,
}

impl CameraRig {
    pub fn new(eye_height: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            angle_override: 0.0,
            lock: false,
            aim_rig_active: false,
            eye_height,
        }
    }

    /// Look direction for the current yaw/pitch targets. Positive pitch looks
    /// down.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = (self.pitch + self.angle_override).to_radians();
        Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0) * Vec3::Z
    }
}
