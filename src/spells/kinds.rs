//! Spells domain: behavior variants and their activate/deactivate effects.
//!
//! Each kind resolves to a list of `CastEffect`s the scheduler executes. A
//! new kind is a new variant plus its two match arms; the scheduler and slot
//! machinery stay untouched.

use bevy::prelude::*;

use crate::content::SpellKindDef;
use crate::spells::components::SpellSpec;

/// Nearest hit of a targeted cast ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Everything a spell effect may read when activating.
#[derive(Debug, Clone)]
pub struct CastContext {
    pub caster: Entity,
    /// World-space cast origin (the hand).
    pub origin: Vec3,
    /// Target point recorded by the aim ray.
    pub target_point: Vec3,
    /// Nearest hit along origin -> target_point, if any. A miss means
    /// targeted kinds spawn nothing; the readiness cycle proceeds regardless.
    pub ray_hit: Option<RayHit>,
}

/// Effects produced by spell activation/deactivation, executed by the
/// scheduler against the world.
#[derive(Debug, Clone, PartialEq)]
pub enum CastEffect {
    /// Overwrite the caster's locomotion speed multiplier. Last write wins.
    SetSpeedMultiplier(f32),
    /// Fire-and-forget visual at a world position.
    SpawnVfx {
        handle: String,
        position: Vec3,
        normal: Option<Vec3>,
    },
    SpawnProjectile {
        origin: Vec3,
        velocity: Vec3,
        radius: f32,
        impact_vfx: String,
    },
    SpawnTrail {
        start: Vec3,
        end: Vec3,
        normal: Vec3,
        duration: f32,
        trail_vfx: String,
        impact_vfx: String,
    },
}

/// Runtime behavior variant of a spell.
#[derive(Debug, Clone, PartialEq)]
pub enum SpellKind {
    Dash {
        speed_multiplier: f32,
    },
    Fireball {
        projectile_speed: f32,
        projectile_radius: f32,
    },
    Lightning {
        trail_duration: f32,
        trail_vfx: String,
    },
}

impl SpellKind {
    pub fn from_def(def: &SpellKindDef) -> Self {
        match def {
            SpellKindDef::Dash { speed_multiplier } => SpellKind::Dash {
                speed_multiplier: *speed_multiplier,
            },
            SpellKindDef::Fireball {
                projectile_speed,
                projectile_radius,
            } => SpellKind::Fireball {
                projectile_speed: *projectile_speed,
                projectile_radius: *projectile_radius,
            },
            SpellKindDef::Lightning {
                trail_duration,
                trail_vfx,
            } => SpellKind::Lightning {
                trail_duration: *trail_duration,
                trail_vfx: trail_vfx.clone(),
            },
        }
    }
}

impl SpellSpec {
    /// Effects of using this spell now. Targeted kinds that have no ray hit
    /// return nothing; the cast is still consumed by the scheduler.
    pub fn activate(&self, ctx: &CastContext) -> Vec<CastEffect> {
        match &self.kind {
            SpellKind::Dash { speed_multiplier } => vec![
                CastEffect::SpawnVfx {
                    handle: self.impact_vfx.clone(),
                    position: ctx.origin,
                    normal: None,
                },
                CastEffect::SetSpeedMultiplier(*speed_multiplier),
            ],
            SpellKind::Fireball {
                projectile_speed,
                projectile_radius,
            } => match ctx.ray_hit {
                Some(hit) => {
                    let direction = (hit.point - ctx.origin).normalize_or_zero();
                    vec![CastEffect::SpawnProjectile {
                        origin: ctx.origin,
                        velocity: direction * *projectile_speed,
                        radius: *projectile_radius,
                        impact_vfx: self.impact_vfx.clone(),
                    }]
                }
                None => Vec::new(),
            },
            SpellKind::Lightning {
                trail_duration,
                trail_vfx,
            } => match ctx.ray_hit {
                Some(hit) => vec![CastEffect::SpawnTrail {
                    start: ctx.origin,
                    end: hit.point,
                    normal: hit.normal,
                    duration: *trail_duration,
                    trail_vfx: trail_vfx.clone(),
                    impact_vfx: self.impact_vfx.clone(),
                }],
                None => Vec::new(),
            },
        }
    }

    /// Effects of the active window ending.
    pub fn deactivate(&self) -> Vec<CastEffect> {
        match &self.kind {
            SpellKind::Dash { .. } => vec![CastEffect::SetSpeedMultiplier(1.0)],
            SpellKind::Fireball { .. } => Vec::new(),
            SpellKind::Lightning { .. } => Vec::new(),
        }
    }
}
