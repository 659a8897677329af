//! Spells domain: lightning trail progression.
//!
//! The trail walks from the caster to the hit point over its configured
//! duration, driven per frame and independent of the scheduler's own phase
//! timers. On arrival it spawns the impact visual oriented to the hit normal,
//! lingers for one more duration, then despawns.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::vfx::VfxCommand;

#[derive(Component, Debug)]
pub struct LightningTrail {
    pub start: Vec3,
    pub end: Vec3,
    /// Surface normal at the hit point, orients the impact visual.
    pub normal: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub impact_vfx: String,
    pub arrived: bool,
    pub linger_remaining: f32,
}

impl LightningTrail {
    pub fn new(
        start: Vec3,
        end: Vec3,
        normal: Vec3,
        duration: f32,
        impact_vfx: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            normal,
            duration,
            elapsed: 0.0,
            impact_vfx: impact_vfx.into(),
            arrived: false,
            linger_remaining: duration,
        }
    }

    /// Interpolation factor along the trail, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

pub(crate) fn advance_lightning_trails(
    time: Res<Time>,
    mut commands: Commands,
    mut vfx_events: MessageWriter<VfxCommand>,
    mut query: Query<(Entity, &mut LightningTrail, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut trail, mut transform) in &mut query {
        if !trail.arrived {
            trail.elapsed += dt;
            let t = trail.progress();
            transform.translation = trail.start.lerp(trail.end, t);

            if t >= 1.0 {
                trail.arrived = true;
                transform.translation = trail.end;
                vfx_events.write(VfxCommand::SpawnAt {
                    handle: trail.impact_vfx.clone(),
                    position: trail.end,
                    normal: Some(trail.normal),
                });
                debug!("Lightning trail arrived at {:?}", trail.end);
            }
        } else {
            trail.linger_remaining -= dt;
            if trail.linger_remaining <= 0.0 {
                commands.entity(entity).try_despawn();
            }
        }
    }
}
