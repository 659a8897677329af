//! Spells domain: projectile entities spawned by targeted casts.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::vfx::VfxCommand;

/// Projectiles that never hit anything despawn after this long.
pub const PROJECTILE_MAX_LIFETIME: f32 = 8.0;

#[derive(Component, Debug)]
pub struct Projectile {
    /// Casting entity; collisions with it are ignored.
    pub owner: Entity,
    pub impact_vfx: String,
}

/// Remaining seconds before a stray projectile is reclaimed.
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);

/// Despawn projectiles on their first contact with anything but their owner
/// and spawn the impact visual there.
pub(crate) fn handle_projectile_collisions(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut vfx_events: MessageWriter<VfxCommand>,
    projectiles: Query<(&Projectile, &Transform)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, other) in pairs {
            let Ok((projectile, transform)) = projectiles.get(projectile_entity) else {
                continue;
            };

            if other == projectile.owner {
                continue;
            }

            vfx_events.write(VfxCommand::SpawnAt {
                handle: projectile.impact_vfx.clone(),
                position: transform.translation,
                normal: None,
            });
            commands.entity(projectile_entity).try_despawn();
            debug!("Projectile impact at {:?}", transform.translation);
        }
    }
}

pub(crate) fn tick_projectile_lifetime(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
