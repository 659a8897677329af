//! Arena domain: static test-range geometry for the headless simulation.
//!
//! A flat ground slab plus a few target pillars, enough for grounded checks,
//! aim rays, and projectile impacts to have something to hit.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::SimState;
use crate::movement::GameLayer;

/// Marker for arena geometry.
#[derive(Component, Debug)]
pub struct ArenaFixture;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SimState::Run), spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands, existing: Query<Entity, With<ArenaFixture>>) {
    if !existing.is_empty() {
        return;
    }

    // Ground slab centered under the spawn point
    commands.spawn((
        ArenaFixture,
        RigidBody::Static,
        Collider::cuboid(80.0, 0.5, 80.0),
        Transform::from_xyz(0.0, -0.25, 0.0),
        CollisionLayers::new(
            GameLayer::Ground,
            [GameLayer::Caster, GameLayer::Projectile],
        ),
    ));

    // Target pillars down-range of the spawn
    for (x, z) in [(0.0, 12.0), (-4.0, 16.0), (5.0, 20.0)] {
        commands.spawn((
            ArenaFixture,
            RigidBody::Static,
            Collider::cuboid(1.0, 4.0, 1.0),
            Transform::from_xyz(x, 2.0, z),
            CollisionLayers::new(GameLayer::Target, [GameLayer::Projectile]),
        ));
    }

    info!("Arena spawned: ground slab and 3 target pillars");
}
