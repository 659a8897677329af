//! Movement domain: caster bootstrap and data-driven spawn setup.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::anim::AnimatorParams;
use crate::content::{ContentRegistry, SimDefaults, SpellDef};
use crate::core::{LocallyControlled, SimConfig};
use crate::movement::{CameraRig, GameLayer, LocomotionState, LocomotionTuning, Player};
use crate::spells::{EquippedSpell, SpellSlots, SpellSpec, StartupSettle, MAX_SPELL_SLOTS};
use crate::vfx::{VfxInstance, VfxManifest};

/// Spawn the player caster from ContentRegistry data.
/// Runs on entering SimState::Run once content is loaded.
pub(crate) fn bootstrap_caster_from_data(
    mut commands: Commands,
    config: Res<SimConfig>,
    defaults: Res<SimDefaults>,
    registry: Option<Res<ContentRegistry>>,
    manifest: Option<Res<VfxManifest>>,
    existing_caster: Query<Entity, With<Player>>,
    mut tuning: ResMut<LocomotionTuning>,
) {
    if !existing_caster.is_empty() {
        info!("Caster already exists, skipping spawn");
        return;
    }

    let caster_def = registry
        .as_ref()
        .and_then(|reg| reg.casters.get(&defaults.default_caster_id))
        .cloned();

    let (spell_defs, spawn, cast_origin, eye_height) = match &caster_def {
        Some(def) => {
            tuning.apply_def(&def.locomotion);

            let mut spells: Vec<SpellDef> = Vec::new();
            if let Some(reg) = &registry {
                for spell_id in def.spell_ids.iter().take(MAX_SPELL_SLOTS) {
                    match reg.spells.get(spell_id) {
                        Some(spell) => spells.push(spell.clone()),
                        None => warn!("Spell '{}' not found in registry, slot skipped", spell_id),
                    }
                }
            }

            info!(
                "Spawning caster '{}' with {} spells",
                def.id,
                spells.len()
            );
            (
                spells,
                Vec3::from_array(def.spawn),
                Vec3::from_array(def.cast_origin),
                def.eye_height,
            )
        }
        None => {
            warn!(
                "Caster '{}' not found in registry, spawning with default tuning and no spells",
                defaults.default_caster_id
            );
            (Vec::new(), Vec3::ZERO, Vec3::new(0.0, 1.2, 0.4), 1.6)
        }
    };

    // One dedicated charge-visual instance per slot, stopped until telegraphed
    let mut slots = Vec::new();
    for def in &spell_defs {
        if let Some(manifest) = &manifest {
            if !manifest.contains(&def.charge_vfx) {
                warn!(
                    "Spell '{}' charge vfx '{}' missing from manifest",
                    def.id, def.charge_vfx
                );
            }
        }
        let vfx_instance = commands
            .spawn((
                VfxInstance::new(def.charge_vfx.clone()),
                Transform::from_translation(spawn),
            ))
            .id();
        slots.push(EquippedSpell::new(SpellSpec::from_def(def), vfx_instance));
    }

    let mut caster = commands.spawn((
        // Identity & locomotion
        (
            Player,
            LocomotionState::from_tuning(&tuning),
            CameraRig::new(eye_height),
            AnimatorParams::default(),
            crate::audio::FootstepState::default(),
        ),
        // Spells
        (
            SpellSlots::new(slots, cast_origin),
            StartupSettle {
                remaining: defaults.settle_delay,
            },
        ),
        Transform::from_translation(spawn),
        // Physics: the entity origin sits at the feet, so the capsule is
        // lifted to cover the body
        (
            RigidBody::Dynamic,
            Collider::compound(vec![(
                Vec3::Y * 0.88,
                Quat::IDENTITY,
                Collider::capsule(0.28, 1.2),
            )]),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the locomotion systems
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Caster, [GameLayer::Ground, GameLayer::Target]),
        ),
    ));

    if config.local_authority {
        caster.insert(LocallyControlled);
    } else {
        info!("Caster spawned without local authority, simulation systems will skip it");
    }
}
