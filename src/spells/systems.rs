//! Spells domain: input sampling, phase scheduling, casting, and slot
//! switching.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::anim::{AnimTrigger, AnimTriggerKind};
use crate::content::SpellClass;
use crate::core::LocallyControlled;
use crate::movement::{AimStateChanged, GameLayer, LocomotionState, Player};
use crate::spells::beam::LightningTrail;
use crate::spells::components::{
    EquippedSpell, PhaseTransition, SpellSlots, StartupSettle, SwitchOutcome,
};
use crate::spells::kinds::{CastContext, CastEffect, RayHit};
use crate::spells::projectile::{Projectile, ProjectileLifetime, PROJECTILE_MAX_LIFETIME};
use crate::spells::resources::{quantize_slot_select, SpellInput};
use crate::vfx::{VfxCommand, VfxInstance};

/// Ray length for targeted casts.
const MAX_CAST_DISTANCE: f32 = 1.0e4;

pub(crate) fn read_spell_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<SpellInput>,
) {
    input.use_spell = mouse_buttons.just_pressed(MouseButton::Left);

    // Directional selection: arrows quantized to the four cardinals
    let mut selection = Vec2::ZERO;
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        selection.y += 1.0;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        selection.y -= 1.0;
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        selection.x -= 1.0;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        selection.x += 1.0;
    }

    input.select = quantize_slot_select(selection);
}

/// One-shot settle after spawn: squelch every charge visual once, then select
/// the default slot without re-activating its visual.
pub(crate) fn startup_settle(
    time: Res<Time>,
    mut commands: Commands,
    mut vfx_query: Query<&mut VfxInstance>,
    mut query: Query<(Entity, &mut StartupSettle, &mut SpellSlots)>,
) {
    let dt = time.delta_secs();

    for (entity, mut settle, mut slots) in &mut query {
        settle.remaining -= dt;
        if settle.remaining > 0.0 {
            continue;
        }

        for slot in &slots.slots {
            if let Ok(mut instance) = vfx_query.get_mut(slot.vfx_instance) {
                instance.set_playing(false);
            }
        }
        if !slots.slots.is_empty() {
            slots.current = Some(0);
        }
        commands.entity(entity).remove::<StartupSettle>();
        info!("Spell slots settled, default slot selected");
    }
}

/// Advance every slot's phase timers, selected or not. Active windows ending
/// run the spell's deactivate effect; cooldowns ending restore readiness.
pub(crate) fn tick_spell_phases(
    time: Res<Time>,
    mut commands: Commands,
    mut vfx_events: MessageWriter<VfxCommand>,
    mut query: Query<
        (Entity, &mut SpellSlots, &mut LocomotionState),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut slots, mut state) in &mut query {
        for index in 0..slots.slots.len() {
            let transition = slots.slots[index].tick(dt);
            match transition {
                Some(PhaseTransition::ActiveEnded) => {
                    let effects = slots.slots[index].spec.deactivate();
                    debug!(
                        "Spell '{}' active window ended, entering cooldown",
                        slots.slots[index].spec.id
                    );
                    apply_cast_effects(&mut commands, entity, &mut state, &mut vfx_events, effects);
                }
                Some(PhaseTransition::BecameReady) => {
                    debug!("Spell '{}' ready again", slots.slots[index].spec.id);
                }
                None => {}
            }
        }
    }
}

/// Mirror the telegraphed-spell visual when aim mode flips.
pub(crate) fn apply_aim_visuals(
    mut aim_events: MessageReader<AimStateChanged>,
    mut vfx_events: MessageWriter<VfxCommand>,
    mut vfx_query: Query<&mut VfxInstance>,
    slots_query: Query<&SpellSlots>,
) {
    for event in aim_events.read() {
        let Ok(slots) = slots_query.get(event.entity) else {
            continue;
        };

        if event.aiming {
            // Only one charge visual may show at a time
            for slot in &slots.slots {
                set_slot_vfx(slot, false, &mut vfx_query, &mut vfx_events);
            }
            if let Some(selected) = slots.current_slot() {
                set_slot_vfx(selected, true, &mut vfx_query, &mut vfx_events);
            }
        } else if let Some(selected) = slots.current_slot() {
            set_slot_vfx(selected, false, &mut vfx_query, &mut vfx_events);
        }
    }
}

/// Cast the selected spell: aim mode, use intent, a selected slot, and
/// readiness are all required; otherwise this is a no-op.
pub(crate) fn use_spell(
    input: Res<SpellInput>,
    mut commands: Commands,
    spatial_query: SpatialQuery,
    mut vfx_events: MessageWriter<VfxCommand>,
    mut anim_triggers: MessageWriter<AnimTrigger>,
    mut query: Query<
        (Entity, &Transform, &mut SpellSlots, &mut LocomotionState),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    if !input.use_spell {
        return;
    }

    for (entity, transform, mut slots, mut state) in &mut query {
        let Some(index) = slots.castable_slot(state.aiming) else {
            continue;
        };

        let origin = transform.translation + transform.rotation * slots.cast_origin;
        let ray_hit = cast_toward_target(&spatial_query, entity, origin, state.target_point);

        let ctx = CastContext {
            caster: entity,
            origin,
            target_point: state.target_point,
            ray_hit,
        };

        let effects = slots.slots[index].spec.activate(&ctx);
        slots.slots[index].begin_cast();

        anim_triggers.write(AnimTrigger {
            entity,
            kind: reaction_trigger(slots.slots[index].spec.class),
        });

        debug!(
            "Cast '{}' from slot {} (hit={})",
            slots.slots[index].spec.id,
            index,
            ctx.ray_hit.is_some()
        );

        apply_cast_effects(&mut commands, entity, &mut state, &mut vfx_events, effects);
    }
}

/// Apply this tick's directional slot selection, if any.
pub(crate) fn switch_spell_slot(
    input: Res<SpellInput>,
    mut vfx_events: MessageWriter<VfxCommand>,
    mut vfx_query: Query<&mut VfxInstance>,
    mut query: Query<(&mut SpellSlots, &LocomotionState), (With<Player>, With<LocallyControlled>)>,
) {
    let Some(selected) = input.select else {
        return;
    };

    for (mut slots, state) in &mut query {
        match slots.switch_to(selected) {
            SwitchOutcome::NoChange => {}
            SwitchOutcome::Switched { previous } => {
                if let Some(previous) = previous {
                    let slot = &slots.slots[previous];
                    set_slot_vfx(slot, false, &mut vfx_query, &mut vfx_events);
                }
                if state.aiming {
                    if let Some(slot) = slots.current_slot() {
                        set_slot_vfx(slot, true, &mut vfx_query, &mut vfx_events);
                    }
                }
                debug!("Switched to spell slot {}", selected);
            }
        }
    }
}

/// Nearest hit along origin -> target, ignoring the caster itself.
fn cast_toward_target(
    spatial_query: &SpatialQuery,
    caster: Entity,
    origin: Vec3,
    target: Vec3,
) -> Option<RayHit> {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Target])
        .with_excluded_entities([caster]);
    let direction = Dir3::new(target - origin).ok()?;

    spatial_query
        .cast_ray(origin, direction, MAX_CAST_DISTANCE, true, &filter)
        .map(|hit| RayHit {
            point: origin + direction * hit.distance,
            normal: hit.normal,
        })
}

fn reaction_trigger(class: SpellClass) -> AnimTriggerKind {
    match class {
        SpellClass::LightAttack => AnimTriggerKind::LightAttackSpell,
        SpellClass::HeavyAttack => AnimTriggerKind::HeavyAttackSpell,
        SpellClass::Buff => AnimTriggerKind::BuffSpell,
    }
}

fn set_slot_vfx(
    slot: &EquippedSpell,
    playing: bool,
    vfx_query: &mut Query<&mut VfxInstance>,
    vfx_events: &mut MessageWriter<VfxCommand>,
) {
    let Ok(mut instance) = vfx_query.get_mut(slot.vfx_instance) else {
        return;
    };

    if instance.set_playing(playing) {
        let command = if playing {
            VfxCommand::Play {
                instance: slot.vfx_instance,
                handle: instance.handle.clone(),
            }
        } else {
            VfxCommand::Stop {
                instance: slot.vfx_instance,
                handle: instance.handle.clone(),
            }
        };
        vfx_events.write(command);
    }
}

/// Execute cast effects against the world.
fn apply_cast_effects(
    commands: &mut Commands,
    caster: Entity,
    locomotion: &mut LocomotionState,
    vfx_events: &mut MessageWriter<VfxCommand>,
    effects: Vec<CastEffect>,
) {
    for effect in effects {
        match effect {
            CastEffect::SetSpeedMultiplier(value) => {
                locomotion.speed_multiplier = value;
            }
            CastEffect::SpawnVfx {
                handle,
                position,
                normal,
            } => {
                vfx_events.write(VfxCommand::SpawnAt {
                    handle,
                    position,
                    normal,
                });
            }
            CastEffect::SpawnProjectile {
                origin,
                velocity,
                radius,
                impact_vfx,
            } => {
                commands.spawn((
                    Projectile {
                        owner: caster,
                        impact_vfx,
                    },
                    ProjectileLifetime(PROJECTILE_MAX_LIFETIME),
                    Transform::from_translation(origin),
                    RigidBody::Dynamic,
                    GravityScale(0.0),
                    Collider::sphere(radius),
                    LinearVelocity(velocity),
                    CollisionEventsEnabled,
                    CollisionLayers::new(
                        GameLayer::Projectile,
                        [GameLayer::Ground, GameLayer::Target, GameLayer::Caster],
                    ),
                ));
            }
            CastEffect::SpawnTrail {
                start,
                end,
                normal,
                duration,
                trail_vfx,
                impact_vfx,
            } => {
                let instance = commands
                    .spawn((
                        LightningTrail::new(start, end, normal, duration, impact_vfx),
                        VfxInstance {
                            handle: trail_vfx.clone(),
                            playing: true,
                        },
                        Transform::from_translation(start),
                    ))
                    .id();
                vfx_events.write(VfxCommand::Play {
                    instance,
                    handle: trail_vfx,
                });
            }
        }
    }
}
