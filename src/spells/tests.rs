//! Spells domain: unit tests for the readiness state machine and kinds.

use bevy::prelude::*;

use crate::content::SpellClass;

use super::{
    quantize_slot_select, CastContext, CastEffect, EquippedSpell, LightningTrail, PhaseTransition,
    RayHit, SpellKind, SpellPhase, SpellSlots, SpellSpec, SwitchOutcome,
};

fn spec(kind: SpellKind, active_time: f32, cooldown_time: f32) -> SpellSpec {
    SpellSpec {
        id: "spell_test".to_string(),
        class: SpellClass::LightAttack,
        kind,
        active_time,
        cooldown_time,
        charge_vfx: "vfx_charge".to_string(),
        impact_vfx: "vfx_impact".to_string(),
    }
}

fn dash_spec() -> SpellSpec {
    spec(
        SpellKind::Dash {
            speed_multiplier: 2.5,
        },
        1.0,
        2.0,
    )
}

fn fireball_spec() -> SpellSpec {
    spec(
        SpellKind::Fireball {
            projectile_speed: 25.0,
            projectile_radius: 0.15,
        },
        0.2,
        3.0,
    )
}

fn slot(spec: SpellSpec) -> EquippedSpell {
    EquippedSpell::new(spec, Entity::PLACEHOLDER)
}

fn ctx(ray_hit: Option<RayHit>) -> CastContext {
    CastContext {
        caster: Entity::PLACEHOLDER,
        origin: Vec3::new(0.0, 1.2, 0.0),
        target_point: Vec3::new(0.0, 1.0, 10.0),
        ray_hit,
    }
}

#[test]
fn test_ready_false_for_exactly_active_plus_cooldown() {
    let mut slot = slot(spec(
        SpellKind::Dash {
            speed_multiplier: 2.0,
        },
        0.5,
        1.0,
    ));
    let dt = 0.1;

    slot.begin_cast();
    assert!(!slot.is_ready());

    // Unready for the closed-open interval [0, 1.5): 15 ticks of 0.1
    let mut unready_ticks = 0;
    while !slot.is_ready() {
        slot.tick(dt);
        unready_ticks += 1;
        assert!(unready_ticks < 100, "spell never became ready");
    }

    assert_eq!(unready_ticks, 15);
}

#[test]
fn test_active_end_reports_transition_once() {
    let mut slot = slot(dash_spec());
    slot.begin_cast();

    assert_eq!(slot.tick(0.5), None);
    assert_eq!(slot.tick(0.6), Some(PhaseTransition::ActiveEnded));
    assert!(matches!(slot.phase, SpellPhase::Cooldown { .. }));
    assert_eq!(slot.tick(0.5), None);
}

#[test]
fn test_overshoot_carries_into_cooldown() {
    let mut slot = slot(spec(
        SpellKind::Dash {
            speed_multiplier: 2.0,
        },
        0.1,
        1.0,
    ));
    slot.begin_cast();

    // One big tick overshoots the active window by 0.3; the cooldown absorbs it
    slot.tick(0.4);
    match slot.phase {
        SpellPhase::Cooldown { remaining } => assert!((remaining - 0.7).abs() < 1e-5),
        other => panic!("expected cooldown, got {:?}", other),
    }
}

#[test]
fn test_zero_cooldown_resolves_same_tick() {
    let mut slot = slot(spec(
        SpellKind::Dash {
            speed_multiplier: 2.0,
        },
        0.1,
        0.0,
    ));
    slot.begin_cast();

    assert_eq!(slot.tick(0.2), Some(PhaseTransition::ActiveEnded));
    assert!(slot.is_ready());
}

#[test]
fn test_castable_requires_aim_selection_and_readiness() {
    let mut slots = SpellSlots::new(vec![slot(dash_spec())], Vec3::ZERO);

    // No selection yet (pre-settle sentinel)
    assert_eq!(slots.castable_slot(true), None);

    slots.current = Some(0);
    // Not aiming: never castable
    assert_eq!(slots.castable_slot(false), None);
    assert_eq!(slots.castable_slot(true), Some(0));

    slots.slots[0].begin_cast();
    assert_eq!(slots.castable_slot(true), None);
}

#[test]
fn test_switch_to_same_slot_is_no_change() {
    let mut slots = SpellSlots::new(vec![slot(dash_spec()), slot(fireball_spec())], Vec3::ZERO);
    slots.current = Some(0);

    assert_eq!(
        slots.switch_to(1),
        SwitchOutcome::Switched { previous: Some(0) }
    );
    // Redundant re-select changes nothing, so no visual is stopped/restarted
    assert_eq!(slots.switch_to(1), SwitchOutcome::NoChange);
    assert_eq!(slots.current, Some(1));
}

#[test]
fn test_switch_out_of_range_is_no_change() {
    let mut slots = SpellSlots::new(vec![slot(dash_spec())], Vec3::ZERO);
    slots.current = Some(0);

    assert_eq!(slots.switch_to(3), SwitchOutcome::NoChange);
    assert_eq!(slots.current, Some(0));
}

#[test]
fn test_switch_does_not_cancel_running_timers() {
    let mut slots = SpellSlots::new(vec![slot(dash_spec()), slot(fireball_spec())], Vec3::ZERO);
    slots.current = Some(0);
    slots.slots[0].begin_cast();

    slots.switch_to(1);

    // Slot 0 keeps running its own phases to completion in the background
    assert!(matches!(slots.slots[0].phase, SpellPhase::Active { .. }));
    slots.slots[0].tick(1.5);
    assert!(matches!(slots.slots[0].phase, SpellPhase::Cooldown { .. }));
    slots.slots[0].tick(2.0);
    assert!(slots.slots[0].is_ready());
}

#[test]
fn test_dash_activate_and_deactivate_effects() {
    let spec = dash_spec();

    let effects = spec.activate(&ctx(None));
    assert!(effects.contains(&CastEffect::SetSpeedMultiplier(2.5)));
    assert!(effects
        .iter()
        .any(|e| matches!(e, CastEffect::SpawnVfx { .. })));

    assert_eq!(
        spec.deactivate(),
        vec![CastEffect::SetSpeedMultiplier(1.0)]
    );
}

#[test]
fn test_fireball_miss_spawns_nothing() {
    let spec = fireball_spec();

    // No ray hit: the cast is consumed by the scheduler but no projectile
    // entity is ever created
    assert!(spec.activate(&ctx(None)).is_empty());
}

#[test]
fn test_fireball_hit_spawns_projectile_toward_hit_point() {
    let spec = fireball_spec();
    let hit = RayHit {
        point: Vec3::new(0.0, 1.2, 10.0),
        normal: Vec3::Y,
    };

    let effects = spec.activate(&ctx(Some(hit)));
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        CastEffect::SpawnProjectile {
            origin, velocity, ..
        } => {
            assert_eq!(*origin, Vec3::new(0.0, 1.2, 0.0));
            assert!((velocity.length() - 25.0).abs() < 1e-3);
            assert!(velocity.z > 0.0);
        }
        other => panic!("expected projectile, got {:?}", other),
    }
}

#[test]
fn test_lightning_hit_spawns_trail_with_surface_normal() {
    let spec = spec(
        SpellKind::Lightning {
            trail_duration: 0.4,
            trail_vfx: "vfx_bolt".to_string(),
        },
        0.1,
        4.0,
    );
    let hit = RayHit {
        point: Vec3::new(3.0, 0.0, 5.0),
        normal: Vec3::new(0.0, 1.0, 0.0),
    };

    let effects = spec.activate(&ctx(Some(hit)));
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        CastEffect::SpawnTrail {
            end,
            normal,
            duration,
            ..
        } => {
            assert_eq!(*end, hit.point);
            assert_eq!(*normal, hit.normal);
            assert_eq!(*duration, 0.4);
        }
        other => panic!("expected trail, got {:?}", other),
    }

    assert!(spec.activate(&ctx(None)).is_empty());
    assert!(spec.deactivate().is_empty());
}

#[test]
fn test_trail_progress_clamps() {
    let mut trail = LightningTrail::new(Vec3::ZERO, Vec3::Z * 10.0, Vec3::Y, 0.5, "vfx_impact");

    assert_eq!(trail.progress(), 0.0);
    trail.elapsed = 0.25;
    assert!((trail.progress() - 0.5).abs() < 1e-5);
    trail.elapsed = 2.0;
    assert_eq!(trail.progress(), 1.0);
}

#[test]
fn test_quantize_slot_select_cardinals() {
    assert_eq!(quantize_slot_select(Vec2::new(0.0, 1.0)), Some(0));
    assert_eq!(quantize_slot_select(Vec2::new(0.0, -1.0)), Some(1));
    assert_eq!(quantize_slot_select(Vec2::new(-1.0, 0.0)), Some(2));
    assert_eq!(quantize_slot_select(Vec2::new(1.0, 0.0)), Some(3));
}

#[test]
fn test_quantize_slot_select_rejects_off_axis() {
    assert_eq!(quantize_slot_select(Vec2::ZERO), None);
    assert_eq!(quantize_slot_select(Vec2::new(1.0, 1.0)), None);
    assert_eq!(quantize_slot_select(Vec2::new(0.3, -0.7)), None);
}

#[test]
fn test_quantize_slot_select_accepts_unnormalized_cardinals() {
    assert_eq!(quantize_slot_select(Vec2::new(0.0, 0.4)), Some(0));
    assert_eq!(quantize_slot_select(Vec2::new(-12.0, 0.0)), Some(2));
}
