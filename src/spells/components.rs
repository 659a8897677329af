//! Spells domain: equipped-slot components and the readiness state machine.

use bevy::prelude::*;

use crate::content::{SpellClass, SpellDef};
use crate::spells::kinds::SpellKind;

/// Maximum equipped spell slots, selectable by directional input.
pub const MAX_SPELL_SLOTS: usize = 4;

/// Immutable per-spell configuration resolved from content at spawn.
#[derive(Debug, Clone)]
pub struct SpellSpec {
    pub id: String,
    pub class: SpellClass,
    pub kind: SpellKind,
    pub active_time: f32,
    pub cooldown_time: f32,
    pub charge_vfx: String,
    pub impact_vfx: String,
}

impl SpellSpec {
    pub fn from_def(def: &SpellDef) -> Self {
        Self {
            id: def.id.clone(),
            class: def.class,
            kind: SpellKind::from_def(&def.kind),
            active_time: def.active_time,
            cooldown_time: def.cooldown_time,
            charge_vfx: def.charge_vfx.clone(),
            impact_vfx: def.impact_vfx.clone(),
        }
    }
}

/// Readiness phase of one equipped spell. Exactly one of these holds at any
/// instant; the spell is usable only in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpellPhase {
    Ready,
    Active { remaining: f32 },
    Cooldown { remaining: f32 },
}

/// Phase transitions surfaced to the scheduler when a timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTransition {
    /// Active window ended; the spell's deactivate effect must run.
    ActiveEnded,
    /// Cooldown ended; the spell is usable again.
    BecameReady,
}

/// One equipped slot: spec, phase, and its dedicated charge-visual instance.
#[derive(Debug, Clone)]
pub struct EquippedSpell {
    pub spec: SpellSpec,
    pub phase: SpellPhase,
    pub vfx_instance: Entity,
}

impl EquippedSpell {
    pub fn new(spec: SpellSpec, vfx_instance: Entity) -> Self {
        Self {
            spec,
            phase: SpellPhase::Ready,
            vfx_instance,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SpellPhase::Ready)
    }

    /// Consume readiness and start the active window.
    pub fn begin_cast(&mut self) {
        self.phase = SpellPhase::Active {
            remaining: self.spec.active_time,
        };
    }

    /// Advance the phase timers by one tick. Leftover time past a boundary
    /// carries into the next phase so total unready time is exactly
    /// active_time + cooldown_time regardless of tick size.
    pub fn tick(&mut self, dt: f32) -> Option<PhaseTransition> {
        match self.phase {
            SpellPhase::Ready => None,
            SpellPhase::Active { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = SpellPhase::Cooldown {
                        remaining: self.spec.cooldown_time + remaining,
                    };
                    // A zero-length cooldown resolves on the same tick
                    if let SpellPhase::Cooldown { remaining } = self.phase {
                        if remaining <= 0.0 {
                            self.phase = SpellPhase::Ready;
                        }
                    }
                    Some(PhaseTransition::ActiveEnded)
                } else {
                    self.phase = SpellPhase::Active { remaining };
                    None
                }
            }
            SpellPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = SpellPhase::Ready;
                    Some(PhaseTransition::BecameReady)
                } else {
                    self.phase = SpellPhase::Cooldown { remaining };
                    None
                }
            }
        }
    }
}

/// Outcome of a slot-switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Requested slot is already selected or out of range; nothing happened.
    NoChange,
    Switched { previous: Option<usize> },
}

/// The equipped spell set for one caster.
#[derive(Component, Debug)]
pub struct SpellSlots {
    pub slots: Vec<EquippedSpell>,
    /// Selected slot; None until the startup settle picks the default.
    pub current: Option<usize>,
    /// Local offset spells are cast from.
    pub cast_origin: Vec3,
}

impl SpellSlots {
    pub fn new(slots: Vec<EquippedSpell>, cast_origin: Vec3) -> Self {
        Self {
            slots,
            current: None,
            cast_origin,
        }
    }

    pub fn current_slot(&self) -> Option<&EquippedSpell> {
        self.slots.get(self.current?)
    }

    /// Index of the slot a cast would use right now: requires aim mode, a
    /// selected slot, and that slot being ready.
    pub fn castable_slot(&self, aiming: bool) -> Option<usize> {
        if !aiming {
            return None;
        }
        let index = self.current?;
        if self.slots.get(index)?.is_ready() {
            Some(index)
        } else {
            None
        }
    }

    /// Select `new_index`. Re-selecting the current slot or selecting outside
    /// the equipped list changes nothing. In-flight phase timers on the
    /// previous slot are untouched.
    pub fn switch_to(&mut self, new_index: usize) -> SwitchOutcome {
        if Some(new_index) == self.current || new_index >= self.slots.len() {
            return SwitchOutcome::NoChange;
        }
        let previous = self.current;
        self.current = Some(new_index);
        SwitchOutcome::Switched { previous }
    }
}

/// One-shot settle countdown inserted at spawn. When it elapses, every charge
/// visual is squelched once and the default slot is selected without
/// re-activating its visual; the component is then removed.
#[derive(Component, Debug)]
pub struct StartupSettle {
    pub remaining: f32,
}
