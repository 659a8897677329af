//! Spells domain: slot scheduler plugin wiring and public exports.

mod beam;
mod components;
mod kinds;
mod projectile;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use beam::LightningTrail;
pub use components::{
    EquippedSpell, PhaseTransition, SpellPhase, SpellSlots, SpellSpec, StartupSettle,
    SwitchOutcome, MAX_SPELL_SLOTS,
};
pub use kinds::{CastContext, CastEffect, RayHit, SpellKind};
pub use projectile::{Projectile, ProjectileLifetime};
pub use resources::{quantize_slot_select, SpellInput};

use bevy::prelude::*;

use crate::core::{SimSet, SimState};
use crate::spells::beam::advance_lightning_trails;
use crate::spells::projectile::{handle_projectile_collisions, tick_projectile_lifetime};
use crate::spells::systems::{
    apply_aim_visuals, read_spell_input, startup_settle, switch_spell_slot, tick_spell_phases,
    use_spell,
};

pub struct SpellsPlugin;

impl Plugin for SpellsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpellInput>()
            .add_systems(Update, read_spell_input.in_set(SimSet::Input))
            .add_systems(
                Update,
                (
                    startup_settle,
                    tick_spell_phases,
                    apply_aim_visuals,
                    use_spell,
                    switch_spell_slot,
                )
                    .chain()
                    .in_set(SimSet::Abilities)
                    .run_if(in_state(SimState::Run)),
            )
            .add_systems(
                Update,
                (
                    handle_projectile_collisions,
                    tick_projectile_lifetime,
                    advance_lightning_trails,
                )
                    .in_set(SimSet::Effects)
                    .run_if(in_state(SimState::Run)),
            );
    }
}
