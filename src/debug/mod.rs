//! Debug domain: periodic state dumps for headless runs (dev-tools feature).

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::anim::AnimTrigger;
use crate::audio::AudioCue;
use crate::core::SimState;
use crate::movement::{LocomotionState, Player};
use crate::spells::{SpellPhase, SpellSlots};
use crate::vfx::VfxCommand;

/// Seconds between state dumps.
const DUMP_INTERVAL: f32 = 2.0;

#[derive(Resource, Debug, Default)]
struct DumpTimer {
    elapsed: f32,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DumpTimer>()
            .add_systems(Update, dump_state.run_if(in_state(SimState::Run)))
            .add_systems(
                Update,
                log_outbound_messages
                    .after(crate::core::SimSet::Effects)
                    .run_if(in_state(SimState::Run)),
            );
    }
}

/// Stand-in for the external animation/effect/audio players in headless runs:
/// drains the outbound seams and logs what they would have received.
fn log_outbound_messages(
    mut anim_triggers: MessageReader<AnimTrigger>,
    mut vfx_commands: MessageReader<VfxCommand>,
    mut audio_cues: MessageReader<AudioCue>,
) {
    for trigger in anim_triggers.read() {
        debug!("anim trigger: {:?}", trigger);
    }
    for command in vfx_commands.read() {
        debug!("vfx command: {:?}", command);
    }
    for cue in audio_cues.read() {
        debug!("audio cue: {:?}", cue);
    }
}

fn dump_state(
    time: Res<Time>,
    mut timer: ResMut<DumpTimer>,
    query: Query<(&Transform, &LocomotionState, &SpellSlots), With<Player>>,
) {
    timer.elapsed += time.delta_secs();
    if timer.elapsed < DUMP_INTERVAL {
        return;
    }
    timer.elapsed = 0.0;

    for (transform, state, slots) in &query {
        let phases: Vec<String> = slots
            .slots
            .iter()
            .map(|slot| match slot.phase {
                SpellPhase::Ready => format!("{}:ready", slot.spec.id),
                SpellPhase::Active { remaining } => {
                    format!("{}:active({:.2})", slot.spec.id, remaining)
                }
                SpellPhase::Cooldown { remaining } => {
                    format!("{}:cooldown({:.2})", slot.spec.id, remaining)
                }
            })
            .collect();

        info!(
            "pos=({:.2},{:.2},{:.2}) speed={:.2} grounded={} aiming={} slot={:?} [{}]",
            transform.translation.x,
            transform.translation.y,
            transform.translation.z,
            state.speed,
            state.grounded,
            state.aiming,
            slots.current,
            phases.join(", ")
        );
    }
}
