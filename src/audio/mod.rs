//! Audio domain: fire-and-forget cue requests for an external audio player.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::content::SimDefaults;
use crate::core::{CueRng, LocallyControlled, SimSet, SimState};
use crate::movement::{Landed, LocomotionState, Player};

/// Outbound audio cue. Playback, mixing, and clip assets are external.
#[derive(Debug, Clone)]
pub enum AudioCue {
    Footstep {
        clip_index: u32,
        position: Vec3,
    },
    Landing {
        position: Vec3,
        /// Downward speed at contact, usable for volume scaling.
        impact_speed: f32,
    },
}

impl Message for AudioCue {}

/// Accumulated horizontal travel since the last footstep cue.
#[derive(Component, Debug, Default)]
pub struct FootstepState {
    pub distance_since_step: f32,
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AudioCue>().add_systems(
            Update,
            (emit_footstep_cues, emit_landing_cues)
                .in_set(SimSet::Effects)
                .run_if(in_state(SimState::Run)),
        );
    }
}

/// Emit a footstep cue every stride length of grounded travel, with a random
/// clip pick so repeated steps do not sound identical.
fn emit_footstep_cues(
    time: Res<Time>,
    defaults: Option<Res<SimDefaults>>,
    mut rng: ResMut<CueRng>,
    mut cues: MessageWriter<AudioCue>,
    mut query: Query<
        (&Transform, &LocomotionState, &mut FootstepState),
        (With<Player>, With<LocallyControlled>),
    >,
) {
    let Some(defaults) = defaults else {
        return;
    };
    let stride = defaults.audio.stride_length.max(0.1);
    let clip_count = defaults.audio.footstep_clip_count.max(1);
    let dt = time.delta_secs();

    for (transform, state, mut footsteps) in &mut query {
        if !state.grounded || state.speed <= 0.0 {
            footsteps.distance_since_step = 0.0;
            continue;
        }

        footsteps.distance_since_step += state.speed * dt;
        if footsteps.distance_since_step >= stride {
            footsteps.distance_since_step -= stride;
            cues.write(AudioCue::Footstep {
                clip_index: rng.0.random_range(0..clip_count),
                position: transform.translation,
            });
        }
    }
}

fn emit_landing_cues(
    mut landings: MessageReader<Landed>,
    mut cues: MessageWriter<AudioCue>,
    query: Query<&Transform, With<Player>>,
) {
    for landing in landings.read() {
        let Ok(transform) = query.get(landing.entity) else {
            continue;
        };
        cues.write(AudioCue::Landing {
            position: transform.translation,
            impact_speed: landing.impact_speed,
        });
    }
}
