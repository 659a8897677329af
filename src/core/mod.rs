//! Core domain: simulation states, tick ordering, and authority gating.

mod resources;

pub use resources::{CueRng, SimConfig};

use bevy::prelude::*;

use crate::content::{ContentRegistry, SimDefaults};

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SimState {
    #[default]
    Boot,
    Run,
}

/// Per-tick simulation stages for one character. Later sets depend on earlier
/// ones' outputs within the same tick (ability use reads the aim ray target,
/// the camera consumes this tick's facing).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Locomotion,
    Abilities,
    Effects,
    Camera,
}

/// Marker for characters this participant is authoritative over. Every
/// simulation system filters on it; replicas spawned by an external
/// replication layer never carry it and are never simulated here.
#[derive(Component, Debug)]
pub struct LocallyControlled;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SimState>()
            .init_resource::<SimConfig>()
            .init_resource::<CueRng>()
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Locomotion,
                    SimSet::Abilities,
                    SimSet::Effects,
                    SimSet::Camera,
                )
                    .chain(),
            )
            .add_systems(Update, advance_to_run.run_if(in_state(SimState::Boot)));
    }
}

/// Leaves Boot once content is available and seeds the cue rng from it.
fn advance_to_run(
    registry: Option<Res<ContentRegistry>>,
    defaults: Option<Res<SimDefaults>>,
    mut config: ResMut<SimConfig>,
    mut rng: ResMut<CueRng>,
    mut next: ResMut<NextState<SimState>>,
) {
    if registry.is_none() {
        return;
    }

    if let Some(defaults) = defaults {
        config.seed = defaults.rng_seed;
        rng.reseed(defaults.rng_seed);
    }

    info!("Content ready, entering Run (seed={})", config.seed);
    next.set(SimState::Run);
}
