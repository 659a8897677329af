//! Vfx domain: persistent effect instances and outbound effect commands.

mod manifest;

pub use manifest::{VfxAssetDef, VfxManifest};

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A persistent, re-playable effect instance owned by the simulation (one per
/// spell slot). One-shot effects are not instanced; they go out as `SpawnAt`.
#[derive(Component, Debug)]
pub struct VfxInstance {
    pub handle: String,
    pub playing: bool,
}

impl VfxInstance {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            playing: false,
        }
    }

    /// Flip the playing flag. Returns true if the state actually changed, so
    /// callers only emit commands on real transitions.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        if self.playing == playing {
            return false;
        }
        self.playing = playing;
        true
    }
}

/// Outbound effect commands, consumed by an external effect player.
#[derive(Debug, Clone)]
pub enum VfxCommand {
    Play {
        instance: Entity,
        handle: String,
    },
    Stop {
        instance: Entity,
        handle: String,
    },
    /// Fire-and-forget effect at a world position; `normal` orients surface
    /// impacts.
    SpawnAt {
        handle: String,
        position: Vec3,
        normal: Option<Vec3>,
    },
}

impl Message for VfxCommand {}

pub struct VfxPlugin;

impl Plugin for VfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VfxManifest>()
            .add_message::<VfxCommand>()
            .add_systems(Startup, load_vfx_manifest);
    }
}

fn load_vfx_manifest(mut manifest: ResMut<VfxManifest>) {
    manifest.load_from_file("assets/vfx_manifest.json");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_playing_reports_transitions_only() {
        let mut instance = VfxInstance::new("vfx_charge_dash");
        assert!(instance.set_playing(true));
        assert!(!instance.set_playing(true));
        assert!(instance.set_playing(false));
        assert!(!instance.set_playing(false));
    }
}
