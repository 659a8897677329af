//! Content domain: serde definitions for data-driven spells and casters.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Wrapper for RON files containing a list of definitions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// Classification used to pick the caster's reaction animation on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SpellClass {
    LightAttack,
    HeavyAttack,
    Buff,
}

/// Behavior variant of a spell. Adding a kind means adding a variant here and
/// its arm in `spells::kinds`; the slot scheduler never changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum SpellKindDef {
    /// Multiplies the caster's movement speed for the active window.
    Dash { speed_multiplier: f32 },
    /// Launches a projectile toward the aim target point.
    Fireball {
        projectile_speed: f32,
        projectile_radius: f32,
    },
    /// Instant beam that walks a trail visual to the hit point.
    Lightning {
        trail_duration: f32,
        trail_vfx: String,
    },
}

/// One equippable spell.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpellDef {
    pub id: String,
    pub name: String,
    pub class: SpellClass,
    pub kind: SpellKindDef,
    /// Seconds the spell stays active after use, before cooldown starts.
    pub active_time: f32,
    /// Seconds of cooldown after the active window ends.
    pub cooldown_time: f32,
    /// Idle/charge visual shown while the spell is the telegraphed selection.
    pub charge_vfx: String,
    /// Visual spawned where the spell lands (or at the caster for buffs).
    pub impact_vfx: String,
}

/// Locomotion tuning block carried by a caster definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionDef {
    pub base_speed: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub aim_speed: f32,
    pub rotation_smooth_time: f32,
    pub speed_change_rate: f32,
    pub jump_height: f32,
    pub gravity: f32,
    pub jump_timeout: f32,
    pub fall_timeout: f32,
    pub grounded_offset: f32,
    pub grounded_radius: f32,
    pub top_clamp: f32,
    pub bottom_clamp: f32,
    pub normal_sensitivity: f32,
    pub aim_sensitivity: f32,
}

/// A playable character archetype.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CasterDef {
    pub id: String,
    pub name: String,
    /// Equipped spell ids, slot order. At most four are used.
    pub spell_ids: Vec<String>,
    pub locomotion: LocomotionDef,
    /// Local offset spells are cast from (roughly the hand).
    pub cast_origin: [f32; 3],
    pub spawn: [f32; 3],
    /// Eye height the aim ray originates from.
    pub eye_height: f32,
}

/// Simulation-wide defaults loaded as a single struct.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct SimDefaults {
    /// One-shot settle delay after spawn before slot visuals are squelched
    /// and the default slot is selected.
    pub settle_delay: f32,
    pub rng_seed: u64,
    pub default_caster_id: String,
    pub audio: AudioDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioDefaults {
    /// Number of footstep clips the external audio player has to choose from.
    pub footstep_clip_count: u32,
    /// Meters of horizontal travel between footstep cues.
    pub stride_length: f32,
}

impl Default for SimDefaults {
    fn default() -> Self {
        Self {
            settle_delay: 0.5,
            rng_seed: 0,
            default_caster_id: "caster_adept".to_string(),
            audio: AudioDefaults {
                footstep_clip_count: 4,
                stride_length: 1.8,
            },
        }
    }
}
