//! Movement domain: locomotion-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted on aim mode entry/exit. The spell scheduler mirrors the
/// telegraphed-spell visual from this.
#[derive(Debug)]
pub struct AimStateChanged {
    pub entity: Entity,
    pub aiming: bool,
}

impl Message for AimStateChanged {}

/// Emitted when a character touches ground after being airborne.
#[derive(Debug)]
pub struct Landed {
    pub entity: Entity,
    /// Downward speed at the moment of contact, meters per second.
    pub impact_speed: f32,
}

impl Message for Landed {}
