//! Spells domain: input resource and slot-selection quantization.

use bevy::prelude::*;

/// Per-tick spell intents.
#[derive(Resource, Debug, Default)]
pub struct SpellInput {
    pub use_spell: bool,
    /// Slot requested by this tick's directional selection, if any.
    pub select: Option<usize>,
}

/// Quantize a directional selection vector to a slot index. Only
/// axis-aligned selections count (up 0, down 1, left 2, right 3); a diagonal
/// or zero vector yields no change.
pub fn quantize_slot_select(selection: Vec2) -> Option<usize> {
    if selection.x == 0.0 && selection.y > 0.0 {
        Some(0)
    } else if selection.x == 0.0 && selection.y < 0.0 {
        Some(1)
    } else if selection.y == 0.0 && selection.x < 0.0 {
        Some(2)
    } else if selection.y == 0.0 && selection.x > 0.0 {
        Some(3)
    } else {
        None
    }
}
