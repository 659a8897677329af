//! ContentRegistry resource providing HashMap lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded content. O(1) lookup by id.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub spells: HashMap<String, SpellDef>,
    pub casters: HashMap<String, CasterDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Spells: {}\n\
             - Casters: {}",
            self.spells.len(),
            self.casters.len()
        )
    }
}
