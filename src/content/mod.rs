//! Content domain: data-driven definitions loaded from assets/data/*.ron.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{
    AudioDefaults, CasterDef, LocomotionDef, SimDefaults, SpellClass, SpellDef, SpellKindDef,
};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Loads all content at startup. Load failures are logged and the simulation
/// proceeds on built-in defaults rather than aborting.
fn load_content(mut commands: Commands) {
    match load_all_content(Path::new("assets/data")) {
        Ok((registry, defaults)) => {
            let errors = validate_content(&registry);
            for error in &errors {
                error!("Content validation: {}", error);
            }
            if errors.is_empty() {
                info!("{}", registry.summary());
            } else {
                warn!("Content loaded with {} validation errors", errors.len());
            }
            commands.insert_resource(registry);
            commands.insert_resource(defaults);
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!("Content load failed, falling back to empty registry and defaults");
            commands.insert_resource(ContentRegistry::default());
            commands.insert_resource(SimDefaults::default());
        }
    }
}
