//! Visual-effect manifest loading.
//!
//! Loads the VFX manifest JSON which maps effect handles used by content
//! definitions to the asset paths an external effect player resolves.

#![allow(dead_code)]

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resource containing all known visual-effect definitions.
#[derive(Resource, Default)]
pub struct VfxManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of effect handles to their definitions.
    pub effects: HashMap<String, VfxAssetDef>,
}

/// Definition of a single visual effect.
#[derive(Debug, Clone, Deserialize)]
pub struct VfxAssetDef {
    /// Path to the effect asset, relative to assets/.
    pub path: String,
    /// Whether the effect loops until stopped (charge visuals) or plays once
    /// and expires on its own (impacts).
    #[serde(default)]
    pub looping: bool,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    effects: HashMap<String, VfxAssetDef>,
}

impl VfxManifest {
    /// Load the manifest from a JSON file.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!("VFX manifest not found at {:?}, using empty manifest", path);
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read VFX manifest: {}", e);
                return;
            }
        };

        let manifest_json: ManifestJson = match serde_json::from_str(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse VFX manifest: {}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.effects = manifest_json.effects;

        info!(
            "Loaded VFX manifest v{} with {} effects",
            self.version,
            self.effects.len()
        );
    }

    /// Get an effect definition by handle.
    pub fn get(&self, handle: &str) -> Option<&VfxAssetDef> {
        self.effects.get(handle)
    }

    /// Check if an effect handle exists.
    pub fn contains(&self, handle: &str) -> bool {
        self.effects.contains_key(handle)
    }
}
