//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (item list, layout, camera, spring coefficients,
//! particle effects, keybindings) are consolidated here. Options serialize
//! to/from TOML for presets and export a JSON schema for host options UIs.

mod camera;
mod effects;
mod keybindings;
mod showcase;
mod springs;

use std::path::Path;

pub use camera::CameraOptions;
pub use effects::{EffectsOptions, FieldOptions};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use showcase::{ItemOptions, ShowcaseOptions};
pub use springs::SpringsOptions;

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Item list and carousel layout/interaction parameters.
    pub showcase: ShowcaseOptions,
    /// Camera projection and turntable parameters.
    pub camera: CameraOptions,
    /// Spring coefficients per channel class.
    pub springs: SpringsOptions,
    /// Decorative particle field parameters.
    pub effects: EffectsOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Validate every section. The engine constructor calls this; hosts
    /// loading presets may call it early for better error locality.
    pub fn validate(&self) -> Result<(), VitrineError> {
        self.showcase.validate()?;
        self.camera.validate()?;
        self.springs.validate()?;
        self.effects.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
