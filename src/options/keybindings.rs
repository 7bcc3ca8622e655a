use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Serializable tag for the keyboard actions that can be bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
enum KeyActionTag {
    /// Cycle the selection forward.
    NextItem,
    /// Cycle the selection backward.
    PreviousItem,
    /// Dismiss the current selection.
    CloseSelection,
}

impl KeyActionTag {
    fn to_action(self) -> KeyAction {
        match self {
            Self::NextItem => KeyAction::NextItem,
            Self::PreviousItem => KeyAction::PreviousItem,
            Self::CloseSelection => KeyAction::CloseSelection,
        }
    }
}

/// Maps physical key strings to navigation actions.
///
/// Key strings use the `KeyCode` debug format: `"ArrowRight"`, `"Escape"`,
/// etc. Only discrete navigation actions are bindable; pointer intents are
/// produced by hit-testing, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Forward map: key string → action tag.
    bindings: HashMap<String, KeyActionTag>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowRight".into(), KeyActionTag::NextItem),
            ("ArrowLeft".into(), KeyActionTag::PreviousItem),
            ("Escape".into(), KeyActionTag::CloseSelection),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).map(|tag| tag.to_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let bindings = KeybindingOptions::default();
        assert_eq!(bindings.lookup("ArrowRight"), Some(KeyAction::NextItem));
        assert_eq!(
            bindings.lookup("ArrowLeft"),
            Some(KeyAction::PreviousItem)
        );
        assert_eq!(
            bindings.lookup("Escape"),
            Some(KeyAction::CloseSelection)
        );
        assert_eq!(bindings.lookup("Space"), None);
    }

    #[test]
    fn bindings_round_trip_through_toml() {
        let bindings = KeybindingOptions::default();
        let toml_str = toml::to_string(&bindings).unwrap();
        let parsed: KeybindingOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(bindings, parsed);
    }
}
