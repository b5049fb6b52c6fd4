use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const KEY_LEFT_ARROW: u32 = 37;
pub const KEY_RIGHT_ARROW: u32 = 39;
pub const KEY_SPACE: u32 = 32;

/// Transport actions the player library understands by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportAction {
    Prev,
    Next,
    PlayPause,
}

/// Key code to transport action map handed to the player.
///
/// Serializes as an object keyed by the decimal key code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings(BTreeMap<u32, TransportAction>);

impl KeyBindings {
    /// Left arrow for previous, right arrow for next, space to toggle.
    pub fn standard() -> Self {
        Self(BTreeMap::from([
            (KEY_LEFT_ARROW, TransportAction::Prev),
            (KEY_RIGHT_ARROW, TransportAction::Next),
            (KEY_SPACE, TransportAction::PlayPause),
        ]))
    }

    pub fn action_for(&self, key_code: u32) -> Option<TransportAction> {
        self.0.get(&key_code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, TransportAction)> + '_ {
        self.0.iter().map(|(code, action)| (*code, *action))
    }
}

impl Serialize for KeyBindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // String keys so the JS side gets a plain object, not a Map.
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, action) in &self.0 {
            map.serialize_entry(&code.to_string(), action)?;
        }
        map.end()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_map_has_exactly_three_entries() {
        let bindings = KeyBindings::standard();
        assert_eq!(bindings.iter().count(), 3);
        assert_eq!(bindings.action_for(37), Some(TransportAction::Prev));
        assert_eq!(bindings.action_for(39), Some(TransportAction::Next));
        assert_eq!(bindings.action_for(32), Some(TransportAction::PlayPause));
        assert_eq!(bindings.action_for(38), None);
    }

    #[test]
    fn serializes_with_string_key_codes() {
        let json = serde_json::to_string(&KeyBindings::standard()).unwrap();
        assert_eq!(json, r#"{"32":"play_pause","37":"prev","39":"next"}"#);
    }
}
