//! Hotkey context exposed to the frontend's input-binding layer.

use serde::Serialize;
use std::collections::BTreeMap;

/// Hotkey context name for this emulator.
pub const HOTKEY_CONTEXT: &str = "dosboxx";

/// Named actions bound to ordered physical key chords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotkeyMap {
    pub name: String,
    pub keys: BTreeMap<String, Vec<String>>,
}

impl HotkeyMap {
    pub fn chord(&self, action: &str) -> Option<&[String]> {
        self.keys.get(action).map(|keys| keys.as_slice())
    }
}

/// `exit` on Left Ctrl + F9.
pub fn hotkeys_context() -> HotkeyMap {
    let mut keys = BTreeMap::new();
    keys.insert(
        "exit".to_string(),
        vec!["KEY_LEFTCTRL".to_string(), "KEY_F9".to_string()],
    );
    HotkeyMap {
        name: HOTKEY_CONTEXT.to_string(),
        keys,
    }
}
