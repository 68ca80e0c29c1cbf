//! Shift and Caps Lock state, and how it maps keys to text and labels.
//!
//! Shift is a one-shot modifier: the keyboard releases it after the next
//! inserted character. Caps Lock persists until toggled and always clears a
//! held Shift when toggled. Pressing Shift while Caps Lock is on is allowed and
//! inverts letter case for one character.

use crate::key::{Key, Modifiers};
use crate::types::{KeyLabels, ModifierMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    mods: Modifiers,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(mods: Modifiers) -> Self {
        Self { mods }
    }

    pub fn caps_lock_on(&self) -> bool {
        self.mods.contains(Modifiers::CAPS_LOCK)
    }

    pub fn shift_pressed(&self) -> bool {
        self.mods.contains(Modifiers::SHIFT)
    }

    pub fn mode(&self) -> ModifierMode {
        ModifierMode::from(self.mods)
    }

    pub fn toggle_shift(&mut self) {
        self.mods.toggle(Modifiers::SHIFT);
        log::debug!("shift toggled, mode={:?}", self.mode());
    }

    pub fn toggle_caps_lock(&mut self) {
        self.mods.toggle(Modifiers::CAPS_LOCK);
        self.mods.remove(Modifiers::SHIFT);
        log::debug!("caps lock toggled, mode={:?}", self.mode());
    }

    /// Releases a held one-shot Shift. Returns true if Shift was held.
    pub fn release_shift(&mut self) -> bool {
        if !self.shift_pressed() {
            return false;
        }
        self.mods.remove(Modifiers::SHIFT);
        log::debug!("shift released, mode={:?}", self.mode());
        true
    }

    pub fn reset(&mut self) {
        self.mods = Modifiers::empty();
    }

    /// The text pressing `key` inserts under the current modifiers.
    ///
    /// Special keys resolve to an empty string; they are dispatched to their
    /// own actions instead.
    pub fn resolve_char(&self, key: &Key) -> String {
        if key.is_special() {
            return String::new();
        }
        if self.shift_pressed() {
            if key.has_secondary() {
                return key.secondary.clone();
            }
            return self.shifted_primary(key);
        }
        self.folded_primary(key)
    }

    /// The labels to show on `key` under the current modifiers.
    ///
    /// With Shift held on a key that has a secondary value the two slots swap,
    /// so the glyph Shift would emit sits in the primary slot.
    pub fn resolve_labels(&self, key: &Key) -> KeyLabels {
        if key.is_special() {
            return KeyLabels {
                primary: key.primary.clone(),
                secondary: String::new(),
                secondary_visible: false,
            };
        }

        let (primary, secondary) = match (self.shift_pressed(), key.has_secondary()) {
            (true, true) => (key.secondary.clone(), self.folded_primary(key)),
            (true, false) => (self.shifted_primary(key), key.secondary.clone()),
            (false, _) => (self.folded_primary(key), key.secondary.clone()),
        };

        KeyLabels {
            primary,
            secondary,
            secondary_visible: !key.is_letter(),
        }
    }

    // Shift on a key with no secondary: invert letter case, leave the rest alone
    fn shifted_primary(&self, key: &Key) -> String {
        if !key.is_letter() {
            return key.primary.clone();
        }
        if self.caps_lock_on() {
            key.primary.to_lowercase()
        } else {
            key.primary.to_uppercase()
        }
    }

    fn folded_primary(&self, key: &Key) -> String {
        if self.caps_lock_on() {
            key.primary.to_uppercase()
        } else {
            key.primary.to_lowercase()
        }
    }
}
