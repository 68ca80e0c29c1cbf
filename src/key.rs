/// Function keys that never go through character resolution.
///
/// Each one maps to a dedicated editing or modifier action on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    /// Delete the character before the caret.
    Back,
    /// Submit the field and dismiss the keyboard.
    Enter,
    /// Delete the character at the caret.
    Delete,
    /// Toggle Caps Lock.
    Caps,
    /// Insert a single space.
    Space,
    /// Move the caret one position left.
    Left,
    /// Move the caret one position right.
    Right,
    /// Toggle the one-shot Shift modifier.
    Shift,
}

impl SpecialKey {
    /// Classifies a key value by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "back" => SpecialKey::Back,
            "enter" => SpecialKey::Enter,
            "delete" => SpecialKey::Delete,
            "caps" => SpecialKey::Caps,
            "space" => SpecialKey::Space,
            "<" | "leftarrow" => SpecialKey::Left,
            ">" | "rightarrow" => SpecialKey::Right,
            "shift" => SpecialKey::Shift,
            _ => return None,
        };
        Some(key)
    }
}

bitflags::bitflags! {
    /// Modifier flags held by the on-screen keyboard.
    ///
    /// `SHIFT` is one-shot, `CAPS_LOCK` persists until toggled off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT     = 0b0001;
        const CAPS_LOCK = 0b0010;
    }
}

/// A single key button on the keyboard.
///
/// Character keys carry a primary value (e.g. `a`, `1`) and an optional
/// secondary value (e.g. `!` on the `1` key). An empty secondary value means
/// the key has no distinct shifted glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Identifier used by the host to address the button.
    pub id: String,
    /// Primary character value.
    pub primary: String,
    /// Secondary character value, or empty.
    pub secondary: String,
    /// Set for function keys.
    pub special: Option<SpecialKey>,
}

impl Key {
    /// Creates a key whose id is its primary value.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        Self::with_id(primary.clone(), primary, secondary)
    }

    pub fn with_id(
        id: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        let primary = primary.into();
        let special = SpecialKey::from_name(&primary);
        Self {
            id: id.into(),
            primary,
            secondary: secondary.into(),
            special,
        }
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    pub fn has_secondary(&self) -> bool {
        !self.secondary.is_empty()
    }

    /// True when the primary value is exactly one alphabetic character.
    pub fn is_letter(&self) -> bool {
        is_single_letter(&self.primary)
    }
}

/// True when `value` is exactly one alphabetic `char`.
pub fn is_single_letter(value: &str) -> bool {
    let mut chars = value.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}
