use crate::key::Modifiers;

/// Labels to render on a key button.
///
/// Hosts draw `primary` in the main slot and `secondary` in the small corner
/// slot, hiding the corner slot when `secondary_visible` is false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyLabels {
    pub primary: String,
    pub secondary: String,
    pub secondary_visible: bool,
}

/// Caret movement direction for the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The combined modifier state, named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierMode {
    /// No modifiers.
    Normal,
    /// One-shot Shift held.
    ShiftOnly,
    /// Caps Lock on.
    CapsOnly,
    /// Shift pressed while Caps Lock is on. Lasts until the next character.
    CapsShifted,
}

impl From<Modifiers> for ModifierMode {
    fn from(mods: Modifiers) -> Self {
        match (
            mods.contains(Modifiers::CAPS_LOCK),
            mods.contains(Modifiers::SHIFT),
        ) {
            (false, false) => ModifierMode::Normal,
            (false, true) => ModifierMode::ShiftOnly,
            (true, false) => ModifierMode::CapsOnly,
            (true, true) => ModifierMode::CapsShifted,
        }
    }
}

/// Visual state requested for the target text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisual {
    Normal,
    Active,
}

/// How the target field was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSource {
    /// Directional navigation or gamepad. Shows the keyboard.
    Navigation,
    /// Mouse or touch. The user has a pointer, so the keyboard stays hidden.
    Pointer,
}

/// Something the host should move UI focus to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// The target text field.
    Field,
    /// A key button, by id.
    Key(String),
}

/// Focus events reported by the host's text field adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Selected(FocusSource),
    Deselected,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Text was inserted into the buffer.
    Inserted(String),
    /// The buffer was edited or the caret moved without inserting text.
    Edited,
    /// Shift or Caps Lock changed.
    ModifiersChanged,
    /// Enter was pressed and the field was released.
    Submitted,
    /// Nothing happened: keyboard inactive, unknown key or empty output.
    Ignored,
}
