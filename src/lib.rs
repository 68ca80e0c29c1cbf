pub mod buffer;
pub mod editor;
pub mod engine;
pub mod error;
pub mod key;
pub mod layout;
pub mod modifiers;
pub mod timer;
pub mod traits;
pub mod types;

pub use crate::buffer::FieldBuffer;
pub use crate::engine::{Keyboard, KeyboardBuilder, KeyboardSnapshot};
pub use crate::error::LayoutError;
pub use crate::key::{Key, Modifiers, SpecialKey};
pub use crate::layout::{KeySpec, KeyboardConfig, Layout};
pub use crate::modifiers::ModifierState;
pub use crate::timer::DeferredSelect;
pub use crate::traits::{KeyboardHost, TextBuffer};
pub use crate::types::{
    Direction, FieldEvent, FieldVisual, FocusSource, FocusTarget, KeyLabels, KeyOutcome,
    ModifierMode,
};
