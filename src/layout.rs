//! Static keyboard configuration: the key table, the keys excluded from label
//! remapping, and the auto-select timing.
//!
//! Configurations are plain serde types and can be loaded from JSON:
//!
//! ```
//! use osk_mini::layout::KeyboardConfig;
//!
//! let config = KeyboardConfig::from_json(
//!     r#"{ "layout": { "keys": [ { "primary": "a" }, { "primary": "1", "secondary": "!" } ] } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.layout.keys.len(), 2);
//! assert_eq!(config.auto_select_delay_ms, 150);
//! ```

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::key::Key;

/// Delay before the first key is focused after the keyboard appears.
pub const DEFAULT_AUTO_SELECT_DELAY_MS: u64 = 150;

/// Key ids whose labels are never remapped by Shift or Caps Lock.
pub const DEFAULT_IGNORED_KEYS: &[&str] = &[
    "Shift",
    "Caps",
    "Enter",
    "Delete",
    "Back",
    "Space",
    "LeftArrow",
    "RightArrow",
    "<",
    ">",
];

/// One key in a layout. The id defaults to the primary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
}

impl KeySpec {
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            id: None,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.primary)
    }

    pub fn to_key(&self) -> Key {
        Key::with_id(self.id(), self.primary.as_str(), self.secondary.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub keys: Vec<KeySpec>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::qwerty()
    }
}

impl Layout {
    /// US QWERTY with a shifted-symbol number row and the function keys.
    pub fn qwerty() -> Self {
        const SHIFTED: &[(&str, &str)] = &[
            ("1", "!"),
            ("2", "@"),
            ("3", "#"),
            ("4", "$"),
            ("5", "%"),
            ("6", "^"),
            ("7", "&"),
            ("8", "*"),
            ("9", "("),
            ("0", ")"),
            ("-", "_"),
            ("=", "+"),
        ];
        const PUNCTUATION: &[(&str, &str)] = &[
            ("[", "{"),
            ("]", "}"),
            (";", ":"),
            ("'", "\""),
            (",", "<"),
            (".", ">"),
            ("/", "?"),
        ];
        const LETTERS: &str = "qwertyuiopasdfghjklzxcvbnm";
        const FUNCTION: &[&str] = &["Back", "Caps", "Enter", "Shift", "Delete", "Space", "<", ">"];

        let mut keys: Vec<KeySpec> = SHIFTED
            .iter()
            .map(|(p, s)| KeySpec::new(p, s))
            .collect();
        keys.extend(
            LETTERS
                .chars()
                .map(|c| KeySpec::new(c.encode_utf8(&mut [0; 4]), "")),
        );
        keys.extend(PUNCTUATION.iter().map(|(p, s)| KeySpec::new(p, s)));
        keys.extend(FUNCTION.iter().map(|name| KeySpec::new(name, "")));
        Self { keys }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Checks that every key has a primary value and a unique id.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for (index, spec) in self.keys.iter().enumerate() {
            if spec.primary.is_empty() {
                return Err(LayoutError::EmptyPrimary { index });
            }
            if !seen.insert(spec.id()) {
                return Err(LayoutError::DuplicateKey(spec.id().to_string()));
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.keys.iter().any(|spec| spec.id() == id)
    }

    pub fn to_keys(&self) -> Vec<Key> {
        self.keys.iter().map(KeySpec::to_key).collect()
    }
}

/// Everything the keyboard needs at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub layout: Layout,
    pub ignored_keys: Vec<String>,
    pub auto_select_delay_ms: u64,
    /// Key focused after the keyboard appears. `None` means the first key.
    pub initial_focus: Option<String>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            layout: Layout::qwerty(),
            ignored_keys: DEFAULT_IGNORED_KEYS.iter().map(|s| s.to_string()).collect(),
            auto_select_delay_ms: DEFAULT_AUTO_SELECT_DELAY_MS,
            initial_focus: None,
        }
    }
}

impl KeyboardConfig {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: KeyboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.layout.validate()?;
        if let Some(id) = &self.initial_focus
            && !self.layout.contains(id)
        {
            return Err(LayoutError::UnknownInitialFocus(id.clone()));
        }
        Ok(())
    }

    pub fn auto_select_delay(&self) -> Duration {
        Duration::from_millis(self.auto_select_delay_ms)
    }
}
