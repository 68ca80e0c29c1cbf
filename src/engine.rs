use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::editor;
use crate::error::LayoutError;
use crate::key::{Key, SpecialKey};
use crate::layout::{DEFAULT_AUTO_SELECT_DELAY_MS, DEFAULT_IGNORED_KEYS, KeyboardConfig, Layout};
use crate::modifiers::ModifierState;
use crate::timer::DeferredSelect;
use crate::traits::{KeyboardHost, TextBuffer};
use crate::types::{
    Direction, FieldEvent, FieldVisual, FocusSource, FocusTarget, KeyOutcome, ModifierMode,
};

/// The on-screen keyboard controller.
///
/// One instance serves one text field at a time. The host passes the field's
/// buffer and its UI adapter into each call; the keyboard keeps only its own
/// modifier and focus state.
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: Vec<Key>,
    ignored: HashSet<String>,
    modifiers: ModifierState,
    active: bool,
    field_selected: bool,
    auto_select: DeferredSelect,
    auto_select_delay: Duration,
    initial_focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub mode: ModifierMode,
    pub active: bool,
    pub field_selected: bool,
    pub auto_select_pending: bool,
}

pub struct KeyboardBuilder {
    keys: Vec<Key>,
    ignored: HashSet<String>,
    auto_select_delay: Duration,
    initial_focus: Option<String>,
}

impl Default for KeyboardBuilder {
    fn default() -> Self {
        Self {
            keys: Layout::qwerty().to_keys(),
            ignored: DEFAULT_IGNORED_KEYS.iter().map(|s| s.to_string()).collect(),
            auto_select_delay: Duration::from_millis(DEFAULT_AUTO_SELECT_DELAY_MS),
            initial_focus: None,
        }
    }
}

impl KeyboardBuilder {
    /// Starts from a validated configuration.
    pub fn from_config(config: &KeyboardConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            keys: config.layout.to_keys(),
            ignored: config.ignored_keys.iter().cloned().collect(),
            auto_select_delay: config.auto_select_delay(),
            initial_focus: config.initial_focus.clone(),
        })
    }

    pub fn keys(mut self, keys: Vec<Key>) -> Self {
        self.keys = keys;
        self
    }

    pub fn ignored_keys<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn auto_select_delay(mut self, delay: Duration) -> Self {
        self.auto_select_delay = delay;
        self
    }

    pub fn initial_focus(mut self, key_id: impl Into<String>) -> Self {
        self.initial_focus = Some(key_id.into());
        self
    }

    pub fn build(self) -> Keyboard {
        Keyboard {
            keys: self.keys,
            ignored: self.ignored,
            modifiers: ModifierState::new(),
            active: false,
            field_selected: false,
            auto_select: DeferredSelect::new(),
            auto_select_delay: self.auto_select_delay,
            initial_focus: self.initial_focus,
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        KeyboardBuilder::default().build()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> KeyboardBuilder {
        KeyboardBuilder::default()
    }

    pub fn from_config(config: &KeyboardConfig) -> Result<Self, LayoutError> {
        Ok(KeyboardBuilder::from_config(config)?.build())
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            mode: self.modifiers.mode(),
            active: self.active,
            field_selected: self.field_selected,
            auto_select_pending: self.auto_select.is_pending(),
        }
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn key(&self, id: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.id == id)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Shows the keyboard with fresh modifiers and renders every key.
    pub fn show<H: KeyboardHost>(&mut self, host: &mut H) {
        self.modifiers.reset();
        self.active = true;
        host.set_keyboard_visible(true);
        // Ignored keys get their only render here, under fresh modifiers
        for key in &self.keys {
            host.render_label(&key.id, &self.modifiers.resolve_labels(key));
        }
        log::debug!("keyboard shown");
    }

    pub fn hide<H: KeyboardHost>(&mut self, host: &mut H) {
        self.active = false;
        self.auto_select.cancel();
        host.set_keyboard_visible(false);
        log::debug!("keyboard hidden");
    }

    /// Pushes labels for every remappable key under the current modifiers.
    pub fn refresh_labels<H: KeyboardHost>(&self, host: &mut H) {
        for key in self.keys.iter().filter(|k| !self.ignored.contains(&k.id)) {
            host.render_label(&key.id, &self.modifiers.resolve_labels(key));
        }
    }

    pub fn toggle_shift<H: KeyboardHost>(&mut self, host: &mut H) {
        self.modifiers.toggle_shift();
        self.refresh_labels(host);
    }

    pub fn toggle_caps_lock<H: KeyboardHost>(&mut self, host: &mut H) {
        self.modifiers.toggle_caps_lock();
        self.refresh_labels(host);
    }

    /// Handles activation of the key button `key_id`.
    pub fn press<B, H>(&mut self, key_id: &str, buf: &mut B, host: &mut H) -> KeyOutcome
    where
        B: TextBuffer + ?Sized,
        H: KeyboardHost,
    {
        if !self.active {
            return KeyOutcome::Ignored;
        }
        let Some(key) = self.key(key_id) else {
            log::warn!("unknown key id {:?}", key_id);
            return KeyOutcome::Ignored;
        };

        if let Some(special) = key.special {
            return self.press_special(special, buf, host);
        }

        let text = self.modifiers.resolve_char(key);
        if text.is_empty() {
            return KeyOutcome::Ignored;
        }
        editor::insert(buf, &text);
        if self.modifiers.release_shift() {
            self.refresh_labels(host);
        }
        KeyOutcome::Inserted(text)
    }

    fn press_special<B, H>(&mut self, special: SpecialKey, buf: &mut B, host: &mut H) -> KeyOutcome
    where
        B: TextBuffer + ?Sized,
        H: KeyboardHost,
    {
        match special {
            SpecialKey::Back => editor::delete_backward(buf),
            SpecialKey::Delete => editor::delete_forward(buf),
            SpecialKey::Left => editor::move_caret(buf, Direction::Left),
            SpecialKey::Right => editor::move_caret(buf, Direction::Right),
            SpecialKey::Space => {
                editor::insert(buf, " ");
                return KeyOutcome::Inserted(" ".to_string());
            }
            SpecialKey::Shift => {
                self.toggle_shift(host);
                return KeyOutcome::ModifiersChanged;
            }
            SpecialKey::Caps => {
                self.toggle_caps_lock(host);
                return KeyOutcome::ModifiersChanged;
            }
            SpecialKey::Enter => {
                self.deselect_field(host);
                return KeyOutcome::Submitted;
            }
        }
        KeyOutcome::Edited
    }

    /// Reacts to the host's field adapter selecting or releasing the field.
    pub fn handle_field_event<H: KeyboardHost>(
        &mut self,
        event: FieldEvent,
        host: &mut H,
        now: Instant,
    ) {
        match event {
            FieldEvent::Selected(FocusSource::Navigation) => {
                self.field_selected = true;
                host.set_field_editable(true);
                host.set_field_visual(FieldVisual::Active);
                self.show(host);
                if let Some(target) = self.initial_focus_target() {
                    self.auto_select.schedule(now, self.auto_select_delay, target);
                }
                log::debug!("field selected via navigation");
            }
            FieldEvent::Selected(FocusSource::Pointer) => {
                if self.field_selected {
                    return;
                }
                self.field_selected = true;
                host.set_field_editable(true);
                host.set_field_visual(FieldVisual::Active);
                host.request_focus(FocusTarget::Field);
                log::debug!("field selected via pointer, keyboard suppressed");
            }
            FieldEvent::Deselected => self.deselect_field(host),
        }
    }

    /// Fires the deferred first-key focus once it is due.
    ///
    /// Does nothing if the field was released or the keyboard hidden in the
    /// meantime.
    pub fn tick<H: KeyboardHost>(&mut self, now: Instant, host: &mut H) {
        if let Some(target) = self.auto_select.poll(now)
            && self.active
            && self.field_selected
        {
            log::debug!("auto-select {:?}", target);
            host.request_focus(target);
        }
    }

    fn deselect_field<H: KeyboardHost>(&mut self, host: &mut H) {
        self.hide(host);
        self.field_selected = false;
        host.set_field_editable(false);
        host.set_field_visual(FieldVisual::Normal);
        // Hand navigation focus back to the field itself
        host.request_focus(FocusTarget::Field);
        log::debug!("field deselected");
    }

    fn initial_focus_target(&self) -> Option<FocusTarget> {
        let id = match &self.initial_focus {
            Some(id) => self.key(id).map(|k| k.id.clone()),
            None => self.keys.first().map(|k| k.id.clone()),
        };
        if id.is_none() {
            log::warn!("no key to focus after showing the keyboard");
        }
        id.map(FocusTarget::Key)
    }
}
