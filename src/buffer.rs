use crate::editor::grapheme_len;
use crate::traits::TextBuffer;

/// A plain `String`-backed text field.
///
/// Hosts that already own a text widget implement [`TextBuffer`] on it
/// directly; this type is for hosts that don't, and for demos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    caret: usize,
    anchor: usize,
    focus: usize,
}

impl FieldBuffer {
    /// Creates a buffer with the caret at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = grapheme_len(&text);
        Self {
            text,
            caret: end,
            anchor: end,
            focus: end,
        }
    }

    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        let mut buf = Self::new(text);
        buf.caret = caret;
        buf.anchor = caret;
        buf.focus = caret;
        buf
    }

    /// Creates a buffer with a selection from `anchor` to `focus`.
    ///
    /// The caret follows the focus end, as it would after a drag.
    pub fn with_selection(text: impl Into<String>, anchor: usize, focus: usize) -> Self {
        let mut buf = Self::new(text);
        buf.anchor = anchor;
        buf.focus = focus;
        buf.caret = focus;
        buf
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.anchor, self.focus)
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.focus
    }
}

impl TextBuffer for FieldBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
    }

    fn selection_anchor(&self) -> usize {
        self.anchor
    }

    fn selection_focus(&self) -> usize {
        self.focus
    }

    fn set_selection(&mut self, anchor: usize, focus: usize) {
        self.anchor = anchor;
        self.focus = focus;
    }
}
