use osk_mini::traits::TextBuffer;
use ropey::Rope;

/// A rope-backed text field, as a host widget would hold one.
pub struct MockField {
    rope: Rope,
    caret: usize,
    anchor: usize,
    focus: usize,
}

impl MockField {
    pub fn at(text: &str, caret: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret,
            anchor: caret,
            focus: caret,
        }
    }

    pub fn end(text: &str) -> Self {
        let caret = osk_mini::editor::grapheme_len(text);
        Self::at(text, caret)
    }

    /// Selection from `anchor` to `focus`; the caret sits on the focus end.
    pub fn selected(text: &str, anchor: usize, focus: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: focus,
            anchor,
            focus,
        }
    }

    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.anchor, self.focus)
    }

    pub fn is_collapsed_at(&self, pos: usize) -> bool {
        self.caret == pos && self.anchor == pos && self.focus == pos
    }
}

impl TextBuffer for MockField {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: String) {
        self.rope = Rope::from_str(&text);
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
