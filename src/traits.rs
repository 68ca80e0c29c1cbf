use crate::types::{FieldVisual, FocusTarget, KeyLabels};

/// The text field being edited, owned by the host.
///
/// All offsets are counted in extended grapheme clusters, not bytes or chars.
/// The anchor and focus of the selection are unordered; equal values mean no
/// selection.
pub trait TextBuffer {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);

    fn caret(&self) -> usize;
    fn set_caret(&mut self, caret: usize);

    fn selection_anchor(&self) -> usize;
    fn selection_focus(&self) -> usize;
    fn set_selection(&mut self, anchor: usize, focus: usize);

    // Place caret and both selection ends at one offset
    fn collapse_to(&mut self, pos: usize) {
        self.set_caret(pos);
        self.set_selection(pos, pos);
    }
}

/// Outbound calls into the host UI.
pub trait KeyboardHost {
    fn set_field_editable(&mut self, editable: bool);
    fn set_field_visual(&mut self, visual: FieldVisual);
    fn request_focus(&mut self, target: FocusTarget);
    fn set_keyboard_visible(&mut self, visible: bool);
    fn render_label(&mut self, key_id: &str, labels: &KeyLabels);
}
