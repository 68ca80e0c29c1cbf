//! Selection-aware editing of a host-owned [`TextBuffer`].
//!
//! Every operation normalizes the unordered anchor/focus pair the same way,
//! clamps offsets into the buffer, and leaves the selection collapsed onto the
//! caret. Nothing here can fail; the worst case is a no-op.

use unicode_segmentation::UnicodeSegmentation;

use crate::traits::TextBuffer;
use crate::types::Direction;

/// Inserts `chars` at the caret, replacing the selection if there is one.
pub fn insert<B: TextBuffer + ?Sized>(buf: &mut B, chars: &str) {
    if chars.is_empty() {
        return;
    }

    let mut text = buf.text();
    let len = grapheme_len(&text);
    let (start, end) = selection_range(buf, len);
    let at = if start != end {
        start
    } else {
        buf.caret().min(len)
    };
    let until = if start != end { end } else { at };

    let from = replace_graphemes(&mut text, at, until, chars);
    // Count in the edited text: a combining mark merges into the grapheme before it
    let caret = grapheme_len(&text[..from + chars.len()]);

    buf.set_text(text);
    buf.collapse_to(caret);
    log::trace!("insert {:?}, caret={}", chars, caret);
}

/// Deletes the selection, or the grapheme before the caret.
pub fn delete_backward<B: TextBuffer + ?Sized>(buf: &mut B) {
    let mut text = buf.text();
    let len = grapheme_len(&text);
    let (start, end) = selection_range(buf, len);

    let caret = if start != end {
        replace_graphemes(&mut text, start, end, "");
        buf.set_text(text);
        start
    } else {
        let caret = buf.caret().min(len);
        if caret > 0 {
            replace_graphemes(&mut text, caret - 1, caret, "");
            buf.set_text(text);
            caret - 1
        } else {
            caret
        }
    };

    buf.collapse_to(caret);
    log::trace!("delete backward, caret={}", caret);
}

/// Deletes the selection, or the grapheme at the caret. The caret stays put.
pub fn delete_forward<B: TextBuffer + ?Sized>(buf: &mut B) {
    let mut text = buf.text();
    let len = grapheme_len(&text);
    let (start, end) = selection_range(buf, len);

    let caret = if start != end {
        replace_graphemes(&mut text, start, end, "");
        buf.set_text(text);
        start
    } else {
        let caret = buf.caret().min(len);
        if caret < len {
            replace_graphemes(&mut text, caret, caret + 1, "");
            buf.set_text(text);
        }
        caret
    };

    buf.collapse_to(caret);
    log::trace!("delete forward, caret={}", caret);
}

/// Moves the caret one grapheme in `direction`.
///
/// With an active selection the caret lands on the selection start whichever
/// way the arrow points.
pub fn move_caret<B: TextBuffer + ?Sized>(buf: &mut B, direction: Direction) {
    let len = grapheme_len(&buf.text());
    let (start, end) = selection_range(buf, len);

    let caret = if start != end {
        start
    } else {
        buf.caret()
            .min(len)
            .saturating_add_signed(direction.step())
            .min(len)
    };

    buf.collapse_to(caret);
    log::trace!("move caret {:?}, caret={}", direction, caret);
}

/// The selection as an ordered `(start, end)` pair clamped to `[0, len]`.
pub fn selection_range<B: TextBuffer + ?Sized>(buf: &B, len: usize) -> (usize, usize) {
    let anchor = buf.selection_anchor().min(len);
    let focus = buf.selection_focus().min(len);
    (anchor.min(focus), anchor.max(focus))
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

// Byte offset of grapheme `idx`, or the end of the string
fn byte_offset(text: &str, idx: usize) -> usize {
    text.grapheme_indices(true)
        .nth(idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

// Returns the byte offset where `with` now starts
fn replace_graphemes(text: &mut String, start: usize, end: usize, with: &str) -> usize {
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    text.replace_range(from..to, with);
    from
}
