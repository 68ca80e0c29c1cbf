use osk_mini::key::is_single_letter;
use osk_mini::{Key, KeyLabels, ModifierMode, ModifierState, Modifiers, SpecialKey};

fn state(caps: bool, shift: bool) -> ModifierState {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::CAPS_LOCK, caps);
    mods.set(Modifiers::SHIFT, shift);
    ModifierState::from_flags(mods)
}

fn labels(primary: &str, secondary: &str, visible: bool) -> KeyLabels {
    KeyLabels {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        secondary_visible: visible,
    }
}

#[test]
fn caps_toggle_always_clears_shift() {
    for (caps, shift) in [(false, false), (false, true), (true, false), (true, true)] {
        let mut s = state(caps, shift);
        s.toggle_caps_lock();
        assert!(!s.shift_pressed(), "caps={caps} shift={shift}");
        assert_eq!(s.caps_lock_on(), !caps);
    }
}

#[test]
fn shift_toggle_leaves_caps_alone() {
    let mut s = state(true, false);
    s.toggle_shift();
    assert!(s.caps_lock_on());
    assert!(s.shift_pressed());
    s.toggle_shift();
    assert!(s.caps_lock_on());
    assert!(!s.shift_pressed());
}

#[test]
fn release_shift_reports_change() {
    let mut s = state(false, true);
    assert!(s.release_shift());
    assert!(!s.shift_pressed());
    assert!(!s.release_shift());
}

#[test]
fn modes_follow_transitions() {
    let mut s = ModifierState::new();
    assert_eq!(s.mode(), ModifierMode::Normal);
    s.toggle_shift();
    assert_eq!(s.mode(), ModifierMode::ShiftOnly);
    s.toggle_caps_lock();
    assert_eq!(s.mode(), ModifierMode::CapsOnly);
    s.toggle_shift();
    assert_eq!(s.mode(), ModifierMode::CapsShifted);
    s.release_shift();
    assert_eq!(s.mode(), ModifierMode::CapsOnly);
    s.reset();
    assert_eq!(s.mode(), ModifierMode::Normal);
}

#[test]
fn letter_resolution_in_every_mode() {
    let a = Key::new("a", "");
    assert_eq!(state(false, false).resolve_char(&a), "a");
    assert_eq!(state(true, false).resolve_char(&a), "A");
    assert_eq!(state(false, true).resolve_char(&a), "A");
    // Shift inverts Caps Lock
    assert_eq!(state(true, true).resolve_char(&a), "a");
}

#[test]
fn uppercase_primary_is_folded_without_shift() {
    let key = Key::new("Q", "");
    assert_eq!(state(false, false).resolve_char(&key), "q");
    assert_eq!(state(true, false).resolve_char(&key), "Q");
}

#[test]
fn shift_selects_secondary_regardless_of_caps() {
    let one = Key::new("1", "!");
    assert_eq!(state(false, true).resolve_char(&one), "!");
    assert_eq!(state(true, true).resolve_char(&one), "!");
}

#[test]
fn case_fold_is_identity_on_non_letters() {
    for primary in ["1", "-", ";", "/"] {
        let key = Key::new(primary, "");
        assert_eq!(state(false, false).resolve_char(&key), primary);
        assert_eq!(state(true, false).resolve_char(&key), primary);
        // Shift with no secondary leaves non-letters unchanged
        assert_eq!(state(false, true).resolve_char(&key), primary);
    }
}

#[test]
fn multi_char_primary_is_folded_but_not_shifted() {
    let key = Key::new(".com", "");
    assert_eq!(state(true, false).resolve_char(&key), ".COM");
    assert_eq!(state(false, true).resolve_char(&key), ".com");
}

#[test]
fn special_keys_resolve_to_nothing() {
    for name in ["Back", "Enter", "Delete", "Caps", "Space", "<", ">", "Shift"] {
        let key = Key::new(name, "");
        assert!(key.is_special());
        assert_eq!(state(false, true).resolve_char(&key), "");
        assert_eq!(state(true, false).resolve_char(&key), "");
    }
}

#[test]
fn letter_labels_hide_secondary() {
    let a = Key::new("a", "");
    assert_eq!(state(false, false).resolve_labels(&a), labels("a", "", false));
    assert_eq!(state(true, false).resolve_labels(&a), labels("A", "", false));
    assert_eq!(state(false, true).resolve_labels(&a), labels("A", "", false));
    assert_eq!(state(true, true).resolve_labels(&a), labels("a", "", false));
}

#[test]
fn shift_swaps_labels_on_keys_with_secondary() {
    let one = Key::new("1", "!");
    assert_eq!(state(false, false).resolve_labels(&one), labels("1", "!", true));
    assert_eq!(state(false, true).resolve_labels(&one), labels("!", "1", true));
    assert_eq!(state(true, true).resolve_labels(&one), labels("!", "1", true));
}

#[test]
fn special_labels_are_static() {
    let back = Key::new("Back", "");
    for (caps, shift) in [(false, false), (false, true), (true, false), (true, true)] {
        assert_eq!(
            state(caps, shift).resolve_labels(&back),
            labels("Back", "", false)
        );
    }
}

#[test]
fn primary_label_matches_emitted_text_for_plain_keys() {
    let keys = [Key::new("a", ""), Key::new("z", ""), Key::new("-", "")];
    for (caps, shift) in [(false, false), (false, true), (true, false), (true, true)] {
        let s = state(caps, shift);
        for key in &keys {
            assert_eq!(s.resolve_labels(key).primary, s.resolve_char(key));
        }
    }
}

#[test]
fn special_key_names_are_case_insensitive() {
    assert_eq!(SpecialKey::from_name("ENTER"), Some(SpecialKey::Enter));
    assert_eq!(SpecialKey::from_name("back"), Some(SpecialKey::Back));
    assert_eq!(SpecialKey::from_name("<"), Some(SpecialKey::Left));
    assert_eq!(SpecialKey::from_name("RightArrow"), Some(SpecialKey::Right));
    assert_eq!(SpecialKey::from_name("a"), None);
}

#[test]
fn single_letter_classification() {
    assert!(is_single_letter("a"));
    assert!(is_single_letter("É"));
    assert!(!is_single_letter("ab"));
    assert!(!is_single_letter("1"));
    assert!(!is_single_letter(""));
}
