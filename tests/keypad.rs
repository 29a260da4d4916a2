use scical::{
    EvalOptions, Evaluator,
    interpreter::function::core::{BUILTIN_NAMES, lookup},
    keypad::{KEY_LABELS, KEYS_PER_ROW, Key, Keypad},
};

fn press(labels: &str) -> Keypad {
    let mut keypad = Keypad::new();
    keypad.press_all(labels.split_whitespace().map(|label| {
                                                  Key::from_label(label).unwrap_or_else(|| {
                                                                            panic!("No key labelled '{label}'")
                                                                        })
                                              }));
    keypad
}

#[test]
fn layout_has_four_full_rows() {
    assert_eq!(KEY_LABELS.len(), 4 * KEYS_PER_ROW);
    for label in KEY_LABELS {
        assert!(Key::from_label(label).is_some(), "'{label}' is not a key");
    }
}

#[test]
fn control_keys_are_recognized() {
    assert_eq!(Key::from_label("C"), Some(Key::Clear));
    assert_eq!(Key::from_label("DEL"), Some(Key::Delete));
    assert_eq!(Key::from_label("="), Some(Key::Equals));
    assert_eq!(Key::from_label("pi"), Some(Key::Insert("pi")));
    assert_eq!(Key::from_label("sinh"), None);
    assert_eq!(Key::from_label(""), None);
}

#[test]
fn keys_append_their_labels() {
    assert_eq!(press("sqrt ( 1 6 )").display(), "sqrt(16)");
    assert_eq!(press("2 ^ pi").display(), "2^pi");
}

#[test]
fn equals_replaces_display_with_result() {
    assert_eq!(press("2 + 3 * 4 =").display(), "14.0");
    assert_eq!(press("sin ( 9 0 ) =").display(), "1.0");
    assert_eq!(press("1 / 0 =").display(), "Infinity");
}

#[test]
fn failed_evaluation_shows_error() {
    assert_eq!(press("2 + =").display(), "Error");
    assert_eq!(press("7 mod 2 =").display(), "Error");
    assert_eq!(press("=").display(), "Error");
}

#[test]
fn typing_continues_after_a_result() {
    assert_eq!(press("2 + 2 = * 3").display(), "4.0*3");
    assert_eq!(press("2 + 2 = * 3 =").display(), "12.0");
}

#[test]
fn delete_removes_last_character() {
    assert_eq!(press("1 2 3 DEL").display(), "12");
    assert_eq!(press("DEL DEL").display(), "");
    // Multi-character keys are removed one character at a time.
    assert_eq!(press("9 sqrt DEL").display(), "9sqr");
}

#[test]
fn clear_empties_display() {
    assert_eq!(press("1 + 2 C").display(), "");
    assert_eq!(press("1 + C 5 =").display(), "5.0");
}

#[test]
fn keypad_uses_its_evaluator() {
    let mut keypad = Keypad::with_evaluator(Evaluator::new(EvalOptions { max_depth: 2 }));
    keypad.press_all(["(", "(", "1", ")", ")", "="].map(|label| Key::from_label(label).unwrap()));
    assert_eq!(keypad.display(), "Error");
    assert_eq!(press("( ( 1 ) ) =").display(), "1.0");
}

#[test]
fn function_keys_resolve_to_builtins() {
    for label in KEY_LABELS.iter()
                           .filter(|label| label.chars().all(|c| c.is_ascii_lowercase()))
    {
        if *label == "mod" {
            assert!(lookup(label).is_none());
            continue;
        }
        assert!(BUILTIN_NAMES.contains(label), "'{label}' is not a builtin name");
        assert!(lookup(label).is_some(), "'{label}' does not resolve");
    }
    for name in BUILTIN_NAMES {
        assert!(KEY_LABELS.contains(name), "builtin '{name}' has no key");
    }
}
