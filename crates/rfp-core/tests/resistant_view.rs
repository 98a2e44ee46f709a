//! Integration tests for the fingerprint-resistant keyboard view.
//!
//! These tests drive the public API end to end: the global consensus table,
//! raw events as a platform would report them, and views under the fixed and
//! caller-based resistance policies.

use rfp_core::{
    CallerContext, CodeName, ConsensusTable, EventMessage, KeyboardEventInit, Modifiers,
    RawKeyboardEvent, Resistance, ResistancePolicy, ResistantKeyboardView, FALLBACK_KEY_CODE,
};

const CONTENT_SCRIPT: CallerContext = CallerContext {
    resist_fingerprinting_enabled: true,
    has_script_context: true,
    is_privileged_caller: false,
};

const CHROME_SCRIPT: CallerContext = CallerContext {
    resist_fingerprinting_enabled: true,
    has_script_context: true,
    is_privileged_caller: true,
};

fn view<'a, P: ResistancePolicy>(
    event: &'a RawKeyboardEvent,
    policy: &'a P,
) -> ResistantKeyboardView<'a, P> {
    ResistantKeyboardView::with_global_table(event, policy)
}

/// Every message kind a key event can carry, plus a non-key message.
const ALL_MESSAGES: [EventMessage; 11] = [
    EventMessage::KeyDown,
    EventMessage::KeyUp,
    EventMessage::KeyPress,
    EventMessage::BeforeKeyDown,
    EventMessage::AfterKeyDown,
    EventMessage::BeforeKeyUp,
    EventMessage::AfterKeyUp,
    EventMessage::KeyDownOnPlugin,
    EventMessage::KeyUpOnPlugin,
    EventMessage::AccessKeyNotFound,
    EventMessage::Other,
];

#[test]
fn test_german_euro_looks_like_altgr_e_to_content() {
    // Arrange: AltGr+E on a German layout, delivered as Alt only.
    let event = RawKeyboardEvent::new(EventMessage::KeyDown, "€")
        .with_code("KeyE")
        .with_key_code(69)
        .with_modifiers(Modifiers(Modifiers::ALT));

    // Act
    let v = view(&event, &CONTENT_SCRIPT);

    // Assert
    assert_eq!(v.code(), "KeyE");
    assert_eq!(v.key_code(), 69);
    assert!(v.alt_key());
    assert!(v.ctrl_key());
    assert!(!v.shift_key());
}

#[test]
fn test_privileged_caller_sees_true_values() {
    let event = RawKeyboardEvent::new(EventMessage::KeyDown, "€")
        .with_code("Digit5")
        .with_key_code(53)
        .with_location(2)
        .with_modifiers(Modifiers(Modifiers::ALT | Modifiers::SHIFT));

    let v = view(&event, &CHROME_SCRIPT);

    assert_eq!(v.code(), "Digit5");
    assert_eq!(v.key_code(), 53);
    assert_eq!(v.location(), 2);
    assert!(v.alt_key());
    assert!(!v.ctrl_key());
    assert!(v.shift_key());
}

#[test]
fn test_location_never_reveals_right_or_numpad() {
    for raw in 0..=8u32 {
        let event = RawKeyboardEvent::new(EventMessage::KeyDown, "Control").with_location(raw);
        let location = view(&event, &Resistance::Always).location();
        assert!(location == 0 || location == 1, "location {raw} resisted to {location}");
        assert_ne!(location, 2);
        assert_ne!(location, 3);
    }
}

#[test]
fn test_char_code_gating_ignores_resistance() {
    for message in ALL_MESSAGES {
        let event = RawKeyboardEvent::new(message, "a").with_char_code(97);
        let resisted = view(&event, &Resistance::Always).char_code();
        let passthrough = view(&event, &Resistance::Never).char_code();
        assert_eq!(resisted, passthrough, "{message:?}");

        let expected = match message {
            EventMessage::KeyPress | EventMessage::AccessKeyNotFound => 97,
            _ => 0,
        };
        assert_eq!(resisted, expected, "{message:?}");
    }
}

#[test]
fn test_key_code_is_zero_whenever_char_code_is_non_zero_under_resistance() {
    for message in ALL_MESSAGES {
        let event = RawKeyboardEvent::new(message, "a")
            .with_key_code(65)
            .with_char_code(97);
        let v = view(&event, &Resistance::Always);
        if v.char_code() != 0 {
            assert_eq!(v.key_code(), 0, "{message:?}");
        }
    }
}

#[test]
fn test_views_are_idempotent() {
    // Arrange
    let event = RawKeyboardEvent::new(EventMessage::KeyPress, "ß")
        .with_code("Minus")
        .with_key_code(63)
        .with_char_code(0xDF)
        .with_location(0)
        .with_modifiers(Modifiers(Modifiers::ALT | Modifiers::CTRL));

    for policy in [Resistance::Always, Resistance::Never] {
        // Act
        let first = view(&event, &policy).init_dict();
        let second = view(&event, &policy).init_dict();

        // Assert
        assert_eq!(first, second, "{policy:?}");
    }
}

#[test]
fn test_unknown_keys_fall_back_identically() {
    // Two different unmapped identifiers must be indistinguishable.
    let unmapped = ["\u{E000}", "Dead", "Unidentified", "\u{01E7}", "Clear"];
    let dicts: Vec<KeyboardEventInit> = unmapped
        .iter()
        .map(|k| {
            let event = RawKeyboardEvent::new(EventMessage::KeyDown, *k)
                .with_code("Quote")
                .with_key_code(222)
                .with_modifiers(Modifiers(Modifiers::SHIFT | Modifiers::ALT));
            view(&event, &Resistance::Always).init_dict()
        })
        .collect();

    for (key, d) in unmapped.iter().zip(&dicts) {
        assert_eq!(d.code, "IntlBackslash", "{key:?}");
        assert_eq!(d.key_code, FALLBACK_KEY_CODE, "{key:?}");
        assert!(!d.shift_key, "{key:?}");
        assert!(!d.alt_key, "{key:?}");
        assert!(!d.ctrl_key, "{key:?}");
    }
}

#[test]
fn test_us_qwerty_typist_is_unchanged_by_resistance() {
    // Arrange: a US-QWERTY keyboard reports exactly the consensus values.
    let typed: &[(&str, &str, u32, bool)] = &[
        ("a", "KeyA", 65, false),
        ("Q", "KeyQ", 81, true),
        ("1", "Digit1", 49, false),
        ("!", "Digit1", 49, true),
        ("/", "Slash", 191, false),
        ("?", "Slash", 191, true),
        (" ", "Space", 32, false),
        ("Enter", "Enter", 13, false),
        ("ArrowLeft", "ArrowLeft", 37, false),
        ("F5", "F5", 116, false),
    ];

    for &(key, code, key_code, shift) in typed {
        let event = RawKeyboardEvent::new(EventMessage::KeyDown, key)
            .with_code(code)
            .with_key_code(key_code)
            .with_modifiers(Modifiers::NONE.with(Modifiers::SHIFT, shift));

        // Act
        let resisted = view(&event, &Resistance::Always).init_dict();
        let passthrough = view(&event, &Resistance::Never).init_dict();

        // Assert
        assert_eq!(resisted, passthrough, "{key:?}");
    }
}

#[test]
fn test_every_table_entry_has_a_code_name_and_at_most_one_modifier() {
    let table = ConsensusTable::global();
    for (key, entry) in table.iter() {
        assert!(CodeName::ALL.contains(&entry.code), "{key:?}");
        assert!(
            !(entry.requires_shift && entry.requires_altgr),
            "{key:?} needs both Shift and AltGr"
        );
    }
}

#[test]
fn test_every_table_entry_resolves_through_the_view() {
    let table = ConsensusTable::global();
    for (key, entry) in table.iter() {
        let event = RawKeyboardEvent::new(EventMessage::KeyDown, key);
        let v = ResistantKeyboardView::new(&event, table, &true);
        assert_eq!(v.code(), entry.code.as_str(), "{key:?}");
        assert_eq!(v.key_code(), entry.key_code, "{key:?}");
        assert_eq!(v.shift_key(), entry.requires_shift, "{key:?}");
        assert_eq!(v.alt_key(), entry.requires_altgr, "{key:?}");
    }
}

#[test]
fn test_script_built_event_keeps_its_which() {
    // Arrange
    let init: KeyboardEventInit = serde_json::from_str(
        r#"{"key":"Enter","keyCode":13,"charCode":13,"which":13,"shiftKey":true}"#,
    )
    .expect("valid init dictionary");
    let event = RawKeyboardEvent::from_init("keypress", &init);

    // Act
    let v = view(&event, &CONTENT_SCRIPT);

    // Assert
    assert_eq!(v.char_code(), 13);
    assert_eq!(v.key_code(), 0);
    assert_eq!(v.which(), 13);
    assert!(!v.shift_key(), "Enter never needs Shift");
}

#[test]
fn test_keypress_which_for_return_and_backspace() {
    for (key, key_code) in [("Enter", 13u32), ("Backspace", 8)] {
        let event = RawKeyboardEvent::new(EventMessage::KeyPress, key).with_key_code(key_code);
        assert_eq!(view(&event, &CONTENT_SCRIPT).which(), key_code, "{key}");
    }
}

#[test]
fn test_modifier_state_reports_true_state_under_resistance() {
    let event = RawKeyboardEvent::new(EventMessage::KeyDown, "a")
        .with_modifiers(Modifiers(Modifiers::SHIFT | Modifiers::CAPS_LOCK));
    let v = view(&event, &CONTENT_SCRIPT);
    assert!(v.modifier_state("Shift"));
    assert!(v.modifier_state("CapsLock"));
    assert!(!v.modifier_state("NumLock"));
    assert!(!v.modifier_state("shift"));
    assert!(!v.shift_key());
}
