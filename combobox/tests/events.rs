use combobox::prelude::*;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn open_combobox(values: &[&str]) -> Combobox {
    let config = ComboboxConfig::new().instance_id(InstanceId::from_seed("cb").unwrap());
    let items = values.iter().map(|v| Item::from_value(*v));
    let mut combobox = Combobox::with_inputs(config, ComboboxInputs::new().items(items));
    combobox.handle(ComboboxInput::Focus);
    combobox
}

fn key(key: Key) -> ComboboxInput {
    ComboboxInput::Key(KeyCombo::key(key))
}

#[test]
fn test_arrows_move_cursor() {
    let mut combobox = open_combobox(&["a", "b"]);
    let events = combobox.handle(key(Key::Down));
    assert_eq!(events.result, EventResult::Consumed);
    assert_eq!(events.cursor_move.unwrap().current, 0);
    assert_eq!(combobox.handle(key(Key::Up)).cursor_move.unwrap().current, 1);
}

#[test]
fn test_arrows_on_empty_list_are_ignored() {
    let mut combobox = open_combobox(&[]);
    let events = combobox.handle(key(Key::Down));
    assert_eq!(events.result, EventResult::Ignored);
    assert!(events.cursor_move.is_none());
}

#[test]
fn test_escape_closes_without_clearing_cursor() {
    let mut combobox = open_combobox(&["a", "b"]);
    combobox.handle(key(Key::Down));

    let events = combobox.handle(key(Key::Escape));
    assert_eq!(events.visibility, Some(VisibilityEvent::Closed));
    assert!(events.result.is_handled());
    assert!(!combobox.is_open());
    assert_eq!(combobox.cursor().index(), Some(0));

    // already closed
    assert!(!combobox.handle(key(Key::Escape)).result.is_handled());
}

#[test]
fn test_enter_while_closed_is_ignored() {
    let mut combobox = open_combobox(&["a"]);
    combobox.handle(key(Key::Down));
    combobox.handle(key(Key::Escape));

    let events = combobox.handle(key(Key::Enter));
    assert!(events.select.is_none());
    assert!(!events.prevent_default);
    assert_eq!(events.result, EventResult::Ignored);
}

#[test]
fn test_enter_without_highlight_is_ignored() {
    let mut combobox = open_combobox(&["a"]);
    let events = combobox.handle(key(Key::Enter));
    assert!(events.select.is_none());
    assert!(combobox.is_open());
}

#[test]
fn test_blur_closes_and_clears_cursor() {
    let mut combobox = open_combobox(&["a", "b"]);
    combobox.handle(key(Key::Down));

    let events = combobox.handle(ComboboxInput::Blur);
    assert_eq!(events.visibility, Some(VisibilityEvent::Closed));
    assert!(combobox.cursor().is_none());
    assert!(!combobox.visibility().was_open_before_empty());
}

#[test]
fn test_blur_on_closed_panel_reports_cleared_highlight() {
    let mut combobox = open_combobox(&["a", "b"]);
    combobox.handle(key(Key::Escape));
    combobox.handle(key(Key::Down));
    assert_eq!(combobox.cursor().index(), Some(0));

    let events = combobox.handle(ComboboxInput::Blur);
    assert_eq!(events.visibility, None);
    assert!(events.result.is_handled());
    assert!(combobox.cursor().is_none());

    // nothing left to clear
    assert!(!combobox.handle(ComboboxInput::Blur).result.is_handled());
}

#[test]
fn test_activator_click_opens_but_does_not_close() {
    let mut combobox = open_combobox(&["a"]);
    combobox.handle(key(Key::Escape));

    let events = combobox.handle(ComboboxInput::ActivatorClick);
    assert_eq!(events.visibility, Some(VisibilityEvent::Opened));
    let events = combobox.handle(ComboboxInput::ActivatorClick);
    assert_eq!(events.visibility, None);
    assert!(combobox.is_open());
}

#[test]
fn test_hover_highlights() {
    let mut combobox = open_combobox(&["a", "b", "c"]);
    let events = combobox.handle(ComboboxInput::Hover(2));
    assert_eq!(events.cursor_move.unwrap().current, 2);
    assert!(combobox.is_active("cb-2"));

    let events = combobox.handle(ComboboxInput::Hover(9));
    assert!(events.cursor_move.is_none());
    assert_eq!(combobox.cursor().index(), Some(2));
}

#[test]
fn test_option_click_commits() {
    let mut combobox = open_combobox(&["a", "b"]);
    let events = combobox.handle(ComboboxInput::OptionClick(1));
    assert_eq!(events.select.unwrap().selection.values(), ["b"]);
    assert!(!events.prevent_default);
    assert!(!combobox.is_open());

    assert_eq!(
        combobox.handle(ComboboxInput::OptionClick(7)),
        ComboboxEvents::default()
    );
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut combobox = open_combobox(&["a"]);
    assert_eq!(
        combobox.handle(key(Key::Char('x'))),
        ComboboxEvents::default()
    );
}

#[test]
fn test_custom_bindings() {
    let config = ComboboxConfig::new()
        .bind(KeyCombo::key(Key::Char('n')).ctrl(), ComboboxAction::Next)
        .bind(KeyCombo::key(Key::Char('p')).ctrl(), ComboboxAction::Previous);
    let mut combobox = Combobox::with_inputs(
        config,
        ComboboxInputs::new().items([Item::from_value("a"), Item::from_value("b")]),
    );
    combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Char('n')).ctrl()));
    combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Char('n')).ctrl()));
    assert_eq!(combobox.cursor().index(), Some(1));
    combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Char('p')).ctrl()));
    assert_eq!(combobox.cursor().index(), Some(0));
}

#[test]
fn test_end_reached_is_forwarded() {
    let mut combobox = open_combobox(&["a"]);
    let events = combobox.handle(ComboboxInput::EndReached);
    assert!(events.end_reached);
    assert!(events.select.is_none());
}

#[test]
fn test_from_crossterm() {
    let press = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(ComboboxInput::from_crossterm(&press), Some(key(Key::Up)));

    let release = Event::Key(KeyEvent {
        code: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert_eq!(ComboboxInput::from_crossterm(&release), None);

    assert_eq!(
        ComboboxInput::from_crossterm(&Event::FocusGained),
        Some(ComboboxInput::Focus)
    );
    assert_eq!(
        ComboboxInput::from_crossterm(&Event::FocusLost),
        Some(ComboboxInput::Blur)
    );
    assert_eq!(ComboboxInput::from_crossterm(&Event::Resize(80, 24)), None);
}
