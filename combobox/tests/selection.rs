use combobox::selection::{SelectionMode, SelectionSet};

fn set(values: &[&str]) -> SelectionSet {
    values.iter().copied().collect()
}

#[test]
fn test_present_value_is_removed_in_either_mode() {
    for mode in [SelectionMode::Single, SelectionMode::Multiple] {
        let next = set(&["a", "b"]).committed("a", mode);
        assert_eq!(next.values(), ["b"]);
    }
}

#[test]
fn test_single_replaces() {
    for existing in [&[][..], &["a"][..], &["a", "b"][..]] {
        let next = set(existing).committed("c", SelectionMode::Single);
        assert_eq!(next.values(), ["c"]);
    }
}

#[test]
fn test_multiple_appends() {
    let next = set(&["a", "b"]).committed("c", SelectionMode::Multiple);
    assert_eq!(next.values(), ["a", "b", "c"]);
}

#[test]
fn test_multiple_toggle_sequence() {
    let selection = set(&["A"]);
    let selection = selection.committed("B", SelectionMode::Multiple);
    assert_eq!(selection.values(), ["A", "B"]);
    let selection = selection.committed("A", SelectionMode::Multiple);
    assert_eq!(selection.values(), ["B"]);
}

#[test]
fn test_single_toggle_off_empties() {
    let next = set(&["a"]).committed("a", SelectionMode::Single);
    assert!(next.is_empty());
}

#[test]
fn test_accessors() {
    let selection = set(&["x", "y"]);
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.first(), Some("x"));
    assert!(selection.contains("y"));
    assert!(!selection.contains("z"));
    let collected: Vec<&String> = (&selection).into_iter().collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(selection.values(), ["x", "y"]);
}
