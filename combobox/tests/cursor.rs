use combobox::config::InstanceId;
use combobox::cursor::SelectionCursor;
use combobox::entry::{Item, NavigableEntry, build_entries};

fn entries(values: &[&str]) -> Vec<NavigableEntry> {
    let items: Vec<Item> = values.iter().map(|v| Item::from_value(*v)).collect();
    build_entries(&[], &items, &[], &InstanceId::from_seed("cb").unwrap())
}

fn active_count(cursor: &SelectionCursor) -> usize {
    cursor.highlights().active_ids().len()
}

#[test]
fn test_first_next_highlights_index_zero() {
    let list = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    let event = cursor.move_next(&list).unwrap();
    assert_eq!(event.previous, None);
    assert_eq!(event.current, 0);
    assert_eq!(cursor.highlighted().map(|e| e.label()), Some("a"));
}

#[test]
fn test_next_visits_every_index_once() {
    for len in 1..=6 {
        let values: Vec<String> = (0..len).map(|i| format!("v{i}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let list = entries(&refs);
        let mut cursor = SelectionCursor::new();

        let visited: Vec<usize> = (0..len)
            .map(|_| cursor.move_next(&list).unwrap().current)
            .collect();
        assert_eq!(visited, (0..len).collect::<Vec<_>>());
        assert_eq!(visited.iter().filter(|&&i| i == 0).count(), 1);

        // one more wraps back to the start
        assert_eq!(cursor.move_next(&list).unwrap().current, 0);
    }
}

#[test]
fn test_previous_from_nothing_highlights_last() {
    let list = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    assert_eq!(cursor.move_previous(&list).unwrap().current, 2);
}

#[test]
fn test_previous_wraps_from_first() {
    let list = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&list, 0);
    assert_eq!(cursor.move_previous(&list).unwrap().current, 2);
}

#[test]
fn test_previous_inverts_next() {
    let list = entries(&["a", "b", "c", "d"]);
    for start in 0..list.len() {
        let mut cursor = SelectionCursor::new();
        cursor.select_at_index(&list, start);
        let before = cursor.clone();
        cursor.move_next(&list);
        cursor.move_previous(&list);
        assert_eq!(cursor, before);
    }
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let list = entries(&[]);
    let mut cursor = SelectionCursor::new();
    assert!(cursor.move_next(&list).is_none());
    assert!(cursor.move_previous(&list).is_none());
    assert!(cursor.select_at_index(&list, 0).is_none());
    assert!(cursor.cursor().is_none());
}

#[test]
fn test_select_out_of_range_is_noop() {
    let list = entries(&["a"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&list, 0);
    assert!(cursor.select_at_index(&list, 5).is_none());
    assert_eq!(cursor.index(), Some(0));
}

#[test]
fn test_at_most_one_active() {
    let list = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.move_next(&list);
    cursor.move_next(&list);
    cursor.move_previous(&list);
    cursor.move_previous(&list);
    cursor.select_at_index(&list, 2);
    assert_eq!(active_count(&cursor), 1);
    assert!(cursor.is_active(&list[2].id));
    assert!(!cursor.is_active(&list[0].id));
}

#[test]
fn test_cursor_entry_matches_index() {
    let list = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&list, 1);
    assert_eq!(cursor.highlighted(), Some(&list[1]));
}

#[test]
fn test_reset_clears_everything() {
    let list = entries(&["a", "b"]);
    let mut cursor = SelectionCursor::new();
    cursor.move_next(&list);
    assert!(cursor.reset());
    assert!(cursor.cursor().is_none());
    assert_eq!(active_count(&cursor), 0);
    assert!(!cursor.reset());
}

#[test]
fn test_reindex_follows_moved_item() {
    let old = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&old, 1);

    let new = entries(&["x", "y", "c", "b"]);
    let next = cursor.reindex(&new);

    assert_eq!(next.index(), Some(3));
    assert_eq!(next.highlighted().map(|e| e.label()), Some("b"));
    assert_eq!(next.highlights().active_ids(), [new[3].id.as_str()]);
}

#[test]
fn test_reindex_clears_when_out_of_bounds() {
    let old = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&old, 2);

    let next = cursor.reindex(&entries(&["x"]));
    assert!(next.cursor().is_none());
    assert_eq!(active_count(&next), 0);
}

#[test]
fn test_reindex_keeps_index_when_item_gone_but_in_bounds() {
    let old = entries(&["a", "b", "c"]);
    let mut cursor = SelectionCursor::new();
    cursor.select_at_index(&old, 1);

    let next = cursor.reindex(&entries(&["x", "y", "z"]));
    assert_eq!(next.index(), Some(1));
    assert_eq!(next.highlighted().map(|e| e.label()), Some("y"));
}

#[test]
fn test_reindex_without_highlight_stays_empty() {
    let cursor = SelectionCursor::new();
    assert!(cursor.reindex(&entries(&["a"])).cursor().is_none());
}
