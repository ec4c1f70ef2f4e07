//! Keyboard/pointer highlight over the navigable list.
//!
//! The cursor is an index plus a copy of the entry it points at. Highlight
//! flags live in a side table keyed by entry id so the entries themselves
//! stay immutable. At most one id is flagged active at any time.

use std::collections::HashMap;

use crate::entry::NavigableEntry;

/// Event produced when the highlight moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMoveEvent {
    /// Previous cursor position (None if nothing was highlighted).
    pub previous: Option<usize>,
    /// Current cursor position.
    pub current: usize,
}

/// Current highlight position.
///
/// `index` and `entry` are either both set or both empty; an empty cursor
/// means "no highlight".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cursor {
    index: Option<usize>,
    entry: Option<NavigableEntry>,
}

impl Cursor {
    /// The empty cursor.
    pub const fn none() -> Self {
        Self {
            index: None,
            entry: None,
        }
    }

    fn at(index: usize, entry: NavigableEntry) -> Self {
        Self {
            index: Some(index),
            entry: Some(entry),
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn entry(&self) -> Option<&NavigableEntry> {
        self.entry.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.index.is_none()
    }
}

/// Highlight flags keyed by entry id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    flags: HashMap<String, bool>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an entry is flagged active.
    pub fn is_active(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Ids currently flagged active.
    pub fn active_ids(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|&(_, &active)| active)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    // Inactive ids are dropped rather than stored as false.
    fn set(&mut self, id: &str, active: bool) {
        if active {
            self.flags.insert(id.to_string(), true);
        } else {
            self.flags.remove(id);
        }
    }

    fn clear(&mut self) {
        self.flags.clear();
    }
}

/// Cursor plus its highlight table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionCursor {
    cursor: Cursor,
    highlights: Highlights,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Current index, if anything is highlighted.
    pub fn index(&self) -> Option<usize> {
        self.cursor.index
    }

    /// The highlighted entry, if any.
    pub fn highlighted(&self) -> Option<&NavigableEntry> {
        self.cursor.entry.as_ref()
    }

    /// Check whether an entry is highlighted.
    pub fn is_active(&self, id: &str) -> bool {
        self.highlights.is_active(id)
    }

    /// Highlight the next entry, wrapping to the first.
    ///
    /// With nothing highlighted the first entry is chosen.
    pub fn move_next(&mut self, entries: &[NavigableEntry]) -> Option<CursorMoveEvent> {
        if entries.is_empty() {
            return None;
        }
        let next = match self.cursor.index {
            Some(index) => (index + 1) % entries.len(),
            None => 0,
        };
        self.select_at_index(entries, next)
    }

    /// Highlight the previous entry, wrapping to the last.
    ///
    /// With nothing highlighted, or the first entry highlighted, the last
    /// entry is chosen.
    pub fn move_previous(&mut self, entries: &[NavigableEntry]) -> Option<CursorMoveEvent> {
        if entries.is_empty() {
            return None;
        }
        let previous = match self.cursor.index {
            Some(index) if index > 0 => (index - 1).min(entries.len() - 1),
            _ => entries.len() - 1,
        };
        self.select_at_index(entries, previous)
    }

    /// Highlight the entry at `index`.
    ///
    /// No-op if the list is empty or the index is out of range.
    pub fn select_at_index(
        &mut self,
        entries: &[NavigableEntry],
        index: usize,
    ) -> Option<CursorMoveEvent> {
        let entry = entries.get(index)?;
        let previous = self.cursor.index;
        if let Some(old) = &self.cursor.entry {
            self.highlights.set(&old.id, false);
        }
        self.highlights.set(&entry.id, true);
        self.cursor = Cursor::at(index, entry.clone());
        Some(CursorMoveEvent {
            previous,
            current: index,
        })
    }

    /// Clear the highlight. Returns true if something was highlighted.
    pub fn reset(&mut self) -> bool {
        let had_highlight = !self.cursor.is_none();
        self.cursor = Cursor::none();
        self.highlights.clear();
        had_highlight
    }

    /// Re-point the cursor into a freshly built list.
    ///
    /// - If the highlighted entry still exists, follow it to its new position.
    /// - Else if the old index is out of bounds, clear the cursor.
    /// - Else keep the same index.
    pub fn reindex(&self, entries: &[NavigableEntry]) -> SelectionCursor {
        let (Some(index), Some(old)) = (self.cursor.index, &self.cursor.entry) else {
            return SelectionCursor::new();
        };

        let identity = old.identity();
        let new_index = match entries.iter().position(|e| e.has_identity(&identity)) {
            Some(found) => {
                if found != index {
                    log::debug!(
                        "SelectionCursor::reindex following {:?} from {} to {}",
                        identity,
                        index,
                        found
                    );
                }
                found
            }
            None if index >= entries.len() => {
                log::debug!(
                    "SelectionCursor::reindex clearing cursor, index {} out of bounds (len {})",
                    index,
                    entries.len()
                );
                return SelectionCursor::new();
            }
            None => index,
        };

        let mut next = SelectionCursor::new();
        next.select_at_index(entries, new_index);
        next
    }
}
