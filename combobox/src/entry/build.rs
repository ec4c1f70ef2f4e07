//! Navigable entry list construction.

use crate::config::InstanceId;

use super::item::{Action, Item};

/// What a navigable entry is.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// A selectable item.
    Item(Item),
    /// A command.
    Action(Action),
}

/// Identity used to follow an entry across rebuilds.
///
/// Positional ids change whenever an earlier segment changes length, so the
/// cursor tracks entries by item value or action key instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryIdentity {
    Item(String),
    Action(String),
}

/// One entry of the navigable list, stamped with its positional id.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigableEntry {
    /// `"{instance}-{position}"`. A render key, not a semantic identity.
    pub id: String,
    pub kind: EntryKind,
}

impl NavigableEntry {
    /// Identity used for cursor re-pointing.
    pub fn identity(&self) -> EntryIdentity {
        match &self.kind {
            EntryKind::Item(item) => EntryIdentity::Item(item.value.clone()),
            EntryKind::Action(action) => EntryIdentity::Action(action.key.clone()),
        }
    }

    /// Check whether this entry has the given identity.
    pub fn has_identity(&self, identity: &EntryIdentity) -> bool {
        match (&self.kind, identity) {
            (EntryKind::Item(item), EntryIdentity::Item(value)) => &item.value == value,
            (EntryKind::Action(action), EntryIdentity::Action(key)) => &action.key == key,
            _ => false,
        }
    }

    pub fn label(&self) -> &str {
        match &self.kind {
            EntryKind::Item(item) => &item.label,
            EntryKind::Action(action) => &action.label,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match &self.kind {
            EntryKind::Item(item) => item.disabled,
            EntryKind::Action(action) => action.disabled,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match &self.kind {
            EntryKind::Item(item) => Some(item),
            EntryKind::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&Action> {
        match &self.kind {
            EntryKind::Action(action) => Some(action),
            EntryKind::Item(_) => None,
        }
    }
}

/// Concatenate before-actions, items and after-actions into one list.
///
/// Every entry gets `id = "{instance}-{position}"` where `position` is its
/// index in the concatenated sequence.
pub fn build_entries(
    actions_before: &[Action],
    items: &[Item],
    actions_after: &[Action],
    instance_id: &InstanceId,
) -> Vec<NavigableEntry> {
    let kinds = actions_before
        .iter()
        .cloned()
        .map(EntryKind::Action)
        .chain(items.iter().cloned().map(EntryKind::Item))
        .chain(actions_after.iter().cloned().map(EntryKind::Action));

    kinds
        .enumerate()
        .map(|(position, kind)| NavigableEntry {
            id: instance_id.entry_id(position),
            kind,
        })
        .collect()
}
