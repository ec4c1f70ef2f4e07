//! Navigable entries: items, actions and the list builder that merges them.
//!
//! The navigable list is rebuilt from scratch whenever any of its inputs
//! change; old entries are discarded rather than patched.

mod build;
mod item;

pub use build::{EntryIdentity, EntryKind, NavigableEntry, build_entries};
pub use item::{Action, ActionHandler, ComboboxItem, Item};
