//! Errors raised while constructing a combobox.
//!
//! Runtime operations never fail; only configuration can be rejected.

use thiserror::Error;

use crate::keybinds::{ComboboxAction, KeyCombo};

/// Errors that can occur when building a combobox configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboboxError {
    /// The instance id seed was empty or only whitespace.
    #[error("Instance id seed must not be empty")]
    EmptyInstanceId,

    /// The key combo is already bound to another action.
    #[error("Key '{key}' is already bound to {existing:?}, cannot bind it to {requested:?}")]
    KeybindConflict {
        /// The contested key combo.
        key: KeyCombo,
        /// The action currently bound to the key.
        existing: ComboboxAction,
        /// The action that was requested.
        requested: ComboboxAction,
    },
}
