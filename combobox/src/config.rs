//! Combobox configuration types.

use std::fmt;

use uuid::Uuid;

use crate::error::ComboboxError;
use crate::keybinds::{ComboboxAction, KeyCombo, Keymap};
use crate::selection::SelectionMode;

/// Seed used to derive entry ids and the content region id.
///
/// Entry ids take the form `"{instance}-{position}"`; the panel's content
/// region is `"{instance}-listbox"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Create a new random instance id.
    pub fn new() -> Self {
        Self(format!("combobox-{}", Uuid::new_v4().simple()))
    }

    /// Use a caller-supplied seed.
    pub fn from_seed(seed: impl Into<String>) -> Result<Self, ComboboxError> {
        let seed = seed.into();
        if seed.trim().is_empty() {
            return Err(ComboboxError::EmptyInstanceId);
        }
        Ok(Self(seed))
    }

    /// Get the seed as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the entry at a position in the navigable list.
    pub fn entry_id(&self, position: usize) -> String {
        format!("{}-{}", self.0, position)
    }

    /// Id of the panel's content region.
    pub fn content_id(&self) -> String {
        format!("{}-listbox", self.0)
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-instance configuration.
#[derive(Debug, Clone, Default)]
pub struct ComboboxConfig {
    /// Seed for entry and content region ids.
    pub instance_id: InstanceId,

    /// Selection mode used until the caller supplies inputs.
    pub mode: SelectionMode,

    /// Key bindings for the event bridge.
    pub keymap: Keymap,
}

impl ComboboxConfig {
    /// Create a config with a random instance id and default keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instance id.
    pub fn instance_id(mut self, id: InstanceId) -> Self {
        self.instance_id = id;
        self
    }

    /// Set the initial selection mode.
    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start in multi-select mode.
    pub fn multiple(mut self) -> Self {
        self.mode = SelectionMode::Multiple;
        self
    }

    /// Replace the keymap.
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Add a binding on top of the current keymap.
    pub fn bind(mut self, key: KeyCombo, action: ComboboxAction) -> Self {
        self.keymap.bind(key, action);
        self
    }
}
