//! Items and actions that can appear in the navigable list.

use std::fmt;
use std::sync::Arc;

/// Trait for caller records that can be shown as combobox items.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl ComboboxItem for Country {
///     fn combobox_value(&self) -> String {
///         self.code.clone()
///     }
///
///     fn combobox_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait ComboboxItem {
    /// Stable key written into the selection set.
    fn combobox_value(&self) -> String;

    /// Display text for this item.
    fn combobox_label(&self) -> String;
}

impl ComboboxItem for String {
    fn combobox_value(&self) -> String {
        self.clone()
    }

    fn combobox_label(&self) -> String {
        self.clone()
    }
}

impl ComboboxItem for &str {
    fn combobox_value(&self) -> String {
        (*self).to_string()
    }

    fn combobox_label(&self) -> String {
        (*self).to_string()
    }
}

// (value, label) tuples
impl<S1, S2> ComboboxItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn combobox_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn combobox_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// A selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Key written into the selection set.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Disabled items can be highlighted but not committed.
    pub disabled: bool,
}

impl Item {
    /// Create an item with a separate label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create an item whose label is its value.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            disabled: false,
        }
    }

    /// Create an item from a caller record.
    pub fn from_source<T: ComboboxItem + ?Sized>(source: &T) -> Self {
        Self::new(source.combobox_value(), source.combobox_label())
    }

    /// Mark the item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl<T: ComboboxItem> From<&T> for Item {
    fn from(source: &T) -> Self {
        Self::from_source(source)
    }
}

/// Shared callback invoked when an action is committed.
#[derive(Clone)]
pub struct ActionHandler(Arc<dyn Fn() + Send + Sync>);

impl ActionHandler {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A handler that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Run the handler.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionHandler(..)")
    }
}

// Two handlers are equal only if they share the same closure.
impl PartialEq for ActionHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A command entry with no selection value.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Stable key, used to follow the action across rebuilds.
    pub key: String,
    /// Display text.
    pub label: String,
    /// Disabled actions can be highlighted but not invoked.
    pub disabled: bool,
    handler: ActionHandler,
}

impl Action {
    /// Create an action with a handler.
    pub fn new<F>(key: impl Into<String>, label: impl Into<String>, on_action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_handler(key, label, ActionHandler::new(on_action))
    }

    /// Create an action from an existing handler.
    pub fn with_handler(
        key: impl Into<String>,
        label: impl Into<String>,
        handler: ActionHandler,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            disabled: false,
            handler,
        }
    }

    /// Mark the action as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The action's handler.
    pub fn handler(&self) -> &ActionHandler {
        &self.handler
    }

    /// Invoke the handler.
    pub fn invoke(&self) {
        self.handler.invoke();
    }
}
