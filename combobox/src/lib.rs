//! Headless controller for a searchable selection list with a disclosure panel.
//!
//! The crate owns the state machine that sits between a caller-supplied list
//! of items (plus optional leading/trailing actions) and whatever renders the
//! list and its panel. It keeps keyboard navigation, selection commits and
//! panel visibility consistent while the item list is replaced between
//! renders.
//!
//! Rendering, filtering and id generation stay with the caller: the
//! controller consumes already-filtered lists and hands back a
//! [`RenderModel`](controller::RenderModel) plus [`ComboboxEvents`](controller::ComboboxEvents).

pub mod config;
pub mod controller;
pub mod cursor;
pub mod entry;
pub mod error;
pub mod keybinds;
pub mod selection;
pub mod toggle;
pub mod visibility;

pub use controller::Combobox;

pub mod prelude {
    pub use crate::config::{ComboboxConfig, InstanceId};
    pub use crate::controller::{
        ActionEvent, AuxiliaryContent, Combobox, ComboboxEvents, ComboboxInput, ComboboxInputs,
        EventResult, Reconciled, RenderModel, RenderedEntry, RenderedKind, Role, SelectEvent,
        reconcile,
    };
    pub use crate::cursor::{Cursor, CursorMoveEvent, Highlights, SelectionCursor};
    pub use crate::entry::{
        Action, ActionHandler, ComboboxItem, EntryIdentity, EntryKind, Item, NavigableEntry,
        build_entries,
    };
    pub use crate::error::ComboboxError;
    pub use crate::keybinds::{ComboboxAction, Key, KeyCombo, Keymap, Modifiers};
    pub use crate::selection::{SelectionMode, SelectionSet};
    pub use crate::toggle::Toggle;
    pub use crate::visibility::{Visibility, VisibilityEvent};
}
