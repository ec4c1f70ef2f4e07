//! Combobox controller - navigation, commit and visibility wired together.
//!
//! The controller provides:
//! - An explicit reconcile pipeline (rebuild list, re-point cursor, resync panel)
//! - Wrapping keyboard navigation and pointer highlight
//! - Single and multi-select commits proposed back to the caller
//! - Panel visibility that survives transient empty result sets
//!
//! # Example
//!
//! ```ignore
//! use combobox::prelude::*;
//!
//! let mut combobox = Combobox::with_inputs(
//!     ComboboxConfig::new().multiple(),
//!     ComboboxInputs::new()
//!         .multiple()
//!         .items(["apple", "banana"].iter().map(Item::from_source)),
//! );
//!
//! combobox.handle(ComboboxInput::Focus);
//! combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Down)));
//! let events = combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Enter)));
//! assert_eq!(events.select.unwrap().selection.values(), ["apple"]);
//! ```

mod events;
mod render;
mod state;

pub use events::{ActionEvent, ComboboxEvents, ComboboxInput, EventResult, SelectEvent};
pub use render::{RenderModel, RenderedEntry, RenderedKind, Role};
pub use state::{AuxiliaryContent, Combobox, ComboboxInputs, Reconciled, reconcile};
