//! Combobox controller state and the input reconcile pipeline.

use crate::config::{ComboboxConfig, InstanceId};
use crate::cursor::{Cursor, CursorMoveEvent, SelectionCursor};
use crate::entry::{Action, EntryKind, Item, NavigableEntry, build_entries};
use crate::keybinds::Keymap;
use crate::selection::{SelectionMode, SelectionSet};
use crate::visibility::{Visibility, VisibilityEvent};

use super::events::{ActionEvent, ComboboxEvents, EventResult, SelectEvent};

/// Panel content that is not part of the navigable list.
///
/// Any of these keeps an open panel open while the list is empty. None of
/// them opens a closed panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuxiliaryContent {
    /// Custom content above the list.
    pub leading: bool,
    /// Custom content below the list.
    pub trailing: bool,
    /// Placeholder shown when there are no entries.
    pub empty_state: bool,
}

impl AuxiliaryContent {
    /// No auxiliary content.
    pub const NONE: Self = Self {
        leading: false,
        trailing: false,
        empty_state: false,
    };

    /// Only an empty-state placeholder.
    pub const fn empty_state() -> Self {
        Self {
            leading: false,
            trailing: false,
            empty_state: true,
        }
    }

    /// Check if any auxiliary content is present.
    pub const fn any(&self) -> bool {
        self.leading || self.trailing || self.empty_state
    }
}

/// Everything the caller supplies on each render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboboxInputs {
    pub actions_before: Vec<Action>,
    pub items: Vec<Item>,
    pub actions_after: Vec<Action>,
    /// Snapshot of the caller's selection, used for rendering.
    pub selection: SelectionSet,
    pub mode: SelectionMode,
    pub auxiliary: AuxiliaryContent,
}

impl ComboboxInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary items.
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Set the actions listed before the items.
    pub fn actions_before(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions_before = actions.into_iter().collect();
        self
    }

    /// Set the actions listed after the items.
    pub fn actions_after(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions_after = actions.into_iter().collect();
        self
    }

    /// Set the selection snapshot.
    pub fn selection(mut self, selection: SelectionSet) -> Self {
        self.selection = selection;
        self
    }

    /// Set the selection mode.
    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use multi-select mode.
    pub fn multiple(mut self) -> Self {
        self.mode = SelectionMode::Multiple;
        self
    }

    /// Set the auxiliary content flags.
    pub fn auxiliary(mut self, auxiliary: AuxiliaryContent) -> Self {
        self.auxiliary = auxiliary;
        self
    }

    /// Check whether the inputs that feed the navigable list match.
    fn same_entries(&self, other: &Self) -> bool {
        self.actions_before == other.actions_before
            && self.items == other.items
            && self.actions_after == other.actions_after
    }
}

/// Result of reconciling new inputs against the previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub entries: Vec<NavigableEntry>,
    pub cursor: SelectionCursor,
    pub visibility: Visibility,
    /// Transition caused by the list change, if any.
    pub visibility_change: Option<VisibilityEvent>,
}

/// Rebuild the list, re-point the cursor and resync visibility in one pass.
///
/// Pure: the previous cursor and visibility are read, never modified.
pub fn reconcile(
    instance_id: &InstanceId,
    inputs: &ComboboxInputs,
    previous_cursor: &SelectionCursor,
    previous_visibility: Visibility,
) -> Reconciled {
    let entries = build_entries(
        &inputs.actions_before,
        &inputs.items,
        &inputs.actions_after,
        instance_id,
    );
    let cursor = previous_cursor.reindex(&entries);
    let mut visibility = previous_visibility;
    let visibility_change = visibility.on_list_changed(entries.is_empty(), inputs.auxiliary.any());

    Reconciled {
        entries,
        cursor,
        visibility,
        visibility_change,
    }
}

/// The combobox controller.
///
/// Owns the navigable list, cursor and panel visibility. The item lists and
/// selection set belong to the caller: they arrive through
/// [`set_inputs`](Self::set_inputs) and commits only propose a new selection
/// through [`ComboboxEvents::select`].
///
/// # Example
///
/// ```ignore
/// let mut combobox = Combobox::new(ComboboxConfig::new());
/// combobox.set_inputs(ComboboxInputs::new().items(results));
///
/// let events = combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Down)));
/// let events = combobox.handle(ComboboxInput::Key(KeyCombo::key(Key::Enter)));
/// if let Some(select) = events.select {
///     self.selection = select.selection;
/// }
/// ```
#[derive(Debug)]
pub struct Combobox {
    config: ComboboxConfig,
    inputs: ComboboxInputs,
    entries: Vec<NavigableEntry>,
    cursor: SelectionCursor,
    visibility: Visibility,
}

impl Combobox {
    /// Create a controller with no entries.
    pub fn new(config: ComboboxConfig) -> Self {
        let inputs = ComboboxInputs::new().mode(config.mode);
        Self {
            config,
            inputs,
            entries: Vec::new(),
            cursor: SelectionCursor::new(),
            visibility: Visibility::new(),
        }
    }

    /// Create a controller and apply initial inputs.
    pub fn with_inputs(config: ComboboxConfig, inputs: ComboboxInputs) -> Self {
        let mut combobox = Self::new(config);
        combobox.set_inputs(inputs);
        combobox
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.config.instance_id
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    pub fn inputs(&self) -> &ComboboxInputs {
        &self.inputs
    }

    /// The current navigable list.
    pub fn entries(&self) -> &[NavigableEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> &Cursor {
        self.cursor.cursor()
    }

    pub fn selection_cursor(&self) -> &SelectionCursor {
        &self.cursor
    }

    /// The highlighted entry, if any.
    pub fn highlighted(&self) -> Option<&NavigableEntry> {
        self.cursor.highlighted()
    }

    /// Check whether an entry id is highlighted.
    pub fn is_active(&self, id: &str) -> bool {
        self.cursor.is_active(id)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// The caller's selection snapshot.
    pub fn selection(&self) -> &SelectionSet {
        &self.inputs.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.inputs.mode
    }

    /// Whether the navigable list has any entries.
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Apply a full set of caller inputs.
    ///
    /// The list is rebuilt only when the actions, items or auxiliary content
    /// differ from the previous inputs.
    pub fn set_inputs(&mut self, inputs: ComboboxInputs) -> ComboboxEvents {
        let rebuild =
            !self.inputs.same_entries(&inputs) || self.inputs.auxiliary != inputs.auxiliary;
        self.inputs = inputs;
        if rebuild {
            self.rebuild()
        } else {
            ComboboxEvents::default()
        }
    }

    /// Replace the primary items.
    pub fn set_items(&mut self, items: Vec<Item>) -> ComboboxEvents {
        if self.inputs.items == items {
            return ComboboxEvents::default();
        }
        self.inputs.items = items;
        self.rebuild()
    }

    /// Append a page of items (incremental "load more" arrival).
    pub fn extend_items(&mut self, items: impl IntoIterator<Item = Item>) -> ComboboxEvents {
        let before = self.inputs.items.len();
        self.inputs.items.extend(items);
        if self.inputs.items.len() == before {
            return ComboboxEvents::default();
        }
        self.rebuild()
    }

    /// Replace the leading and trailing actions.
    pub fn set_actions(&mut self, before: Vec<Action>, after: Vec<Action>) -> ComboboxEvents {
        if self.inputs.actions_before == before && self.inputs.actions_after == after {
            return ComboboxEvents::default();
        }
        self.inputs.actions_before = before;
        self.inputs.actions_after = after;
        self.rebuild()
    }

    /// Replace the auxiliary content flags.
    pub fn set_auxiliary(&mut self, auxiliary: AuxiliaryContent) -> ComboboxEvents {
        if self.inputs.auxiliary == auxiliary {
            return ComboboxEvents::default();
        }
        self.inputs.auxiliary = auxiliary;
        self.rebuild()
    }

    /// Replace the selection snapshot. Does not rebuild.
    pub fn set_selection(&mut self, selection: SelectionSet) {
        self.inputs.selection = selection;
    }

    /// Change the selection mode. Does not rebuild.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.inputs.mode = mode;
    }

    /// Change the instance id seed. Rebuilds so entry ids follow.
    pub fn set_instance_id(&mut self, id: InstanceId) -> ComboboxEvents {
        if self.config.instance_id == id {
            return ComboboxEvents::default();
        }
        self.config.instance_id = id;
        self.rebuild()
    }

    fn rebuild(&mut self) -> ComboboxEvents {
        let reconciled = reconcile(
            &self.config.instance_id,
            &self.inputs,
            &self.cursor,
            self.visibility,
        );

        log::debug!(
            "Combobox::rebuild id={} entries={} cursor={:?} open={}",
            self.config.instance_id,
            reconciled.entries.len(),
            reconciled.cursor.index(),
            reconciled.visibility.is_open()
        );

        let mut events = ComboboxEvents::default();
        let previous = self.cursor.index();
        if let Some(current) = reconciled.cursor.index()
            && previous != Some(current)
        {
            events.cursor_move = Some(CursorMoveEvent { previous, current });
        }
        events.visibility = reconciled.visibility_change;

        self.entries = reconciled.entries;
        self.cursor = reconciled.cursor;
        self.visibility = reconciled.visibility;
        events
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Highlight the next entry.
    pub fn move_next(&mut self) -> Option<CursorMoveEvent> {
        self.cursor.move_next(&self.entries)
    }

    /// Highlight the previous entry.
    pub fn move_previous(&mut self) -> Option<CursorMoveEvent> {
        self.cursor.move_previous(&self.entries)
    }

    /// Highlight the entry at `index`.
    pub fn select_at_index(&mut self, index: usize) -> Option<CursorMoveEvent> {
        self.cursor.select_at_index(&self.entries, index)
    }

    /// Clear the highlight.
    pub fn reset_cursor(&mut self) -> bool {
        self.cursor.reset()
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Commit a value.
    ///
    /// Proposes the new selection through [`ComboboxEvents::select`]. In single
    /// mode the cursor is cleared and the panel closed; in multi mode both are
    /// left as they were. Committing a disabled item is a no-op.
    pub fn commit(&mut self, value: &str) -> ComboboxEvents {
        let mut events = ComboboxEvents::default();

        let disabled = self
            .entries
            .iter()
            .filter_map(NavigableEntry::as_item)
            .find(|item| item.value == value)
            .is_some_and(|item| item.disabled);
        if disabled {
            log::debug!("Combobox::commit ignoring disabled value={}", value);
            return events;
        }

        let selection = self.inputs.selection.committed(value, self.inputs.mode);
        log::debug!(
            "Combobox::commit value={} mode={:?} selected={}",
            value,
            self.inputs.mode,
            selection.len()
        );

        events.result = EventResult::Consumed;
        events.select = Some(SelectEvent {
            value: value.to_string(),
            selection,
        });

        if self.inputs.mode == SelectionMode::Single {
            self.cursor.reset();
            events.visibility = self.visibility.request_close();
        }
        events
    }

    /// Commit the highlighted entry.
    ///
    /// Only acts while the panel is open and something is highlighted. Items
    /// go through [`commit`](Self::commit) and suppress the key's default
    /// action; actions run their handler and leave the selection alone.
    pub fn commit_highlighted(&mut self) -> ComboboxEvents {
        if !self.is_open() {
            return ComboboxEvents::default();
        }
        let Some(entry) = self.cursor.highlighted().cloned() else {
            return ComboboxEvents::default();
        };
        self.commit_entry(entry)
    }

    pub(super) fn commit_entry(&mut self, entry: NavigableEntry) -> ComboboxEvents {
        if entry.is_disabled() {
            return ComboboxEvents::default();
        }
        match entry.kind {
            EntryKind::Item(item) => {
                let mut events = self.commit(&item.value);
                events.prevent_default = events.select.is_some();
                events
            }
            EntryKind::Action(action) => {
                log::debug!("Combobox::commit invoking action key={}", action.key);
                action.invoke();
                ComboboxEvents {
                    result: EventResult::Consumed,
                    action: Some(ActionEvent {
                        key: action.key,
                        entry_id: entry.id,
                    }),
                    ..Default::default()
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Open the panel if the list has entries. Remembers the request either way.
    pub fn request_open(&mut self) -> Option<VisibilityEvent> {
        let has_entries = self.has_entries();
        self.visibility.request_open(has_entries)
    }

    /// Close the panel.
    pub fn request_close(&mut self) -> Option<VisibilityEvent> {
        self.visibility.request_close()
    }

    pub fn on_focus(&mut self) -> Option<VisibilityEvent> {
        let has_entries = self.has_entries();
        self.visibility.on_focus(has_entries)
    }

    /// Close the panel and clear any stale highlight.
    pub fn on_blur(&mut self) -> Option<VisibilityEvent> {
        self.cursor.reset();
        self.visibility.on_blur()
    }

    pub fn on_dismiss_key(&mut self) -> Option<VisibilityEvent> {
        self.visibility.on_dismiss_key()
    }

    pub fn on_activator_click(&mut self) -> Option<VisibilityEvent> {
        let has_entries = self.has_entries();
        self.visibility.on_activator_click(has_entries)
    }

    /// Forward the panel's scrolled-to-end signal.
    pub fn end_reached(&self) -> ComboboxEvents {
        log::debug!(
            "Combobox::end_reached id={} entries={}",
            self.config.instance_id,
            self.entries.len()
        );
        ComboboxEvents {
            end_reached: true,
            ..Default::default()
        }
    }
}
