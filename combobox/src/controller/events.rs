//! Event bridge for the combobox.
//!
//! Raw key, focus, blur and click events come in as [`ComboboxInput`]; the
//! controller answers with [`ComboboxEvents`] describing what happened so
//! the caller can dispatch its own handlers afterwards.

use crate::cursor::CursorMoveEvent;
use crate::keybinds::{ComboboxAction, KeyCombo};
use crate::selection::SelectionSet;
use crate::visibility::VisibilityEvent;

use super::state::Combobox;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    #[default]
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Event fired when a value is committed.
///
/// Carries the proposed selection. The controller's snapshot is not
/// updated; the owner applies it on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEvent {
    /// The committed value.
    pub value: String,
    /// The resulting selection set.
    pub selection: SelectionSet,
}

/// Event fired when an action entry is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    /// The action's key.
    pub key: String,
    /// The positional id of the entry that was invoked.
    pub entry_id: String,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboboxEvents {
    pub result: EventResult,
    pub select: Option<SelectEvent>,
    pub action: Option<ActionEvent>,
    pub cursor_move: Option<CursorMoveEvent>,
    pub visibility: Option<VisibilityEvent>,
    /// The panel scrolled to its end; the caller may fetch more items.
    pub end_reached: bool,
    /// The key's default action should be suppressed.
    pub prevent_default: bool,
}

impl ComboboxEvents {
    fn from_cursor(cursor_move: Option<CursorMoveEvent>) -> Self {
        Self {
            result: consumed_if(cursor_move.is_some()),
            cursor_move,
            ..Default::default()
        }
    }

    fn from_visibility(visibility: Option<VisibilityEvent>) -> Self {
        Self {
            result: consumed_if(visibility.is_some()),
            visibility,
            ..Default::default()
        }
    }
}

fn consumed_if(handled: bool) -> EventResult {
    if handled {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

/// Raw input delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboboxInput {
    /// Key press while the control has focus.
    Key(KeyCombo),
    /// The control gained focus.
    Focus,
    /// The control lost focus.
    Blur,
    /// Click on the control's activator region.
    ActivatorClick,
    /// Click on the entry at an index.
    OptionClick(usize),
    /// Pointer moved over the entry at an index.
    Hover(usize),
    /// The panel scrolled to its end.
    EndReached,
}

impl ComboboxInput {
    /// Translate a crossterm event.
    ///
    /// Key presses and terminal focus changes are mapped; everything else
    /// (including key releases) yields `None`.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event, KeyEventKind};
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                KeyCombo::try_from(*key).ok().map(ComboboxInput::Key)
            }
            Event::FocusGained => Some(ComboboxInput::Focus),
            Event::FocusLost => Some(ComboboxInput::Blur),
            _ => None,
        }
    }
}

impl Combobox {
    /// Handle one input event.
    pub fn handle(&mut self, input: ComboboxInput) -> ComboboxEvents {
        match input {
            ComboboxInput::Key(key) => self.handle_key(&key),
            ComboboxInput::Focus => ComboboxEvents::from_visibility(self.on_focus()),
            ComboboxInput::Blur => {
                let cleared = self.reset_cursor();
                let mut events = ComboboxEvents::from_visibility(self.on_blur());
                if cleared {
                    events.result = EventResult::Consumed;
                }
                events
            }
            ComboboxInput::ActivatorClick => {
                ComboboxEvents::from_visibility(self.on_activator_click())
            }
            ComboboxInput::OptionClick(index) => {
                let Some(entry) = self.entries().get(index).cloned() else {
                    return ComboboxEvents::default();
                };
                let mut events = self.commit_entry(entry);
                events.prevent_default = false;
                events
            }
            ComboboxInput::Hover(index) => ComboboxEvents::from_cursor(self.select_at_index(index)),
            ComboboxInput::EndReached => self.end_reached(),
        }
    }

    /// Translate a key press through the keymap and run the bound action.
    pub fn handle_key(&mut self, key: &KeyCombo) -> ComboboxEvents {
        let Some(action) = self.keymap().get(key) else {
            log::trace!("Combobox::handle_key {} unbound", key);
            return ComboboxEvents::default();
        };
        log::trace!("Combobox::handle_key {} -> {:?}", key, action);

        match action {
            ComboboxAction::Next => ComboboxEvents::from_cursor(self.move_next()),
            ComboboxAction::Previous => ComboboxEvents::from_cursor(self.move_previous()),
            ComboboxAction::Commit => self.commit_highlighted(),
            ComboboxAction::Dismiss => ComboboxEvents::from_visibility(self.on_dismiss_key()),
        }
    }
}
