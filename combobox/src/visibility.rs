//! Disclosure panel visibility.
//!
//! The panel is open or closed. A memory flag records that the user asked
//! for it to be open so that a transient empty list (results still loading
//! after a keystroke) can close it without forgetting the request; when
//! content arrives again the panel re-opens on its own.

use crate::toggle::Toggle;

/// Open/closed transition produced by a visibility operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    Opened,
    Closed,
}

/// Panel visibility state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    open: Toggle,
    was_open_before_empty: bool,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_on()
    }

    /// Whether an explicit open request is still remembered.
    pub fn was_open_before_empty(&self) -> bool {
        self.was_open_before_empty
    }

    fn set_open(&mut self, open: bool) -> Option<VisibilityEvent> {
        if !self.open.set(open) {
            return None;
        }
        log::debug!("Visibility: panel {}", if open { "opened" } else { "closed" });
        Some(if open {
            VisibilityEvent::Opened
        } else {
            VisibilityEvent::Closed
        })
    }

    /// Open if closed and the list has entries. Always remembers the request.
    pub fn request_open(&mut self, has_entries: bool) -> Option<VisibilityEvent> {
        self.was_open_before_empty = true;
        if !self.is_open() && has_entries {
            self.set_open(true)
        } else {
            None
        }
    }

    /// Close unconditionally and forget any open request.
    pub fn request_close(&mut self) -> Option<VisibilityEvent> {
        self.was_open_before_empty = false;
        self.set_open(false)
    }

    /// React to a rebuilt entry list.
    ///
    /// With no entries and no auxiliary content the panel is force-closed,
    /// keeping the open request. Auxiliary content only keeps an open panel
    /// open; a remembered request re-opens it once entries arrive.
    pub fn on_list_changed(
        &mut self,
        list_is_empty: bool,
        has_auxiliary_content: bool,
    ) -> Option<VisibilityEvent> {
        if list_is_empty && !has_auxiliary_content {
            return self.set_open(false);
        }
        if !list_is_empty && self.was_open_before_empty && !self.is_open() {
            return self.set_open(true);
        }
        None
    }

    pub fn on_focus(&mut self, has_entries: bool) -> Option<VisibilityEvent> {
        self.request_open(has_entries)
    }

    /// Close on blur. The controller also clears the cursor.
    pub fn on_blur(&mut self) -> Option<VisibilityEvent> {
        self.request_close()
    }

    pub fn on_dismiss_key(&mut self) -> Option<VisibilityEvent> {
        self.request_close()
    }

    /// Clicking the activator opens a closed panel; it never closes an open one.
    pub fn on_activator_click(&mut self, has_entries: bool) -> Option<VisibilityEvent> {
        if self.is_open() {
            return None;
        }
        self.request_open(has_entries)
    }
}
