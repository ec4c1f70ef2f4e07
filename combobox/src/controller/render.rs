//! Render contract handed to list and panel renderers.

use crate::entry::EntryKind;

use super::state::Combobox;

/// Assistive-technology role of a rendered part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The text input driving the list.
    Combobox,
    /// The panel's content region.
    Listbox,
    /// One navigable entry.
    Option,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
        }
    }
}

/// Whether a rendered entry is an item or an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedKind {
    Item,
    Action,
}

/// One entry as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub id: String,
    pub kind: RenderedKind,
    pub label: String,
    /// Item value; `None` for actions.
    pub value: Option<String>,
    /// Highlighted by the cursor.
    pub active: bool,
    /// Present in the selection snapshot. Always false for actions.
    pub selected: bool,
    pub disabled: bool,
    pub role: Role,
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Role of the control itself.
    pub control_role: Role,
    /// Role of the content region.
    pub content_role: Role,
    /// Id relating the control to the panel's content region.
    pub content_id: String,
    pub open: bool,
    /// Id of the highlighted entry, if any.
    pub active_descendant: Option<String>,
    pub entries: Vec<RenderedEntry>,
    /// Auxiliary content should be shown in place of an empty list.
    pub show_empty_state: bool,
}

impl RenderModel {
    /// The entry flagged active, if any.
    pub fn active_entry(&self) -> Option<&RenderedEntry> {
        self.entries.iter().find(|e| e.active)
    }
}

impl Combobox {
    /// Build the render snapshot for the current state.
    pub fn render_model(&self) -> RenderModel {
        let selection = self.selection();
        let entries = self
            .entries()
            .iter()
            .map(|entry| {
                let (kind, value, selected) = match &entry.kind {
                    EntryKind::Item(item) => (
                        RenderedKind::Item,
                        Some(item.value.clone()),
                        selection.contains(&item.value),
                    ),
                    EntryKind::Action(_) => (RenderedKind::Action, None, false),
                };
                RenderedEntry {
                    id: entry.id.clone(),
                    kind,
                    label: entry.label().to_string(),
                    value,
                    active: self.is_active(&entry.id),
                    selected,
                    disabled: entry.is_disabled(),
                    role: Role::Option,
                }
            })
            .collect::<Vec<_>>();

        RenderModel {
            control_role: Role::Combobox,
            content_role: Role::Listbox,
            content_id: self.instance_id().content_id(),
            open: self.is_open(),
            active_descendant: self
                .selection_cursor()
                .highlights()
                .active_ids()
                .first()
                .map(|id| id.to_string()),
            show_empty_state: entries.is_empty() && self.inputs().auxiliary.empty_state,
            entries,
        }
    }
}
