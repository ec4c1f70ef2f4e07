//! Demo state: owns the query, the selection and the search results, and
//! feeds them to the combobox on every change.

use combobox::prelude::*;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::search::{SearchRequest, SearchResponse};

/// Work queued by action handlers, applied on the next loop turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClearSelection,
    SelectAllVisible,
}

pub struct Demo {
    combobox: Combobox,
    query: String,
    selection: SelectionSet,
    results: Vec<Item>,
    generation: u64,
    next_page: usize,
    has_more: bool,
    loading: bool,
    focused: bool,
    quit: bool,
    status: String,
    clear_action: Action,
    select_all_action: Action,
    search_tx: UnboundedSender<SearchRequest>,
}

impl Demo {
    pub fn new(
        mode: SelectionMode,
        search_tx: UnboundedSender<SearchRequest>,
        command_tx: UnboundedSender<Command>,
    ) -> Result<Self, ComboboxError> {
        let config = ComboboxConfig::new()
            .instance_id(InstanceId::from_seed("country")?)
            .mode(mode)
            .bind(KeyCombo::key(Key::Char('n')).ctrl(), ComboboxAction::Next)
            .bind(KeyCombo::key(Key::Char('p')).ctrl(), ComboboxAction::Previous);

        let tx = command_tx.clone();
        let clear_action = Action::new("clear", "Clear selection", move || {
            let _ = tx.send(Command::ClearSelection);
        });
        let select_all_action = Action::new("select-all", "Select all visible", move || {
            let _ = command_tx.send(Command::SelectAllVisible);
        });

        let mut demo = Self {
            combobox: Combobox::new(config),
            query: String::new(),
            selection: SelectionSet::new(),
            results: Vec::new(),
            generation: 0,
            next_page: 0,
            has_more: false,
            loading: false,
            focused: false,
            quit: false,
            status: "Press Tab to focus the picker".to_string(),
            clear_action,
            select_all_action,
            search_tx,
        };
        demo.request_page(0);
        demo.sync();
        Ok(demo)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Label for a selected value, falling back to the value itself.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.results
            .iter()
            .find(|item| item.value == value)
            .map_or(value, |item| item.label.as_str())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle a terminal event.
    pub fn on_event(&mut self, event: &Event) {
        if let Event::Key(key) = event
            && key.kind != KeyEventKind::Release
        {
            self.on_key(event, key);
            return;
        }
        if let Some(input) = ComboboxInput::from_crossterm(event) {
            self.handle(input);
        }
    }

    fn on_key(&mut self, event: &Event, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::Tab => {
                self.handle(ComboboxInput::Focus);
                return;
            }
            KeyCode::BackTab => {
                self.handle(ComboboxInput::Blur);
                return;
            }
            _ => {}
        }

        if !self.focused {
            return;
        }

        if let Some(input @ ComboboxInput::Key(combo)) = ComboboxInput::from_crossterm(event)
            && self.combobox.keymap().get(&combo).is_some()
        {
            self.handle(input);
            return;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                self.on_query_changed();
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.on_query_changed();
                }
            }
            _ => {}
        }
    }

    fn handle(&mut self, input: ComboboxInput) {
        match input {
            ComboboxInput::Focus => {
                self.focused = true;
                self.status = "Focused".to_string();
            }
            ComboboxInput::Blur => {
                self.focused = false;
                self.status = "Blurred".to_string();
            }
            _ => {}
        }
        let events = self.combobox.handle(input);
        self.dispatch(events);
    }

    fn on_query_changed(&mut self) {
        self.generation += 1;
        self.results.clear();
        self.has_more = false;
        self.request_page(0);
        self.sync();
        let opened = self.combobox.request_open();
        self.dispatch(ComboboxEvents {
            visibility: opened,
            ..Default::default()
        });
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    fn request_page(&mut self, page: usize) {
        self.loading = true;
        let request = SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            page,
        };
        log::debug!(
            "Requesting generation={} page={} query={:?}",
            request.generation,
            request.page,
            request.query
        );
        if self.search_tx.send(request).is_err() {
            log::warn!("Search service is gone");
            self.loading = false;
        }
    }

    /// Apply a page of search results.
    pub fn on_search(&mut self, response: SearchResponse) {
        if response.generation != self.generation {
            log::debug!(
                "Dropping stale results generation={} (current {})",
                response.generation,
                self.generation
            );
            return;
        }
        self.loading = false;
        self.has_more = response.has_more;
        self.next_page = response.page + 1;
        self.results.extend(response.items);
        self.sync();
    }

    fn load_more(&mut self) {
        if self.has_more && !self.loading {
            self.status = "Loading more...".to_string();
            self.request_page(self.next_page);
            self.sync();
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Apply a command queued by an action handler.
    pub fn on_command(&mut self, command: Command) {
        log::debug!("Command {:?}", command);
        match command {
            Command::ClearSelection => {
                self.selection = SelectionSet::new();
                self.status = "Selection cleared".to_string();
            }
            Command::SelectAllVisible => {
                let mode = self.combobox.mode();
                for item in self.results.iter().filter(|item| !item.disabled) {
                    if !self.selection.contains(&item.value) {
                        self.selection = self.selection.committed(&item.value, mode);
                    }
                }
                self.status = format!("{} selected", self.selection.len());
            }
        }
        self.sync();
    }

    // -------------------------------------------------------------------------
    // Combobox wiring
    // -------------------------------------------------------------------------

    /// Push the current state into the combobox.
    fn sync(&mut self) {
        let mode = self.combobox.mode();
        let before = if self.selection.is_empty() {
            Vec::new()
        } else {
            vec![self.clear_action.clone()]
        };
        let after = match mode {
            SelectionMode::Multiple => vec![self.select_all_action.clone()],
            SelectionMode::Single => Vec::new(),
        };
        let auxiliary = if self.loading {
            AuxiliaryContent::NONE
        } else {
            AuxiliaryContent::empty_state()
        };

        let inputs = ComboboxInputs::new()
            .actions_before(before)
            .items(self.results.iter().cloned())
            .actions_after(after)
            .selection(self.selection.clone())
            .mode(mode)
            .auxiliary(auxiliary);
        let events = self.combobox.set_inputs(inputs);
        self.dispatch(events);
    }

    fn dispatch(&mut self, events: ComboboxEvents) {
        if let Some(visibility) = events.visibility {
            log::debug!("Panel {:?}", visibility);
        }

        if let Some(action) = &events.action {
            self.status = format!("Ran action {}", action.key);
        }

        if let Some(select) = events.select {
            self.status = if select.selection.contains(&select.value) {
                format!("Selected {}", self.label_for(&select.value))
            } else {
                format!("Deselected {}", self.label_for(&select.value))
            };
            self.selection = select.selection;
            self.sync();
        }

        if let Some(cursor_move) = events.cursor_move {
            let last_item = self.combobox.inputs().actions_before.len() + self.results.len();
            if !self.results.is_empty() && cursor_move.current + 1 >= last_item {
                let more = self.combobox.handle(ComboboxInput::EndReached);
                self.dispatch(more);
            }
        }

        if events.end_reached {
            self.load_more();
        }
    }
}
