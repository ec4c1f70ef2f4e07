use std::collections::HashMap;
use std::fmt;

use crate::error::ComboboxError;

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Check that no modifier is held
    pub const fn is_none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Shift+Tab as reported by terminals
    BackTab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Delete
    Delete,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "Space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::F(n) => write!(f, "F{}", n),
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Esc"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Tab => write!(f, "Tab"),
            Key::BackTab => write!(f, "BackTab"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PageUp"),
            Key::PageDown => write!(f, "PageDown"),
            Key::Delete => write!(f, "Delete"),
        }
    }
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = ();

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => return Err(()),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl TryFrom<crossterm::event::KeyEvent> for KeyCombo {
    type Error = ();

    fn try_from(event: crossterm::event::KeyEvent) -> Result<Self, Self::Error> {
        let key = Key::try_from(event.code)?;
        let mut modifiers = Modifiers::from(event.modifiers);
        // Terminals report shifted characters as uppercase; the shift flag is redundant.
        if let Key::Char(c) = key
            && !c.is_ascii_lowercase()
        {
            modifiers.shift = false;
        }
        Ok(Self { key, modifiers })
    }
}

/// The four things a key press can ask the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboboxAction {
    /// Highlight the next entry (wrapping).
    Next,
    /// Highlight the previous entry (wrapping).
    Previous,
    /// Commit the highlighted entry.
    Commit,
    /// Close the panel.
    Dismiss,
}

/// Lookup table from key combos to controller actions.
///
/// The default table binds Down, Up, Enter and Escape. Extra bindings
/// (for example Ctrl+N / Ctrl+P) can be layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    binds: HashMap<KeyCombo, ComboboxAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::key(Key::Down), ComboboxAction::Next);
        keymap.bind(KeyCombo::key(Key::Up), ComboboxAction::Previous);
        keymap.bind(KeyCombo::key(Key::Enter), ComboboxAction::Commit);
        keymap.bind(KeyCombo::key(Key::Escape), ComboboxAction::Dismiss);
        keymap
    }
}

impl Keymap {
    /// Create a keymap with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with no bindings at all.
    pub fn empty() -> Self {
        Self {
            binds: HashMap::new(),
        }
    }

    /// Bind a key combo, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyCombo, action: ComboboxAction) {
        self.binds.insert(key, action);
    }

    /// Bind a key combo, rejecting it if it is bound to a different action.
    pub fn try_bind(&mut self, key: KeyCombo, action: ComboboxAction) -> Result<(), ComboboxError> {
        match self.binds.get(&key) {
            Some(&existing) if existing != action => Err(ComboboxError::KeybindConflict {
                key,
                existing,
                requested: action,
            }),
            _ => {
                self.binds.insert(key, action);
                Ok(())
            }
        }
    }

    /// Remove the binding for a key combo.
    pub fn unbind(&mut self, key: &KeyCombo) -> Option<ComboboxAction> {
        self.binds.remove(key)
    }

    /// Look up the action bound to a key combo.
    pub fn get(&self, key: &KeyCombo) -> Option<ComboboxAction> {
        self.binds.get(key).copied()
    }

    /// All key combos bound to an action, sorted by display form.
    pub fn keys_for(&self, action: ComboboxAction) -> Vec<KeyCombo> {
        let mut keys: Vec<KeyCombo> = self
            .binds
            .iter()
            .filter(|&(_, &a)| a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| k.to_string());
        keys
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.binds.len()
    }

    /// Check if the keymap has no bindings.
    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
