/// Two-valued flag with explicit set operations.
///
/// The setters report whether the value actually changed so callers can
/// emit transition events only on real flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    /// Create a toggle with the given initial value
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    /// Current value
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Set to true. Returns true if the value changed.
    pub fn set_true(&mut self) -> bool {
        self.set(true)
    }

    /// Set to false. Returns true if the value changed.
    pub fn set_false(&mut self) -> bool {
        self.set(false)
    }

    /// Set to the given value. Returns true if the value changed.
    pub fn set(&mut self, on: bool) -> bool {
        let changed = self.on != on;
        self.on = on;
        changed
    }
}

impl From<bool> for Toggle {
    fn from(on: bool) -> Self {
        Self::new(on)
    }
}
