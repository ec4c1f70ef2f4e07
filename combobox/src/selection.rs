//! Selection mode and the caller-owned selection set.
//!
//! The controller never edits a selection set in place. Commits compute a
//! new set and hand it back to the owner.

/// Selection mode for the combobox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// One value at a time; committing ends the interaction.
    #[default]
    Single,
    /// Values accumulate; the panel stays open between commits.
    Multiple,
}

/// Ordered collection of selected values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    values: Vec<String>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a value is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Selected values in order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Get the first selected value (the only one in single mode).
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Compute the selection that results from committing `value`.
    ///
    /// - A value already present is removed.
    /// - Otherwise multi mode appends it and single mode replaces the set.
    pub fn committed(&self, value: &str, mode: SelectionMode) -> SelectionSet {
        if self.contains(value) {
            let values = self.values.iter().filter(|v| *v != value).cloned().collect();
            return SelectionSet { values };
        }
        match mode {
            SelectionMode::Multiple => {
                let mut values = self.values.clone();
                values.push(value.to_string());
                SelectionSet { values }
            }
            SelectionMode::Single => SelectionSet {
                values: vec![value.to_string()],
            },
        }
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_leaves_original_untouched() {
        let original: SelectionSet = ["a", "b"].into_iter().collect();
        let next = original.committed("c", SelectionMode::Multiple);
        assert_eq!(original.values(), ["a", "b"]);
        assert_eq!(next.values(), ["a", "b", "c"]);
    }

    #[test]
    fn test_committed_removes_every_duplicate() {
        let original: SelectionSet = ["a", "b", "a"].into_iter().collect();
        let next = original.committed("a", SelectionMode::Multiple);
        assert_eq!(next.values(), ["b"]);
    }
}
