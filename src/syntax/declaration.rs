use smol_str::SmolStr;

use crate::base::{Field, Position};

/// One `name: value` entry of a declaration, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationEntry {
    pub name: SmolStr,
    pub value: String,
    /// Where the entry started, when it was read from a file
    pub position: Option<Position>,
}

/// An unvalidated alphabet declaration.
///
/// Entries are kept in the order they were declared, duplicates and unknown
/// names included; rejecting those is the validator's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeclaration {
    entries: Vec<DeclarationEntry>,
}

impl RawDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry (builder-style)
    pub fn with(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append an entry with no source position
    pub fn push(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) {
        self.entries.push(DeclarationEntry {
            name: name.into(),
            value: value.into(),
            position: None,
        });
    }

    pub(crate) fn push_at(&mut self, name: impl Into<SmolStr>, value: impl Into<String>, position: Position) {
        self.entries.push(DeclarationEntry {
            name: name.into(),
            value: value.into(),
            position: Some(position),
        });
    }

    /// Extend the value of the most recent entry with a continuation line.
    ///
    /// Returns `false` when there is no entry to continue.
    pub(crate) fn continue_last(&mut self, text: &str) -> bool {
        match self.entries.last_mut() {
            Some(entry) => {
                if !entry.value.trim().is_empty() {
                    entry.value.push(' ');
                }
                entry.value.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[DeclarationEntry] {
        &self.entries
    }

    /// Value of the first entry declaring `field`
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name.trim() == field.as_str())
            .map(|entry| entry.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order_and_duplicates() {
        let decl = RawDeclaration::new()
            .with("variables", "x y")
            .with("variables", "z");
        assert_eq!(decl.entries().len(), 2);
        assert_eq!(decl.get(Field::Variables), Some("x y"));
    }

    #[test]
    fn test_continue_last() {
        let mut decl = RawDeclaration::new();
        assert!(!decl.continue_last("orphan"));
        decl.push("formula", "P(x,");
        assert!(decl.continue_last("y)"));
        assert_eq!(decl.get(Field::Formula), Some("P(x, y)"));
    }
}
