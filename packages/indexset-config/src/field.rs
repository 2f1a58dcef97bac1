//! Field descriptors and ordered, name-unique field sets
//!
//! A `FieldSet` backs every name list of an index set: include node types,
//! exclude node types, attribute fields and user fields.

use rustc_hash::FxHashSet;
use std::fmt;

use crate::config::error::{DuplicateFieldError, EmptyFieldNameError, FieldListError};

/// One indexable field (or node type alias), identified by a case-sensitive name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
}

impl FieldDescriptor {
    /// Surrounding whitespace is trimmed, so `" Article"` names `Article`
    pub fn new(name: impl Into<String>) -> Result<Self, EmptyFieldNameError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EmptyFieldNameError);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Insertion-ordered collection of fields with unique names
///
/// # Examples
///
/// ```rust
/// use indexset_config::{FieldDescriptor, FieldSet};
///
/// let mut fields = FieldSet::new();
/// fields.add(FieldDescriptor::new("id").unwrap()).unwrap();
/// assert!(fields.add(FieldDescriptor::new("id").unwrap()).is_err());
/// assert_eq!(fields.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
    names: FxHashSet<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw names, failing on the first blank name or duplicate
    pub fn from_names<I, S>(names: I) -> Result<Self, FieldListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (index, name) in names.into_iter().enumerate() {
            let field = FieldDescriptor::new(name)
                .map_err(|_| FieldListError::EmptyName { position: index + 1 })?;
            set.add(field)?;
        }
        Ok(set)
    }

    /// Names known to be non-empty and distinct (compile-time constants)
    pub(crate) fn from_trusted(names: &[&str]) -> Self {
        let mut set = Self::new();
        for name in names {
            debug_assert!(!name.is_empty() && !set.contains(name));
            set.names.insert((*name).to_string());
            set.fields.push(FieldDescriptor {
                name: (*name).to_string(),
            });
        }
        set
    }

    /// Append a field. A rejected field leaves the set unchanged.
    pub fn add(&mut self, field: FieldDescriptor) -> Result<(), DuplicateFieldError> {
        if self.names.contains(field.name()) {
            return Err(DuplicateFieldError { field: field.name });
        }
        self.names.insert(field.name.clone());
        self.fields.push(field);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields in insertion order; each call starts a fresh pass
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    pub(crate) fn to_names(&self) -> Vec<String> {
        self.names().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name).unwrap()
    }

    #[test]
    fn test_descriptor_rejects_blank_names() {
        assert_eq!(FieldDescriptor::new(""), Err(EmptyFieldNameError));
        assert_eq!(FieldDescriptor::new("   "), Err(EmptyFieldNameError));
        assert_eq!(field("nodeName").name(), "nodeName");
    }

    #[test]
    fn test_descriptor_trims_surrounding_whitespace() {
        assert_eq!(FieldDescriptor::new(" Article ").unwrap().name(), "Article");
        assert_eq!(FieldDescriptor::new("\tid\n").unwrap(), field("id"));
    }

    #[test]
    fn test_padded_duplicate_is_rejected() {
        let err = FieldSet::from_names([" Article", "Article"]).unwrap_err();
        assert_eq!(
            err,
            FieldListError::Duplicate(DuplicateFieldError {
                field: "Article".to_string()
            })
        );

        let set = FieldSet::from_names(["News ", "Article"]).unwrap();
        assert!(set.contains("News"));
        assert!(!set.contains("News "));
    }

    #[test]
    fn test_duplicate_add_keeps_size() {
        let mut set = FieldSet::new();
        set.add(field("id")).unwrap();

        let err = set.add(field("id")).unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut set = FieldSet::new();
        set.add(field("nodeName")).unwrap();
        set.add(field("nodename")).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("nodeName"));
        assert!(!set.contains("NODENAME"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let set = FieldSet::from_names(["path", "id", "level"]).unwrap();

        let first: Vec<&str> = set.names().collect();
        let second: Vec<&str> = set.iter().map(|f| f.name()).collect();
        assert_eq!(first, vec!["path", "id", "level"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_names_reports_duplicate() {
        let err = FieldSet::from_names(["Article", "News", "Article"]).unwrap_err();
        assert_eq!(
            err,
            FieldListError::Duplicate(DuplicateFieldError {
                field: "Article".to_string()
            })
        );
    }

    #[test]
    fn test_from_names_reports_blank_position() {
        let err = FieldSet::from_names(["Article", ""]).unwrap_err();
        assert_eq!(err, FieldListError::EmptyName { position: 2 });
    }

    #[test]
    fn test_empty_set() {
        let set = FieldSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("id"));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_ref_into_iterator() {
        let set = FieldSet::from_names(["a", "b"]).unwrap();
        let mut seen = Vec::new();
        for field in &set {
            seen.push(field.to_string());
        }
        assert_eq!(seen, vec!["a", "b"]);
    }
}
