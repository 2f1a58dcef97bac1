//! Default field policy
//!
//! The standard content attribute list is defined here and nowhere else.
//! Defaults are applied when a descriptor is resolved, never written into the
//! loaded configuration.

use once_cell::sync::Lazy;

use crate::field::FieldSet;

/// Standard content attributes, in extraction order
pub const STANDARD_ATTRIBUTE_FIELDS: [&str; 17] = [
    "id",
    "version",
    "parentID",
    "level",
    "writerID",
    "creatorID",
    "nodeType",
    "template",
    "sortOrder",
    "createDate",
    "updateDate",
    "nodeName",
    "urlName",
    "writerName",
    "creatorName",
    "nodeTypeAlias",
    "path",
];

/// Largest edit distance still offered as a "did you mean" suggestion
const MAX_SUGGESTION_DISTANCE: usize = 3;

static STANDARD_FIELDS: Lazy<FieldSet> =
    Lazy::new(|| FieldSet::from_trusted(&STANDARD_ATTRIBUTE_FIELDS));

/// Fallback field lists for index sets configured with empty lists
pub struct DefaultFieldPolicy;

impl DefaultFieldPolicy {
    /// The standard attribute field set, built once per process
    pub fn standard_attribute_fields() -> &'static FieldSet {
        &STANDARD_FIELDS
    }

    pub fn is_standard_attribute(name: &str) -> bool {
        STANDARD_ATTRIBUTE_FIELDS.contains(&name)
    }

    /// Closest standard attribute for a name that is not one
    ///
    /// Returns `None` for standard names and for names too far from any of them.
    pub fn closest_standard_attribute(name: &str) -> Option<&'static str> {
        if Self::is_standard_attribute(name) {
            return None;
        }

        STANDARD_ATTRIBUTE_FIELDS
            .iter()
            .map(|candidate| (*candidate, levenshtein_distance(name, candidate)))
            .min_by_key(|(_, distance)| *distance)
            .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(candidate, _)| candidate)
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut matrix = vec![vec![0; s2.len() + 1]; s1.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=s2.len() {
        matrix[0][j] = j;
    }

    for (i, c1) in s1.iter().enumerate() {
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[s1.len()][s2.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_fields_fixed_order() {
        let names: Vec<&str> = DefaultFieldPolicy::standard_attribute_fields()
            .names()
            .collect();
        assert_eq!(names, STANDARD_ATTRIBUTE_FIELDS.to_vec());
        assert_eq!(names.first(), Some(&"id"));
        assert_eq!(names.last(), Some(&"path"));
    }

    #[test]
    fn test_standard_fields_are_shared() {
        let a = DefaultFieldPolicy::standard_attribute_fields();
        let b = DefaultFieldPolicy::standard_attribute_fields();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_is_standard_attribute() {
        assert!(DefaultFieldPolicy::is_standard_attribute("nodeTypeAlias"));
        assert!(!DefaultFieldPolicy::is_standard_attribute("nodetypealias"));
        assert!(!DefaultFieldPolicy::is_standard_attribute("bodyText"));
    }

    #[test]
    fn test_closest_standard_attribute() {
        assert_eq!(
            DefaultFieldPolicy::closest_standard_attribute("nodename"),
            Some("nodeName")
        );
        assert_eq!(
            DefaultFieldPolicy::closest_standard_attribute("createdDate"),
            Some("createDate")
        );
        assert_eq!(DefaultFieldPolicy::closest_standard_attribute("id"), None);
        assert_eq!(
            DefaultFieldPolicy::closest_standard_attribute("completelyUnrelated"),
            None
        );
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("nodeName", "nodeName"), 0);
    }
}
