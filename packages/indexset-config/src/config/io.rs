//! Configuration I/O (YAML schema)
//!
//! Defines the YAML schema types. Validation into descriptors lives in
//! `index_set.rs`, file loading in `registry.rs`.

use serde::{Deserialize, Serialize};

/// Current schema version
pub const SCHEMA_VERSION: u32 = 1;

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSetConfigV1 {
    /// Schema version (always 1 for v1); optional here so a missing value gets
    /// a dedicated error instead of a parser message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default)]
    pub index_sets: Vec<RawIndexSet>,
}

/// One index set as written by the operator
///
/// Every attribute is optional at this level. Required ones are checked by
/// `IndexSetDescriptor::from_raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawIndexSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_root_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_node_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_node_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_entry_parses() {
        let yaml = r#"
version: 1
index_sets:
  - name: Internal
    storage_path: ~/App_Data/Indexes/Internal
"#;
        let config: IndexSetConfigV1 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.version, Some(1));
        assert_eq!(config.index_sets.len(), 1);

        let raw = &config.index_sets[0];
        assert_eq!(raw.name.as_deref(), Some("Internal"));
        assert!(raw.include_node_types.is_empty());
        assert_eq!(raw.scope_root_id, None);
        assert_eq!(raw.max_results, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
version: 1
index_sets:
  - name: Internal
    storage_path: ~/x
    include_node_type: [Article]
"#;
        assert!(serde_yaml::from_str::<IndexSetConfigV1>(yaml).is_err());
    }

    #[test]
    fn test_missing_version_parses_as_none() {
        let config: IndexSetConfigV1 = serde_yaml::from_str("index_sets: []").unwrap();
        assert_eq!(config.version, None);
    }

    #[test]
    fn test_serialization_skips_empty_lists() {
        let raw = RawIndexSet {
            name: Some("External".to_string()),
            storage_path: Some("~/idx".to_string()),
            exclude_node_types: vec!["News".to_string()],
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&raw).unwrap();
        assert!(yaml.contains("exclude_node_types"));
        assert!(!yaml.contains("include_node_types"));
        assert!(!yaml.contains("scope_root_id"));
    }
}
