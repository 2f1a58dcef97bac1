//! Named index set registry
//!
//! Holds every configured index set of a deployment, keyed by name, in file
//! order. Storage overrides go through [`IndexSetRegistry::get_mut`] before the
//! registry is published with [`IndexSetRegistry::into_shared`]; afterwards it
//! is read-only.

use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::io::{IndexSetConfigV1, SCHEMA_VERSION};
use crate::index_set::IndexSetDescriptor;

#[derive(Debug, Clone, Default)]
pub struct IndexSetRegistry {
    sets: Vec<IndexSetDescriptor>,
    by_name: FxHashMap<String, usize>,
}

impl IndexSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loading index sets from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: IndexSetConfigV1 = serde_yaml::from_str(content)?;
        Self::from_config(config)
    }

    /// Validate every entry; the first invalid entry aborts the load
    pub fn from_config(config: IndexSetConfigV1) -> ConfigResult<Self> {
        match config.version {
            None => return Err(ConfigError::MissingVersion),
            Some(SCHEMA_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![SCHEMA_VERSION],
                })
            }
        }

        let mut registry = Self::new();
        for (index, raw) in config.index_sets.into_iter().enumerate() {
            let descriptor = IndexSetDescriptor::from_raw(raw, index + 1)?;
            tracing::debug!(
                "Loaded index set '{}' (storage '{}', scope {:?})",
                descriptor.name(),
                descriptor.storage_path(),
                descriptor.scope_root_id()
            );
            registry.insert(descriptor)?;
        }

        tracing::info!("Loaded {} index set(s)", registry.len());
        Ok(registry)
    }

    /// Export configured values; storage overrides are not written
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let config = IndexSetConfigV1 {
            version: Some(SCHEMA_VERSION),
            index_sets: self.sets.iter().map(IndexSetDescriptor::to_raw).collect(),
        };
        Ok(serde_yaml::to_string(&config)?)
    }

    pub fn insert(&mut self, descriptor: IndexSetDescriptor) -> ConfigResult<()> {
        if self.by_name.contains_key(descriptor.name()) {
            return Err(ConfigError::DuplicateIndexSet(descriptor.name().to_string()));
        }
        self.by_name
            .insert(descriptor.name().to_string(), self.sets.len());
        self.sets.push(descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&IndexSetDescriptor> {
        self.by_name.get(name).map(|&index| &self.sets[index])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut IndexSetDescriptor> {
        match self.by_name.get(name) {
            Some(&index) => self.sets.get_mut(index),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexSetDescriptor> {
        self.sets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sets.iter().map(IndexSetDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Publish to reader threads; no further mutation is possible
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<'a> IntoIterator for &'a IndexSetRegistry {
    type Item = &'a IndexSetDescriptor;
    type IntoIter = std::slice::Iter<'a, IndexSetDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
