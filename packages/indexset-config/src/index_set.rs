//! Index set descriptor
//!
//! One descriptor per named index: where the index is stored, which subtree
//! and node types are eligible, and which fields are extracted. Descriptors
//! are validated once when loaded and read by the indexing pipeline for every
//! content item it processes.
//!
//! # Examples
//!
//! ```rust
//! use indexset_config::IndexSetDescriptor;
//!
//! let external = IndexSetDescriptor::builder("External", "~/App_Data/Indexes/External")
//!     .include_node_types(["Article", "News"])
//!     .exclude_node_types(["News"])
//!     .build()
//!     .unwrap();
//!
//! assert!(external.should_index_node_type("Article"));
//! assert!(!external.should_index_node_type("News"));
//! assert!(!external.should_index_node_type("Blog"));
//! ```

use std::borrow::Cow;
use std::path::PathBuf;

use crate::config::error::{ConfigError, ConfigResult, PathResolutionError};
use crate::config::io::RawIndexSet;
use crate::content::ContentTree;
use crate::field::FieldSet;
use crate::path::{PathResolver, StorageDirectory};
use crate::policy::DefaultFieldPolicy;

/// Default maximum search results per index set
pub const DEFAULT_MAX_RESULTS: u32 = 200;

/// Upper bound accepted for `max_results`
pub const MAX_RESULTS_LIMIT: u32 = 10_000;

// ═══════════════════════════════════════════════════════════════════════════
// Storage Path
// ═══════════════════════════════════════════════════════════════════════════

/// Where the effective storage path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSource {
    /// Value loaded from configuration
    Configured,
    /// Runtime override, never persisted
    Override,
}

/// Configured storage path plus an optional runtime override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    configured: String,
    runtime_override: Option<String>,
}

impl StoragePath {
    pub fn new(configured: impl Into<String>) -> Self {
        Self {
            configured: configured.into(),
            runtime_override: None,
        }
    }

    /// The override if one was set, otherwise the configured value
    pub fn effective(&self) -> &str {
        self.runtime_override.as_deref().unwrap_or(&self.configured)
    }

    pub fn configured(&self) -> &str {
        &self.configured
    }

    pub fn source(&self) -> StorageSource {
        if self.runtime_override.is_some() {
            StorageSource::Override
        } else {
            StorageSource::Configured
        }
    }

    /// Replace the override, returning the previous one
    pub fn set_override(&mut self, path: impl Into<String>) -> Option<String> {
        self.runtime_override.replace(path.into())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Descriptor
// ═══════════════════════════════════════════════════════════════════════════

/// Validated indexing policy for one named index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSetDescriptor {
    name: String,
    storage: StoragePath,
    scope_root_id: Option<i32>,
    include_node_types: FieldSet,
    exclude_node_types: FieldSet,
    attribute_fields: FieldSet,
    user_fields: FieldSet,
    max_results: u32,
}

impl IndexSetDescriptor {
    /// Start building a descriptor from its two required attributes
    pub fn builder(name: impl Into<String>, storage_path: impl Into<String>) -> IndexSetBuilder {
        IndexSetBuilder::new(name, storage_path)
    }

    /// Validate a raw entry
    ///
    /// `position` is the 1-based place of the entry in its file and only
    /// appears in errors raised before the name is known.
    pub fn from_raw(raw: RawIndexSet, position: usize) -> ConfigResult<Self> {
        let name = raw
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::missing_field(format!("index set #{}", position), "name")
            })?;
        let location = format!("index set '{}'", name);

        let storage_path = raw
            .storage_path
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_field(location.clone(), "storage_path"))?;

        let field_set = |list: &'static str, names: Vec<String>| {
            FieldSet::from_names(names)
                .map_err(|err| ConfigError::field_list(location.clone(), list, err))
        };
        let include_node_types = field_set("include_node_types", raw.include_node_types)?;
        let exclude_node_types = field_set("exclude_node_types", raw.exclude_node_types)?;
        let attribute_fields = field_set("attribute_fields", raw.attribute_fields)?;
        let user_fields = field_set("user_fields", raw.user_fields)?;

        let max_results = raw.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        if max_results < 1 || max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_results",
                max_results,
                1,
                MAX_RESULTS_LIMIT,
                format!(
                    "Omit it from {} to use the default of {}",
                    location, DEFAULT_MAX_RESULTS
                ),
            ));
        }

        for field in attribute_fields.names() {
            if !DefaultFieldPolicy::is_standard_attribute(field) {
                match DefaultFieldPolicy::closest_standard_attribute(field) {
                    Some(suggestion) => tracing::warn!(
                        "{}: attribute field '{}' is not a standard attribute (did you mean '{}'?)",
                        location,
                        field,
                        suggestion
                    ),
                    None => tracing::warn!(
                        "{}: attribute field '{}' is not a standard attribute",
                        location,
                        field
                    ),
                }
            }
        }

        if include_node_types
            .names()
            .any(|alias| exclude_node_types.contains(alias))
        {
            tracing::debug!(
                "{}: node types listed in both include and exclude are excluded",
                location
            );
        }

        Ok(Self {
            name,
            storage: StoragePath::new(storage_path),
            scope_root_id: raw.scope_root_id,
            include_node_types,
            exclude_node_types,
            attribute_fields,
            user_fields,
            max_results,
        })
    }

    /// Configured values as a raw entry; runtime overrides are left out
    pub fn to_raw(&self) -> RawIndexSet {
        RawIndexSet {
            name: Some(self.name.clone()),
            storage_path: Some(self.storage.configured().to_string()),
            scope_root_id: self.scope_root_id,
            include_node_types: self.include_node_types.to_names(),
            exclude_node_types: self.exclude_node_types.to_names(),
            attribute_fields: self.attribute_fields.to_names(),
            user_fields: self.user_fields.to_names(),
            max_results: (self.max_results != DEFAULT_MAX_RESULTS).then_some(self.max_results),
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective logical storage path
    pub fn storage_path(&self) -> &str {
        self.storage.effective()
    }

    pub fn configured_storage_path(&self) -> &str {
        self.storage.configured()
    }

    pub fn storage_source(&self) -> StorageSource {
        self.storage.source()
    }

    pub fn scope_root_id(&self) -> Option<i32> {
        self.scope_root_id
    }

    pub fn include_node_types(&self) -> &FieldSet {
        &self.include_node_types
    }

    pub fn exclude_node_types(&self) -> &FieldSet {
        &self.exclude_node_types
    }

    /// Attribute fields as configured (possibly empty)
    pub fn attribute_fields(&self) -> &FieldSet {
        &self.attribute_fields
    }

    /// User fields as configured (possibly empty)
    pub fn user_fields(&self) -> &FieldSet {
        &self.user_fields
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    // ───────────────────────────────────────────────────────────────────────
    // Storage
    // ───────────────────────────────────────────────────────────────────────

    /// Location of the index directory
    ///
    /// With a resolver (request-serving host) the effective storage path is
    /// mapped through it; without one it is used as a filesystem path as is.
    /// The directory is not created.
    pub fn storage_directory(
        &self,
        resolver: Option<&dyn PathResolver>,
    ) -> Result<StorageDirectory, PathResolutionError> {
        let logical = self.storage.effective();
        let path = match resolver {
            Some(resolver) => resolver.map_path(logical)?,
            None => PathBuf::from(logical),
        };
        Ok(StorageDirectory::new(path))
    }

    /// Override the storage path for the rest of the process lifetime
    ///
    /// Must happen before the descriptor is shared with readers. The
    /// configured value is kept for export but no longer resolved. A blank
    /// path is rejected and leaves the current storage path in place.
    pub fn set_storage_directory(&mut self, path: impl Into<String>) -> ConfigResult<()> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ConfigError::missing_field(
                format!("storage override of index set '{}'", self.name),
                "storage_path",
            ));
        }
        tracing::info!(
            "Index set '{}': storage path overridden to '{}' (configured '{}')",
            self.name,
            path,
            self.storage.configured()
        );
        self.storage.set_override(path);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────────────
    // Eligibility
    // ───────────────────────────────────────────────────────────────────────

    /// Whether content of type `alias` may be indexed
    ///
    /// Exclusions are checked first and always win. A non-empty include list
    /// then acts as an allow-list; an empty one allows every type.
    pub fn should_index_node_type(&self, alias: &str) -> bool {
        if self.exclude_node_types.contains(alias) {
            return false;
        }
        self.include_node_types.is_empty() || self.include_node_types.contains(alias)
    }

    /// Whether `node_id` lies in the configured subtree, given its ancestors
    pub fn is_within_scope(&self, node_id: i32, ancestry: &[i32]) -> bool {
        match self.scope_root_id {
            None => true,
            Some(root) => root == node_id || ancestry.contains(&root),
        }
    }

    /// Type eligibility, then scope; ancestry is only fetched when needed
    pub fn should_index(&self, node_id: i32, alias: &str, tree: &dyn ContentTree) -> bool {
        if !self.should_index_node_type(alias) {
            return false;
        }
        match self.scope_root_id {
            None => true,
            Some(root) if root == node_id => true,
            Some(_) => self.is_within_scope(node_id, &tree.ancestors(node_id)),
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Field resolution
    // ───────────────────────────────────────────────────────────────────────

    /// Configured attribute fields, or the standard list when none are configured
    pub fn resolved_attribute_fields(&self) -> &FieldSet {
        if self.attribute_fields.is_empty() {
            DefaultFieldPolicy::standard_attribute_fields()
        } else {
            &self.attribute_fields
        }
    }

    /// Configured user fields, or `all_user_fields` when none are configured
    pub fn resolved_user_fields<'a>(&'a self, all_user_fields: &'a FieldSet) -> &'a FieldSet {
        if self.user_fields.is_empty() {
            all_user_fields
        } else {
            &self.user_fields
        }
    }

    /// [`resolved_user_fields`](Self::resolved_user_fields) fed from the
    /// content tree; the tree is not queried when user fields are configured
    pub fn user_fields_for(&self, tree: &dyn ContentTree) -> Cow<'_, FieldSet> {
        if self.user_fields.is_empty() {
            Cow::Owned(tree.user_fields())
        } else {
            Cow::Borrowed(&self.user_fields)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════

/// Programmatic construction with the same validation as file loading
#[derive(Debug, Clone)]
pub struct IndexSetBuilder {
    raw: RawIndexSet,
}

impl IndexSetBuilder {
    pub fn new(name: impl Into<String>, storage_path: impl Into<String>) -> Self {
        Self {
            raw: RawIndexSet {
                name: Some(name.into()),
                storage_path: Some(storage_path.into()),
                ..Default::default()
            },
        }
    }

    pub fn scope_root_id(mut self, id: i32) -> Self {
        self.raw.scope_root_id = Some(id);
        self
    }

    pub fn include_node_types<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.include_node_types = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_node_types<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.exclude_node_types = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn attribute_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.attribute_fields = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn user_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.user_fields = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.raw.max_results = Some(max_results);
        self
    }

    pub fn build(self) -> ConfigResult<IndexSetDescriptor> {
        IndexSetDescriptor::from_raw(self.raw, 1)
    }
}
