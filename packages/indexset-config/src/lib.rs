//! Index Set Configuration
//!
//! Indexing policy for named content indexes ("index sets"): where each index
//! is stored, which content nodes and node types are eligible, and which
//! attribute and user fields are extracted. The indexing pipeline looks an
//! index set up by name and consults it for every content item.
//!
//! ## Resolution rules
//!
//! 1. **Exclude wins**: a node type in `exclude_node_types` is never indexed.
//! 2. **Include is an allow-list** when non-empty; empty means all types.
//! 3. **Scope**: with a scope root only that node and its descendants qualify.
//! 4. **Defaults at resolution time**: empty attribute fields resolve to the
//!    standard attribute list, empty user fields to every user field the
//!    content system reports. Loading never injects defaults.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use indexset_config::{DocumentRootResolver, IndexSetRegistry};
//!
//! let mut registry = IndexSetRegistry::from_yaml("config/index_sets.yaml")?;
//! if let Some(internal) = registry.get_mut("Internal") {
//!     internal.set_storage_directory("/var/lib/site/indexes/internal")?;
//! }
//! let registry = registry.into_shared();
//!
//! let external = registry.get("External").unwrap();
//! let resolver = DocumentRootResolver::new("/srv/site");
//! let dir = external.storage_directory(Some(&resolver))?;
//!
//! if external.should_index(node_id, "Article", &content_tree) {
//!     for field in external.resolved_attribute_fields() {
//!         // extract field.name()
//!     }
//! }
//! ```

pub mod config;
pub mod content;
pub mod field;
pub mod index_set;
pub mod path;
pub mod policy;
pub mod registry;

pub use config::{
    ConfigError, ConfigResult, DuplicateFieldError, EmptyFieldNameError, FieldListError,
    IndexSetConfigV1, PathResolutionError, RawIndexSet,
};
pub use content::ContentTree;
pub use field::{FieldDescriptor, FieldSet};
pub use index_set::{
    IndexSetBuilder, IndexSetDescriptor, StoragePath, StorageSource, DEFAULT_MAX_RESULTS,
    MAX_RESULTS_LIMIT,
};
pub use path::{DocumentRootResolver, PathResolver, StorageDirectory};
pub use policy::{DefaultFieldPolicy, STANDARD_ATTRIBUTE_FIELDS};
pub use registry::IndexSetRegistry;
