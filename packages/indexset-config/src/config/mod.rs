//! Index set configuration: error types and the versioned YAML schema
//!
//! ```yaml
//! version: 1
//! index_sets:
//!   - name: External
//!     storage_path: ~/App_Data/ExamineIndexes/External/
//!     scope_root_id: 1050
//!     include_node_types: [Article, News]
//!     exclude_node_types: [News]
//!     attribute_fields: [id, nodeName]
//!     user_fields: [bodyText]
//!     max_results: 200
//! ```

pub mod error;
pub mod io;

// Re-exports
pub use error::{
    ConfigError, ConfigResult, DuplicateFieldError, EmptyFieldNameError, FieldListError,
    PathResolutionError,
};
pub use io::{IndexSetConfigV1, RawIndexSet, SCHEMA_VERSION};
