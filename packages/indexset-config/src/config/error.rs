//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required attribute absent or blank
    #[error("Missing required field '{field}' in {location}. {hint}")]
    MissingField {
        location: String,
        field: &'static str,
        hint: String,
    },

    /// Same name listed twice in one field list
    #[error("Duplicate entry '{field}' in '{list}' of {location}. Remove the repeated entry; duplicates are never merged silently.")]
    DuplicateField {
        location: String,
        list: &'static str,
        field: String,
    },

    /// Empty name in a field list
    #[error("Entry #{position} of '{list}' in {location} has an empty name")]
    EmptyFieldName {
        location: String,
        list: &'static str,
        position: usize,
    },

    /// Two index sets share a name
    #[error("Index set '{0}' is defined more than once. Index set names must be unique.")]
    DuplicateIndexSet(String),

    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Storage path could not be mapped
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a missing-field error for a required index set attribute
    pub fn missing_field(location: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            location: location.into(),
            field,
            hint: format!("'{}' is required and has no default.", field),
        }
    }

    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Attach index set and list context to a field list failure
    pub fn field_list(
        location: impl Into<String>,
        list: &'static str,
        err: FieldListError,
    ) -> Self {
        match err {
            FieldListError::EmptyName { position } => Self::EmptyFieldName {
                location: location.into(),
                list,
                position,
            },
            FieldListError::Duplicate(DuplicateFieldError { field }) => Self::DuplicateField {
                location: location.into(),
                list,
                field,
            },
        }
    }
}

/// A field with the same name is already in the set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{field}' is already present in this field set")]
pub struct DuplicateFieldError {
    pub field: String,
}

/// Field names must contain at least one non-whitespace character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Field name must not be empty")]
pub struct EmptyFieldNameError;

/// Failure while building a field set from a raw name list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldListError {
    /// 1-based position of the offending entry
    #[error("Entry #{position} has an empty field name")]
    EmptyName { position: usize },

    #[error(transparent)]
    Duplicate(#[from] DuplicateFieldError),
}

/// Storage path could not be mapped to a directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot resolve storage path '{path}': {reason}")]
pub struct PathResolutionError {
    pub path: String,
    pub reason: String,
}

impl PathResolutionError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
