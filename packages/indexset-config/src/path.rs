//! Storage path resolution
//!
//! The storage path of an index set is a logical path. When the host serves
//! requests it supplies a [`PathResolver`] that maps the logical path into its
//! document root; without one the logical path is used verbatim.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::config::error::PathResolutionError;

/// Maps a logical storage path to a filesystem path
pub trait PathResolver {
    fn map_path(&self, logical_path: &str) -> Result<PathBuf, PathResolutionError>;
}

/// Resolves application-relative paths (`~/App_Data/...`, `/App_Data/...`)
/// against a document root
///
/// # Examples
///
/// ```rust
/// use indexset_config::{DocumentRootResolver, PathResolver};
/// use std::path::PathBuf;
///
/// let resolver = DocumentRootResolver::new("/srv/site");
/// let mapped = resolver.map_path("~/App_Data/Indexes/External/").unwrap();
/// assert_eq!(mapped, PathBuf::from("/srv/site/App_Data/Indexes/External"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRootResolver {
    root: PathBuf,
}

impl DocumentRootResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for DocumentRootResolver {
    fn map_path(&self, logical_path: &str) -> Result<PathBuf, PathResolutionError> {
        let trimmed = logical_path.trim();
        if trimmed.is_empty() {
            return Err(PathResolutionError::new(logical_path, "path is empty"));
        }

        let normalized = trimmed.replace('\\', "/");
        let relative = match normalized.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            Some(_) => {
                return Err(PathResolutionError::new(
                    logical_path,
                    "'~' must be followed by '/'",
                ))
            }
            None => normalized.as_str(),
        }
        .trim_start_matches('/');

        let mut mapped = self.root.clone();
        let mut depth = 0usize;
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => {
                    mapped.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth == 0 {
                        return Err(PathResolutionError::new(
                            logical_path,
                            "path escapes the document root",
                        ));
                    }
                    mapped.pop();
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathResolutionError::new(
                        logical_path,
                        "physical paths cannot be mapped",
                    ))
                }
            }
        }

        Ok(mapped)
    }
}

/// Location of an index set's storage directory
///
/// Computing a `StorageDirectory` never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDirectory {
    path: PathBuf,
}

impl StorageDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for StorageDirectory {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for StorageDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
