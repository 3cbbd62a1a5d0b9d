//! Filesystem-based resource provider.
//!
//! Two modes are supported. An *open* provider resolves relative paths against
//! its base directory and accepts absolute paths as-is, which is what a user's
//! working directory needs. A *confined* provider refuses anything that would
//! escape its base directory, which is what a bundled preset directory needs.

use deckle_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path; `Some` only for confined providers whose base exists.
    canonical_base: Option<PathBuf>,
    confined: bool,
}

impl FilesystemResourceProvider {
    /// Creates an open provider rooted at `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            canonical_base: None,
            confined: false,
        }
    }

    /// Creates a provider that only serves files located under `base_path`.
    pub fn confined<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
            confined: true,
        }
    }

    /// Returns the base path for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve_path(&self, path: &str) -> Option<PathBuf> {
        let requested = Path::new(path);
        if !self.confined {
            return Some(self.base_path.join(requested));
        }

        if requested.is_absolute() {
            return None;
        }
        let full_path = self.base_path.join(requested);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Nothing to canonicalize against; reject any parent component outright.
        if requested
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }
        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside {})", path, self.base_path.display())))?;

        if !full_path.is_file() {
            return Err(ResourceError::NotFound(path.to_string()));
        }

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: full_path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
