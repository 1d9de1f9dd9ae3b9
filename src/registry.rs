//! Per-package annotation registry.
//!
//! A translator needs annotations for every imported package it cannot analyze. The registry
//! keys [`Annotations`] by package import path (`os`, `net/http`, ...). Sources added for the same
//! package are merged, later entries replacing earlier ones, so a built-in table and a user file
//! combine exactly like two items in one file.
//!
//! ## On-disk layout
//!
//! [`AnnotationRegistry::load_dir`] walks a directory tree and treats every `*.sgoann` file as the
//! annotations of the package named by its relative path without the extension:
//!
//! ```text
//! annotations/
//!   os.sgoann            -> package "os"
//!   net/http.sgoann      -> package "net/http"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use sgoann_syntax::AnnotationError;
use thiserror::Error;

use crate::annotations::Annotations;

/// File extension of annotation files.
pub const ANNOTATION_EXTENSION: &str = "sgoann";

/// Maximum annotation file size (16 MB)
///
/// Annotation files are small hand-written tables; anything larger is almost
/// certainly the wrong file.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Errors while building a registry from files.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    #[error("I/O error on {}: {source}", path.display())]
    #[diagnostic(code(sgoann::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse annotations for package `{package}` ({})", path.display())]
    #[diagnostic(code(sgoann::registry))]
    Parse {
        package: String,
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        error: AnnotationError,
    },

    #[error("{} is {size} bytes, larger than the {limit} byte limit", path.display())]
    #[diagnostic(code(sgoann::too_large))]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("cannot derive a package path from {}", path.display())]
    #[diagnostic(code(sgoann::package_path))]
    InvalidPackagePath { path: PathBuf },
}

/// Package import path → annotations.
#[derive(Debug, Clone, Default)]
pub struct AnnotationRegistry {
    packages: BTreeMap<String, Annotations>,
}

impl AnnotationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` and merge it into `package`.
    ///
    /// ## Errors
    /// Returns the parse error; the registry is left unchanged in that case.
    pub fn add_source<S: AsRef<[u8]> + ?Sized>(&mut self, package: &str, source: &S) -> Result<(), AnnotationError> {
        let annotations = Annotations::parse(source)?;
        self.insert(package, annotations);
        Ok(())
    }

    /// Merge `annotations` into `package`.
    pub fn insert(&mut self, package: &str, annotations: Annotations) {
        tracing::debug!(package, entries = annotations.len(), "registering annotations");
        let merged = match self.packages.get(package) {
            Some(existing) => existing.merge(&annotations),
            None => annotations,
        };
        self.packages.insert(package.to_string(), merged);
    }

    /// Annotations of one package.
    pub fn package(&self, package: &str) -> Option<&Annotations> {
        self.packages.get(package)
    }

    /// Signature of `symbol` in `package`.
    pub fn lookup(&self, package: &str, symbol: &str) -> Option<&str> {
        self.package(package)?.get(symbol)
    }

    /// Iterate over `(package, annotations)` in package order.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &Annotations)> {
        self.packages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Load every `*.sgoann` file under `root`.
    ///
    /// Files are visited in sorted path order so merges are deterministic. Symbolic links are
    /// not followed.
    ///
    /// ## Errors
    /// Fails on the first unreadable entry, file over [`MAX_SOURCE_SIZE`] or malformed file.
    #[tracing::instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn load_dir(root: impl AsRef<Path>) -> Result<Self, RegistryError> {
        Self::load_dir_with_limit(root.as_ref(), MAX_SOURCE_SIZE)
    }

    fn load_dir_with_limit(root: &Path, limit: u64) -> Result<Self, RegistryError> {
        let mut files = Vec::new();
        collect_annotation_files(root, &mut files)?;
        files.sort();

        let mut registry = Self::new();
        for file in files {
            let package = package_path(root, &file)?;
            let source = read_limited(&file, limit)?;
            registry
                .add_source(&package, &source)
                .map_err(|error| RegistryError::Parse { package, path: file, error })?;
        }
        tracing::debug!(packages = registry.len(), "annotation directory loaded");
        Ok(registry)
    }
}

fn collect_annotation_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), RegistryError> {
    let io_err = |source| RegistryError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_type = entry.file_type().map_err(io_err)?;
        let path = entry.path();
        if file_type.is_symlink() {
            tracing::debug!(path = %path.display(), "skipping symbolic link");
        } else if file_type.is_dir() {
            collect_annotation_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == ANNOTATION_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

/// Read `path`, rejecting files larger than `limit` bytes.
pub(crate) fn read_limited(path: &Path, limit: u64) -> Result<Vec<u8>, RegistryError> {
    let io_err = |source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > limit {
        return Err(RegistryError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    fs::read(path).map_err(io_err)
}

/// Derive the package import path of `file` relative to `root`: `root/net/http.sgoann` → `net/http`.
pub fn package_path(root: &Path, file: &Path) -> Result<String, RegistryError> {
    let invalid = || RegistryError::InvalidPackagePath {
        path: file.to_path_buf(),
    };
    let relative = file.strip_prefix(root).map_err(|_| invalid())?.with_extension("");
    let segments = relative
        .components()
        .map(|component| component.as_os_str().to_str().ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()?;
    if segments.is_empty() {
        return Err(invalid());
    }
    Ok(segments.join("/"))
}
