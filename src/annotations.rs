//! Immutable store of parsed annotations.
//!
//! [`Annotations`] wraps the map produced by one parse. It is built once and only read afterwards:
//! a translator walking a syntax tree asks it for the signature of an exact symbol path (a bare
//! name, a dotted nested path or a `(*Type).Method` key). There is no prefix or partial lookup.
//!
//! ## Examples
//!
//! ```rust
//! use sgoann::Annotations;
//!
//! let anns: Annotations = "Stdout *File\n(*File) {\n  Read func(b []byte) (n int, err error)\n}".parse().unwrap();
//! assert_eq!(anns.get("Stdout"), Some("*File"));
//! assert_eq!(anns.method("File", "Read"), Some("func(b []byte) (n int, err error)"));
//! assert_eq!(anns.get("File"), None);
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use sgoann_core::paths;
use sgoann_syntax::{AnnotationError, AnnotationMap, parser};

/// Symbol path → signature text, read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    entries: AnnotationMap,
}

impl Annotations {
    /// Parse an annotation source.
    ///
    /// ## Errors
    /// Returns the first [`AnnotationError`]; nothing is kept from a failed parse.
    pub fn parse<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Self, AnnotationError> {
        parser::parse(source).map(Self::from_map)
    }

    /// Wrap an already-built map.
    pub fn from_map(entries: AnnotationMap) -> Self {
        Self { entries }
    }

    /// Signature for an exact symbol path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Signature of the method `method_name` with a pointer receiver on `type_name`.
    pub fn method(&self, type_name: &str, method_name: &str) -> Option<&str> {
        self.get(&paths::method(type_name, method_name))
    }

    /// Signature for a nested path given as segments (`["Reader", "Read"]`).
    pub fn nested<I, S>(&self, segments: I) -> Option<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.get(&paths::nested(segments))
    }

    /// Return `true` if `path` has a signature.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, signature)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over symbol paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Combine two stores into a new one. Entries of `other` replace entries of `self` with the
    /// same path, the same way a later item replaces an earlier one within a single file.
    pub fn merge(&self, other: &Annotations) -> Annotations {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Annotations { entries }
    }

    /// Unwrap into the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl FromStr for Annotations {
    type Err = AnnotationError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Annotations::parse(source)
    }
}

impl<'a> IntoIterator for &'a Annotations {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
