//! Symbol path spelling.
//!
//! A symbol path is the key under which a signature is stored:
//! - a bare identifier (`Stdout`),
//! - a dot-joined chain for nested definitions (`Reader.Read`), or
//! - a receiver-qualified method (`(*File).Read`).
//!
//! ## Examples
//! ```rust
//! use sgoann_core::paths;
//!
//! assert_eq!(paths::method("File", "Read"), "(*File).Read");
//! assert_eq!(paths::qualify("io", ""), "io");
//! assert_eq!(paths::nested(["pkg", "Type", "Method"]), "pkg.Type.Method");
//! ```

/// Separator between nested path segments.
pub const SEPARATOR: char = '.';

/// Spell the receiver name for a pointer receiver on `type_name`: `(*T)`.
pub fn receiver(type_name: &str) -> String {
    format!("(*{type_name})")
}

/// Spell the key of a method with a pointer receiver: `(*T).M`.
pub fn method(type_name: &str, method_name: &str) -> String {
    qualify(&receiver(type_name), method_name)
}

/// Prefix `suffix` with `prefix`.
///
/// An empty suffix means "the item itself" and yields `prefix` unchanged.
pub fn qualify(prefix: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{suffix}")
    }
}

/// Join path segments with [`SEPARATOR`].
pub fn nested<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments.into_iter().fold(String::new(), |path, segment| {
        if path.is_empty() {
            segment.as_ref().to_string()
        } else {
            qualify(&path, segment.as_ref())
        }
    })
}

/// Return `true` if `path` is a receiver-qualified method key.
pub fn is_method_key(path: &str) -> bool {
    path.starts_with("(*") && path.contains(").")
}
