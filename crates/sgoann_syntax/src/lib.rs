//! Syntax frontend for `.sgoann` annotation files: tokenizer, parser, diagnostics.
//!
//! An annotation file attaches type signatures to symbols of a package the translator cannot
//! analyze itself. Parsing yields a flat map from symbol path to the verbatim signature text.
//!
//! ## Notes
//! - This crate is "syntax-only": signature text is captured as-is and never interpreted.
//! - Rune classes and symbol path spelling come from `sgoann_core`.
//!
//! ## Examples
//! ```rust
//! use sgoann_syntax::parser;
//!
//! let map = parser::parse("(*File) { Read func(b []byte) (n int, err error) }").unwrap();
//! assert_eq!(map["(*File).Read"], "func(b []byte) (n int, err error)");
//! ```
//!
//! ## See also
//! - `sgoann::Annotations` for the immutable store built on top of the parsed map.

pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use diagnostics::{AnnotationError, ErrorKind};
pub use parser::{AnnotationMap, parse};
