#![forbid(unsafe_code)]
//! sgoann: type annotations for code a translator cannot analyze.
//!
//! An `.sgoann` file declares the type signatures of a package's functions, fields, methods and
//! nested types. This crate parses such files into an immutable [`Annotations`] store, groups
//! stores per package in an [`AnnotationRegistry`], and ships the `sgoann` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod annotations;
pub mod cli;
pub mod config;
pub mod registry;
pub mod render;
pub mod version;

pub use sgoann_core::paths;
pub use sgoann_syntax::{diagnostics, lexer, parser};

pub use annotations::Annotations;
pub use config::{OutputConfig, OutputFormat};
pub use registry::{AnnotationRegistry, RegistryError};
pub use sgoann_syntax::{AnnotationError, ErrorKind};
