//! Shared vocabulary for `.sgoann` annotation files.
//!
//! This crate is intentionally small; its only dependency is the Unicode category table. It holds
//! the pieces that both the parser (`sgoann_syntax`) and consumers of parsed annotations agree on:
//! - the structural punctuation and rune classes of the annotation grammar (`lang`), and
//! - how symbol paths are spelled (`paths`).
//!
//! ## Notes
//!
//! - **No IO**, no global state, and no parser types.
//! - Symbol paths are plain `String`s; this crate only centralizes how they are built so that a
//!   translator querying `(*File).Read` agrees with the parser that produced it.

pub mod lang;
pub mod paths;
