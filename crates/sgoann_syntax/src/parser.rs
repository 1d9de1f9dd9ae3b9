//! Recursive-descent parser for `.sgoann` annotation files.
//!
//! Grammar:
//!
//! ```text
//! File       -> List EOF
//! List       -> (Separator* Item)* Separator*
//! Separator  -> whitespace | ";"
//! Item       -> Name Def Terminator?
//! Name       -> Identifier | Receiver
//! Receiver   -> "(" "*" Identifier ")"
//! Def        -> TypeText | "{" List "}"
//! TypeText   -> /[^{\n;][^\n;]*/   (trimmed)
//! Terminator -> ";" | "\n"
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use sgoann_syntax::parser;
//!
//! let map = parser::parse("pkg { Type { Method sig } }").unwrap();
//! assert_eq!(map["pkg.Type.Method"], "sig");
//! ```

use std::collections::BTreeMap;

use sgoann_core::lang::punctuation::{self, PunctuationId};
use sgoann_core::lang::runes;
use sgoann_core::paths;

use crate::diagnostics::AnnotationError;
use crate::lexer::{Token, Tokenizer};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module while keeping each file focused on one concern.

include!("parser/core.rs");
include!("parser/items.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
