//! Annotation-language vocabulary.
//!
//! The grammar of `.sgoann` files is rune-oriented: there are no keywords and no multi-character
//! operators, only a handful of structural runes and a few rune classes.
//!
//! ## Examples
//! ```rust
//! use sgoann_core::lang::punctuation::{self, PunctuationId};
//! use sgoann_core::lang::runes;
//!
//! assert_eq!(punctuation::from_char('{'), Some(PunctuationId::LBrace));
//! assert!(runes::is_name_start('('));
//! assert!(!runes::is_ident_continue('_'));
//! ```

pub mod punctuation;
pub mod runes;
