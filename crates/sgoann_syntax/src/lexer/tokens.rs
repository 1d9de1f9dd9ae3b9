//! Token type for the annotation tokenizer.
//!
//! The annotation grammar is rune-oriented, so a token is a single decoded rune plus the position
//! it was read from. Tokens are `Copy` and produced on demand.

use miette::SourceSpan;
use sgoann_core::lang::punctuation::{self, PunctuationId};

/// A single rune read from an annotation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Decoded rune.
    pub rune: char,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in runes.
    pub column: usize,
    /// Length of the rune's UTF-8 encoding in bytes.
    pub size: usize,
    /// Byte offset of the rune in the source.
    pub byte_offset: usize,
    /// Rune offset of the rune in the source.
    pub rune_offset: usize,
}

impl Token {
    /// Byte span covered by this token.
    pub fn span(&self) -> SourceSpan {
        SourceSpan::from((self.byte_offset, self.size))
    }

    /// Return the punctuation id, if this rune is structural.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        punctuation::from_char(self.rune)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }
}
