//! Tokenizer for `.sgoann` annotation sources.
//!
//! The tokenizer decodes one UTF-8 rune at a time from an in-memory byte slice and hands it out
//! with its position (line, rune-based column, byte offset, rune offset). It keeps a single-slot
//! lookahead so the parser can `peek` before deciding which production to follow.
//!
//! ## Notes
//!
//! - Decoding is lazy: an invalid byte sequence is only reported when the position holding it is
//!   peeked or consumed. Everything before it tokenizes normally.
//! - The whitespace skippers never fail. They stop in front of an undecodable position and leave
//!   the error for the next `peek`.

pub mod tokens;

pub use tokens::Token;

use sgoann_core::lang::runes;

use crate::diagnostics::AnnotationError;

// ============================================================================
// TOKENIZER STATE
// ============================================================================

/// Rune-level tokenizer over an annotation source.
pub struct Tokenizer<'a> {
    source: &'a [u8],
    byte_offset: usize,
    rune_offset: usize,
    /// Rune offset at which the current line starts.
    line_start: usize,
    line: usize,
    lookahead: Option<Token>,
    /// Set once the `Iterator` impl has yielded an error.
    halted: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self {
            source: source.as_ref(),
            byte_offset: 0,
            rune_offset: 0,
            line_start: 0,
            line: 1,
            lookahead: None,
            halted: false,
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Repeated calls return the same token. `Ok(None)` means end of input.
    ///
    /// ## Errors
    /// Returns [`AnnotationError::Encoding`] if the bytes at the current position are not valid
    /// UTF-8.
    pub fn peek(&mut self) -> Result<Option<Token>, AnnotationError> {
        if let Some(token) = self.lookahead {
            return Ok(Some(token));
        }
        let Some((rune, size)) = self.decode()? else {
            return Ok(None);
        };
        let token = Token {
            rune,
            line: self.line,
            column: self.column(),
            size,
            byte_offset: self.byte_offset,
            rune_offset: self.rune_offset,
        };
        self.lookahead = Some(token);
        Ok(Some(token))
    }

    /// Consume and return the next token.
    ///
    /// Consuming a newline moves to the next line and resets the column origin.
    ///
    /// ## Errors
    /// Same as [`Tokenizer::peek`].
    pub fn advance(&mut self) -> Result<Option<Token>, AnnotationError> {
        let Some(token) = self.peek()? else {
            return Ok(None);
        };
        self.lookahead = None;
        self.rune_offset += 1;
        self.byte_offset += token.size;
        if token.rune == '\n' {
            self.line += 1;
            self.line_start = self.rune_offset;
        }
        Ok(Some(token))
    }

    /// Consume all contiguous whitespace, newlines included.
    pub fn skip_whitespace(&mut self) {
        self.skip_while(runes::is_whitespace);
    }

    /// Consume whitespace up to, but not including, the next newline.
    pub fn skip_whitespace_same_line(&mut self) {
        self.skip_while(runes::is_inline_whitespace);
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Ok(Some(token)) = self.peek() {
            if !pred(token.rune) {
                return;
            }
            // Cannot fail: the token is already buffered.
            let _ = self.advance();
        }
    }

    /// Build the truncation error for the current position.
    pub fn unexpected_eof(&self) -> AnnotationError {
        AnnotationError::UnexpectedEof {
            line: self.line,
            column: self.column(),
            span: (self.byte_offset, 0).into(),
        }
    }

    // ========================================================================
    // Position
    // ========================================================================

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current 1-based column, counted in runes.
    pub fn column(&self) -> usize {
        self.rune_offset - self.line_start + 1
    }

    /// Current byte offset.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Current rune offset.
    pub fn rune_offset(&self) -> usize {
        self.rune_offset
    }

    /// Return `true` once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.byte_offset >= self.source.len()
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Decode the rune at the current byte offset, returning it with its encoded size.
    fn decode(&self) -> Result<Option<(char, usize)>, AnnotationError> {
        let rest = &self.source[self.byte_offset.min(self.source.len())..];
        if rest.is_empty() {
            return Ok(None);
        }
        // A UTF-8 sequence is at most 4 bytes long.
        let window = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(window) {
            Ok(text) => text,
            Err(err) => std::str::from_utf8(&window[..err.valid_up_to()]).unwrap_or_default(),
        };
        match valid.chars().next() {
            Some(rune) => Ok(Some((rune, rune.len_utf8()))),
            None => Err(AnnotationError::Encoding {
                line: self.line,
                column: self.column(),
                span: (self.byte_offset, 1).into(),
            }),
        }
    }
}

/// Yields tokens until end of input or the first error, which is yielded once.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, AnnotationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let item = self.advance().transpose();
        if matches!(item, Some(Err(_))) {
            self.halted = true;
        }
        item
    }
}

/// Tokenize a whole source eagerly.
///
/// The parser never needs this (it pulls tokens on demand); it exists for debugging output.
///
/// ## Errors
/// Returns the first [`AnnotationError::Encoding`] encountered.
#[tracing::instrument(skip_all, fields(source_len = source.as_ref().len()))]
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Vec<Token>, AnnotationError> {
    Tokenizer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn test_peek_is_idempotent() {
        let mut tokens = Tokenizer::new("ab");
        let first = tokens.peek().unwrap().unwrap();
        assert_eq!(tokens.peek().unwrap(), Some(first));
        assert_eq!(first.rune, 'a');
        assert_eq!(tokens.advance().unwrap(), Some(first));
        assert_eq!(tokens.peek().unwrap().unwrap().rune, 'b');
    }

    #[test]
    fn test_end_of_input() {
        let mut tokens = Tokenizer::new("");
        assert_eq!(tokens.peek().unwrap(), None);
        assert_eq!(tokens.advance().unwrap(), None);
        assert!(tokens.is_at_end());
    }

    #[test]
    fn test_positions_across_lines() {
        let tokens = tokenize("ab\ncd").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.rune, t.line, t.column)).collect();
        assert_eq!(
            positions,
            vec![('a', 1, 1), ('b', 1, 2), ('\n', 1, 3), ('c', 2, 1), ('d', 2, 2)]
        );
    }

    #[test]
    fn test_columns_count_runes_not_bytes() {
        let tokens = tokenize("é€x").unwrap();
        let x = tokens[2];
        assert_eq!(x.rune, 'x');
        assert_eq!(x.column, 3);
        assert_eq!(x.rune_offset, 2);
        assert_eq!(x.byte_offset, 2 + 3);
        assert_eq!(tokens[0].size, 2);
        assert_eq!(tokens[1].size, 3);
    }

    #[test]
    fn test_four_byte_rune() {
        let tokens = tokenize("𝔸b").unwrap();
        assert_eq!(tokens[0].size, 4);
        assert_eq!(tokens[1].byte_offset, 4);
        assert_eq!(tokens[1].column, 2);
    }

    #[test]
    fn test_skip_whitespace_crosses_newlines() {
        let mut tokens = Tokenizer::new(" \t\n  \r\n x");
        tokens.skip_whitespace();
        let x = tokens.peek().unwrap().unwrap();
        assert_eq!((x.rune, x.line, x.column), ('x', 3, 2));
    }

    #[test]
    fn test_skip_whitespace_same_line_stops_before_newline() {
        let mut tokens = Tokenizer::new(" \t \n x");
        tokens.skip_whitespace_same_line();
        let newline = tokens.peek().unwrap().unwrap();
        assert_eq!(newline.rune, '\n');
        assert_eq!(newline.column, 4);
        assert_eq!(tokens.line(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_lazy() {
        let source = b"ab\n\xffc";
        let mut tokens = Tokenizer::new(&source[..]);
        assert_eq!(tokens.advance().unwrap().unwrap().rune, 'a');
        assert_eq!(tokens.advance().unwrap().unwrap().rune, 'b');
        assert_eq!(tokens.advance().unwrap().unwrap().rune, '\n');
        let err = tokens.peek().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!((err.line(), err.column()), (2, 1));
    }

    #[test]
    fn test_truncated_sequence_at_end() {
        // First two bytes of a three-byte sequence.
        let source = b"x\xe2\x82";
        let err = tokenize(&source[..]).unwrap_err();
        assert_eq!((err.line(), err.column()), (1, 2));
    }

    #[test]
    fn test_whitespace_skipper_stops_at_invalid_bytes() {
        let source = b"  \xc3(";
        let mut tokens = Tokenizer::new(&source[..]);
        tokens.skip_whitespace();
        assert_eq!(tokens.column(), 3);
        assert!(tokens.peek().is_err());
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let source = b"a\xff";
        let items: Vec<_> = Tokenizer::new(&source[..]).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_unexpected_eof_position() {
        let mut tokens = Tokenizer::new("ab\nc");
        while tokens.advance().unwrap().is_some() {}
        let err = tokens.unexpected_eof();
        assert_eq!(err.kind(), ErrorKind::Truncation);
        assert_eq!((err.line(), err.column()), (2, 2));
    }
}
