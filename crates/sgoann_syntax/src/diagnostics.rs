//! Errors produced while tokenizing or parsing an annotation source.
//!
//! Every failure is terminal for the parse: the first error is returned and whatever mapping was
//! built so far is dropped. Errors carry 1-based line/column positions (columns count runes) and a
//! byte span so they render with source context through `miette`.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::Token;

/// A failure while reading an annotation source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AnnotationError {
    /// The bytes at the current position are not valid UTF-8.
    #[error("invalid UTF-8 character starting at {line}:{column}")]
    #[diagnostic(code(sgoann::encoding), help("annotation files must be UTF-8 encoded"))]
    Encoding {
        line: usize,
        column: usize,
        #[label("invalid byte sequence")]
        span: SourceSpan,
    },

    /// A token that the current production does not accept.
    #[error("unexpected token at {line}:{column}: {found:?}, expected {expected}")]
    #[diagnostic(code(sgoann::syntax))]
    UnexpectedToken {
        found: char,
        expected: &'static str,
        line: usize,
        column: usize,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    /// The source ended in the middle of an item.
    #[error("unexpected end of file at {line}:{column}")]
    #[diagnostic(code(sgoann::truncation), help("the last item is incomplete"))]
    UnexpectedEof {
        line: usize,
        column: usize,
        #[label("input ends here")]
        span: SourceSpan,
    },
}

impl AnnotationError {
    /// Build a syntax error for `token`.
    ///
    /// ## Parameters
    /// - `token`: the offending token.
    /// - `expected`: short description of what the production wanted (e.g. "a name").
    pub fn unexpected(token: Token, expected: &'static str) -> Self {
        AnnotationError::UnexpectedToken {
            found: token.rune,
            expected,
            line: token.line,
            column: token.column,
            span: token.span(),
        }
    }

    /// Return the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnnotationError::Encoding { .. } => ErrorKind::Encoding,
            AnnotationError::UnexpectedToken { .. } => ErrorKind::Syntax,
            AnnotationError::UnexpectedEof { .. } => ErrorKind::Truncation,
        }
    }

    /// 1-based line of the error position.
    pub fn line(&self) -> usize {
        match self {
            AnnotationError::Encoding { line, .. }
            | AnnotationError::UnexpectedToken { line, .. }
            | AnnotationError::UnexpectedEof { line, .. } => *line,
        }
    }

    /// 1-based column (in runes) of the error position.
    pub fn column(&self) -> usize {
        match self {
            AnnotationError::Encoding { column, .. }
            | AnnotationError::UnexpectedToken { column, .. }
            | AnnotationError::UnexpectedEof { column, .. } => *column,
        }
    }

    /// Byte span of the error in the source.
    pub fn span(&self) -> SourceSpan {
        match self {
            AnnotationError::Encoding { span, .. }
            | AnnotationError::UnexpectedToken { span, .. }
            | AnnotationError::UnexpectedEof { span, .. } => *span,
        }
    }
}

/// Category of an [`AnnotationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid byte sequence.
    Encoding,
    /// Token mismatch.
    Syntax,
    /// End of input inside an item.
    Truncation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Encoding => write!(f, "encoding error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Truncation => write!(f, "truncation error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(rune: char, line: usize, column: usize) -> Token {
        Token {
            rune,
            line,
            column,
            size: rune.len_utf8(),
            byte_offset: 4,
            rune_offset: 4,
        }
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = AnnotationError::unexpected(token('}', 2, 3), "a name");
        insta::assert_snapshot!(err.to_string(), @"unexpected token at 2:3: '}', expected a name");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.span(), SourceSpan::from((4, 1)));
    }

    #[test]
    fn test_newline_is_escaped_in_message() {
        let err = AnnotationError::unexpected(token('\n', 1, 5), "a type signature");
        insta::assert_snapshot!(err.to_string(), @r"unexpected token at 1:5: '\n', expected a type signature");
    }

    #[test]
    fn test_encoding_and_eof_messages() {
        let encoding = AnnotationError::Encoding {
            line: 3,
            column: 7,
            span: SourceSpan::from((10, 1)),
        };
        insta::assert_snapshot!(encoding.to_string(), @"invalid UTF-8 character starting at 3:7");
        assert_eq!(encoding.kind(), ErrorKind::Encoding);

        let eof = AnnotationError::UnexpectedEof {
            line: 1,
            column: 6,
            span: SourceSpan::from((5, 0)),
        };
        insta::assert_snapshot!(eof.to_string(), @"unexpected end of file at 1:6");
        assert_eq!(eof.kind(), ErrorKind::Truncation);
        assert_eq!((eof.line(), eof.column()), (1, 6));
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Encoding.to_string(), "encoding error");
        assert_eq!(ErrorKind::Syntax.to_string(), "syntax error");
        assert_eq!(ErrorKind::Truncation.to_string(), "truncation error");
    }
}
