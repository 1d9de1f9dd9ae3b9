/// Parser core type and top-level entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

/// Symbol path → signature text, as produced by one parse.
///
/// Ordered by path so that iteration (and anything printed from it) is deterministic.
pub type AnnotationMap = BTreeMap<String, String>;

/// Deepest `{` block nesting accepted.
///
/// Blocks are parsed recursively; a `{` opened beyond this depth is a syntax error at that brace.
pub const MAX_NESTING: usize = 128;

/// Parser state.
///
/// ## Notes
/// - The parser owns its tokenizer; one tokenizer per source, one parser per tokenizer.
/// - There is no error recovery: the first error aborts the parse and the partially built map
///   is dropped.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    /// Number of `{` blocks currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self::from_tokenizer(Tokenizer::new(source))
    }

    /// Create a parser that continues from an existing tokenizer position.
    pub fn from_tokenizer(tokens: Tokenizer<'a>) -> Self {
        Self { tokens, depth: 0 }
    }

    /// Parse the whole source into an [`AnnotationMap`].
    ///
    /// ## Errors
    /// Returns the first [`AnnotationError`] encountered. Input left over after the top-level
    /// list (for example a stray `}` or a name starting with a digit) is a syntax error at the
    /// first leftover token.
    pub fn parse(mut self) -> Result<AnnotationMap, AnnotationError> {
        let annotations = self.list()?;
        self.skip_separators();
        match self.tokens.peek()? {
            None => Ok(annotations),
            Some(token) => Err(AnnotationError::unexpected(token, "a name")),
        }
    }
}
