/// Token-level helpers shared by the productions.
impl<'a> Parser<'a> {
    /// `Identifier -> letter-or-underscore (letter | digit)*`
    ///
    /// An identifier can never end an item, so running out of input here is a truncation error.
    fn identifier(&mut self) -> Result<String, AnnotationError> {
        let first = self.next_required()?;
        if !runes::is_ident_start(first.rune) {
            return Err(AnnotationError::unexpected(first, "an identifier"));
        }

        let mut ident = String::from(first.rune);
        loop {
            let token = self.peek_required()?;
            if !runes::is_ident_continue(token.rune) {
                return Ok(ident);
            }
            self.tokens.advance()?;
            ident.push(token.rune);
        }
    }

    /// Consume the next token and require it to be `expected`.
    fn expect(&mut self, expected: PunctuationId) -> Result<Token, AnnotationError> {
        let token = self.next_required()?;
        if token.is_punctuation(expected) {
            Ok(token)
        } else {
            Err(AnnotationError::unexpected(token, punctuation::describe(expected)))
        }
    }

    /// Peek, treating end of input as a truncation error.
    fn peek_required(&mut self) -> Result<Token, AnnotationError> {
        match self.tokens.peek()? {
            Some(token) => Ok(token),
            None => Err(self.tokens.unexpected_eof()),
        }
    }

    /// Consume, treating end of input as a truncation error.
    fn next_required(&mut self) -> Result<Token, AnnotationError> {
        match self.tokens.advance()? {
            Some(token) => Ok(token),
            None => Err(self.tokens.unexpected_eof()),
        }
    }

    /// Return `true` if `token` is the `}` of a currently open block.
    fn closes_block(&self, token: Token) -> bool {
        self.depth > 0 && token.is_punctuation(PunctuationId::RBrace)
    }

    /// Skip whitespace and `;` between items.
    fn skip_separators(&mut self) {
        loop {
            self.tokens.skip_whitespace();
            match self.tokens.peek() {
                Ok(Some(token)) if token.is_punctuation(PunctuationId::Semicolon) => {
                    let _ = self.tokens.advance();
                }
                _ => return,
            }
        }
    }
}
