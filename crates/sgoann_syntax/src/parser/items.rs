/// Grammar productions: lists, items, names and definitions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Lists and items
    // ========================================================================

    /// `List -> (Separator* Item)* Separator*`
    ///
    /// Stops without consuming at end of input or at a token that cannot start a name, which is
    /// how a nested list ends in front of its `}`.
    fn list(&mut self) -> Result<AnnotationMap, AnnotationError> {
        let mut annotations = AnnotationMap::new();
        loop {
            self.skip_separators();
            match self.tokens.peek()? {
                Some(token) if runes::is_name_start(token.rune) => {}
                _ => return Ok(annotations),
            }

            for (path, signature) in self.item()? {
                if annotations.contains_key(&path) {
                    tracing::debug!(%path, "annotation replaced by a later item");
                }
                annotations.insert(path, signature);
            }
        }
    }

    /// `Item -> Name Def Terminator?`
    ///
    /// The definition must start on the same line as the name, and nothing but a terminator may
    /// follow it on that line. Inside a block the closing `}` may also end the item; it is left
    /// for the enclosing definition to consume.
    fn item(&mut self) -> Result<AnnotationMap, AnnotationError> {
        let name = self.name()?;

        self.tokens.skip_whitespace_same_line();
        let def = self.def()?;

        self.tokens.skip_whitespace_same_line();
        match self.tokens.peek()? {
            None => {}
            Some(token) if self.closes_block(token) => {}
            Some(token) if runes::is_terminator(token.rune) => {
                self.tokens.advance()?;
            }
            Some(token) => return Err(AnnotationError::unexpected(token, "`;` or a newline")),
        }

        Ok(def
            .into_iter()
            .map(|(suffix, signature)| (paths::qualify(&name, &suffix), signature))
            .collect())
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// `Name -> Identifier | Receiver`
    fn name(&mut self) -> Result<String, AnnotationError> {
        let token = self.peek_required()?;
        if token.is_punctuation(PunctuationId::LParen) {
            self.receiver()
        } else if runes::is_ident_start(token.rune) {
            self.identifier()
        } else {
            Err(AnnotationError::unexpected(token, "a name"))
        }
    }

    /// `Receiver -> "(" "*" Identifier ")"`, spelled back as `(*Identifier)`.
    ///
    /// Unlike the rest of an item, any whitespace (newlines included) is allowed between the
    /// parts of a receiver.
    fn receiver(&mut self) -> Result<String, AnnotationError> {
        self.expect(PunctuationId::LParen)?;

        self.tokens.skip_whitespace();
        self.expect(PunctuationId::Star)?;

        self.tokens.skip_whitespace();
        let type_name = self.identifier()?;

        self.tokens.skip_whitespace();
        self.expect(PunctuationId::RParen)?;

        Ok(paths::receiver(&type_name))
    }

    // ========================================================================
    // Definitions
    // ========================================================================

    /// `Def -> TypeText | "{" List "}"`
    ///
    /// A plain signature is returned under the empty key; nested keys are returned unprefixed and
    /// qualified by the enclosing item. Opening more than [`MAX_NESTING`] blocks fails at the
    /// offending `{`.
    fn def(&mut self) -> Result<AnnotationMap, AnnotationError> {
        let token = self.peek_required()?;
        if !token.is_punctuation(PunctuationId::LBrace) {
            let signature = self.type_text()?;
            return Ok(AnnotationMap::from([(String::new(), signature)]));
        }
        if self.depth >= MAX_NESTING {
            return Err(AnnotationError::unexpected(token, "a shallower nesting"));
        }

        self.tokens.advance()?;
        self.depth += 1;
        self.tokens.skip_whitespace();
        let nested = self.list()?;

        self.tokens.skip_whitespace();
        self.expect(PunctuationId::RBrace)?;
        self.depth -= 1;
        Ok(nested)
    }

    /// `TypeText -> /[^{\n;][^\n;]*/`
    ///
    /// Everything up to the terminator is kept verbatim (parentheses, commas, pipes and so on are
    /// not looked at) and then trimmed. Inside a block, a `}` without a matching `{` in the
    /// signature closes the block, so `T { M func(v interface{}) }` fits on one line.
    fn type_text(&mut self) -> Result<String, AnnotationError> {
        let first = self.next_required()?;
        if !runes::may_start_signature(first.rune) || self.closes_block(first) {
            return Err(AnnotationError::unexpected(first, "a type signature"));
        }

        let mut braces = 0usize;
        let mut text = String::new();
        let mut token = first;
        loop {
            match token.punctuation_id() {
                Some(PunctuationId::LBrace) => braces += 1,
                Some(PunctuationId::RBrace) => braces = braces.saturating_sub(1),
                _ => {}
            }
            text.push(token.rune);

            match self.tokens.peek()? {
                Some(next) if runes::is_terminator(next.rune) => break,
                Some(next) if braces == 0 && self.closes_block(next) => break,
                Some(next) => {
                    self.tokens.advance()?;
                    token = next;
                }
                None => break,
            }
        }

        Ok(text.trim().to_string())
    }
}
