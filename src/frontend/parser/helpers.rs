/// Token-stream primitives, synchronization sets, and error recovery.
///
/// Each production owns a `const` synchronization set: a superset of its
/// FOLLOW set plus the keywords that introduce the blocks it can appear
/// in. After a syntax error the production discards tokens until one from
/// its set is seen, then returns control to its caller, which continues
/// with the next sibling construct.

const IMPORT_RECOVERY: &[TokenKind] =
    &[KwBegin, KwConst, KwEnd, KwFrom, KwImport, KwProcedure, KwVar];
const BLOCK_RECOVERY: &[TokenKind] = &[Identifier];
const DECLARATION_RECOVERY: &[TokenKind] = &[KwBegin, KwConst, KwEnd, KwProcedure, KwVar];
const CONSTANT_DECL_RECOVERY: &[TokenKind] = &[Semi];
const VARIABLE_DECL_RECOVERY: &[TokenKind] = &[Semi];
const PROCEDURE_DECL_RECOVERY: &[TokenKind] = &[Semi];
const FORMAL_PARAMETERS_RECOVERY: &[TokenKind] = &[Semi];
const FORMAL_PARAMETER_LIST_RECOVERY: &[TokenKind] = &[RParen];
const FORMAL_PARAMETER_RECOVERY: &[TokenKind] = &[RParen, Semi];
const STATEMENT_SEQUENCE_RECOVERY: &[TokenKind] = &[KwElse, KwEnd];
const STATEMENT_RECOVERY: &[TokenKind] = &[Semi, KwElse, KwEnd];
const EXP_LIST_RECOVERY: &[TokenKind] = &[RParen];
const EXPRESSION_RECOVERY: &[TokenKind] = &[RParen, Comma, Semi, KwDo, KwElse, KwEnd, KwThen];
const SIMPLE_EXPRESSION_RECOVERY: &[TokenKind] = &[
    Hash, RParen, Comma, Semi, Less, LessEqual, Equal, Greater, GreaterEqual, KwDo, KwElse, KwEnd,
    KwThen,
];
const TERM_RECOVERY: &[TokenKind] = &[
    Hash, RParen, Plus, Minus, Comma, Semi, Less, LessEqual, Equal, Greater, GreaterEqual, KwOr,
    KwDo, KwElse, KwEnd, KwThen,
];
const FACTOR_RECOVERY: &[TokenKind] = &[
    Hash, RParen, Plus, Minus, Star, Slash, Comma, Semi, Less, LessEqual, Equal, Greater,
    GreaterEqual, KwOr, KwDo, KwElse, KwEnd, KwThen, KwAnd, KwDiv, KwMod,
];
const QUALIDENT_RECOVERY: &[TokenKind] = &[
    Hash, LParen, RParen, ColonEqual, Plus, Minus, Star, Slash, Comma, Semi, Less, LessEqual,
    Equal, Greater, GreaterEqual, KwOr, KwDo, KwElse, KwEnd, KwThen, KwAnd, KwDiv, KwMod,
];
const IDENT_LIST_RECOVERY: &[TokenKind] = &[Colon, Semi];

const RELATION_OPERATORS: &[TokenKind] = &[Equal, Hash, Less, LessEqual, Greater, GreaterEqual];
const ADD_OPERATORS: &[TokenKind] = &[Plus, Minus, KwOr];
const MUL_OPERATORS: &[TokenKind] = &[Star, Slash, KwAnd, KwDiv, KwMod];

/// Tokens that can start an expression.
const EXPRESSION_START: &[TokenKind] = &[LParen, Plus, Minus, KwNot, Identifier, IntegerLiteral];

impl<'t, 'd> Parser<'t, 'd> {
    // ========================================================================
    // Token primitives
    // ========================================================================

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return `true` if the current token is the given kind.
    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    fn at_expression_start(&self) -> bool {
        self.at_any(EXPRESSION_START)
    }

    /// Advance past the current token. A no-op at end of input, so the
    /// cursor never moves past the final `Eof` token.
    fn advance(&mut self) {
        if !self.at(Eof) {
            self.pos += 1;
        }
    }

    /// Check the current token without consuming it; report a syntax
    /// diagnostic and signal failure on mismatch.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.at(kind) {
            return Ok(());
        }
        let span = self.peek().span;
        let expected = format!("'{}'", kind.name());
        let found = format!("'{}'", self.peek().kind.name());
        self.sema
            .diags()
            .report(span, DiagId::Expected, &[&expected, &found]);
        Err(ParseError::Syntax)
    }

    /// [`Parser::expect`] plus advance.
    fn consume(&mut self, kind: TokenKind) -> ParseResult<()> {
        self.expect(kind)?;
        self.advance();
        Ok(())
    }

    /// Consume the current token as an identifier.
    fn take_ident(&mut self) -> ParseResult<Ident> {
        self.expect(Identifier)?;
        let token = self.peek();
        let ident = Ident {
            span: token.span,
            name: token.text.clone(),
        };
        self.advance();
        Ok(ident)
    }

    /// Consume the current token as an operator occurrence.
    fn take_operator(&mut self) -> OperatorInfo {
        let token = self.peek();
        let op = OperatorInfo {
            span: token.span,
            token: token.kind,
        };
        self.advance();
        op
    }

    /// If the current token is one of `kinds`, consume it as an operator.
    fn match_operator(&mut self, kinds: &[TokenKind]) -> Option<OperatorInfo> {
        if self.at_any(kinds) {
            Some(self.take_operator())
        } else {
            None
        }
    }

    /// Report "expected {what}" at the current token and signal failure.
    /// For spots where no single token kind captures what is missing.
    fn expected<T>(&mut self, what: &str) -> ParseResult<T> {
        let span = self.peek().span;
        let found = format!("'{}'", self.peek().kind.name());
        self.sema
            .diags()
            .report(span, DiagId::Expected, &[&what, &found]);
        Err(ParseError::Syntax)
    }

    // ========================================================================
    // Panic-mode recovery
    // ========================================================================

    /// Turn a production result into its recovered form: on a syntax
    /// failure, discard tokens until one from `sync` is seen and yield
    /// `None` so the caller can continue with a sibling construct.
    fn recover<T>(&mut self, result: ParseResult<T>, sync: &[TokenKind]) -> ParseResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(ParseError::EndOfInput) => Err(ParseError::EndOfInput),
            Err(ParseError::Syntax) => {
                self.skip_until(sync)?;
                Ok(None)
            }
        }
    }

    /// Discard tokens until one from `sync` is current. Reaching end of
    /// input is fatal to the enclosing recognition attempt.
    fn skip_until(&mut self, sync: &[TokenKind]) -> ParseResult<()> {
        loop {
            let kind = self.peek().kind;
            if sync.contains(&kind) {
                return Ok(());
            }
            if kind == Eof {
                return Err(ParseError::EndOfInput);
            }
            self.advance();
        }
    }
}
