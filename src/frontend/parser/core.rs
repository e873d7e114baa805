/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its failure signal, and the
/// module-level productions. The remaining recognition methods are split
/// across the other parser chunks.

/// Failure signal returned by a recognition method.
///
/// `Syntax` means the production could not recognize its input; the
/// diagnostic is already reported and the production's *wrapper* turns the
/// signal into a recovery skip. `EndOfInput` means the end of the token
/// stream was reached while recovering; it unwinds through every caller to
/// the module level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseError {
    Syntax,
    EndOfInput,
}

type ParseResult<T> = Result<T, ParseError>;

/// Parser state.
///
/// The parser pulls a single token of lookahead from the pre-lexed stream
/// and drives the semantic actions as it recognizes productions. It is
/// single-pass: by the time `parse` returns, the AST is fully name-resolved
/// and type-checked.
pub struct Parser<'t, 'd> {
    tokens: &'t [Token],
    pos: usize,
    sema: Sema<'d>,
}

impl<'t, 'd> Parser<'t, 'd> {
    /// Create a new parser for a token stream. The stream must end with an
    /// `Eof` token, which `lexer::tokenize` guarantees.
    pub fn new(tokens: &'t [Token], diags: &'d mut DiagnosticEngine) -> Self {
        Self {
            tokens,
            pos: 0,
            sema: Sema::new(diags),
        }
    }

    /// Parse the entire token stream.
    ///
    /// Returns the arena and the root module declaration. The module is
    /// `None` only when not even the module header could be recognized;
    /// after recoverable errors a best-effort (possibly incomplete) module
    /// is still returned, with the damage recorded in the diagnostic
    /// engine's error counter.
    pub fn parse(mut self) -> (Ast, Option<DeclId>) {
        tracing::debug!(tokens = self.tokens.len(), "parsing compilation unit");
        let mut module = None;
        if let Err(ParseError::Syntax) = self.compilation_unit(&mut module) {
            // The outermost production has no enclosing recovery to hand
            // off to; discard whatever is left.
            let _ = self.skip_until(&[]);
        }
        (self.sema.into_ast(), module)
    }

    /// `compilationUnit := MODULE ident ";" {import} block ident "."`
    fn compilation_unit(&mut self, module: &mut Option<DeclId>) -> ParseResult<()> {
        self.consume(KwModule)?;
        let ident = self.take_ident()?;
        let decl = self.sema.start_module(ident.span, &ident.name);
        *module = Some(decl);

        self.sema.enter_scope(decl);
        let body = self.module_body(decl);
        self.sema.leave_scope();
        body
    }

    fn module_body(&mut self, module: DeclId) -> ParseResult<()> {
        self.consume(Semi)?;
        while self.at_any(&[KwFrom, KwImport]) {
            self.parse_import()?;
        }
        let mut decls = Vec::new();
        let mut stmts = Vec::new();
        self.parse_block(&mut decls, &mut stmts)?;
        let closing = self.take_ident()?;
        self.sema.finish_module(module, &closing, decls, stmts);
        self.consume(Period)?;
        Ok(())
    }

    /// `import := [FROM ident] IMPORT identList ";"`
    fn parse_import(&mut self) -> ParseResult<Option<()>> {
        let result = self.import();
        self.recover(result, IMPORT_RECOVERY)
    }

    fn import(&mut self) -> ParseResult<()> {
        let module = if self.at(KwFrom) {
            self.advance();
            Some(self.take_ident()?)
        } else {
            None
        };
        self.consume(KwImport)?;
        let mut names = Vec::new();
        self.parse_ident_list(&mut names)?;
        self.expect(Semi)?;
        self.sema.on_import(module, names);
        self.advance();
        Ok(())
    }

    /// `block := {declaration} [BEGIN statementSequence] END`
    ///
    /// Recovers to the following identifier so the closing name of the
    /// enclosing module or procedure can still be checked.
    fn parse_block(
        &mut self,
        decls: &mut Vec<DeclId>,
        stmts: &mut Vec<StmtId>,
    ) -> ParseResult<Option<()>> {
        let result = self.block(decls, stmts);
        self.recover(result, BLOCK_RECOVERY)
    }

    fn block(&mut self, decls: &mut Vec<DeclId>, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        while self.at_any(&[KwConst, KwProcedure, KwVar]) {
            self.parse_declaration(decls)?;
        }
        if self.at(KwBegin) {
            self.advance();
            self.parse_statement_sequence(stmts)?;
        }
        self.consume(KwEnd)?;
        Ok(())
    }
}
