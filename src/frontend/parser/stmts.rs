/// Statement parsing methods.
impl<'t, 'd> Parser<'t, 'd> {
    /// `statementSequence := statement {";" statement}`
    fn parse_statement_sequence(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<Option<()>> {
        let result = self.statement_sequence(stmts);
        self.recover(result, STATEMENT_SEQUENCE_RECOVERY)
    }

    fn statement_sequence(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        self.parse_statement(stmts)?;
        while self.at(Semi) {
            self.advance();
            self.parse_statement(stmts)?;
        }
        Ok(())
    }

    /// `statement := qualident (":=" expression | "(" [expList] ")")
    ///             | ifStatement | whileStatement | returnStatement`
    fn parse_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<Option<()>> {
        let result = self.statement(stmts);
        self.recover(result, STATEMENT_RECOVERY)
    }

    fn statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        match self.peek().kind {
            Identifier => {
                let span = self.peek().span;
                let Some(decl) = self.parse_qualident()? else {
                    return Ok(());
                };
                if self.at(ColonEqual) {
                    self.advance();
                    let Some(value) = self.parse_expression()? else {
                        return Ok(());
                    };
                    self.sema.on_assignment(stmts, span, decl, value);
                } else if self.at(LParen) {
                    self.advance();
                    let mut args = Vec::new();
                    if self.at_expression_start() {
                        self.parse_exp_list(&mut args)?;
                    }
                    self.consume(RParen)?;
                    self.sema.on_procedure_call(stmts, span, decl, args);
                } else {
                    return self.expected("':=' or '('");
                }
            }
            KwIf => {
                self.parse_if_statement(stmts)?;
            }
            KwWhile => {
                self.parse_while_statement(stmts)?;
            }
            KwReturn => {
                self.parse_return_statement(stmts)?;
            }
            // Empty statement: tolerates `BEGIN END`, `;;`, and a
            // trailing `;` before END.
            Semi | KwElse | KwEnd => {}
            _ => return self.expected("statement"),
        }
        Ok(())
    }

    /// `ifStatement := IF expression THEN statementSequence
    ///                 [ELSE statementSequence] END`
    fn parse_if_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<Option<()>> {
        let result = self.if_statement(stmts);
        self.recover(result, STATEMENT_RECOVERY)
    }

    fn if_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        let span = self.peek().span;
        self.consume(KwIf)?;
        let cond = self.parse_expression()?;
        self.consume(KwThen)?;
        let mut then_stmts = Vec::new();
        self.parse_statement_sequence(&mut then_stmts)?;
        let mut else_stmts = Vec::new();
        if self.at(KwElse) {
            self.advance();
            self.parse_statement_sequence(&mut else_stmts)?;
        }
        self.consume(KwEnd)?;
        if let Some(cond) = cond {
            self.sema.on_if(stmts, span, cond, then_stmts, else_stmts);
        }
        Ok(())
    }

    /// `whileStatement := WHILE expression DO statementSequence END`
    fn parse_while_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<Option<()>> {
        let result = self.while_statement(stmts);
        self.recover(result, STATEMENT_RECOVERY)
    }

    fn while_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        let span = self.peek().span;
        self.consume(KwWhile)?;
        let cond = self.parse_expression()?;
        self.consume(KwDo)?;
        let mut body = Vec::new();
        self.parse_statement_sequence(&mut body)?;
        self.consume(KwEnd)?;
        if let Some(cond) = cond {
            self.sema.on_while(stmts, span, cond, body);
        }
        Ok(())
    }

    /// `returnStatement := RETURN [expression]`
    fn parse_return_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<Option<()>> {
        let result = self.return_statement(stmts);
        self.recover(result, STATEMENT_RECOVERY)
    }

    fn return_statement(&mut self, stmts: &mut Vec<StmtId>) -> ParseResult<()> {
        let span = self.peek().span;
        self.consume(KwReturn)?;
        let mut value = None;
        if self.at_expression_start() {
            value = self.parse_expression()?;
        }
        self.sema.on_return(stmts, span, value);
        Ok(())
    }
}
