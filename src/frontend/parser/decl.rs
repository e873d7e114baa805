/// Declaration parsing methods.
///
/// This chunk parses CONST/VAR/PROCEDURE declaration groups, formal
/// parameters, identifier lists, and qualified identifiers.
impl<'t, 'd> Parser<'t, 'd> {
    /// `declaration := CONST {constantDecl ";"} | VAR {variableDecl ";"}
    ///               | procedureDecl ";"`
    fn parse_declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<Option<()>> {
        let result = self.declaration(decls);
        self.recover(result, DECLARATION_RECOVERY)
    }

    fn declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<()> {
        match self.peek().kind {
            KwConst => {
                self.advance();
                while self.at(Identifier) {
                    self.parse_constant_declaration(decls)?;
                    self.consume(Semi)?;
                }
            }
            KwVar => {
                self.advance();
                while self.at(Identifier) {
                    self.parse_variable_declaration(decls)?;
                    self.consume(Semi)?;
                }
            }
            KwProcedure => {
                if let Some(proc) = self.parse_procedure_declaration()? {
                    decls.push(proc);
                }
                self.consume(Semi)?;
            }
            _ => return self.expected("declaration"),
        }
        Ok(())
    }

    /// `constantDecl := ident "=" expression`
    fn parse_constant_declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<Option<()>> {
        let result = self.constant_declaration(decls);
        self.recover(result, CONSTANT_DECL_RECOVERY)
    }

    fn constant_declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<()> {
        let ident = self.take_ident()?;
        self.consume(Equal)?;
        if let Some(value) = self.parse_expression()? {
            self.sema.on_constant_decl(decls, ident, value);
        }
        Ok(())
    }

    /// `variableDecl := identList ":" qualident`
    fn parse_variable_declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<Option<()>> {
        let result = self.variable_declaration(decls);
        self.recover(result, VARIABLE_DECL_RECOVERY)
    }

    fn variable_declaration(&mut self, decls: &mut Vec<DeclId>) -> ParseResult<()> {
        let mut idents = Vec::new();
        self.parse_ident_list(&mut idents)?;
        self.consume(Colon)?;
        if let Some(ty) = self.parse_qualident()? {
            self.sema.on_variable_decl(decls, idents, ty);
        }
        Ok(())
    }

    /// `procedureDecl := PROCEDURE ident [formalParameters] ";" block ident`
    ///
    /// Two-phase: the header is created and bound in the *enclosing* scope
    /// before the body is parsed, so the procedure can reference itself.
    /// The body scope is popped on every exit path, including recovery.
    fn parse_procedure_declaration(&mut self) -> ParseResult<Option<DeclId>> {
        let result = self.procedure_declaration();
        self.recover(result, PROCEDURE_DECL_RECOVERY)
    }

    fn procedure_declaration(&mut self) -> ParseResult<DeclId> {
        self.consume(KwProcedure)?;
        let ident = self.take_ident()?;
        let proc = self.sema.start_procedure(ident.span, &ident.name);

        self.sema.enter_scope(proc);
        let body = self.procedure_body(proc);
        self.sema.leave_scope();
        body?;
        Ok(proc)
    }

    fn procedure_body(&mut self, proc: DeclId) -> ParseResult<()> {
        let mut params = Vec::new();
        let mut return_type = None;
        if self.at(LParen) {
            self.parse_formal_parameters(&mut params, &mut return_type)?;
        }
        self.sema.procedure_heading(proc, params, return_type);
        self.consume(Semi)?;

        let mut decls = Vec::new();
        let mut stmts = Vec::new();
        self.parse_block(&mut decls, &mut stmts)?;
        let closing = self.take_ident()?;
        self.sema.finish_procedure(proc, &closing, decls, stmts);
        Ok(())
    }

    /// `formalParameters := "(" [formalParameterList] ")" [":" qualident]`
    fn parse_formal_parameters(
        &mut self,
        params: &mut Vec<DeclId>,
        return_type: &mut Option<DeclId>,
    ) -> ParseResult<Option<()>> {
        let result = self.formal_parameters(params, return_type);
        self.recover(result, FORMAL_PARAMETERS_RECOVERY)
    }

    fn formal_parameters(
        &mut self,
        params: &mut Vec<DeclId>,
        return_type: &mut Option<DeclId>,
    ) -> ParseResult<()> {
        self.consume(LParen)?;
        if self.at_any(&[KwVar, Identifier]) {
            self.parse_formal_parameter_list(params)?;
        }
        self.consume(RParen)?;
        if self.at(Colon) {
            self.advance();
            *return_type = self.parse_qualident()?;
        }
        Ok(())
    }

    /// `formalParameterList := formalParameter {";" formalParameter}`
    fn parse_formal_parameter_list(&mut self, params: &mut Vec<DeclId>) -> ParseResult<Option<()>> {
        let result = self.formal_parameter_list(params);
        self.recover(result, FORMAL_PARAMETER_LIST_RECOVERY)
    }

    fn formal_parameter_list(&mut self, params: &mut Vec<DeclId>) -> ParseResult<()> {
        self.parse_formal_parameter(params)?;
        while self.at(Semi) {
            self.advance();
            self.parse_formal_parameter(params)?;
        }
        Ok(())
    }

    /// `formalParameter := [VAR] identList ":" qualident`
    fn parse_formal_parameter(&mut self, params: &mut Vec<DeclId>) -> ParseResult<Option<()>> {
        let result = self.formal_parameter(params);
        self.recover(result, FORMAL_PARAMETER_RECOVERY)
    }

    fn formal_parameter(&mut self, params: &mut Vec<DeclId>) -> ParseResult<()> {
        let passed_by_reference = if self.at(KwVar) {
            self.advance();
            true
        } else {
            false
        };
        let mut idents = Vec::new();
        self.parse_ident_list(&mut idents)?;
        self.consume(Colon)?;
        if let Some(ty) = self.parse_qualident()? {
            self.sema
                .on_formal_parameter(params, idents, ty, passed_by_reference);
        }
        Ok(())
    }

    /// `qualident := ident {"." ident}`
    ///
    /// A dotted continuation is accepted only while the resolved prefix is
    /// a module; otherwise the dot is left unconsumed and the surrounding
    /// production treats it as a syntax error.
    fn parse_qualident(&mut self) -> ParseResult<Option<DeclId>> {
        let result = self.qualident();
        self.recover(result, QUALIDENT_RECOVERY)
    }

    fn qualident(&mut self) -> ParseResult<DeclId> {
        let ident = self.take_ident()?;
        let mut decl = self.sema.on_qualident_part(None, &ident);
        while self.at(Period) && self.sema.ast().is_module(decl) {
            self.advance();
            let ident = self.take_ident()?;
            decl = self.sema.on_qualident_part(Some(decl), &ident);
        }
        Ok(decl)
    }

    /// `identList := ident {"," ident}`
    fn parse_ident_list(&mut self, idents: &mut Vec<Ident>) -> ParseResult<Option<()>> {
        let result = self.ident_list(idents);
        self.recover(result, IDENT_LIST_RECOVERY)
    }

    fn ident_list(&mut self, idents: &mut Vec<Ident>) -> ParseResult<()> {
        idents.push(self.take_ident()?);
        while self.at(Comma) {
            self.advance();
            idents.push(self.take_ident()?);
        }
        Ok(())
    }
}
