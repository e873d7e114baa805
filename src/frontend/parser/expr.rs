/// Expression parsing methods.
///
/// The precedence chain is expression → simpleExpression → term → factor,
/// lowest first. Operator recognition happens against `const` operator
/// sets; each recognized infix/prefix step immediately goes through the
/// semantic layer, so subexpressions are typed as they are built.
impl<'t, 'd> Parser<'t, 'd> {
    /// `expression := simpleExpr [relOp simpleExpr]`
    fn parse_expression(&mut self) -> ParseResult<Option<ExprId>> {
        let result = self.expression();
        self.recover(result, EXPRESSION_RECOVERY)
    }

    fn expression(&mut self) -> ParseResult<ExprId> {
        let Some(mut expr) = self.parse_simple_expression()? else {
            return Err(ParseError::Syntax);
        };
        if let Some(op) = self.match_operator(RELATION_OPERATORS) {
            let Some(right) = self.parse_simple_expression()? else {
                return Err(ParseError::Syntax);
            };
            expr = self.sema.on_infix_expr(expr, right, op);
        }
        Ok(expr)
    }

    /// `simpleExpr := ["+"|"-"] term {("+"|"-"|OR) term}`
    ///
    /// A leading sign applies to the whole additive chain.
    fn parse_simple_expression(&mut self) -> ParseResult<Option<ExprId>> {
        let result = self.simple_expression();
        self.recover(result, SIMPLE_EXPRESSION_RECOVERY)
    }

    fn simple_expression(&mut self) -> ParseResult<ExprId> {
        let prefix = self.match_operator(&[Plus, Minus]);
        let Some(mut expr) = self.parse_term()? else {
            return Err(ParseError::Syntax);
        };
        while let Some(op) = self.match_operator(ADD_OPERATORS) {
            let Some(right) = self.parse_term()? else {
                return Err(ParseError::Syntax);
            };
            expr = self.sema.on_infix_expr(expr, right, op);
        }
        if let Some(op) = prefix {
            expr = self.sema.on_prefix_expr(expr, op);
        }
        Ok(expr)
    }

    /// `term := factor {("*"|"/"|AND|DIV|MOD) factor}`
    fn parse_term(&mut self) -> ParseResult<Option<ExprId>> {
        let result = self.term();
        self.recover(result, TERM_RECOVERY)
    }

    fn term(&mut self) -> ParseResult<ExprId> {
        let Some(mut expr) = self.parse_factor()? else {
            return Err(ParseError::Syntax);
        };
        while let Some(op) = self.match_operator(MUL_OPERATORS) {
            let Some(right) = self.parse_factor()? else {
                return Err(ParseError::Syntax);
            };
            expr = self.sema.on_infix_expr(expr, right, op);
        }
        Ok(expr)
    }

    /// `factor := integerLiteral | qualident ["(" expList? ")"]
    ///          | "(" expression ")" | NOT factor`
    fn parse_factor(&mut self) -> ParseResult<Option<ExprId>> {
        let result = self.factor();
        self.recover(result, FACTOR_RECOVERY)
    }

    fn factor(&mut self) -> ParseResult<ExprId> {
        match self.peek().kind {
            IntegerLiteral => {
                let token = self.peek();
                let (span, text) = (token.span, token.text.clone());
                self.advance();
                Ok(self.sema.on_integer_literal(span, &text))
            }
            Identifier => {
                let span = self.peek().span;
                let Some(decl) = self.parse_qualident()? else {
                    return Err(ParseError::Syntax);
                };
                if self.at(LParen) {
                    self.advance();
                    let mut args = Vec::new();
                    if self.at_expression_start() {
                        self.parse_exp_list(&mut args)?;
                    }
                    self.consume(RParen)?;
                    Ok(self.sema.on_function_call(span, decl, args))
                } else {
                    Ok(self.sema.on_variable_expr(span, decl))
                }
            }
            LParen => {
                self.advance();
                let Some(expr) = self.parse_expression()? else {
                    return Err(ParseError::Syntax);
                };
                self.consume(RParen)?;
                Ok(expr)
            }
            KwNot => {
                let op = self.take_operator();
                let Some(operand) = self.parse_factor()? else {
                    return Err(ParseError::Syntax);
                };
                Ok(self.sema.on_prefix_expr(operand, op))
            }
            _ => self.expected("expression"),
        }
    }

    /// `expList := expression {"," expression}`
    ///
    /// Expressions that failed to parse are simply not collected; the
    /// argument-count check downstream then reports against what survived.
    fn parse_exp_list(&mut self, args: &mut Vec<ExprId>) -> ParseResult<Option<()>> {
        let result = self.exp_list(args);
        self.recover(result, EXP_LIST_RECOVERY)
    }

    fn exp_list(&mut self, args: &mut Vec<ExprId>) -> ParseResult<()> {
        if let Some(expr) = self.parse_expression()? {
            args.push(expr);
        }
        while self.at(Comma) {
            self.advance();
            if let Some(expr) = self.parse_expression()? {
                args.push(expr);
            }
        }
        Ok(())
    }
}
