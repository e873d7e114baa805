//! Semantic actions for the Vela front end
//!
//! Every AST node is created here, never by the parser directly. The
//! parser calls one action per semantically meaningful point; the action
//! resolves names against the live scope chain, checks types and
//! constant-eligibility, reports violations to the diagnostic engine, and
//! returns a node handle. Actions never abort: failed resolutions yield
//! the error-declaration sentinel and failed type checks the error-type
//! sentinel, so one mistake produces one diagnostic instead of a cascade.
//!
//! Modules and procedures are built in two phases. `start_*` allocates the
//! header and makes it visible in the enclosing scope before the body is
//! parsed (which is what lets a procedure call itself); `finish_*`
//! attaches the body to the same stable handle.

use std::fmt;

use crate::frontend::ast::{
    AssignStmt, Ast, BooleanLiteral, CallStmt, ConstDecl, ConstantAccess, Decl, DeclId, DeclKind,
    Expr, ExprId, ExprKind, FunctionCall, Ident, IfStmt, InfixExpr, IntegerLiteral, ModuleDecl,
    OperatorInfo, ParamDecl, PrefixExpr, ProcDecl, ReturnStmt, Span, Stmt, StmtId, VarDecl,
    VariableAccess, WhileStmt,
};
use crate::frontend::diagnostics::{DiagId, DiagnosticEngine};
use crate::frontend::lexer::tokens::TokenKind;
use crate::frontend::scope::ScopeChain;

/// The semantic-action layer. Owns the arena and the scope chain for one
/// compilation unit; borrows the diagnostic sink.
pub struct Sema<'d> {
    ast: Ast,
    scopes: ScopeChain,
    /// Declaration whose block is currently being parsed.
    current: Option<DeclId>,
    diags: &'d mut DiagnosticEngine,
}

impl<'d> Sema<'d> {
    pub fn new(diags: &'d mut DiagnosticEngine) -> Self {
        let mut sema = Self {
            ast: Ast::new(),
            scopes: ScopeChain::new(),
            current: None,
            diags,
        };
        // Global scope with the predefined types and constants.
        sema.scopes.push();
        for id in [Ast::INTEGER, Ast::BOOLEAN, Ast::TRUE, Ast::FALSE] {
            let name = sema.ast.decl(id).name.clone();
            sema.scopes
                .insert(&name, id)
                .expect("INVARIANT: fresh global scope");
        }
        sema
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn into_ast(self) -> Ast {
        self.ast
    }

    pub fn diags(&mut self) -> &mut DiagnosticEngine {
        self.diags
    }

    // ========================================================================
    // Scope handling
    // ========================================================================

    /// Enter the body scope of a module or procedure. The parser pairs
    /// every call with exactly one [`Sema::leave_scope`] on all exit
    /// paths, including recovery paths.
    pub fn enter_scope(&mut self, decl: DeclId) {
        tracing::trace!(name = %self.ast.decl(decl).name, "entering scope");
        self.scopes.push();
        self.current = Some(decl);
    }

    pub fn leave_scope(&mut self) {
        self.scopes.pop();
        self.current = self
            .current
            .and_then(|decl| self.ast.decl(decl).enclosing);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Phase one of a module declaration: allocate the header and bind the
    /// module's name so qualified self-references resolve.
    pub fn start_module(&mut self, span: Span, name: &str) -> DeclId {
        let module = self.ast.alloc_decl(Decl {
            enclosing: self.current,
            span,
            name: name.to_string(),
            kind: DeclKind::Module(ModuleDecl::default()),
        });
        self.bind(name, span, module);
        module
    }

    /// Phase two: check the closing name and attach the module contents.
    pub fn finish_module(
        &mut self,
        module: DeclId,
        closing: &Ident,
        decls: Vec<DeclId>,
        stmts: Vec<StmtId>,
    ) {
        let name = self.ast.decl(module).name.clone();
        if closing.name != name {
            self.diags.report(
                closing.span,
                DiagId::ModuleNameMismatch,
                &[&name, &closing.name],
            );
        }
        if let DeclKind::Module(m) = &mut self.ast.decl_mut(module).kind {
            m.decls = decls;
            m.stmts = stmts;
        }
    }

    /// Phase one of a procedure declaration: the header goes into the
    /// *enclosing* scope before the body is parsed, enabling recursion.
    pub fn start_procedure(&mut self, span: Span, name: &str) -> DeclId {
        let proc = self.ast.alloc_decl(Decl {
            enclosing: self.current,
            span,
            name: name.to_string(),
            kind: DeclKind::Proc(ProcDecl::default()),
        });
        self.bind(name, span, proc);
        proc
    }

    /// Attach formal parameters and the optional return type to a
    /// procedure header. `return_type` is the resolved qualident, which
    /// must name a type.
    pub fn procedure_heading(
        &mut self,
        proc: DeclId,
        params: Vec<DeclId>,
        return_type: Option<DeclId>,
    ) {
        let span = self.ast.decl(proc).span;
        let return_type = return_type.map(|decl| self.type_or_error(decl, span));
        if let DeclKind::Proc(p) = &mut self.ast.decl_mut(proc).kind {
            p.params = params;
            p.return_type = return_type;
        }
    }

    /// Phase two of a procedure declaration.
    pub fn finish_procedure(
        &mut self,
        proc: DeclId,
        closing: &Ident,
        decls: Vec<DeclId>,
        stmts: Vec<StmtId>,
    ) {
        let name = self.ast.decl(proc).name.clone();
        if closing.name != name {
            self.diags.report(
                closing.span,
                DiagId::ProcedureNameMismatch,
                &[&name, &closing.name],
            );
        }
        if let DeclKind::Proc(p) = &mut self.ast.decl_mut(proc).kind {
            p.decls = decls;
            p.stmts = stmts;
        }
    }

    /// Bind imported names into the current scope.
    ///
    /// Import is a name-visibility operation: the bindings reference the
    /// original declarations, never copies. Unknown names report one
    /// diagnostic and bind the error sentinel so later uses stay quiet.
    pub fn on_import(&mut self, module: Option<Ident>, names: Vec<Ident>) {
        let source = match &module {
            Some(m) => match self.scopes.lookup(&m.name) {
                Some(decl) if self.ast.is_module(decl) => Some(decl),
                Some(_) => {
                    self.diags
                        .report(m.span, DiagId::QualifierNotModule, &[&m.name]);
                    None
                }
                None => {
                    self.diags.report(m.span, DiagId::Undeclared, &[&m.name]);
                    None
                }
            },
            None => None,
        };

        for ident in names {
            let target = match (&module, source) {
                // FROM M IMPORT a: look a up among M's members.
                (Some(_), Some(from)) => match self.find_member(from, &ident.name) {
                    Some(decl) => decl,
                    None => {
                        self.diags
                            .report(ident.span, DiagId::Undeclared, &[&ident.name]);
                        Ast::ERROR_DECL
                    }
                },
                // The FROM module itself failed to resolve; stay quiet.
                (Some(_), None) => Ast::ERROR_DECL,
                // Plain IMPORT a: whatever is visible under that name.
                (None, _) => match self.scopes.lookup(&ident.name) {
                    Some(decl) => decl,
                    None => {
                        self.diags
                            .report(ident.span, DiagId::Undeclared, &[&ident.name]);
                        Ast::ERROR_DECL
                    }
                },
            };
            if target == Ast::ERROR_DECL {
                let _ = self.scopes.insert(&ident.name, target);
            } else {
                self.bind(&ident.name, ident.span, target);
            }
        }
    }

    /// Declare a constant. The defining expression must be
    /// constant-eligible; its type becomes the constant's type.
    pub fn on_constant_decl(&mut self, decls: &mut Vec<DeclId>, ident: Ident, value: ExprId) {
        if !self.ast.expr(value).is_const {
            self.diags
                .report(ident.span, DiagId::ConstantValueExpected, &[&ident.name]);
        }
        let decl = self.ast.alloc_decl(Decl {
            enclosing: self.current,
            span: ident.span,
            name: ident.name.clone(),
            kind: DeclKind::Const(ConstDecl { value }),
        });
        if self.bind(&ident.name, ident.span, decl) {
            decls.push(decl);
        }
    }

    /// Declare one variable per identifier, all sharing the resolved type.
    pub fn on_variable_decl(&mut self, decls: &mut Vec<DeclId>, idents: Vec<Ident>, ty: DeclId) {
        let Some(first) = idents.first() else {
            return;
        };
        let ty = self.type_or_error(ty, first.span);
        for ident in idents {
            let decl = self.ast.alloc_decl(Decl {
                enclosing: self.current,
                span: ident.span,
                name: ident.name.clone(),
                kind: DeclKind::Var(VarDecl { ty }),
            });
            if self.bind(&ident.name, ident.span, decl) {
                decls.push(decl);
            }
        }
    }

    /// Declare one formal parameter per identifier.
    pub fn on_formal_parameter(
        &mut self,
        params: &mut Vec<DeclId>,
        idents: Vec<Ident>,
        ty: DeclId,
        passed_by_reference: bool,
    ) {
        let Some(first) = idents.first() else {
            return;
        };
        let ty = self.type_or_error(ty, first.span);
        for ident in idents {
            let decl = self.ast.alloc_decl(Decl {
                enclosing: self.current,
                span: ident.span,
                name: ident.name.clone(),
                kind: DeclKind::Param(ParamDecl {
                    ty,
                    passed_by_reference,
                }),
            });
            if self.bind(&ident.name, ident.span, decl) {
                params.push(decl);
            }
        }
    }

    /// Resolve one part of a qualified identifier.
    ///
    /// The first part resolves through the scope chain; a dotted
    /// continuation is only reached when the previous part is a module
    /// (the parser leaves the dot unconsumed otherwise) and resolves
    /// among that module's members.
    pub fn on_qualident_part(&mut self, prev: Option<DeclId>, ident: &Ident) -> DeclId {
        match prev {
            None => match self.scopes.lookup(&ident.name) {
                Some(decl) => decl,
                None => {
                    self.diags
                        .report(ident.span, DiagId::Undeclared, &[&ident.name]);
                    Ast::ERROR_DECL
                }
            },
            Some(Ast::ERROR_DECL) => Ast::ERROR_DECL,
            Some(module) => match self.find_member(module, &ident.name) {
                Some(decl) => decl,
                None => {
                    self.diags
                        .report(ident.span, DiagId::Undeclared, &[&ident.name]);
                    Ast::ERROR_DECL
                }
            },
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn on_integer_literal(&mut self, span: Span, text: &str) -> ExprId {
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.diags.report(span, DiagId::IntegerTooLarge, &[&text]);
                0
            }
        };
        self.ast.alloc_expr(Expr {
            ty: Ast::INTEGER,
            is_const: true,
            kind: ExprKind::IntegerLiteral(IntegerLiteral { span, value }),
        })
    }

    /// Build the access expression for a resolved name, dispatching on the
    /// declaration's kind: variables and parameters become variable
    /// accesses, constants become constant accesses. Anything else is not
    /// a value.
    pub fn on_variable_expr(&mut self, span: Span, decl: DeclId) -> ExprId {
        let expr = match &self.ast.decl(decl).kind {
            DeclKind::Var(v) => Expr {
                ty: v.ty,
                is_const: false,
                kind: ExprKind::Variable(VariableAccess { span, decl }),
            },
            DeclKind::Param(p) => Expr {
                ty: p.ty,
                is_const: false,
                kind: ExprKind::Variable(VariableAccess { span, decl }),
            },
            DeclKind::Const(c) => Expr {
                ty: self.ast.expr(c.value).ty,
                is_const: true,
                kind: ExprKind::Constant(ConstantAccess { span, decl }),
            },
            DeclKind::Error => return self.error_expr(span),
            _ => {
                let name = self.ast.decl(decl).name.clone();
                self.diags.report(span, DiagId::VariableExpected, &[&name]);
                return self.error_expr(span);
            }
        };
        self.ast.alloc_expr(expr)
    }

    /// Build a function-call expression. The callee must be a procedure
    /// with a return type; argument checking is shared with procedure-call
    /// statements.
    pub fn on_function_call(&mut self, span: Span, decl: DeclId, args: Vec<ExprId>) -> ExprId {
        let return_type = match &self.ast.decl(decl).kind {
            DeclKind::Proc(p) => p.return_type,
            DeclKind::Error => return self.error_expr(span),
            _ => {
                let name = self.ast.decl(decl).name.clone();
                self.diags.report(span, DiagId::NotCallable, &[&name]);
                return self.error_expr(span);
            }
        };
        self.check_call_arguments(decl, span, &args);
        let ty = match return_type {
            Some(ty) => ty,
            None => {
                let name = self.ast.decl(decl).name.clone();
                self.diags.report(span, DiagId::NoReturnValue, &[&name]);
                Ast::ERROR_TYPE
            }
        };
        // Function results are never constant-eligible.
        self.ast.alloc_expr(Expr {
            ty,
            is_const: false,
            kind: ExprKind::Call(FunctionCall { span, proc: decl, args }),
        })
    }

    /// Build an infix expression, enforcing the operand type rules:
    /// arithmetic needs INTEGER and yields INTEGER, logical needs BOOLEAN
    /// and yields BOOLEAN, relations need matching operand types and yield
    /// BOOLEAN. A violation reports once and substitutes the error type.
    pub fn on_infix_expr(&mut self, left: ExprId, right: ExprId, op: OperatorInfo) -> ExprId {
        let left_ty = self.ast.expr(left).ty;
        let right_ty = self.ast.expr(right).ty;
        let is_const = self.ast.expr(left).is_const && self.ast.expr(right).is_const;

        let ty = if left_ty == Ast::ERROR_TYPE || right_ty == Ast::ERROR_TYPE {
            // One operand already failed; stay quiet.
            Ast::ERROR_TYPE
        } else {
            match op.token {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::KwDiv
                | TokenKind::KwMod => {
                    self.require_operands(left_ty, right_ty, Ast::INTEGER, op, Ast::INTEGER)
                }
                TokenKind::KwAnd | TokenKind::KwOr => {
                    self.require_operands(left_ty, right_ty, Ast::BOOLEAN, op, Ast::BOOLEAN)
                }
                TokenKind::Equal
                | TokenKind::Hash
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual => {
                    if left_ty == right_ty {
                        Ast::BOOLEAN
                    } else {
                        self.operand_mismatch(op)
                    }
                }
                _ => unreachable!("INVARIANT: parser only passes operator tokens"),
            }
        };

        self.ast.alloc_expr(Expr {
            ty,
            is_const,
            kind: ExprKind::Infix(InfixExpr { left, right, op }),
        })
    }

    /// Build a prefix expression: unary `+`/`-` need INTEGER, `NOT` needs
    /// BOOLEAN.
    pub fn on_prefix_expr(&mut self, operand: ExprId, op: OperatorInfo) -> ExprId {
        let operand_ty = self.ast.expr(operand).ty;
        let is_const = self.ast.expr(operand).is_const;

        let ty = if operand_ty == Ast::ERROR_TYPE {
            Ast::ERROR_TYPE
        } else {
            match op.token {
                TokenKind::Plus | TokenKind::Minus => {
                    if operand_ty == Ast::INTEGER {
                        Ast::INTEGER
                    } else {
                        self.operand_mismatch(op)
                    }
                }
                TokenKind::KwNot => {
                    if operand_ty == Ast::BOOLEAN {
                        Ast::BOOLEAN
                    } else {
                        self.operand_mismatch(op)
                    }
                }
                _ => unreachable!("INVARIANT: parser only passes prefix operator tokens"),
            }
        };

        self.ast.alloc_expr(Expr {
            ty,
            is_const,
            kind: ExprKind::Prefix(PrefixExpr { operand, op }),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Build an assignment. The right-hand type must equal the target's
    /// type exactly; a mismatch reports once but the statement node is
    /// still produced so later statements are checked against it.
    pub fn on_assignment(
        &mut self,
        stmts: &mut Vec<StmtId>,
        span: Span,
        target: DeclId,
        value: ExprId,
    ) {
        let target_ty = match &self.ast.decl(target).kind {
            DeclKind::Var(v) => Some(v.ty),
            DeclKind::Param(p) => Some(p.ty),
            DeclKind::Error => None,
            _ => {
                let name = self.ast.decl(target).name.clone();
                self.diags.report(span, DiagId::VariableExpected, &[&name]);
                return;
            }
        };
        if let Some(target_ty) = target_ty {
            let value_ty = self.ast.expr(value).ty;
            if target_ty != Ast::ERROR_TYPE && value_ty != Ast::ERROR_TYPE && target_ty != value_ty
            {
                let name = self.ast.decl(target).name.clone();
                self.diags
                    .report(span, DiagId::AssignmentTypeMismatch, &[&name]);
            }
        }
        let stmt = self.ast.alloc_stmt(Stmt::Assign(AssignStmt { span, target, value }));
        stmts.push(stmt);
    }

    /// Build a procedure-call statement. Calling a function here discards
    /// its result, which is only worth a warning.
    pub fn on_procedure_call(
        &mut self,
        stmts: &mut Vec<StmtId>,
        span: Span,
        decl: DeclId,
        args: Vec<ExprId>,
    ) {
        match &self.ast.decl(decl).kind {
            DeclKind::Proc(p) => {
                let returns_value = p.return_type.is_some();
                self.check_call_arguments(decl, span, &args);
                if returns_value {
                    let name = self.ast.decl(decl).name.clone();
                    self.diags.report(span, DiagId::DiscardedResult, &[&name]);
                }
                let stmt = self.ast.alloc_stmt(Stmt::Call(CallStmt { span, proc: decl, args }));
                stmts.push(stmt);
            }
            DeclKind::Error => {}
            _ => {
                let name = self.ast.decl(decl).name.clone();
                self.diags.report(span, DiagId::NotCallable, &[&name]);
            }
        }
    }

    pub fn on_if(
        &mut self,
        stmts: &mut Vec<StmtId>,
        span: Span,
        cond: ExprId,
        then_stmts: Vec<StmtId>,
        else_stmts: Vec<StmtId>,
    ) {
        self.check_condition(cond, DiagId::IfConditionNotBoolean);
        let stmt = self.ast.alloc_stmt(Stmt::If(IfStmt {
            span,
            cond,
            then_stmts,
            else_stmts,
        }));
        stmts.push(stmt);
    }

    pub fn on_while(
        &mut self,
        stmts: &mut Vec<StmtId>,
        span: Span,
        cond: ExprId,
        body: Vec<StmtId>,
    ) {
        self.check_condition(cond, DiagId::WhileConditionNotBoolean);
        let stmt = self.ast.alloc_stmt(Stmt::While(WhileStmt { span, cond, body }));
        stmts.push(stmt);
    }

    /// Build a RETURN. A value is required iff the enclosing procedure
    /// declares a return type, and its type must match.
    pub fn on_return(&mut self, stmts: &mut Vec<StmtId>, span: Span, value: Option<ExprId>) {
        let enclosing = self
            .current
            .expect("INVARIANT: statements are parsed inside a block");
        let return_type = match &self.ast.decl(enclosing).kind {
            DeclKind::Proc(p) => p.return_type,
            // A module body returns nothing.
            _ => None,
        };
        let name = self.ast.decl(enclosing).name.clone();
        match (return_type, value) {
            (None, Some(_)) => {
                self.diags
                    .report(span, DiagId::ReturnValueUnexpected, &[&name]);
            }
            (Some(_), None) => {
                self.diags.report(span, DiagId::ReturnValueMissing, &[&name]);
            }
            (Some(expected), Some(value)) => {
                let value_ty = self.ast.expr(value).ty;
                if expected != Ast::ERROR_TYPE
                    && value_ty != Ast::ERROR_TYPE
                    && expected != value_ty
                {
                    self.diags.report(span, DiagId::ReturnTypeMismatch, &[&name]);
                }
            }
            (None, None) => {}
        }
        let stmt = self.ast.alloc_stmt(Stmt::Return(ReturnStmt { span, value }));
        stmts.push(stmt);
    }

    // ========================================================================
    // Shared checks and helpers
    // ========================================================================

    /// Check actual arguments against a procedure's formals: count, exact
    /// type equality, and variable-ness for VAR parameters.
    fn check_call_arguments(&mut self, proc: DeclId, span: Span, args: &[ExprId]) {
        let params = match &self.ast.decl(proc).kind {
            DeclKind::Proc(p) => p.params.clone(),
            _ => return,
        };
        let name = self.ast.decl(proc).name.clone();
        if params.len() != args.len() {
            self.diags
                .report(span, DiagId::ArgumentCountMismatch, &[&name]);
        }
        for (index, (&param, &arg)) in params.iter().zip(args.iter()).enumerate() {
            let DeclKind::Param(p) = &self.ast.decl(param).kind else {
                continue;
            };
            let param_ty = p.ty;
            let by_ref = p.passed_by_reference;
            let arg_span = self.expr_span(arg);
            let arg_ty = self.ast.expr(arg).ty;
            if param_ty != Ast::ERROR_TYPE && arg_ty != Ast::ERROR_TYPE && param_ty != arg_ty {
                self.diags.report(
                    arg_span,
                    DiagId::ArgumentTypeMismatch,
                    &[&(index + 1), &name],
                );
            }
            if by_ref && !matches!(self.ast.expr(arg).kind, ExprKind::Variable(_)) {
                self.diags.report(
                    arg_span,
                    DiagId::VarArgumentNotVariable,
                    &[&(index + 1), &name],
                );
            }
        }
    }

    fn check_condition(&mut self, cond: ExprId, id: DiagId) {
        let ty = self.ast.expr(cond).ty;
        if ty != Ast::BOOLEAN && ty != Ast::ERROR_TYPE {
            let span = self.expr_span(cond);
            self.diags.report(span, id, &[]);
        }
    }

    /// Require `decl` to be a type declaration; report once and fall back
    /// to the error type otherwise.
    fn type_or_error(&mut self, decl: DeclId, span: Span) -> DeclId {
        match self.ast.decl(decl).kind {
            DeclKind::Type => decl,
            DeclKind::Error => Ast::ERROR_TYPE,
            _ => {
                let name = self.ast.decl(decl).name.clone();
                self.diags.report(span, DiagId::TypeNameExpected, &[&name]);
                Ast::ERROR_TYPE
            }
        }
    }

    /// Bind a declaration in the innermost scope, reporting a
    /// redeclaration (with a note at the first site) on conflict.
    /// Returns whether the binding succeeded.
    fn bind(&mut self, name: &str, span: Span, decl: DeclId) -> bool {
        match self.scopes.insert(name, decl) {
            Ok(()) => true,
            Err(existing) => {
                self.diags.report(span, DiagId::AlreadyDeclared, &[&name]);
                let first_span = self.ast.decl(existing).span;
                self.diags
                    .report(first_span, DiagId::FirstDeclaredHere, &[&name]);
                false
            }
        }
    }

    fn find_member(&self, module: DeclId, name: &str) -> Option<DeclId> {
        let DeclKind::Module(m) = &self.ast.decl(module).kind else {
            return None;
        };
        m.decls
            .iter()
            .copied()
            .find(|&decl| self.ast.decl(decl).name == name)
    }

    fn require_operands(
        &mut self,
        left_ty: DeclId,
        right_ty: DeclId,
        required: DeclId,
        op: OperatorInfo,
        result: DeclId,
    ) -> DeclId {
        if left_ty == required && right_ty == required {
            result
        } else {
            self.operand_mismatch(op)
        }
    }

    fn operand_mismatch(&mut self, op: OperatorInfo) -> DeclId {
        self.diags.report(
            op.span,
            DiagId::OperatorOperandMismatch,
            &[&op.token.name()],
        );
        Ast::ERROR_TYPE
    }

    /// The designated error expression: a variable access through the
    /// error declaration, typed with the error type. Operations on it
    /// never report again.
    fn error_expr(&mut self, span: Span) -> ExprId {
        self.ast.alloc_expr(Expr {
            ty: Ast::ERROR_TYPE,
            is_const: false,
            kind: ExprKind::Variable(VariableAccess {
                span,
                decl: Ast::ERROR_DECL,
            }),
        })
    }

    /// Best-effort source span of an expression, for diagnostics.
    fn expr_span(&self, expr: ExprId) -> Span {
        match &self.ast.expr(expr).kind {
            ExprKind::Infix(e) => e.op.span,
            ExprKind::Prefix(e) => e.op.span,
            ExprKind::IntegerLiteral(e) => e.span,
            ExprKind::BooleanLiteral(BooleanLiteral { .. }) => Span::default(),
            ExprKind::Variable(e) => e.span,
            ExprKind::Constant(e) => e.span,
            ExprKind::Call(e) => e.span,
        }
    }
}

impl fmt::Debug for Sema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sema")
            .field("current", &self.current)
            .field("scope_depth", &self.scopes.depth())
            .finish()
    }
}
