//! Abstract Syntax Tree for Vela
//!
//! All nodes live in an [`Ast`] arena owned by the compilation unit and are
//! addressed through index handles (`DeclId`, `ExprId`, `StmtId`). Handles
//! stay valid for the unit's whole lifetime, which is what makes two-phase
//! module/procedure construction work: the header is allocated (and made
//! visible in scope) before the body exists, and the body is attached to the
//! same handle later.

use std::fmt;

use crate::frontend::lexer::tokens::TokenKind;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// An identifier as it appears in source: location plus spelling.
///
/// Transient value produced by the parser and consumed by the semantic
/// actions; it is not stored in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

// ============================================================================
// Arena handles
// ============================================================================

/// Handle to a declaration in the [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(u32);

/// Handle to an expression in the [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

/// Handle to a statement in the [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StmtId(u32);

// ============================================================================
// Declarations
// ============================================================================

/// A named declaration.
///
/// The enclosing back-reference is a non-owning handle used for name
/// qualification and for walking back out of nested scopes; it is `None`
/// only for the root module and the pre-seeded built-ins.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub enclosing: Option<DeclId>,
    pub span: Span,
    pub name: String,
    pub kind: DeclKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// Sentinel bound to names that failed to resolve. Referencing it never
    /// produces further diagnostics.
    Error,
    Module(ModuleDecl),
    Const(ConstDecl),
    /// Named built-in type marker (INTEGER, BOOLEAN, and the error type).
    Type,
    Var(VarDecl),
    Param(ParamDecl),
    Proc(ProcDecl),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleDecl {
    pub decls: Vec<DeclId>,
    pub stmts: Vec<StmtId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub value: ExprId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Handle to the `Type` declaration of this variable.
    pub ty: DeclId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub ty: DeclId,
    /// `true` for `VAR` (by-reference) parameters.
    pub passed_by_reference: bool,
}

/// Procedure declaration, constructed in two phases: the header is
/// allocated and inserted into the enclosing scope before the body is
/// parsed, so the procedure can reference itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcDecl {
    pub params: Vec<DeclId>,
    /// `None` for proper procedures, `Some` type handle for functions.
    pub return_type: Option<DeclId>,
    pub decls: Vec<DeclId>,
    pub stmts: Vec<StmtId>,
}

// ============================================================================
// Expressions
// ============================================================================

/// Operator occurrence: where it was written and which token spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub span: Span,
    pub token: TokenKind,
}

/// An expression node.
///
/// `ty` is always a handle to a `Type` declaration once the semantic layer
/// has produced the node; type-error paths substitute [`Ast::ERROR_TYPE`]
/// instead of leaving it dangling. `is_const` tracks compile-time
/// constant-eligibility (literals yes, variable/parameter access no,
/// composites by conjunction of their operands).
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub ty: DeclId,
    pub is_const: bool,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Infix(InfixExpr),
    Prefix(PrefixExpr),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    /// Access to a variable or formal parameter.
    Variable(VariableAccess),
    /// Access to a named constant.
    Constant(ConstantAccess),
    /// Call of a function procedure inside an expression.
    Call(FunctionCall),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: ExprId,
    pub right: ExprId,
    pub op: OperatorInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operand: ExprId,
    pub op: OperatorInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub span: Span,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAccess {
    pub span: Span,
    pub decl: DeclId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantAccess {
    pub span: Span,
    pub decl: DeclId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub span: Span,
    pub proc: DeclId,
    pub args: Vec<ExprId>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Call(CallStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub span: Span,
    /// The assigned variable or parameter (or the error sentinel).
    pub target: DeclId,
    pub value: ExprId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub span: Span,
    pub proc: DeclId,
    pub args: Vec<ExprId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub span: Span,
    pub cond: ExprId,
    pub then_stmts: Vec<StmtId>,
    pub else_stmts: Vec<StmtId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub span: Span,
    pub cond: ExprId,
    pub body: Vec<StmtId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub span: Span,
    pub value: Option<ExprId>,
}

// ============================================================================
// Arena
// ============================================================================

/// Arena owning every node of one compilation unit.
///
/// A fresh arena is pre-seeded with the sentinels and built-ins that the
/// semantic layer depends on; their handles are the associated constants
/// below and are stable across all units.
#[derive(Debug)]
pub struct Ast {
    decls: Vec<Decl>,
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl Ast {
    /// Sentinel bound to unresolved names.
    pub const ERROR_DECL: DeclId = DeclId(0);
    /// Sentinel type carried by expressions that failed a type check.
    pub const ERROR_TYPE: DeclId = DeclId(1);
    /// The built-in INTEGER type declaration.
    pub const INTEGER: DeclId = DeclId(2);
    /// The built-in BOOLEAN type declaration.
    pub const BOOLEAN: DeclId = DeclId(3);
    /// The predefined constant TRUE.
    pub const TRUE: DeclId = DeclId(4);
    /// The predefined constant FALSE.
    pub const FALSE: DeclId = DeclId(5);

    pub fn new() -> Self {
        let mut ast = Self {
            decls: Vec::new(),
            exprs: Vec::new(),
            stmts: Vec::new(),
        };

        let builtin = |name: &str, kind: DeclKind| Decl {
            enclosing: None,
            span: Span::default(),
            name: name.to_string(),
            kind,
        };

        ast.alloc_decl(builtin("<error>", DeclKind::Error));
        ast.alloc_decl(builtin("<error type>", DeclKind::Type));
        ast.alloc_decl(builtin("INTEGER", DeclKind::Type));
        ast.alloc_decl(builtin("BOOLEAN", DeclKind::Type));

        let true_lit = ast.alloc_expr(Expr {
            ty: Self::BOOLEAN,
            is_const: true,
            kind: ExprKind::BooleanLiteral(BooleanLiteral { value: true }),
        });
        let false_lit = ast.alloc_expr(Expr {
            ty: Self::BOOLEAN,
            is_const: true,
            kind: ExprKind::BooleanLiteral(BooleanLiteral { value: false }),
        });
        ast.alloc_decl(builtin("TRUE", DeclKind::Const(ConstDecl { value: true_lit })));
        ast.alloc_decl(builtin("FALSE", DeclKind::Const(ConstDecl { value: false_lit })));

        ast
    }

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.0 as usize]
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.0 as usize]
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0 as usize]
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.0 as usize]
    }

    pub fn is_module(&self, id: DeclId) -> bool {
        matches!(self.decl(id).kind, DeclKind::Module(_))
    }

    /// The name of a declaration, qualified with its enclosing modules
    /// (`M.inner.proc`). Used by diagnostics.
    pub fn qualified_name(&self, id: DeclId) -> String {
        let decl = self.decl(id);
        match decl.enclosing {
            Some(parent) if self.is_module(parent) => {
                let mut name = self.qualified_name(parent);
                name.push('.');
                name.push_str(&decl.name);
                name
            }
            _ => decl.name.clone(),
        }
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperatorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.name())
    }
}
