//! Parser for the Vela language
//!
//! A hand-written predictive recursive-descent parser with one recognition
//! method per grammar production. Grammar recognition and semantic
//! validation happen in a single pass: at each semantically meaningful
//! point the parser calls into [`Sema`](crate::frontend::sema::Sema),
//! which builds and checks the AST node.
//!
//! Every production recovers from syntax errors in panic mode: it reports
//! one diagnostic, discards tokens until one from its statically defined
//! synchronization set is seen, and hands control back so sibling
//! constructs are still parsed and checked. Reaching the end of input
//! while recovering unwinds to the module level without further
//! resynchronization.

use crate::frontend::ast::{Ast, DeclId, ExprId, Ident, OperatorInfo, StmtId};
use crate::frontend::diagnostics::{DiagId, DiagnosticEngine};
use crate::frontend::lexer::tokens::TokenKind::*;
use crate::frontend::lexer::tokens::{Token, TokenKind};
use crate::frontend::sema::Sema;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
